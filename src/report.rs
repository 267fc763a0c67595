//! Inventory reports

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::items::Item;

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Writes a compact one-row-per-item table.
///
/// This is the overview rendering used by the console client for category
/// and replenishment listings; the canonical per-item rendering is the
/// item's own [`Display`](std::fmt::Display) output.
///
/// # Errors
///
/// Returns [`ReportError::IO`] when the table cannot be written to `out`.
pub fn write_items_table(mut out: impl io::Write, items: &[Item]) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Item number",
        "Description",
        "Brand name",
        "Color",
        "Category",
        "Price (kr)",
        "Weight (kg)",
        "Length (m)",
        "Height (m)",
        "In storage",
    ]);

    for item in items {
        builder.push_record([
            item.item_number().to_string(),
            item.description().to_string(),
            item.brand_name().to_string(),
            item.color().to_string(),
            item.category_name().to_string(),
            item.price().to_string(),
            item.weight().to_string(),
            item.length().to_string(),
            item.height().to_string(),
            item.amount_in_storage().to_string(),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(5..10), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReportError::IO)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::items::ItemError;

    use super::*;

    fn test_items() -> Result<Vec<Item>, ItemError> {
        Ok(vec![
            Item::new(
                "42DS",
                "Outer door with glass",
                6500,
                "Nordic Door",
                12.0,
                1.2,
                2.2,
                "White",
                23,
                3,
            )?,
            Item::new(
                "12TL",
                "Wood fiber insulation with natural wood fiber",
                399,
                "Hunton",
                3.4,
                2.0,
                5.5,
                "Light brown",
                25,
                4,
            )?,
        ])
    }

    #[test]
    fn table_contains_header_and_every_item() -> TestResult {
        let items = test_items()?;

        let mut out = Vec::new();
        write_items_table(&mut out, &items)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Item number"));
        assert!(output.contains("42DS"));
        assert!(output.contains("Nordic Door"));
        assert!(output.contains("12TL"));
        assert!(output.contains("Lumber"));
        assert!(output.contains("6500"));

        Ok(())
    }

    #[test]
    fn empty_listing_still_renders_the_header() -> TestResult {
        let mut out = Vec::new();
        write_items_table(&mut out, &[])?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Item number"));

        Ok(())
    }
}
