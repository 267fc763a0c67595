//! Fixtures

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::register::{ItemRegister, RegisterError};

/// Fixture loading errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file.
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A fixture row was rejected by the register.
    #[error(transparent)]
    Register(#[from] RegisterError),
}

/// One item row in an inventory fixture file.
///
/// Fields are raw input values; validation happens when the row is
/// registered, not at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemFixture {
    /// Item number.
    pub item_number: String,
    /// Description of the item.
    pub description: String,
    /// Price in whole kroner.
    pub price: i64,
    /// Brand name.
    pub brand_name: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Length in metres.
    pub length: f64,
    /// Height in metres.
    pub height: f64,
    /// Color.
    pub color: String,
    /// Amount in storage.
    pub amount_in_storage: i64,
    /// Category number, 1 through 4.
    pub category: u8,
}

/// A named set of inventory rows used to seed a register.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryFixture {
    /// The item rows, in registration order.
    pub items: Vec<ItemFixture>,
}

impl InventoryFixture {
    /// Parses an inventory fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] when the text is not a valid fixture
    /// document.
    pub fn parse(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Reads an inventory fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] when the file cannot be read, or
    /// [`FixtureError::Yaml`] when it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents)
    }

    /// Loads the fixture set with the given name from
    /// `./fixtures/inventory/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] when the file cannot be read, or
    /// [`FixtureError::Yaml`] when it does not parse.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let path = PathBuf::from("./fixtures")
            .join("inventory")
            .join(format!("{name}.yml"));

        Self::from_file(path)
    }

    /// Builds a register seeded with every row of the fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Register`] when a row is invalid or collides
    /// with an earlier row's item number.
    pub fn build_register(&self) -> Result<ItemRegister, FixtureError> {
        let mut register = ItemRegister::new();

        for row in &self.items {
            register.register_item(
                &row.item_number,
                &row.description,
                row.price,
                &row.brand_name,
                row.weight,
                row.length,
                row.height,
                &row.color,
                row.amount_in_storage,
                row.category,
            )?;
        }

        Ok(register)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const WINDOW_ROW: &str = "\
items:
  - item_number: 32VD
    description: Two-way window
    price: 1600
    brand_name: Rehau
    weight: 8.0
    length: 0.5
    height: 0.5
    color: White
    amount_in_storage: 15
    category: 2
";

    #[test]
    fn parse_reads_every_field() -> TestResult {
        let fixture = InventoryFixture::parse(WINDOW_ROW)?;

        let row = fixture.items.first().ok_or("expected one fixture row")?;

        assert_eq!(row.item_number, "32VD");
        assert_eq!(row.description, "Two-way window");
        assert_eq!(row.price, 1600);
        assert_eq!(row.brand_name, "Rehau");
        assert_eq!(row.color, "White");
        assert_eq!(row.amount_in_storage, 15);
        assert_eq!(row.category, 2);

        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_documents() {
        let result = InventoryFixture::parse("items: \"not a list\"");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn build_register_registers_all_rows() -> TestResult {
        let fixture = InventoryFixture::parse(WINDOW_ROW)?;
        let register = fixture.build_register()?;

        assert_eq!(register.len(), 1);

        let item = register
            .item_by_number("32vd")
            .ok_or("expected 32VD to be registered")?;

        assert_eq!(item.price(), 1600);

        Ok(())
    }

    #[test]
    fn build_register_propagates_invalid_rows() -> TestResult {
        let fixture = InventoryFixture::parse(
            "\
items:
  - item_number: 32VD
    description: Two-way window
    price: -1
    brand_name: Rehau
    weight: 8.0
    length: 0.5
    height: 0.5
    color: White
    amount_in_storage: 15
    category: 2
",
        )?;

        let result = fixture.build_register();

        assert!(matches!(result, Err(FixtureError::Register(_))));

        Ok(())
    }

    #[test]
    fn demo_set_seeds_the_original_inventory() -> TestResult {
        let register = InventoryFixture::from_set("demo")?.build_register()?;

        assert_eq!(register.len(), 6);

        let laminate = register
            .item_by_number("24GH")
            .ok_or("expected 24GH in the demo set")?;

        assert_eq!(laminate.price(), 2000);
        assert_eq!(laminate.amount_in_storage(), 30);

        // Two of the demo items are out of stock.
        assert_eq!(register.items_needing_restock().len(), 2);

        Ok(())
    }

    #[test]
    fn from_set_with_unknown_name_is_an_io_error() {
        let result = InventoryFixture::from_set("no-such-set");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
