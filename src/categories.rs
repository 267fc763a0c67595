//! Categories

use std::fmt;

/// The fixed set of warehouse item categories.
///
/// Categories are identified by the numbers 1 through 4 at the input
/// boundary; once an item is constructed the category is carried as this
/// enum, so an unmapped number cannot exist past validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Floor laminates.
    FloorLaminates,
    /// Windows.
    Windows,
    /// Doors.
    Doors,
    /// Lumber.
    Lumber,
}

impl Category {
    /// Every category, in number order. Useful for menus and prompts.
    pub const ALL: [Category; 4] = [
        Category::FloorLaminates,
        Category::Windows,
        Category::Doors,
        Category::Lumber,
    ];

    /// Looks up a category by its number, returning `None` when the number
    /// is outside 1 through 4.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Category::FloorLaminates),
            2 => Some(Category::Windows),
            3 => Some(Category::Doors),
            4 => Some(Category::Lumber),
            _ => None,
        }
    }

    /// Returns the number assigned to the category.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Category::FloorLaminates => 1,
            Category::Windows => 2,
            Category::Doors => 3,
            Category::Lumber => 4,
        }
    }

    /// Returns the display name of the category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::FloorLaminates => "Floor laminates",
            Category::Windows => "Windows",
            Category::Doors => "Doors",
            Category::Lumber => "Lumber",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
