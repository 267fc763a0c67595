//! Items

use std::fmt;

use thiserror::Error;

use crate::categories::Category;

/// Field-level validation failures for [`Item`] construction and mutation.
///
/// Variants are listed in the order the constructor checks them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ItemError {
    /// The item number was blank.
    #[error("item number cannot be blank")]
    BlankItemNumber,

    /// The description was blank.
    #[error("description cannot be blank")]
    BlankDescription,

    /// The price was negative.
    #[error("price cannot be less than zero, got {0}")]
    NegativePrice(i64),

    /// The brand name was blank.
    #[error("brand name cannot be blank")]
    BlankBrandName,

    /// The weight was zero, negative, or not finite.
    #[error("weight must be greater than zero, got {0}")]
    NonPositiveWeight(f64),

    /// The length was zero, negative, or not finite.
    #[error("length must be greater than zero, got {0}")]
    NonPositiveLength(f64),

    /// The height was zero, negative, or not finite.
    #[error("height must be greater than zero, got {0}")]
    NonPositiveHeight(f64),

    /// The color was blank.
    #[error("color cannot be blank")]
    BlankColor,

    /// The amount in storage was negative.
    #[error("amount in storage cannot be less than zero, got {0}")]
    NegativeAmount(i64),

    /// The category number was outside 1 through 4.
    #[error("category number must be between 1 and 4, got {0}")]
    UnknownCategory(u8),
}

/// A single validated stock-keeping unit.
///
/// Identity, brand, dimensions, color, and category are fixed at
/// construction. Description, price, and stock level change through guarded
/// setters that enforce the same constraints as the constructor, so every
/// `Item` in existence satisfies all field invariants at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    item_number: String,
    description: String,
    price: i64,
    brand_name: String,
    weight: f64,
    length: f64,
    height: f64,
    color: String,
    amount_in_storage: i64,
    category: Category,
}

impl Item {
    /// Creates a new item after validating every field.
    ///
    /// Strings are trimmed; the item number is uppercased as well. The
    /// category is given by number and resolved against the fixed table.
    ///
    /// # Errors
    ///
    /// Returns the [`ItemError`] for the first violated constraint, checked
    /// in declaration order: item number, description, price, brand name,
    /// weight, length, height, color, amount in storage, category.
    #[expect(clippy::too_many_arguments, reason = "one argument per item field")]
    pub fn new(
        item_number: &str,
        description: &str,
        price: i64,
        brand_name: &str,
        weight: f64,
        length: f64,
        height: f64,
        color: &str,
        amount_in_storage: i64,
        category: u8,
    ) -> Result<Self, ItemError> {
        if item_number.trim().is_empty() {
            return Err(ItemError::BlankItemNumber);
        }

        if description.trim().is_empty() {
            return Err(ItemError::BlankDescription);
        }

        if price < 0 {
            return Err(ItemError::NegativePrice(price));
        }

        if brand_name.trim().is_empty() {
            return Err(ItemError::BlankBrandName);
        }

        if !(weight.is_finite() && weight > 0.0) {
            return Err(ItemError::NonPositiveWeight(weight));
        }

        if !(length.is_finite() && length > 0.0) {
            return Err(ItemError::NonPositiveLength(length));
        }

        if !(height.is_finite() && height > 0.0) {
            return Err(ItemError::NonPositiveHeight(height));
        }

        if color.trim().is_empty() {
            return Err(ItemError::BlankColor);
        }

        if amount_in_storage < 0 {
            return Err(ItemError::NegativeAmount(amount_in_storage));
        }

        let category = Category::from_number(category).ok_or(ItemError::UnknownCategory(category))?;

        Ok(Self {
            item_number: item_number.trim().to_uppercase(),
            description: description.trim().to_string(),
            price,
            brand_name: brand_name.trim().to_string(),
            weight,
            length,
            height,
            color: color.trim().to_string(),
            amount_in_storage,
            category,
        })
    }

    /// Returns the item number.
    #[must_use]
    pub fn item_number(&self) -> &str {
        &self.item_number
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the price in whole kroner.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Returns the brand name.
    #[must_use]
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    /// Returns the weight in kilograms.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the length in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the height in metres.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the amount currently in storage.
    #[must_use]
    pub fn amount_in_storage(&self) -> i64 {
        self.amount_in_storage
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the display name of the category.
    #[must_use]
    pub fn category_name(&self) -> &'static str {
        self.category.name()
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::BlankDescription`] if the new description is
    /// blank; the item is left unchanged.
    pub fn set_description(&mut self, description: &str) -> Result<(), ItemError> {
        if description.trim().is_empty() {
            return Err(ItemError::BlankDescription);
        }

        self.description = description.trim().to_string();

        Ok(())
    }

    /// Replaces the price.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NegativePrice`] if the new price is negative;
    /// the item is left unchanged.
    pub fn set_price(&mut self, price: i64) -> Result<(), ItemError> {
        if price < 0 {
            return Err(ItemError::NegativePrice(price));
        }

        self.price = price;

        Ok(())
    }

    /// Replaces the amount in storage.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NegativeAmount`] if the new amount is negative;
    /// the item is left unchanged.
    pub fn set_amount_in_storage(&mut self, amount_in_storage: i64) -> Result<(), ItemError> {
        if amount_in_storage < 0 {
            return Err(ItemError::NegativeAmount(amount_in_storage));
        }

        self.amount_in_storage = amount_in_storage;

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Item number: {}.", self.item_number)?;
        writeln!(f, "Description: {}.", self.description)?;
        writeln!(f, "Price: {} kr.", self.price)?;
        writeln!(f, "Brand name: {}.", self.brand_name)?;
        writeln!(f, "Weight: {} kg.", self.weight)?;
        writeln!(f, "Length: {} m.", self.length)?;
        writeln!(f, "Height: {} m.", self.height)?;
        writeln!(f, "Color: {}.", self.color)?;
        writeln!(f, "Amount in storage: {}.", self.amount_in_storage)?;
        writeln!(f, "Category name: {}.", self.category.name())
    }
}
