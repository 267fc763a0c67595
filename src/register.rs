//! Item register

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    categories::Category,
    items::{Item, ItemError},
};

/// Errors raised by [`ItemRegister`] operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegisterError {
    /// An item with the same item number is already registered.
    #[error("an item with item number {0} is already registered")]
    DuplicateItemNumber(String),

    /// A discount percentage was outside the 0 to 100 range.
    #[error("discount must be between 0 and 100 percent, got {0}")]
    DiscountOutOfRange(i64),

    /// A storage adjustment amount was negative.
    #[error("storage adjustment cannot be less than zero, got {0}")]
    NegativeAdjustment(i64),

    /// A discounted price could not be represented as a whole amount.
    #[error("discounted price could not be represented")]
    PriceConversion,

    /// A field-level validation failure from the item itself.
    #[error(transparent)]
    Item(#[from] ItemError),
}

/// An in-memory register of warehouse items, unique by item number.
///
/// Items are held in insertion order. Lookups match the item number
/// case-insensitively after trimming. Every read path returns owned clones,
/// so callers can never reach into the register's own state through a
/// returned value.
///
/// Alongside the items, the register tracks the price each item had just
/// before its first active discount, so the discount can be rolled back
/// with [`reset_price_to_before_discount`](Self::reset_price_to_before_discount).
/// A tracked baseline exists only while the item itself does: direct price
/// changes, resets, and removals all drop it.
#[derive(Debug, Default)]
pub struct ItemRegister {
    items: Vec<Item>,
    price_before_discount: FxHashMap<String, i64>,
}

impl ItemRegister {
    /// Creates an empty register.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the register holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers a new item from its raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::DuplicateItemNumber`] when an item with the
    /// same number (case-insensitively) already exists, or the item's own
    /// validation error when any field is invalid. Nothing is stored on
    /// failure.
    #[expect(clippy::too_many_arguments, reason = "one argument per item field")]
    pub fn register_item(
        &mut self,
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
    ) -> Result<(), RegisterError> {
        let key = normalized_number(item_number);

        if self.position(&key).is_some() {
            return Err(RegisterError::DuplicateItemNumber(key));
        }

        let item = Item::new(
            item_number,
            description,
            price,
            brand_name,
            weight,
            length,
            height,
            color,
            amount_in_storage,
            category,
        )?;

        self.items.push(item);

        Ok(())
    }

    /// Looks up an item by number, returning an owned clone.
    #[must_use]
    pub fn item_by_number(&self, item_number: &str) -> Option<Item> {
        let key = normalized_number(item_number);

        self.find(&key).cloned()
    }

    /// Adds `amount` units to an item's storage.
    ///
    /// Returns `Ok(false)` when no item matches the number.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::NegativeAdjustment`] when `amount` is
    /// negative; the stock level is left unchanged.
    pub fn increase_storage(
        &mut self,
        item_number: &str,
        amount: i64,
    ) -> Result<bool, RegisterError> {
        let key = normalized_number(item_number);

        let Some(item) = self.find_mut(&key) else {
            return Ok(false);
        };

        if amount < 0 {
            return Err(RegisterError::NegativeAdjustment(amount));
        }

        let current = item.amount_in_storage();
        item.set_amount_in_storage(current + amount)?;

        Ok(true)
    }

    /// Removes `amount` units from an item's storage.
    ///
    /// Returns `Ok(false)` when no item matches the number. The subtraction
    /// is handed to the item's own stock guard, so removing more than is in
    /// storage surfaces as the item's negative-amount validation error
    /// rather than a dedicated insufficient-stock error.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::NegativeAdjustment`] when `amount` is
    /// negative, or [`ItemError::NegativeAmount`] when the decrease would
    /// drive the stock level below zero; the stock level is left unchanged
    /// in both cases.
    pub fn decrease_storage(
        &mut self,
        item_number: &str,
        amount: i64,
    ) -> Result<bool, RegisterError> {
        let key = normalized_number(item_number);

        let Some(item) = self.find_mut(&key) else {
            return Ok(false);
        };

        if amount < 0 {
            return Err(RegisterError::NegativeAdjustment(amount));
        }

        let current = item.amount_in_storage();
        item.set_amount_in_storage(current - amount)?;

        Ok(true)
    }

    /// Removes an item from the register.
    ///
    /// Any tracked pre-discount price for the item is dropped with it, so a
    /// later re-registration of the same number starts with a clean slate.
    ///
    /// Returns `true` iff an item was removed.
    pub fn remove_item(&mut self, item_number: &str) -> bool {
        let key = normalized_number(item_number);

        let Some(index) = self.position(&key) else {
            return false;
        };

        self.items.remove(index);
        self.price_before_discount.remove(&key);

        true
    }

    /// Discounts an item's price by `percent` percent.
    ///
    /// The price the item had before its first active discount is recorded
    /// once, so it can be restored later; applying a second discount
    /// without resetting compounds on the already-discounted price while
    /// keeping the original baseline. The new price is rounded half-up to a
    /// whole amount.
    ///
    /// Returns `Ok(false)` when no item matches the number.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::DiscountOutOfRange`] when `percent` is
    /// outside 0 to 100; the price and baseline are left unchanged.
    pub fn add_discount(&mut self, item_number: &str, percent: i64) -> Result<bool, RegisterError> {
        let key = normalized_number(item_number);

        let Some(index) = self.position(&key) else {
            return Ok(false);
        };

        if !(0..=100).contains(&percent) {
            return Err(RegisterError::DiscountOutOfRange(percent));
        }

        let Some(item) = self.items.get_mut(index) else {
            return Ok(false);
        };

        let discounted = discounted_price(item.price(), percent)?;

        self.price_before_discount
            .entry(key)
            .or_insert(item.price());

        item.set_price(discounted)?;

        Ok(true)
    }

    /// Restores an item's price to the value recorded before its first
    /// active discount and stops tracking it.
    ///
    /// Returns `Ok(false)` when no pre-discount price is tracked for the
    /// number.
    ///
    /// # Errors
    ///
    /// Propagates the item's price validation error; tracked baselines are
    /// prices that were valid when recorded, so this does not occur in
    /// practice.
    pub fn reset_price_to_before_discount(
        &mut self,
        item_number: &str,
    ) -> Result<bool, RegisterError> {
        let key = normalized_number(item_number);

        let Some(previous) = self.price_before_discount.get(&key).copied() else {
            return Ok(false);
        };

        let Some(item) = self.find_mut(&key) else {
            return Ok(false);
        };

        item.set_price(previous)?;
        self.price_before_discount.remove(&key);

        Ok(true)
    }

    /// Replaces an item's price outright.
    ///
    /// A direct price change invalidates any discount history, so the
    /// tracked pre-discount price is dropped.
    ///
    /// Returns `Ok(false)` when no item matches the number.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NegativePrice`] when the new price is negative;
    /// the price and any tracked baseline are left unchanged.
    pub fn change_price(&mut self, item_number: &str, new_price: i64) -> Result<bool, RegisterError> {
        let key = normalized_number(item_number);

        let Some(item) = self.find_mut(&key) else {
            return Ok(false);
        };

        item.set_price(new_price)?;
        self.price_before_discount.remove(&key);

        Ok(true)
    }

    /// Replaces an item's description.
    ///
    /// Returns `Ok(false)` when no item matches the number.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::BlankDescription`] when the new description is
    /// blank; the item is left unchanged.
    pub fn change_description(
        &mut self,
        item_number: &str,
        new_description: &str,
    ) -> Result<bool, RegisterError> {
        let key = normalized_number(item_number);

        let Some(item) = self.find_mut(&key) else {
            return Ok(false);
        };

        item.set_description(new_description)?;

        Ok(true)
    }

    /// Returns clones of all items in the given category, most expensive
    /// first. Items with equal prices keep their insertion order.
    #[must_use]
    pub fn items_by_category(&self, category: Category) -> Vec<Item> {
        let mut matches: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.category() == category)
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.price().cmp(&a.price()));

        matches
    }

    /// Returns clones of all items with nothing left in storage, ordered by
    /// category name. Items in the same category keep their insertion
    /// order.
    #[must_use]
    pub fn items_needing_restock(&self) -> Vec<Item> {
        let mut empty: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.amount_in_storage() == 0)
            .cloned()
            .collect();

        empty.sort_by_key(|item| item.category_name());

        empty
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.item_number() == key)
    }

    fn find(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.item_number() == key)
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.item_number() == key)
    }
}

impl fmt::Display for ItemRegister {
    /// Renders every item in the fixed line format, ordered by category
    /// name, matching the replenishment report's ordering rule.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<&Item> = self.items.iter().collect();

        sorted.sort_by_key(|item| item.category_name());

        for item in sorted {
            write!(f, "{item}")?;
        }

        Ok(())
    }
}

/// Normalizes an item number for lookups and side-table keys.
fn normalized_number(item_number: &str) -> String {
    item_number.trim().to_uppercase()
}

/// Applies a percentage discount to a whole price, rounding half-up.
fn discounted_price(price: i64, percent: i64) -> Result<i64, RegisterError> {
    let remaining = Decimal::from(price)
        .checked_mul(Decimal::from(100 - percent))
        .ok_or(RegisterError::PriceConversion)?;

    let rounded =
        (remaining / Decimal::from(100)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    rounded.to_i64().ok_or(RegisterError::PriceConversion)
}
