//! Cart Models

use std::{collections::BTreeMap, num::NonZeroU32};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::models::{CatalogItem, CatalogItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quantity must be a positive integer")]
pub struct InvalidQuantity;

/// A positive number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// # Errors
    ///
    /// Returns [`InvalidQuantity`] for zero.
    pub fn new(quantity: u32) -> Result<Self, InvalidQuantity> {
        NonZeroU32::new(quantity).map(Self).ok_or(InvalidQuantity)
    }

    /// Parse user input; values below one are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQuantity`] for anything that is not a positive integer.
    pub fn from_i64(quantity: i64) -> Result<Self, InvalidQuantity> {
        u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(InvalidQuantity)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.get()).map(Self)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = InvalidQuantity;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

/// One cart entry: a snapshot of the catalog item taken when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    /// Unit price in cents at the time of adding.
    pub price: u64,
    pub quantity: Quantity,
    pub image_file: String,
}

impl CartLine {
    fn snapshot(item: &CatalogItem, quantity: Quantity) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            quantity,
            image_file: item.image_file.clone(),
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity.get()))
    }
}

/// Cart Model
///
/// Keyed by catalog item id, one line per item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: BTreeMap<CatalogItemId, CartLine>,
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn get(&self, item: CatalogItemId) -> Option<&CartLine> {
        self.lines.get(&item)
    }

    pub fn lines(&self) -> impl Iterator<Item = (CatalogItemId, &CartLine)> {
        self.lines.iter().map(|(id, line)| (*id, line))
    }

    /// Add `quantity` of `item`. An item already in the cart keeps its
    /// original snapshot and has its quantity increased.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQuantity`] if the accumulated quantity overflows.
    pub fn add(&mut self, item: &CatalogItem, quantity: Quantity) -> Result<(), InvalidQuantity> {
        match self.lines.get_mut(&item.id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(quantity).ok_or(InvalidQuantity)?;
            }
            None => {
                self.lines
                    .insert(item.id, CartLine::snapshot(item, quantity));
            }
        }

        Ok(())
    }

    /// Discard everything and hold only `quantity` of `item`.
    pub fn replace(&mut self, item: &CatalogItem, quantity: Quantity) {
        self.lines.clear();
        self.lines
            .insert(item.id, CartLine::snapshot(item, quantity));
    }

    pub fn remove(&mut self, item: CatalogItemId) -> Option<CartLine> {
        self.lines.remove(&item)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of every line's price times quantity, in cents.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .values()
            .map(CartLine::line_total)
            .fold(0, u64::saturating_add)
    }
}
