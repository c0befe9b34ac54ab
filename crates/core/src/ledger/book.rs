//! The append-only item ledger.

use serde::Serialize;

use super::item::{DraftItem, LineItem};

/// Ordered list of submitted line items.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a copy of the draft.
    ///
    /// Returns the new item, or `None` (ledger unchanged) if the draft has
    /// no name.
    pub fn add_item(&mut self, draft: &DraftItem) -> Option<&LineItem> {
        let item = LineItem::from_draft(draft)?;
        self.items.push(item);
        self.items.last()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no item has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
