//! Draft and committed line items.

use orcamento_shared::types::parse_number;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use crate::BudgetField;

/// The in-progress item form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftItem {
    /// Item name. Empty until the user types one.
    pub name: String,
    /// Time estimate.
    pub time: Decimal,
    /// Complexity score.
    pub complexity: Decimal,
    /// Cost estimate.
    pub cost: Decimal,
}

impl DraftItem {
    /// Builds a draft from raw form text.
    ///
    /// Blank numeric fields are zero.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidNumber` naming the first field that
    /// is not a number.
    pub fn parse(
        name: &str,
        time: &str,
        complexity: &str,
        cost: &str,
    ) -> Result<Self, LedgerError> {
        let parse_field = |field: BudgetField, input: &str| {
            parse_number(input).map_err(|source| LedgerError::InvalidNumber { field, source })
        };

        Ok(Self {
            name: name.to_string(),
            time: parse_field(BudgetField::Time, time)?,
            complexity: parse_field(BudgetField::Complexity, complexity)?,
            cost: parse_field(BudgetField::Cost, cost)?,
        })
    }

    /// Returns true if the draft may be added to the ledger.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A submitted line item. Immutable once in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    name: String,
    time: Decimal,
    complexity: Decimal,
    cost: Decimal,
}

impl LineItem {
    /// Item name, never empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time estimate.
    #[must_use]
    pub const fn time(&self) -> Decimal {
        self.time
    }

    /// Complexity score.
    #[must_use]
    pub const fn complexity(&self) -> Decimal {
        self.complexity
    }

    /// Cost estimate.
    #[must_use]
    pub const fn cost(&self) -> Decimal {
        self.cost
    }

    /// Returns the value of one figure.
    #[must_use]
    pub const fn value(&self, field: BudgetField) -> Decimal {
        match field {
            BudgetField::Time => self.time,
            BudgetField::Complexity => self.complexity,
            BudgetField::Cost => self.cost,
        }
    }

    /// Copies a draft into a line item, or `None` if the draft has no name.
    #[must_use]
    pub fn from_draft(draft: &DraftItem) -> Option<Self> {
        if !draft.has_name() {
            return None;
        }

        Some(Self {
            name: draft.name.clone(),
            time: draft.time,
            complexity: draft.complexity,
            cost: draft.cost,
        })
    }
}
