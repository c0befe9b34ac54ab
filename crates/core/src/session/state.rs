//! Session state transitions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::SessionError;
use crate::BudgetField;
use crate::ledger::{DraftItem, Ledger, LineItem};
use crate::summary::{BudgetSummary, SummaryEngine};

/// Result of a compute request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeOutcome {
    /// A new averaged summary replaced the old one.
    Computed,
    /// The ledger was empty; nothing changed.
    EmptyLedger,
}

/// One user's budgeting session.
#[derive(Debug, Clone)]
pub struct Session {
    draft: DraftItem,
    items: Ledger,
    summary: Option<BudgetSummary>,
    editing: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session with an empty ledger and a zeroed draft.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            draft: DraftItem::default(),
            items: Ledger::new(),
            summary: None,
            editing: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current draft item.
    #[must_use]
    pub const fn draft(&self) -> &DraftItem {
        &self.draft
    }

    /// Submitted items.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.items
    }

    /// Current summary, if one has been computed.
    #[must_use]
    pub const fn summary(&self) -> Option<&BudgetSummary> {
        self.summary.as_ref()
    }

    /// Whether the summary is shown as editable fields.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last state change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the summary or `SessionError::NoSummary`.
    ///
    /// # Errors
    ///
    /// Fails if no summary has been computed.
    pub fn require_summary(&self) -> Result<&BudgetSummary, SessionError> {
        self.summary.as_ref().ok_or(SessionError::NoSummary)
    }

    /// Replaces the draft item.
    pub fn set_draft(&mut self, draft: DraftItem) {
        self.draft = draft;
        self.touch();
    }

    /// Appends the draft to the ledger and resets the draft.
    ///
    /// A draft without a name is left in place and nothing is added.
    pub fn add_item(&mut self) -> Option<&LineItem> {
        if !self.draft.has_name() {
            return None;
        }

        let draft = std::mem::take(&mut self.draft);
        self.touch();
        self.items.add_item(&draft)
    }

    /// Averages the ledger into a new summary and leaves edit mode.
    ///
    /// An empty ledger leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Propagates summary overflow.
    pub fn compute_summary(&mut self) -> Result<ComputeOutcome, SessionError> {
        let Some(summary) = SummaryEngine::compute(self.items.items())? else {
            return Ok(ComputeOutcome::EmptyLedger);
        };

        self.summary = Some(summary);
        self.editing = false;
        self.touch();
        Ok(ComputeOutcome::Computed)
    }

    /// Flips between read-only and edit display. Returns the new mode.
    ///
    /// # Errors
    ///
    /// Fails if no summary has been computed.
    pub fn toggle_editing(&mut self) -> Result<bool, SessionError> {
        self.require_summary()?;
        self.editing = !self.editing;
        self.touch();
        Ok(self.editing)
    }

    /// Overrides one summary field and infers the other two.
    ///
    /// # Errors
    ///
    /// Fails without a summary or outside edit mode.
    pub fn override_field(
        &mut self,
        field: BudgetField,
        value: Decimal,
    ) -> Result<&BudgetSummary, SessionError> {
        self.require_summary()?;
        if !self.editing {
            return Err(SessionError::NotEditing);
        }

        self.touch();
        let summary = self
            .summary
            .insert(SummaryEngine::apply_override(field, value));
        Ok(&*summary)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
