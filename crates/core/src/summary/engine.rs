//! Averaging and override inference.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::SummaryError;
use super::types::{BudgetSummary, SummaryOrigin};
use crate::BudgetField;
use crate::ledger::LineItem;

/// Time at or below this is a short job.
const SHORT_TIME_LIMIT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Complexity at or above this is a hard job.
const HARD_COMPLEXITY_FLOOR: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Cost at or above this is an expensive job.
const EXPENSIVE_COST_FLOOR: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Engine for producing budget summaries.
pub struct SummaryEngine;

impl SummaryEngine {
    /// Decimal places an averaged figure is rounded to.
    #[must_use]
    pub const fn scale(field: BudgetField) -> u32 {
        match field {
            BudgetField::Time | BudgetField::Complexity => 1,
            BudgetField::Cost => 2,
        }
    }

    /// Averages the ledger.
    ///
    /// Each figure is summed, divided by the item count, and rounded half
    /// away from zero to its scale. Returns `Ok(None)` for an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Overflow` if a total leaves the decimal range,
    /// or if an average is too large to carry its fixed decimal places.
    pub fn compute(items: &[LineItem]) -> Result<Option<BudgetSummary>, SummaryError> {
        if items.is_empty() {
            return Ok(None);
        }

        let count = Decimal::from(items.len());
        let average = |field: BudgetField| -> Result<Decimal, SummaryError> {
            let total = items
                .iter()
                .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.value(field)))
                .ok_or(SummaryError::Overflow { field })?;

            let scale = Self::scale(field);
            let mut mean = (total / count)
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            mean.rescale(scale);
            if mean.scale() != scale {
                return Err(SummaryError::Overflow { field });
            }
            Ok(mean)
        };

        Ok(Some(BudgetSummary {
            time: average(BudgetField::Time)?,
            complexity: average(BudgetField::Complexity)?,
            cost: average(BudgetField::Cost)?,
            origin: SummaryOrigin::Averaged {
                item_count: items.len(),
            },
        }))
    }

    /// Builds the summary for a hand-entered value.
    ///
    /// The edited field takes `value` unrounded. The other two come from a
    /// fixed threshold table on `value` alone; the previous summary is not
    /// consulted.
    ///
    /// | field      | condition     | time  | complexity | cost  |
    /// |------------|---------------|-------|------------|-------|
    /// | time       | value <= 5    | value | 3          | 1000  |
    /// | time       | value > 5     | value | 8          | 500   |
    /// | complexity | value >= 7    | 10    | value      | 2000  |
    /// | complexity | value < 7     | 3     | value      | 800   |
    /// | cost       | value >= 2000 | 10    | 8          | value |
    /// | cost       | value < 2000  | 4     | 2          | value |
    #[must_use]
    pub fn apply_override(field: BudgetField, value: Decimal) -> BudgetSummary {
        let value = value.normalize();
        let fixed = |n: i64| Decimal::from(n);
        let (time, complexity, cost) = match field {
            BudgetField::Time if value <= SHORT_TIME_LIMIT => (value, fixed(3), fixed(1000)),
            BudgetField::Time => (value, fixed(8), fixed(500)),
            BudgetField::Complexity if value >= HARD_COMPLEXITY_FLOOR => {
                (fixed(10), value, fixed(2000))
            }
            BudgetField::Complexity => (fixed(3), value, fixed(800)),
            BudgetField::Cost if value >= EXPENSIVE_COST_FLOOR => (fixed(10), fixed(8), value),
            BudgetField::Cost => (fixed(4), fixed(2), value),
        };

        BudgetSummary {
            time,
            complexity,
            cost,
            origin: SummaryOrigin::Overridden { field },
        }
    }
}
