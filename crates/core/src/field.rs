//! The three figures every line item and summary carries.

use serde::{Deserialize, Serialize};

/// A budget figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetField {
    /// Time estimate.
    Time,
    /// Complexity score.
    Complexity,
    /// Cost estimate.
    Cost,
}

impl BudgetField {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Time, Self::Complexity, Self::Cost];

    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Complexity => "complexity",
            Self::Cost => "cost",
        }
    }
}

impl std::fmt::Display for BudgetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "complexity" => Ok(Self::Complexity),
            "cost" => Ok(Self::Cost),
            _ => Err(format!("Unknown budget field: {s}")),
        }
    }
}
