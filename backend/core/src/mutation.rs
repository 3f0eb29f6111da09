use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

/// The closed set of table mutations. Every price change goes through one of
/// these variants; there is no other write path into a loaded table.
///
/// Percentages are fractional: `IncreaseAll { pct: 0.10 }` raises every
/// price by 10%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Every price *= (1 + pct).
    IncreaseAll { pct: f64 },
    /// Every price *= (1 - pct).
    DecreaseAll { pct: f64 },
    /// Round every price half-away-from-zero to `decimals` places. Idempotent.
    RoundAll { decimals: u32 },
    /// Set one row's price to a fixed value.
    SetRow { row: usize, value: f64 },
    /// Rows with price < threshold get price *= (1 - pct).
    DiscountBelow { threshold: f64, pct: f64 },
}

impl Mutation {
    /// Short human-readable description, used in acknowledgments and logs.
    pub fn describe(&self) -> String {
        match self {
            Self::IncreaseAll { pct } => format!("aumento del {}%", pct * 100.0),
            Self::DecreaseAll { pct } => format!("descuento del {}%", pct * 100.0),
            Self::RoundAll { decimals } => format!("redondeo a {} decimales", decimals),
            Self::SetRow { row, value } => format!("fila {} a {}", row, value),
            Self::DiscountBelow { threshold, pct } => {
                format!("descuento del {}% bajo {}", pct * 100.0, threshold)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Quick actions
// ---------------------------------------------------------------------------

/// Predefined direct triggers. These bypass the command interpreter and
/// construct their mutation directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    IncreaseTenPercent,
    DecreaseFifteenPercent,
    RoundTwoDecimals,
}

impl QuickAction {
    pub fn mutation(self) -> Mutation {
        match self {
            Self::IncreaseTenPercent => Mutation::IncreaseAll { pct: 0.10 },
            Self::DecreaseFifteenPercent => Mutation::DecreaseAll { pct: 0.15 },
            Self::RoundTwoDecimals => Mutation::RoundAll { decimals: 2 },
        }
    }
}
