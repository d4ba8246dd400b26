//! Ability comparison: ratio, gap tier and per-attribute advantage.
//!
//! Tier boundaries are rational numbers compared by cross-multiplication,
//! so a ratio sitting exactly on a boundary always lands in the upper tier.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::profile::{Attribute, AttributeSet};

/// Competitiveness band derived from the ability ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapTier {
    /// Ratio in `[1.0, 1.3)`.
    Even,
    /// Ratio in `[1.3, 2.0)`.
    Slight,
    /// Ratio in `[2.0, 5.0)`.
    Clear,
    /// Ratio in `[5.0, 15.0)`.
    Severe,
    /// Ratio of `15.0` or more.
    Total,
}

/// Lower bound of each tier above `Even`, as `(numerator, denominator)`.
const TIER_BOUNDS: [(GapTier, u32, u32); 4] = [
    (GapTier::Total, 15, 1),
    (GapTier::Severe, 5, 1),
    (GapTier::Clear, 2, 1),
    (GapTier::Slight, 13, 10),
];

impl GapTier {
    /// Classify the ratio `high / low`. Both must be positive.
    pub fn from_abilities(high: u32, low: u32) -> Self {
        TIER_BOUNDS
            .iter()
            .find(|&&(_, num, den)| ratio_at_least(high, low, num, den))
            .map_or(Self::Even, |&(tier, _, _)| tier)
    }

    /// Whether the momentum check may still change the leader.
    pub fn allows_momentum_flip(self) -> bool {
        matches!(self, Self::Even | Self::Slight)
    }
}

impl std::fmt::Display for GapTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Even => write!(f, "even"),
            Self::Slight => write!(f, "slight"),
            Self::Clear => write!(f, "clear"),
            Self::Severe => write!(f, "severe"),
            Self::Total => write!(f, "total"),
        }
    }
}

/// `high / low >= num / den`, without floating point.
pub(crate) fn ratio_at_least(high: u32, low: u32, num: u32, den: u32) -> bool {
    u64::from(high) * u64::from(den) >= u64::from(low) * u64::from(num)
}

/// Size of an attribute (or capability) advantage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvantageClass {
    /// Difference below 2 (or negative).
    None,
    /// Difference of 2-4.
    Slight,
    /// Difference of 5-8.
    Clear,
    /// Difference of 9 or more.
    Dominant,
}

impl AdvantageClass {
    /// Classify `own - opponent`.
    pub fn from_difference(diff: i32) -> Self {
        match diff {
            9.. => Self::Dominant,
            5..=8 => Self::Clear,
            2..=4 => Self::Slight,
            _ => Self::None,
        }
    }
}

/// Signed per-attribute advantage of `own` over `opponent`.
pub fn advantage(own: &AttributeSet, opponent: &AttributeSet, attribute: Attribute) -> i32 {
    own.get(attribute) as i32 - opponent.get(attribute) as i32
}

/// Classified advantage of `own` over `opponent` in one attribute.
pub fn advantage_class(
    own: &AttributeSet,
    opponent: &AttributeSet,
    attribute: Attribute,
) -> AdvantageClass {
    AdvantageClass::from_difference(advantage(own, opponent, attribute))
}

/// Comparison of two attribute sets, east against west.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// The higher current ability.
    pub high: u32,
    /// The lower current ability.
    pub low: u32,
    /// Tier of `high / low`.
    pub tier: GapTier,
    /// Current ability difference, east minus west.
    pub current_diff: i32,
    /// Power capability difference, east minus west.
    pub power_diff: i32,
    /// Technical capability difference, east minus west.
    pub technical_diff: i32,
    /// Defensive capability difference, east minus west.
    pub defensive_diff: i32,
}

impl Comparison {
    /// Compare two attribute sets.
    pub fn new(east: &AttributeSet, west: &AttributeSet) -> EngineResult<Self> {
        if east.current == 0 || west.current == 0 {
            return Err(EngineError::InvalidProfile(
                "current ability must be positive".into(),
            ));
        }
        let high = east.current.max(west.current);
        let low = east.current.min(west.current);
        Ok(Self {
            high,
            low,
            tier: GapTier::from_abilities(high, low),
            current_diff: east.current as i32 - west.current as i32,
            power_diff: east.power_capability() - west.power_capability(),
            technical_diff: east.technical_capability() - west.technical_capability(),
            defensive_diff: east.defensive_capability() - west.defensive_capability(),
        })
    }

    /// The ability ratio as a decimal, for display.
    pub fn ratio(&self) -> f64 {
        f64::from(self.high) / f64::from(self.low)
    }

    /// Sum of the three capability differences, east minus west.
    pub fn capability_diff(&self) -> i32 {
        self.power_diff + self.technical_diff + self.defensive_diff
    }
}
