//! Excitement scoring.
//!
//! The score starts from a base keyed by the ability ratio, then applies
//! each qualifying modifier once. All arithmetic is in tenths, so the
//! result is exact to one decimal place.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compare::{AdvantageClass, Comparison, advantage_class, ratio_at_least};
use crate::outcome::{MarginClass, Outcome};
use crate::profile::AttributeSet;
use crate::technique::{Rarity, Technique};

/// Lowest possible excitement, in tenths.
pub const MIN_TENTHS: u32 = 20;
/// Highest possible excitement, in tenths.
pub const MAX_TENTHS: u32 = 100;
/// Ceiling for the two commonest techniques, in tenths.
pub const COMMON_CAP_TENTHS: i32 = 90;

/// Base score by ratio: `(lower bound numerator, denominator, tenths)`,
/// checked from the widest gap down.
const BASE_BANDS: [(u32, u32, i32); 5] = [
    (15, 1, 20),
    (4, 1, 25),
    (3, 1, 50),
    (2, 1, 60),
    (13, 10, 70),
];

/// Base score for ratios below every band.
const EVEN_BASE: i32 = 80;

/// A bout excitement level between 2.0 and 10.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Excitement(u32);

impl Excitement {
    /// Build from tenths, clamping to the legal range.
    pub fn from_tenths(tenths: u32) -> Self {
        Self(tenths.clamp(MIN_TENTHS, MAX_TENTHS))
    }

    /// The level in tenths (e.g. 75 for 7.5).
    pub fn tenths(self) -> u32 {
        self.0
    }

    /// The level as a decimal.
    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl std::fmt::Display for Excitement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Excitement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Excitement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::from_tenths((value * 10.0).round().max(0.0) as u32))
    }
}

/// A condition that raises or lowers the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    /// The underdog won.
    Upset,
    /// The lead changed three or more times.
    MomentumSwings,
    /// The winner fought back from behind.
    EdgeStand,
    /// A rare technique finished the bout.
    RareTechnique,
    /// A narrow, drawn-out bout.
    ExtendedExchange,
    /// The winner's best attribute dwarfed the loser's.
    DecisiveAdvantage,
    /// Over at once: dominant margin with no lead change.
    InstantFinish,
    /// The loser never won an exchange.
    NoResistance,
}

impl Modifier {
    /// Adjustment in tenths.
    pub fn weight(self) -> i32 {
        match self {
            Self::Upset => 20,
            Self::MomentumSwings => 15,
            Self::EdgeStand => 10,
            Self::RareTechnique => 8,
            Self::ExtendedExchange => 5,
            Self::DecisiveAdvantage => 3,
            Self::InstantFinish => -10,
            Self::NoResistance => -5,
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.weight() >= 0 { '+' } else { '-' };
        let w = self.weight().unsigned_abs();
        let label = match self {
            Self::Upset => "upset",
            Self::MomentumSwings => "momentum swings",
            Self::EdgeStand => "edge stand",
            Self::RareTechnique => "rare technique",
            Self::ExtendedExchange => "extended exchange",
            Self::DecisiveAdvantage => "decisive advantage",
            Self::InstantFinish => "instant finish",
            Self::NoResistance => "no resistance",
        };
        write!(f, "{label} ({sign}{}.{})", w / 10, w % 10)
    }
}

/// Base score in tenths for the ratio `high / low`.
pub fn base_tenths(high: u32, low: u32) -> i32 {
    BASE_BANDS
        .iter()
        .find(|&&(num, den, _)| ratio_at_least(high, low, num, den))
        .map_or(EVEN_BASE, |&(_, _, tenths)| tenths)
}

/// The modifiers that apply to a resolved bout, in a fixed order.
pub fn modifiers(
    outcome: &Outcome,
    technique: Technique,
    winner: &AttributeSet,
    loser: &AttributeSet,
) -> Vec<Modifier> {
    let checks = [
        (Modifier::Upset, outcome.is_upset()),
        (Modifier::MomentumSwings, outcome.momentum_shifts >= 3),
        (Modifier::EdgeStand, outcome.winner_trailed),
        (Modifier::RareTechnique, technique.rarity() == Rarity::Rare),
        (Modifier::ExtendedExchange, outcome.margin == MarginClass::Narrow),
        (
            Modifier::DecisiveAdvantage,
            advantage_class(winner, loser, winner.highest()) == AdvantageClass::Dominant,
        ),
        (
            Modifier::InstantFinish,
            outcome.margin == MarginClass::Dominant && outcome.momentum_shifts == 0,
        ),
        (Modifier::NoResistance, !outcome.loser_gained),
    ];
    checks
        .into_iter()
        .filter_map(|(modifier, applies)| applies.then_some(modifier))
        .collect()
}

/// Combine a base score with modifiers, then apply the caps.
pub fn score(base: i32, applied: &[Modifier], technique: Technique) -> Excitement {
    let mut total = base + applied.iter().map(|m| m.weight()).sum::<i32>();
    if technique.is_commonest() && !applied.contains(&Modifier::MomentumSwings) {
        total = total.min(COMMON_CAP_TENTHS);
    }
    let clamped = total.clamp(MIN_TENTHS as i32, MAX_TENTHS as i32);
    Excitement::from_tenths(clamped as u32)
}

/// Score a resolved bout. Returns the excitement and the modifiers applied.
pub fn score_excitement(
    cmp: &Comparison,
    outcome: &Outcome,
    technique: Technique,
    winner: &AttributeSet,
    loser: &AttributeSet,
) -> (Excitement, Vec<Modifier>) {
    let base = base_tenths(cmp.high, cmp.low);
    let applied = modifiers(outcome, technique, winner, loser);
    let excitement = score(base, &applied, technique);
    tracing::debug!(base, ?applied, %excitement, "excitement scored");
    (excitement, applied)
}
