//! Outcome resolution: who wins, and how decisively.
//!
//! The resolver keeps a signed *edge* from the favorite's point of view;
//! the favorite leads while the edge is zero or positive. Five fortune
//! draws are consumed in a fixed order:
//!
//! 1. opening exchange (favorite draws): banded swing, sentinels lock the result
//! 2. positional exchange (underdog draws): swing sized by technical advantage
//! 3. momentum check (favorite draws): may flip the leader at even/slight tiers only
//! 4. margin draw (underdog draws)
//! 5. margin draw (favorite draws)
//!
//! At [`GapTier::Total`] the outcome is locked to the favorite before any
//! draw; the stream only shapes the margin.

use serde::{Deserialize, Serialize};

use crate::compare::{AdvantageClass, Comparison, GapTier};
use crate::entropy::{EntropyStream, Sentinel, classify};
use crate::error::EngineResult;
use crate::profile::Side;

/// Edge given to a side that wins the opening exchange outright.
const DECISIVE_EDGE: i32 = 5;

/// Momentum draws above this value hand the lead to the trailing side.
pub const MOMENTUM_THRESHOLD: i32 = 10;

/// Opening exchange bands: `(highest value, swing toward favorite)`.
const OPENING_BANDS: [(i32, i32); 5] = [(1, 2), (5, 1), (8, 0), (11, -1), (13, -2)];

/// Margin draw bands: `(highest value, adjustment toward winner)`.
const MARGIN_BANDS: [(i32, i32); 3] = [(4, 1), (9, 0), (13, -1)];

/// Swing for a critical draw in the positional exchange.
const CRITICAL_POSITION_SWING: i32 = 3;

/// Adjustment for a critical draw in a margin draw (and a locked opening).
const CRITICAL_MARGIN_SWING: i32 = 2;

/// The favorite's edge before any draw.
pub fn starting_edge(tier: GapTier) -> i32 {
    match tier {
        GapTier::Even => 0,
        GapTier::Slight => 1,
        GapTier::Clear => 4,
        GapTier::Severe => 6,
        GapTier::Total => 3,
    }
}

/// How decisively the winner won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginClass {
    /// A close, drawn-out bout.
    Narrow,
    /// A clear win.
    Clear,
    /// A one-sided win.
    Dominant,
}

impl MarginClass {
    /// Classify a margin score.
    pub fn from_score(score: i32) -> Self {
        match score {
            ..=1 => Self::Narrow,
            2..=4 => Self::Clear,
            _ => Self::Dominant,
        }
    }

    /// Index into per-margin tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for MarginClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrow => write!(f, "narrow"),
            Self::Clear => write!(f, "clear"),
            Self::Dominant => write!(f, "dominant"),
        }
    }
}

/// Critical events that force technique overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalFlags {
    /// The winner drew a critical success.
    pub winner_critical: bool,
    /// The loser drew a critical failure.
    pub loser_critical: bool,
}

/// Result of the draw-by-draw resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The winning side.
    pub winner: Side,
    /// The losing side.
    pub loser: Side,
    /// The pre-entropy favorite.
    pub favorite: Side,
    /// Gap tier of the pairing.
    pub tier: GapTier,
    /// How decisively the winner won.
    pub margin: MarginClass,
    /// Critical events.
    pub critical: CriticalFlags,
    /// Lead changes during the first three draws.
    pub momentum_shifts: u32,
    /// The winner trailed after at least one exchange.
    pub winner_trailed: bool,
    /// At least one exchange swung toward the loser.
    pub loser_gained: bool,
    /// A sentinel decided the bout at the opening exchange.
    pub locked_at_opening: bool,
}

impl Outcome {
    /// The pre-entropy underdog.
    pub fn underdog(&self) -> Side {
        self.favorite.opposite()
    }

    /// Whether the underdog won.
    pub fn is_upset(&self) -> bool {
        self.winner != self.favorite
    }
}

/// Pick the pre-entropy favorite.
///
/// Weighs current ability 60% and summed capability differences 40%.
/// An exact tie makes east the favorite, leaving west as the nominal
/// underdog. At [`GapTier::Total`] the higher current ability always
/// decides.
pub fn favorite(cmp: &Comparison) -> Side {
    if cmp.tier == GapTier::Total {
        return if cmp.current_diff > 0 { Side::East } else { Side::West };
    }
    let score = 6 * cmp.current_diff + 4 * cmp.capability_diff();
    if score >= 0 { Side::East } else { Side::West }
}

/// Resolve the winner and margin, consuming exactly five draws.
pub fn resolve_outcome(cmp: &Comparison, stream: &mut EntropyStream) -> EngineResult<Outcome> {
    let mut bout = BoutState::new(cmp);
    tracing::debug!(favorite = %bout.favorite, tier = %cmp.tier, edge = bout.edge, "outcome start");

    bout.opening(stream.next()?);
    bout.positional(stream.next()?, cmp);
    bout.momentum(stream.next()?);

    let winner = bout.leader;
    let mut margin_score = bout.winner_edge(winner);
    for drawer in [bout.favorite.opposite(), bout.favorite] {
        margin_score += bout.margin_draw(stream.next()?, drawer, winner);
    }
    let loser = winner.opposite();

    let outcome = Outcome {
        winner,
        loser,
        favorite: bout.favorite,
        tier: cmp.tier,
        margin: MarginClass::from_score(margin_score),
        critical: CriticalFlags {
            winner_critical: bout.critical_success[slot(winner)],
            loser_critical: bout.critical_fail[slot(loser)],
        },
        momentum_shifts: bout.shifts,
        winner_trailed: bout.trailed[slot(winner)],
        loser_gained: bout.gained[slot(loser)],
        locked_at_opening: bout.locked_at_opening,
    };
    tracing::debug!(?outcome, margin_score, "outcome resolved");
    Ok(outcome)
}

fn slot(side: Side) -> usize {
    match side {
        Side::East => 0,
        Side::West => 1,
    }
}

fn band(bands: &[(i32, i32)], value: i32) -> i32 {
    bands
        .iter()
        .find(|&&(upper, _)| value <= upper)
        .map_or(0, |&(_, swing)| swing)
}

/// Mutable state threaded through the draws of one bout.
struct BoutState {
    favorite: Side,
    tier: GapTier,
    edge: i32,
    lock: Option<Side>,
    leader: Side,
    shifts: u32,
    locked_at_opening: bool,
    trailed: [bool; 2],
    gained: [bool; 2],
    critical_success: [bool; 2],
    critical_fail: [bool; 2],
}

impl BoutState {
    fn new(cmp: &Comparison) -> Self {
        let favorite = favorite(cmp);
        Self {
            favorite,
            tier: cmp.tier,
            edge: starting_edge(cmp.tier),
            lock: (cmp.tier == GapTier::Total).then_some(favorite),
            leader: favorite,
            shifts: 0,
            locked_at_opening: false,
            trailed: [false; 2],
            gained: [false; 2],
            critical_success: [false; 2],
            critical_fail: [false; 2],
        }
    }

    fn underdog(&self) -> Side {
        self.favorite.opposite()
    }

    fn note_sentinel(&mut self, value: i32, drawer: Side) -> Sentinel {
        let sentinel = classify(value);
        match sentinel {
            Sentinel::CriticalSuccess => self.critical_success[slot(drawer)] = true,
            Sentinel::CriticalFail => self.critical_fail[slot(drawer)] = true,
            Sentinel::None => {}
        }
        sentinel
    }

    fn opening(&mut self, value: i32) {
        let drawer = self.favorite;
        match (self.note_sentinel(value, drawer), self.lock) {
            (Sentinel::CriticalSuccess, None) => self.lock_to(drawer),
            (Sentinel::CriticalFail, None) => self.lock_to(drawer.opposite()),
            (Sentinel::CriticalSuccess, Some(_)) => self.swing(drawer, CRITICAL_MARGIN_SWING),
            (Sentinel::CriticalFail, Some(_)) => {
                self.swing(drawer.opposite(), CRITICAL_MARGIN_SWING)
            }
            (Sentinel::None, _) => {
                match band(&OPENING_BANDS, value) {
                    swing @ 1.. => self.swing(self.favorite, swing),
                    swing @ ..=-1 => self.swing(self.underdog(), -swing),
                    _ => {}
                }
            }
        }
        tracing::debug!(value, edge = self.edge, leader = %self.leader, "opening exchange");
        self.settle();
    }

    fn positional(&mut self, value: i32, cmp: &Comparison) {
        let drawer = self.underdog();
        let exchange = match self.note_sentinel(value, drawer) {
            Sentinel::CriticalSuccess => Some((drawer, CRITICAL_POSITION_SWING)),
            Sentinel::CriticalFail => Some((drawer.opposite(), CRITICAL_POSITION_SWING)),
            Sentinel::None => {
                let taker = match value {
                    ..=4 => Some(self.favorite),
                    5..=8 => None,
                    _ => Some(self.underdog()),
                };
                taker.map(|side| {
                    let mut magnitude = 1;
                    if technical_advantage(cmp, side) >= AdvantageClass::Slight {
                        magnitude += 1;
                    }
                    if matches!(value, 0..=1 | 12..=13) {
                        magnitude += 1;
                    }
                    (side, magnitude)
                })
            }
        };
        if let Some((side, magnitude)) = exchange {
            self.swing(side, magnitude);
        }
        tracing::debug!(value, edge = self.edge, leader = %self.leader, "positional exchange");
        self.settle();
    }

    fn momentum(&mut self, value: i32) {
        let drawer = self.favorite;
        let sentinel = self.note_sentinel(value, drawer);
        if self.tier.allows_momentum_flip() && self.lock.is_none() {
            let flip = match sentinel {
                Sentinel::CriticalSuccess => self.leader != drawer,
                Sentinel::CriticalFail => self.leader == drawer,
                Sentinel::None => value > MOMENTUM_THRESHOLD,
            };
            if flip {
                self.edge = if self.edge == 0 { -1 } else { -self.edge };
                self.gained[slot(self.leader.opposite())] = true;
            }
        }
        tracing::debug!(value, edge = self.edge, "momentum check");
        self.settle();
    }

    fn margin_draw(&mut self, value: i32, drawer: Side, winner: Side) -> i32 {
        let toward_drawer = if drawer == winner { 1 } else { -1 };
        let adjust = match self.note_sentinel(value, drawer) {
            Sentinel::CriticalSuccess => CRITICAL_MARGIN_SWING * toward_drawer,
            Sentinel::CriticalFail => -CRITICAL_MARGIN_SWING * toward_drawer,
            Sentinel::None => band(&MARGIN_BANDS, value),
        };
        tracing::trace!(value, %drawer, adjust, "margin draw");
        adjust
    }

    fn lock_to(&mut self, side: Side) {
        self.lock = Some(side);
        self.locked_at_opening = true;
        self.gained[slot(side)] = true;
        self.edge = if side == self.favorite {
            DECISIVE_EDGE
        } else {
            -DECISIVE_EDGE
        };
    }

    fn swing(&mut self, toward: Side, amount: i32) {
        self.gained[slot(toward)] = true;
        if toward == self.favorite {
            self.edge += amount;
        } else {
            self.edge -= amount;
        }
    }

    /// Hold any lock, then record lead changes and who is strictly behind.
    fn settle(&mut self) {
        match self.lock {
            Some(side) if side == self.favorite => self.edge = self.edge.max(1),
            Some(_) => self.edge = self.edge.min(-1),
            None => {}
        }
        let leader = if self.edge >= 0 {
            self.favorite
        } else {
            self.underdog()
        };
        if leader != self.leader {
            self.shifts += 1;
            self.leader = leader;
        }
        // A level edge leaves nobody behind.
        if self.edge != 0 {
            self.trailed[slot(leader.opposite())] = true;
        }
    }

    fn winner_edge(&self, winner: Side) -> i32 {
        if winner == self.favorite {
            self.edge
        } else {
            -self.edge
        }
    }
}

/// Classified technical-capability advantage of `side` over its opponent.
fn technical_advantage(cmp: &Comparison, side: Side) -> AdvantageClass {
    let diff = match side {
        Side::East => cmp.technical_diff,
        Side::West => -cmp.technical_diff,
    };
    AdvantageClass::from_difference(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::AttributeSet;
    use crate::profile::tests::stats;

    fn run(east: &AttributeSet, west: &AttributeSet, draws: &[i32]) -> Outcome {
        let cmp = Comparison::new(east, west).unwrap();
        let mut stream = EntropyStream::new(draws.to_vec()).unwrap();
        let outcome = resolve_outcome(&cmp, &mut stream).unwrap();
        assert_eq!(stream.position(), 5);
        outcome
    }

    fn even_pair() -> (AttributeSet, AttributeSet) {
        (stats([11, 11, 10, 10, 10]), stats([10; 5]))
    }

    fn clear_pair() -> (AttributeSet, AttributeSet) {
        (stats([18, 17, 18, 19, 18]), stats([4; 5]))
    }

    #[test]
    fn favorite_weighs_ability_and_capabilities() {
        let (east, west) = even_pair();
        let cmp = Comparison::new(&east, &west).unwrap();
        assert_eq!(favorite(&cmp), Side::East);

        // West is two points weaker overall but far stronger in balance,
        // which counts toward two capabilities.
        let strong_west = stats([5, 5, 20, 10, 10]);
        let cmp = Comparison::new(&east, &strong_west).unwrap();
        assert_eq!(favorite(&cmp), Side::West);
    }

    #[test]
    fn exact_tie_makes_east_favorite() {
        let a = stats([8; 5]);
        let cmp = Comparison::new(&a, &a).unwrap();
        assert_eq!(favorite(&cmp), Side::East);
    }

    #[test]
    fn opening_band_gives_underdog_the_bout() {
        let (east, west) = even_pair();
        let outcome = run(&east, &west, &[12, 7, 5, 6, 6]);
        assert_eq!(outcome.favorite, Side::East);
        assert_eq!(outcome.winner, Side::West);
        assert_eq!(outcome.loser, Side::East);
        assert!(outcome.is_upset());
        assert_eq!(outcome.momentum_shifts, 1);
        assert_eq!(outcome.margin, MarginClass::Clear);
        assert!(!outcome.winner_trailed);
        assert!(!outcome.loser_gained);
    }

    #[test]
    fn three_lead_changes() {
        let (east, west) = even_pair();
        let outcome = run(&east, &west, &[12, 0, 11, 6, 6]);
        assert_eq!(outcome.momentum_shifts, 3);
        assert_eq!(outcome.winner, Side::West);
        // West led, was pulled level, then retook the lead: never behind.
        assert!(!outcome.winner_trailed);
        assert!(outcome.loser_gained);
        assert_eq!(outcome.margin, MarginClass::Narrow);
    }

    #[test]
    fn momentum_cannot_flip_clear_tier() {
        let (east, west) = clear_pair();
        let outcome = run(&east, &west, &[12, 12, 13, 13, 13]);
        assert_eq!(outcome.tier, GapTier::Clear);
        assert_eq!(outcome.winner, Side::East);
        assert_eq!(outcome.momentum_shifts, 0);
        assert_eq!(outcome.margin, MarginClass::Narrow);
    }

    #[test]
    fn level_bout_does_not_count_as_trailing() {
        let (east, west) = even_pair();
        let outcome = run(&east, &west, &[7, 7, 11, 6, 6]);
        assert_eq!(outcome.winner, Side::West);
        assert_eq!(outcome.momentum_shifts, 1);
        assert!(!outcome.winner_trailed);
        assert_eq!(outcome.margin, MarginClass::Narrow);
    }

    #[test]
    fn clear_gap_favors_higher_ability_on_neutral_fortune() {
        let (east, west) = clear_pair();
        let cmp = Comparison::new(&east, &west).unwrap();
        assert_eq!(favorite(&cmp), Side::East);
        let outcome = run(&east, &west, &[6, 6, 6, 6, 6]);
        assert_eq!(outcome.winner, Side::East);
        assert!(!outcome.is_upset());

        let outcome = run(&west, &east, &[6, 6, 6, 6, 6]);
        assert_eq!(outcome.favorite, Side::West);
        assert_eq!(outcome.winner, Side::West);
    }

    #[test]
    fn opening_critical_fail_locks_underdog_win() {
        let (east, west) = even_pair();
        let outcome = run(&east, &west, &[-5, 0, 0, 0, 0]);
        assert_eq!(outcome.winner, Side::West);
        assert!(outcome.locked_at_opening);
        assert!(outcome.critical.loser_critical);
        assert!(!outcome.critical.winner_critical);
        assert_eq!(outcome.margin, MarginClass::Dominant);
    }

    #[test]
    fn opening_critical_success_locks_favorite_win() {
        let (east, west) = even_pair();
        let outcome = run(&east, &west, &[20, 13, 13, 13, 13]);
        assert_eq!(outcome.winner, Side::East);
        assert!(outcome.locked_at_opening);
        assert!(outcome.critical.winner_critical);
        assert_eq!(outcome.momentum_shifts, 0);
        assert_eq!(outcome.margin, MarginClass::Narrow);
    }

    #[test]
    fn momentum_critical_success_recovers_lead() {
        let (east, west) = even_pair();
        let outcome = run(&east, &west, &[12, 7, 20, 6, 6]);
        assert_eq!(outcome.winner, Side::East);
        assert_eq!(outcome.momentum_shifts, 2);
        assert!(outcome.winner_trailed);
        assert!(outcome.critical.winner_critical);
    }

    #[test]
    fn total_tier_ignores_fortune() {
        let east = stats([20; 5]);
        let west = stats([1; 5]);
        let outcome = run(&east, &west, &[-5, 12, 13, 13, 13]);
        assert_eq!(outcome.tier, GapTier::Total);
        assert_eq!(outcome.winner, Side::East);
        assert!(!outcome.locked_at_opening);
        assert!(!outcome.critical.loser_critical);
        assert_eq!(outcome.momentum_shifts, 0);
    }

    #[test]
    fn exhausted_stream_propagates() {
        let (east, west) = even_pair();
        let cmp = Comparison::new(&east, &west).unwrap();
        let mut stream = EntropyStream::new(vec![6, 6, 6]).unwrap();
        assert!(resolve_outcome(&cmp, &mut stream).is_err());
    }

    #[test]
    fn margin_classes() {
        assert_eq!(MarginClass::from_score(-3), MarginClass::Narrow);
        assert_eq!(MarginClass::from_score(1), MarginClass::Narrow);
        assert_eq!(MarginClass::from_score(2), MarginClass::Clear);
        assert_eq!(MarginClass::from_score(4), MarginClass::Clear);
        assert_eq!(MarginClass::from_score(5), MarginClass::Dominant);
    }

    #[test]
    fn opening_bands() {
        assert_eq!(band(&OPENING_BANDS, 0), 2);
        assert_eq!(band(&OPENING_BANDS, 2), 1);
        assert_eq!(band(&OPENING_BANDS, 7), 0);
        assert_eq!(band(&OPENING_BANDS, 9), -1);
        assert_eq!(band(&OPENING_BANDS, 13), -2);
    }
}
