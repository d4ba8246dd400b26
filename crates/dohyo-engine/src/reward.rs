//! Experience rewards for both sides of a bout.

use serde::{Deserialize, Serialize};

use crate::excitement::Excitement;
use crate::outcome::Outcome;
use crate::profile::Side;
use crate::technique::{Rarity, Technique};

/// Base reward for the winner.
pub const WINNER_BASE: u32 = 10;
/// Base reward for the loser.
pub const LOSER_BASE: u32 = 5;
/// Winner bonus when the underdog wins.
pub const UPSET_BONUS: u32 = 10;
/// Winner bonus for a rare or self-defeat technique.
pub const UNUSUAL_TECHNIQUE_BONUS: u32 = 5;
/// Loser bonus for a highly exciting bout.
pub const THRILLER_BONUS: u32 = 5;
/// Excitement, in tenths, the loser must exceed to earn the thriller bonus.
pub const THRILLER_TENTHS: u32 = 80;

/// Points earned by each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    /// East's points.
    pub east: u32,
    /// West's points.
    pub west: u32,
}

impl Rewards {
    /// Points earned by `side`.
    pub fn for_side(&self, side: Side) -> u32 {
        match side {
            Side::East => self.east,
            Side::West => self.west,
        }
    }
}

/// Compute rewards for a resolved bout.
///
/// Both sides earn `floor(excitement * 2)` on top of their base.
pub fn calculate_rewards(
    outcome: &Outcome,
    technique: Technique,
    excitement: Excitement,
) -> Rewards {
    let share = excitement.tenths() / 5;

    let mut winner = WINNER_BASE + share;
    if outcome.is_upset() {
        winner += UPSET_BONUS;
    }
    if technique.rarity() != Rarity::Ordinary {
        winner += UNUSUAL_TECHNIQUE_BONUS;
    }

    let mut loser = LOSER_BASE + share;
    if excitement.tenths() > THRILLER_TENTHS {
        loser += THRILLER_BONUS;
    }

    match outcome.winner {
        Side::East => Rewards { east: winner, west: loser },
        Side::West => Rewards { east: loser, west: winner },
    }
}
