//! The resolution pipeline: compare, resolve, select, score, reward.

use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, GapTier};
use crate::entropy::{EntropyStream, REQUIRED_DRAWS};
use crate::error::{EngineError, EngineResult};
use crate::excitement::{Excitement, Modifier, score_excitement};
use crate::outcome::{MarginClass, resolve_outcome};
use crate::profile::{CombatantProfile, Side};
use crate::reward::calculate_rewards;
use crate::technique::{Technique, select_technique};

/// The structured outcome of one bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The winning side.
    pub winner: Side,
    /// The losing side.
    pub loser: Side,
    /// The pre-entropy favorite.
    pub favorite: Side,
    /// The finishing technique.
    pub technique: Technique,
    /// How exciting the bout was (2.0-10.0).
    pub excitement: Excitement,
    /// Excitement modifiers that applied.
    pub modifiers: Vec<Modifier>,
    /// XP earned by east.
    pub east_reward: u32,
    /// XP earned by west.
    pub west_reward: u32,
    /// How decisively the winner won.
    pub margin: MarginClass,
    /// Gap tier of the pairing.
    pub tier: GapTier,
    /// Lead changes during the bout.
    pub momentum_shifts: u32,
}

impl ResolutionResult {
    /// Whether the pre-entropy underdog won.
    pub fn is_upset(&self) -> bool {
        self.winner != self.favorite
    }

    /// XP earned by `side`.
    pub fn reward(&self, side: Side) -> u32 {
        match side {
            Side::East => self.east_reward,
            Side::West => self.west_reward,
        }
    }
}

/// Everything a commentary writer needs to narrate a bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutContext {
    /// The east rikishi.
    pub east: CombatantProfile,
    /// The west rikishi.
    pub west: CombatantProfile,
    /// Fortune values consumed, in draw order.
    pub fortune: Vec<i32>,
    /// The resolved outcome.
    pub result: ResolutionResult,
}

impl BoutContext {
    /// The winning rikishi.
    pub fn winner(&self) -> &CombatantProfile {
        self.profile(self.result.winner)
    }

    /// The losing rikishi.
    pub fn loser(&self) -> &CombatantProfile {
        self.profile(self.result.loser)
    }

    /// The rikishi on `side`.
    pub fn profile(&self, side: Side) -> &CombatantProfile {
        match side {
            Side::East => &self.east,
            Side::West => &self.west,
        }
    }
}

/// Stateless bout resolver.
///
/// A resolution is a pure function of the two profiles and the fortune
/// stream. The engine holds no state, so one value can resolve any number
/// of bouts from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionEngine;

impl ResolutionEngine {
    /// Create an engine.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a bout, consuming exactly [`REQUIRED_DRAWS`] values.
    ///
    /// Profiles and stream length are checked before anything is drawn,
    /// so a failed call leaves the stream untouched.
    pub fn resolve(
        &self,
        east: &CombatantProfile,
        west: &CombatantProfile,
        stream: &mut EntropyStream,
    ) -> EngineResult<ResolutionResult> {
        east.validate()?;
        west.validate()?;
        if stream.remaining() < REQUIRED_DRAWS {
            return Err(EngineError::EntropyExhausted {
                needed: REQUIRED_DRAWS,
                available: stream.remaining(),
            });
        }

        let cmp = Comparison::new(&east.attributes, &west.attributes)?;
        let outcome = resolve_outcome(&cmp, stream)?;

        let (winner, loser) = match outcome.winner {
            Side::East => (&east.attributes, &west.attributes),
            Side::West => (&west.attributes, &east.attributes),
        };
        let technique = select_technique(winner, loser, outcome.critical, outcome.margin)?;
        let (excitement, modifiers) = score_excitement(&cmp, &outcome, technique, winner, loser);
        let rewards = calculate_rewards(&outcome, technique, excitement);

        tracing::info!(
            east = %east.id,
            west = %west.id,
            winner = %outcome.winner,
            %technique,
            %excitement,
            "bout resolved"
        );

        Ok(ResolutionResult {
            winner: outcome.winner,
            loser: outcome.loser,
            favorite: outcome.favorite,
            technique,
            excitement,
            modifiers,
            east_reward: rewards.east,
            west_reward: rewards.west,
            margin: outcome.margin,
            tier: outcome.tier,
            momentum_shifts: outcome.momentum_shifts,
        })
    }

    /// Resolve a bout and bundle the result with its inputs.
    pub fn resolve_context(
        &self,
        east: &CombatantProfile,
        west: &CombatantProfile,
        stream: &mut EntropyStream,
    ) -> EngineResult<BoutContext> {
        let start = stream.position();
        let result = self.resolve(east, west, stream)?;
        let fortune = stream
            .values()
            .get(start..stream.position())
            .map(<[i32]>::to_vec)
            .unwrap_or_default();
        Ok(BoutContext {
            east: east.clone(),
            west: west.clone(),
            fortune,
            result,
        })
    }
}
