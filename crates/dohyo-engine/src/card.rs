//! A day's card: many independent bouts resolved in parallel.
//!
//! Bout `i` draws its fortune from `seed + i`, so a card resolves the same
//! way regardless of thread count or scheduling order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::{BoutContext, ResolutionEngine};
use crate::entropy::{FortuneConfig, generate_fortune};
use crate::error::EngineResult;
use crate::profile::CombatantProfile;

/// Two rikishi scheduled to meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// The east rikishi.
    pub east: CombatantProfile,
    /// The west rikishi.
    pub west: CombatantProfile,
}

impl Pairing {
    /// Create a pairing.
    pub fn new(east: CombatantProfile, west: CombatantProfile) -> Self {
        Self { east, west }
    }
}

/// The outcome of one bout on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    /// Position on the card.
    pub index: usize,
    /// Seed the bout's fortune was drawn from.
    pub seed: u64,
    /// The resolved bout, or why it could not be resolved.
    pub result: EngineResult<BoutContext>,
}

/// Resolve every pairing on a card. Entries come back in card order and a
/// failed bout does not affect the others.
pub fn resolve_card(pairings: &[Pairing], fortune: &FortuneConfig) -> Vec<CardEntry> {
    let engine = ResolutionEngine::new();
    let entries: Vec<CardEntry> = pairings
        .par_iter()
        .enumerate()
        .map(|(index, pairing)| {
            let seed = fortune.seed.wrapping_add(index as u64);
            let mut stream = generate_fortune(&fortune.clone().with_seed(seed));
            let result = engine.resolve_context(&pairing.east, &pairing.west, &mut stream);
            CardEntry { index, seed, result }
        })
        .collect();

    let failed = entries.iter().filter(|e| e.result.is_err()).count();
    tracing::info!(bouts = entries.len(), failed, seed = fortune.seed, "card resolved");
    entries
}
