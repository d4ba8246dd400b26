//! Deterministic sumo bout resolution engine.
//!
//! Given two rikishi profiles and a stream of fortune values, the engine
//! decides the winner, the kimarite (finishing technique), how exciting the
//! bout was, and how much XP each side earns. The same inputs always give
//! the same [`ResolutionResult`].
//!
//! Prose commentary, persistence and name generation live elsewhere; this
//! crate only produces the structured record they consume.

pub mod card;
pub mod compare;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod excitement;
pub mod outcome;
pub mod profile;
pub mod reward;
pub mod technique;

pub use card::{CardEntry, Pairing, resolve_card};
pub use compare::{AdvantageClass, Comparison, GapTier};
pub use engine::{BoutContext, ResolutionEngine, ResolutionResult};
pub use entropy::{EntropyStream, FortuneConfig, REQUIRED_DRAWS, Sentinel, generate_fortune};
pub use error::{EngineError, EngineResult};
pub use excitement::{Excitement, Modifier};
pub use outcome::{CriticalFlags, MarginClass, Outcome};
pub use profile::{Attribute, AttributeSet, CombatantProfile, Side};
pub use reward::Rewards;
pub use technique::{Family, Rarity, Technique};
