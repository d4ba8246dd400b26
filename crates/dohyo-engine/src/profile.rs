//! Rikishi profiles: attributes, overall ability and bout sides.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lowest legal value for a single attribute.
pub const MIN_STAT_VALUE: u32 = 1;
/// Highest legal value for a single attribute.
pub const MAX_STAT_VALUE: u32 = 20;
/// Lowest legal overall ability (current or potential).
pub const MIN_ABILITY: u32 = 5;
/// Highest legal overall ability (current or potential).
pub const MAX_ABILITY: u32 = 100;

/// One of the five named attributes.
///
/// Variants are declared in tie-break priority order: when two attributes
/// share a value, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Raw pushing and lifting strength.
    Power,
    /// Technical skill with grips and throws.
    Technique,
    /// Stability and footwork.
    Balance,
    /// Endurance over a long bout.
    Stamina,
    /// Mental composure.
    Focus,
}

impl Attribute {
    /// All attributes in priority order.
    pub const ALL: [Self; 5] = [
        Self::Power,
        Self::Technique,
        Self::Balance,
        Self::Stamina,
        Self::Focus,
    ];

    /// Position in [`Attribute::ALL`], used to index the decision tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Power => write!(f, "power"),
            Self::Technique => write!(f, "technique"),
            Self::Balance => write!(f, "balance"),
            Self::Stamina => write!(f, "stamina"),
            Self::Focus => write!(f, "focus"),
        }
    }
}

/// A rikishi's attributes and overall ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Raw strength (1-20).
    pub power: u32,
    /// Technical skill (1-20).
    pub technique: u32,
    /// Balance and stability (1-20).
    pub balance: u32,
    /// Stamina and endurance (1-20).
    pub stamina: u32,
    /// Mental focus (1-20).
    pub focus: u32,
    /// Current overall ability: the sum of the five attributes.
    pub current: u32,
    /// Maximum ability the rikishi can reach (5-100, at least `current`).
    pub potential: u32,
}

impl AttributeSet {
    /// Read a single attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Power => self.power,
            Attribute::Technique => self.technique,
            Attribute::Balance => self.balance,
            Attribute::Stamina => self.stamina,
            Attribute::Focus => self.focus,
        }
    }

    /// Check every value against its declared bounds.
    ///
    /// Current ability is the sum of the five attributes and may not
    /// exceed potential.
    pub fn validate(&self) -> EngineResult<()> {
        for attribute in Attribute::ALL {
            let value = self.get(attribute);
            if !(MIN_STAT_VALUE..=MAX_STAT_VALUE).contains(&value) {
                return Err(EngineError::InvalidProfile(format!(
                    "{attribute} {value} outside {MIN_STAT_VALUE}..={MAX_STAT_VALUE}"
                )));
            }
        }
        for (name, value) in [("current", self.current), ("potential", self.potential)] {
            if !(MIN_ABILITY..=MAX_ABILITY).contains(&value) {
                return Err(EngineError::InvalidProfile(format!(
                    "{name} ability {value} outside {MIN_ABILITY}..={MAX_ABILITY}"
                )));
            }
        }
        let total = self.stat_total();
        if self.current != total {
            return Err(EngineError::InvalidProfile(format!(
                "current ability {} does not match attribute total {total}",
                self.current
            )));
        }
        if self.current > self.potential {
            return Err(EngineError::InvalidProfile(format!(
                "current ability {} exceeds potential {}",
                self.current, self.potential
            )));
        }
        Ok(())
    }

    /// Sum of the five attributes.
    pub fn stat_total(&self) -> u32 {
        Attribute::ALL.iter().map(|&a| self.get(a)).sum()
    }

    /// The strongest attribute; ties go to the earlier attribute in priority order.
    pub fn highest(&self) -> Attribute {
        let mut best = Attribute::Power;
        for attribute in Attribute::ALL {
            if self.get(attribute) > self.get(best) {
                best = attribute;
            }
        }
        best
    }

    /// The weakest attribute; ties go to the earlier attribute in priority order.
    pub fn lowest(&self) -> Attribute {
        let mut worst = Attribute::Power;
        for attribute in Attribute::ALL {
            if self.get(attribute) < self.get(worst) {
                worst = attribute;
            }
        }
        worst
    }

    /// Power capability: power + stamina.
    pub fn power_capability(&self) -> i32 {
        (self.power + self.stamina) as i32
    }

    /// Technical capability: technique + balance.
    pub fn technical_capability(&self) -> i32 {
        (self.technique + self.balance) as i32
    }

    /// Defensive capability: balance + focus.
    pub fn defensive_capability(&self) -> i32 {
        (self.balance + self.focus) as i32
    }
}

/// A rikishi entering a bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantProfile {
    /// Identifier echoed back to collaborators (usually the shikona).
    pub id: String,
    /// Attributes and ability.
    #[serde(flatten)]
    pub attributes: AttributeSet,
}

impl CombatantProfile {
    /// Create a profile.
    pub fn new(id: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    /// Validate the attribute set, naming the profile in the error.
    pub fn validate(&self) -> EngineResult<()> {
        self.attributes.validate().map_err(|e| match e {
            EngineError::InvalidProfile(msg) => {
                EngineError::InvalidProfile(format!("'{}': {msg}", self.id))
            }
            other => other,
        })
    }
}

/// Which side of the dohyo a rikishi starts on. A label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The east side.
    East,
    /// The west side.
    West,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::East => write!(f, "east"),
            Self::West => write!(f, "west"),
        }
    }
}
