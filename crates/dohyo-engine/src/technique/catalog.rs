//! The closed kimarite catalog and its lookup tables.

use serde::{Deserialize, Serialize};

/// A finishing technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    /// Frontal force out.
    Yorikiri,
    /// Frontal push out.
    Oshidashi,
    /// Slap down.
    Hatakikomi,
    /// Overarm throw.
    Uwatenage,
    /// Underarm throw.
    Shitatenage,
    /// Thrusting attack.
    Tsuppari,
    /// Armlock throw.
    Kotenage,
    /// Frontal crush out.
    YoriTaoshi,
    /// Frontal push down.
    Oshitaoshi,
    /// Hand pull down.
    Hikiotoshi,
    /// Pulling overarm throw.
    Uwatedashinage,
    /// Pulling underarm throw.
    Shitatedashinage,
    /// Thrust down.
    Tsukiotoshi,
    /// Beltless arm throw.
    Sukuinage,
    /// Arm bar throw.
    Tottari,
    /// Inside ankle sweep.
    Ketaguri,
    /// Backward pivot throw at the edge.
    Utchari,
    /// Under-shoulder swing down.
    Katasukashi,
    /// Single-arm shoulder throw.
    Ipponzeoi,
    /// Reverse backward body drop.
    Tasukizori,
    /// Backward body drop.
    Izori,
    /// Hooking backward body drop.
    Kakezori,
    /// Backward body drop along the arm.
    Tsutaezori,
    /// Loser's hand touches down.
    Tsukite,
    /// Loser steps out too eagerly.
    Isamiashi,
    /// Loser collapses without contact.
    Koshikudake,
    /// Loser's knee touches down.
    Tsukihiza,
    /// Loser steps out backward.
    Fumidashi,
}

/// How often a technique is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    /// One of the eighteen ordinary techniques.
    Ordinary,
    /// Forced by the winner's critical success.
    Rare,
    /// Forced by the loser's critical failure.
    SelfDefeat,
}

impl Technique {
    /// The eighteen ordinary techniques.
    pub const ORDINARY: [Self; 18] = [
        Self::Yorikiri,
        Self::Oshidashi,
        Self::Hatakikomi,
        Self::Uwatenage,
        Self::Shitatenage,
        Self::Tsuppari,
        Self::Kotenage,
        Self::YoriTaoshi,
        Self::Oshitaoshi,
        Self::Hikiotoshi,
        Self::Uwatedashinage,
        Self::Shitatedashinage,
        Self::Tsukiotoshi,
        Self::Sukuinage,
        Self::Tottari,
        Self::Ketaguri,
        Self::Utchari,
        Self::Katasukashi,
    ];

    /// The two most common techniques.
    pub const COMMONEST: [Self; 2] = [Self::Yorikiri, Self::Oshidashi];

    /// Rarity class of this technique.
    pub fn rarity(self) -> Rarity {
        match self {
            Self::Ipponzeoi
            | Self::Tasukizori
            | Self::Izori
            | Self::Kakezori
            | Self::Tsutaezori => Rarity::Rare,
            Self::Tsukite
            | Self::Isamiashi
            | Self::Koshikudake
            | Self::Tsukihiza
            | Self::Fumidashi => Rarity::SelfDefeat,
            _ => Rarity::Ordinary,
        }
    }

    /// Whether this is one of the two most common techniques.
    pub fn is_commonest(self) -> bool {
        Self::COMMONEST.contains(&self)
    }

    /// The kimarite name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Yorikiri => "yorikiri",
            Self::Oshidashi => "oshidashi",
            Self::Hatakikomi => "hatakikomi",
            Self::Uwatenage => "uwatenage",
            Self::Shitatenage => "shitatenage",
            Self::Tsuppari => "tsuppari",
            Self::Kotenage => "kotenage",
            Self::YoriTaoshi => "yori-taoshi",
            Self::Oshitaoshi => "oshitaoshi",
            Self::Hikiotoshi => "hikiotoshi",
            Self::Uwatedashinage => "uwatedashinage",
            Self::Shitatedashinage => "shitatedashinage",
            Self::Tsukiotoshi => "tsukiotoshi",
            Self::Sukuinage => "sukuinage",
            Self::Tottari => "tottari",
            Self::Ketaguri => "ketaguri",
            Self::Utchari => "utchari",
            Self::Katasukashi => "katasukashi",
            Self::Ipponzeoi => "ipponzeoi",
            Self::Tasukizori => "tasukizori",
            Self::Izori => "izori",
            Self::Kakezori => "kakezori",
            Self::Tsutaezori => "tsutaezori",
            Self::Tsukite => "tsukite",
            Self::Isamiashi => "isamiashi",
            Self::Koshikudake => "koshikudake",
            Self::Tsukihiza => "tsukihiza",
            Self::Fumidashi => "fumidashi",
        }
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A group of related ordinary techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Belt-driven force outs.
    ForceOut,
    /// Pushing and thrusting.
    PushOut,
    /// Pulls and slap downs.
    PullDown,
    /// Belt throws.
    Throwing,
    /// Pulling throws and evasions.
    DragThrow,
    /// Counter attacks at the edge.
    Counter,
}

impl Family {
    /// Members indexed by margin: narrow, clear, dominant.
    pub fn members(self) -> [Technique; 3] {
        use Technique as T;
        match self {
            Self::ForceOut => [T::Sukuinage, T::Yorikiri, T::YoriTaoshi],
            Self::PushOut => [T::Tsuppari, T::Oshidashi, T::Oshitaoshi],
            Self::PullDown => [T::Hatakikomi, T::Hikiotoshi, T::Tsukiotoshi],
            Self::Throwing => [T::Kotenage, T::Shitatenage, T::Uwatenage],
            Self::DragThrow => [T::Katasukashi, T::Shitatedashinage, T::Uwatedashinage],
            Self::Counter => [T::Utchari, T::Tottari, T::Ketaguri],
        }
    }
}

/// Family by `MATCHUP[winner strongest][loser weakest]`.
///
/// Rows and columns follow [`crate::profile::Attribute::ALL`]:
/// power, technique, balance, stamina, focus.
pub(crate) const MATCHUP: [[Family; 5]; 5] = {
    use Family::*;
    [
        // loser: power     technique  balance   stamina   focus
        [PushOut, PushOut, ForceOut, ForceOut, PushOut],         // power
        [Throwing, DragThrow, PullDown, Throwing, PullDown],     // technique
        [ForceOut, Counter, ForceOut, ForceOut, Counter],        // balance
        [ForceOut, PushOut, ForceOut, ForceOut, PushOut],        // stamina
        [DragThrow, Counter, PullDown, PushOut, Throwing],       // focus
    ]
};

/// Rare technique by the winner's strongest attribute.
pub(crate) const RARE: [Technique; 5] = [
    Technique::Ipponzeoi,
    Technique::Tasukizori,
    Technique::Izori,
    Technique::Kakezori,
    Technique::Tsutaezori,
];

/// Self-defeat by the loser's weakest attribute.
pub(crate) const SELF_DEFEAT: [Technique; 5] = [
    Technique::Tsukite,
    Technique::Isamiashi,
    Technique::Koshikudake,
    Technique::Tsukihiza,
    Technique::Fumidashi,
];
