//! Kimarite selection.
//!
//! The winner's strongest attribute and the loser's weakest attribute pick
//! a technique family from a fixed matchup table; the margin picks the
//! member. Critical draws override the table:
//! - winner critical success: a rare technique keyed by the winner's strongest attribute
//! - loser critical failure: a self-defeat keyed by the loser's weakest attribute
//!
//! The winner's critical takes precedence when both are set.

pub mod catalog;

pub use catalog::{Family, Rarity, Technique};

use crate::error::{EngineError, EngineResult};
use crate::outcome::{CriticalFlags, MarginClass};
use crate::profile::AttributeSet;

use catalog::{MATCHUP, RARE, SELF_DEFEAT};

/// Select the finishing technique.
pub fn select_technique(
    winner: &AttributeSet,
    loser: &AttributeSet,
    critical: CriticalFlags,
    margin: MarginClass,
) -> EngineResult<Technique> {
    let winner_top = winner.highest();
    let loser_weakest = loser.lowest();
    let missing = EngineError::NoApplicableTechnique {
        winner_top,
        loser_weakest,
    };

    let technique = if critical.winner_critical {
        RARE.get(winner_top.index()).copied()
    } else if critical.loser_critical {
        SELF_DEFEAT.get(loser_weakest.index()).copied()
    } else {
        MATCHUP
            .get(winner_top.index())
            .and_then(|row| row.get(loser_weakest.index()))
            .and_then(|family| family.members().get(margin.index()).copied())
    }
    .ok_or(missing)?;

    tracing::debug!(%winner_top, %loser_weakest, %technique, "technique selected");
    Ok(technique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests::stats;

    const NONE: CriticalFlags = CriticalFlags {
        winner_critical: false,
        loser_critical: false,
    };

    fn pick(
        winner: [u32; 5],
        loser: [u32; 5],
        critical: CriticalFlags,
        margin: MarginClass,
    ) -> Technique {
        select_technique(&stats(winner), &stats(loser), critical, margin).unwrap()
    }

    #[test]
    fn power_against_balance_forces_out() {
        let t = pick([18, 5, 5, 5, 5], [9, 9, 3, 9, 9], NONE, MarginClass::Clear);
        assert_eq!(t, Technique::Yorikiri);
        assert_eq!(
            pick([18, 5, 5, 5, 5], [9, 9, 3, 9, 9], NONE, MarginClass::Dominant),
            Technique::YoriTaoshi
        );
    }

    #[test]
    fn technique_against_balance_pulls_down() {
        let t = pick([5, 18, 5, 5, 5], [9, 9, 3, 9, 9], NONE, MarginClass::Narrow);
        assert_eq!(t, Technique::Hatakikomi);
    }

    #[test]
    fn technique_against_power_throws() {
        let t = pick([5, 18, 5, 5, 5], [3, 9, 9, 9, 9], NONE, MarginClass::Dominant);
        assert_eq!(t, Technique::Uwatenage);
    }

    #[test]
    fn balance_against_technique_counters() {
        let t = pick([5, 5, 18, 5, 5], [9, 3, 9, 9, 9], NONE, MarginClass::Narrow);
        assert_eq!(t, Technique::Utchari);
    }

    #[test]
    fn tied_top_attributes_follow_priority() {
        // Technique and balance tie at 15; technique ranks first.
        let t = pick([5, 15, 15, 5, 5], [3, 9, 9, 9, 9], NONE, MarginClass::Clear);
        assert_eq!(t, Technique::Shitatenage);
    }

    #[test]
    fn winner_critical_forces_rare() {
        let critical = CriticalFlags {
            winner_critical: true,
            loser_critical: false,
        };
        let t = pick([18, 5, 5, 5, 5], [9, 9, 3, 9, 9], critical, MarginClass::Clear);
        assert_eq!(t, Technique::Ipponzeoi);
        assert_eq!(t.rarity(), Rarity::Rare);
    }

    #[test]
    fn loser_critical_forces_self_defeat() {
        let critical = CriticalFlags {
            winner_critical: false,
            loser_critical: true,
        };
        let t = pick([18, 5, 5, 5, 5], [9, 9, 9, 9, 2], critical, MarginClass::Clear);
        assert_eq!(t, Technique::Fumidashi);
        assert_eq!(t.rarity(), Rarity::SelfDefeat);
    }

    #[test]
    fn winner_critical_wins_over_loser_critical() {
        let critical = CriticalFlags {
            winner_critical: true,
            loser_critical: true,
        };
        let t = pick([5, 5, 5, 5, 18], [9, 9, 9, 9, 2], critical, MarginClass::Narrow);
        assert_eq!(t, Technique::Tsutaezori);
    }

    #[test]
    fn table_is_total() {
        use crate::profile::Attribute;
        for top in Attribute::ALL {
            for weak in Attribute::ALL {
                let mut winner = [1; 5];
                winner[top.index()] = 20;
                let mut loser = [20; 5];
                loser[weak.index()] = 1;
                for margin in [MarginClass::Narrow, MarginClass::Clear, MarginClass::Dominant] {
                    let t = pick(winner, loser, NONE, margin);
                    assert_eq!(t.rarity(), Rarity::Ordinary);
                }
            }
        }
    }
}
