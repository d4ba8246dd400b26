//! Property tests over the whole resolution pipeline.

use dohyo_engine::{
    AttributeSet, CombatantProfile, EntropyStream, FortuneConfig, GapTier, Rarity,
    ResolutionEngine, ResolutionResult, Side, generate_fortune,
};
use proptest::prelude::*;

fn fortune_value() -> impl Strategy<Value = i32> {
    prop_oneof![8 => 0i32..=13, 1 => Just(20), 1 => Just(-5)]
}

fn fortune() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(fortune_value(), 5)
}

fn build([power, technique, balance, stamina, focus]: [u32; 5], headroom: u32) -> AttributeSet {
    let current = power + technique + balance + stamina + focus;
    AttributeSet {
        power,
        technique,
        balance,
        stamina,
        focus,
        current,
        potential: (current + headroom).min(100),
    }
}

/// Attributes drawn from `stat_lo..=stat_hi`; current ability is their total.
fn attributes(stat_lo: u32, stat_hi: u32) -> impl Strategy<Value = AttributeSet> {
    (prop::array::uniform5(stat_lo..=stat_hi), 0u32..=20)
        .prop_map(|(values, headroom)| build(values, headroom))
}

/// Attributes in `lo..=hi` summing to exactly `total`.
fn with_total(total: u32, lo: u32, hi: u32) -> impl Strategy<Value = AttributeSet> {
    prop::array::uniform4(lo..=hi).prop_filter_map("fifth attribute out of range", move |four| {
        let fifth = total.checked_sub(four.iter().sum::<u32>())?;
        (lo..=hi)
            .contains(&fifth)
            .then(|| build([four[0], four[1], four[2], four[3], fifth], 0))
    })
}

fn any_profile(id: &'static str) -> impl Strategy<Value = CombatantProfile> {
    attributes(1, 20).prop_map(move |attrs| CombatantProfile::new(id, attrs))
}

fn resolve(east: &CombatantProfile, west: &CombatantProfile, values: &[i32]) -> ResolutionResult {
    let mut stream = EntropyStream::new(values.to_vec()).unwrap();
    ResolutionEngine::new()
        .resolve(east, west, &mut stream)
        .unwrap()
}

proptest! {
    #[test]
    fn total_gap_ignores_fortune(
        east in attributes(15, 20),
        west in attributes(1, 1),
        values in fortune(),
        swap in any::<bool>(),
    ) {
        let strong = CombatantProfile::new("strong", east);
        let weak = CombatantProfile::new("weak", west);
        let (e, w, strong_side) = if swap {
            (&weak, &strong, Side::West)
        } else {
            (&strong, &weak, Side::East)
        };
        let result = resolve(e, w, &values);
        prop_assert_eq!(result.tier, GapTier::Total);
        prop_assert_eq!(result.winner, strong_side);
    }

    #[test]
    fn excitement_stays_in_range(
        east in any_profile("east"),
        west in any_profile("west"),
        values in fortune(),
    ) {
        let result = resolve(&east, &west, &values);
        let value = result.excitement.value();
        prop_assert!((2.0..=10.0).contains(&value), "excitement {value}");
        let tenths = f64::from(result.excitement.tenths());
        prop_assert!((value * 10.0 - tenths).abs() < 1e-9);
    }

    #[test]
    fn common_techniques_capped_without_momentum(
        east in any_profile("east"),
        west in any_profile("west"),
        values in fortune(),
    ) {
        let result = resolve(&east, &west, &values);
        if result.technique.is_commonest() && result.momentum_shifts < 3 {
            prop_assert!(result.excitement.tenths() <= 90);
        }
    }

    #[test]
    fn rewards_follow_the_formula(
        east in any_profile("east"),
        west in any_profile("west"),
        values in fortune(),
    ) {
        let result = resolve(&east, &west, &values);
        let tenths = result.excitement.tenths();
        let share = tenths / 5;
        let mut winner = 10 + share;
        if result.is_upset() {
            winner += 10;
        }
        if result.technique.rarity() != Rarity::Ordinary {
            winner += 5;
        }
        let loser = 5 + share + if tenths > 80 { 5 } else { 0 };
        prop_assert_eq!(result.reward(result.winner), winner);
        prop_assert_eq!(result.reward(result.loser), loser);
    }

    #[test]
    fn identical_inputs_identical_results(
        east in any_profile("east"),
        west in any_profile("west"),
        values in fortune(),
    ) {
        prop_assert_eq!(resolve(&east, &west, &values), resolve(&east, &west, &values));
    }

    #[test]
    fn clear_favorite_survives_one_bad_exchange(
        strong in with_total(90, 14, 20),
        weak in with_total(20, 1, 6),
        values in prop::collection::vec(0i32..=13, 5),
    ) {
        prop_assume!(!(values[0] >= 12 && values[1] >= 12));
        let east = CombatantProfile::new("ozeki", strong);
        let west = CombatantProfile::new("maegashira", weak);
        let result = resolve(&east, &west, &values);
        prop_assert_eq!(result.tier, GapTier::Clear);
        prop_assert_eq!(result.winner, Side::East);
    }

    #[test]
    fn wide_gap_favors_higher_ability(
        east in any_profile("east"),
        west in any_profile("west"),
        values in fortune(),
    ) {
        let result = resolve(&east, &west, &values);
        let (e, w) = (east.attributes.current, west.attributes.current);
        if result.tier >= GapTier::Clear {
            let stronger = if e > w { Side::East } else { Side::West };
            prop_assert_eq!(result.favorite, stronger);
        }
    }

    #[test]
    fn generated_fortune_is_legal_and_repeatable(seed in any::<u64>(), count in 5usize..40) {
        let config = FortuneConfig::default().with_seed(seed).with_count(count);
        let first = generate_fortune(&config);
        let second = generate_fortune(&config);
        prop_assert_eq!(first.values(), second.values());
        prop_assert_eq!(first.values().len(), count);
        prop_assert!(EntropyStream::new(first.values().to_vec()).is_ok());
    }
}
