//! Property-based tests for the currency automaton and generator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly seeded walks and random choice scripts.

use currency_dfa::core::State;
use currency_dfa::currency::{currency_dfa, CurrencyState};
use currency_dfa::generator::{
    collect_samples, is_well_formed, RandomWalker, RngChoices, SampleConfig, ScriptedChoices,
};
use proptest::prelude::*;

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

prop_compose! {
    fn arbitrary_state()(index in 0..10usize) -> CurrencyState {
        CurrencyState::all()[index]
    }
}

prop_compose! {
    fn arbitrary_script()(
        coins in prop::collection::vec(any::<bool>(), 0..20),
        digits in prop::collection::vec(0..10u8, 0..20),
    ) -> ScriptedChoices {
        ScriptedChoices::new(coins, digits)
    }
}

proptest! {
    #[test]
    fn outputs_are_dollars_or_cents(seed in any::<u64>()) {
        let mut walker = RandomWalker::new(RngChoices::seeded(seed));
        let output = walker.generate(&currency_dfa());

        prop_assert!(!output.is_empty());
        prop_assert!(output.starts_with('$') || output.ends_with('c'));
    }

    #[test]
    fn dollar_fractions_have_two_digits(seed in any::<u64>()) {
        let mut walker = RandomWalker::new(RngChoices::seeded(seed));
        let output = walker.generate(&currency_dfa());

        if let Some((whole, fraction)) = output.split_once('.') {
            prop_assert!(whole.starts_with('$'));
            prop_assert_eq!(fraction.len(), 2);
            prop_assert!(fraction.chars().all(is_digit));
        }
    }

    #[test]
    fn cent_amounts_are_short(seed in any::<u64>()) {
        let mut walker = RandomWalker::new(RngChoices::seeded(seed));
        let output = walker.generate(&currency_dfa());

        if !output.starts_with('$') {
            let digits: Vec<char> = output.trim_end_matches('c').chars().collect();
            prop_assert!(output.len() == 2 || output.len() == 3);
            prop_assert!(output.ends_with('c'));
            prop_assert_eq!(digits.len(), output.len() - 1);
            prop_assert!(digits.iter().all(|c| is_digit(*c)));
            prop_assert!(digits[0] != '0');
        }
    }

    #[test]
    fn walks_follow_the_table(script in arbitrary_script()) {
        let dfa = currency_dfa();
        let mut walker = RandomWalker::new(script);
        let path = walker.walk(&dfa);

        prop_assert_eq!(path.get_path()[0], dfa.start());
        for step in path.steps() {
            match step.emitted {
                Some(ch) => {
                    let edge = dfa.transition_on(step.from, ch);
                    prop_assert_eq!(edge.map(|t| t.to), Some(step.to));
                }
                None => {
                    prop_assert_eq!((step.from, step.to), (CurrencyState::Q3, CurrencyState::Q6));
                }
            }
        }
        prop_assert!(path.final_state().is_some_and(|s| s.is_accepting()));
    }

    #[test]
    fn scripted_walks_are_well_formed(script in arbitrary_script()) {
        let mut walker = RandomWalker::new(script);
        let output = walker.generate(&currency_dfa());
        prop_assert!(is_well_formed(&output));
    }

    #[test]
    fn same_seed_same_samples(seed in any::<u64>()) {
        let dfa = currency_dfa();
        let config = SampleConfig::default();

        let mut a = RandomWalker::new(RngChoices::seeded(seed));
        let mut b = RandomWalker::new(RngChoices::seeded(seed));
        let first = collect_samples(&mut a, &dfa, &config);
        let second = collect_samples(&mut b, &dfa, &config);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn sampling_returns_exactly_the_count(seed in any::<u64>(), count in 0..30usize) {
        let config = SampleConfig { count, ..SampleConfig::default() };
        let mut walker = RandomWalker::new(RngChoices::seeded(seed));
        let samples = collect_samples(&mut walker, &currency_dfa(), &config).unwrap();

        prop_assert_eq!(samples.len(), count);
        prop_assert!(samples.iter().all(|s| is_well_formed(s)));
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.name());
        prop_assert_eq!(state.to_string(), state.name());
    }

    #[test]
    fn filter_matches_its_rules(candidate in "[$0-9c.]{0,6}") {
        let expected = if let Some(rest) = candidate.strip_prefix('$') {
            match rest.split('.').nth(1) {
                Some(fraction) => fraction.len() == 2,
                None => true,
            }
        } else {
            candidate.ends_with('c') && (candidate.len() == 2 || candidate.len() == 3)
        };
        prop_assert_eq!(is_well_formed(&candidate), expected);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CurrencyState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
