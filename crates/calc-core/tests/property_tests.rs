//! Property-based tests for the engine, evaluator and session.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences and expressions.

use calc_core::buttons::{ButtonKind, Operator, BUTTONS};
use calc_core::eval::{evaluate, evaluate_display, ERROR_SENTINEL};
use calc_core::{Calculator, Engine, MemoryStore, MAX_ENTRIES};
use proptest::prelude::*;

prop_compose! {
    fn digit_or_symbol()(index in 0..BUTTONS.len()) -> Option<&'static str> {
        let button = &BUTTONS[index];
        (button.kind == ButtonKind::DigitOrSymbol).then_some(button.label)
    }
}

prop_compose! {
    fn any_button()(index in 0..BUTTONS.len()) -> usize {
        index
    }
}

fn ends_with_two_operators(text: &str) -> bool {
    let mut tail = text.chars().rev();
    let last = tail.next().and_then(Operator::from_symbol);
    let before = tail.next().and_then(Operator::from_symbol);
    last.is_some() && before.is_some()
}

proptest! {
    #[test]
    fn appends_accumulate_exactly(labels in prop::collection::vec(digit_or_symbol(), 0..40)) {
        let mut engine = Engine::new();
        let mut expected = String::new();
        for label in labels.into_iter().flatten() {
            engine.append_digit_or_symbol(label);
            expected.push_str(label);
        }
        prop_assert_eq!(engine.as_str(), expected.as_str());
    }

    #[test]
    fn key_sequences_keep_invariants(keys in prop::collection::vec(any_button(), 0..120)) {
        let mut calc = Calculator::new(MemoryStore::new());
        for index in keys {
            calc.press(&BUTTONS[index]);
            prop_assert!(!ends_with_two_operators(calc.expression()));
            prop_assert!(calc.history().len() <= MAX_ENTRIES);
            prop_assert!(!calc.display().is_empty());
        }
    }

    #[test]
    fn integer_sums_are_exact(a in -1_000_000i64..1_000_000, b in 0i64..1_000_000) {
        let result = evaluate_display(&format!("{}+{}", a, b));
        prop_assert_eq!(result, (a + b).to_string());
    }

    #[test]
    fn results_reevaluate_to_themselves(a in 0u32..100_000, b in 1u32..1_000) {
        let first = evaluate_display(&format!("{}÷{}", a, b));
        prop_assert_ne!(first.as_str(), ERROR_SENTINEL);
        let second = evaluate_display(&first);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,64}") {
        let _ = evaluate(&text);
    }

    #[test]
    fn letters_always_fail(prefix in "[0-9+*/().-]{0,10}", word in "[a-zA-Z]{1,8}", suffix in "[0-9+*/().-]{0,10}") {
        let text = format!("{}{}{}", prefix, word, suffix);
        prop_assert_eq!(evaluate_display(&text), ERROR_SENTINEL);
    }
}
