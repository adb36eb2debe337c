//! User action scenarios.

use dithergen_core::{apply_action, GenerationParameters, PatternKind, UserAction};
use pretty_assertions::assert_eq;

#[test]
fn test_next_pattern_cycle_length_is_ten() {
    for start in PatternKind::ALL {
        let mut params = GenerationParameters::new(42);
        params.pattern_kind = start;

        let mut seen = Vec::new();
        for _ in 0..10 {
            apply_action(&mut params, UserAction::NextPattern);
            seen.push(params.pattern_kind);
        }
        assert_eq!(params.pattern_kind, start);

        seen.sort_by_key(|k| k.index());
        assert_eq!(seen, PatternKind::ALL.to_vec());
    }
}

#[test]
fn test_prev_pattern_undoes_next() {
    let mut params = GenerationParameters::new(42);
    apply_action(&mut params, UserAction::PrevPattern);
    assert_eq!(params.pattern_kind, PatternKind::Spiral);
    apply_action(&mut params, UserAction::NextPattern);
    assert_eq!(params.pattern_kind, PatternKind::Horizontal);
}

#[test]
fn test_increase_frequency_clamps_at_four() {
    let mut params = GenerationParameters::new(42);
    assert_eq!(params.frequency, 1.0);
    for _ in 0..50 {
        apply_action(&mut params, UserAction::IncreaseFrequency);
        assert!(params.frequency <= 4.0, "frequency {}", params.frequency);
    }
    assert_eq!(params.frequency, 4.0);
}

#[test]
fn test_decrease_frequency_clamps_at_tenth() {
    let mut params = GenerationParameters::new(42);
    for _ in 0..50 {
        apply_action(&mut params, UserAction::DecreaseFrequency);
        assert!(params.frequency >= 0.1, "frequency {}", params.frequency);
    }
    assert_eq!(params.frequency, 0.1);
}

#[test]
fn test_reseed_is_deterministic() {
    let mut a = GenerationParameters::new(1);
    let mut b = GenerationParameters::new(2);
    apply_action(&mut a, UserAction::Reseed(987_654));
    apply_action(&mut b, UserAction::Reseed(987_654));
    assert_eq!(a.seed, b.seed);
    assert_eq!(a.pattern_kind, b.pattern_kind);
    assert_eq!(a.frequency, b.frequency);
    assert_eq!(a.pattern_kind, PatternKind::from_index(987_654));
    assert!((0.5..2.5).contains(&a.frequency));
}

#[test]
fn test_actions_deserialize_from_json() {
    let actions: Vec<UserAction> =
        serde_json::from_str(r#"["next_pattern", "decrease_frequency", {"reseed": 5}]"#).unwrap();
    assert_eq!(
        actions,
        vec![
            UserAction::NextPattern,
            UserAction::DecreaseFrequency,
            UserAction::Reseed(5)
        ]
    );
}
