use kaprekar_core::{
    explore, validate, Candidate, Outcome, DEFAULT_MAX_STEPS, KAPREKAR_CONSTANT,
};

#[test]
fn three_five_two_four_reproduces_known_chain() {
    let start = validate("3524").expect("valid");
    let exploration = explore(start, DEFAULT_MAX_STEPS);
    assert_eq!(exploration.sequence, vec![3524, 3087, 8352, 6174]);
    assert_eq!(exploration.outcome, Outcome::Converged);
    assert_eq!(exploration.steps(), 3);
}

#[test]
fn one_two_three_four_converges_in_three_steps() {
    let start = validate("1234").expect("valid");
    let exploration = explore(start, DEFAULT_MAX_STEPS);
    assert_eq!(exploration.sequence, vec![1234, 3087, 8352, 6174]);
    assert!(exploration.reached_constant());
}

#[test]
fn every_candidate_converges_within_seven_steps() {
    let mut longest = 0;
    for candidate in Candidate::all() {
        let exploration = explore(candidate, DEFAULT_MAX_STEPS);
        assert_eq!(exploration.outcome, Outcome::Converged, "{candidate}");
        assert_eq!(exploration.final_number(), KAPREKAR_CONSTANT);
        assert_eq!(exploration.start, candidate.value());
        longest = longest.max(exploration.steps());
    }
    assert_eq!(longest, 7);
}

#[test]
fn exploration_json_carries_sequence_and_outcome() {
    let exploration = explore(validate("6174").expect("valid"), DEFAULT_MAX_STEPS);
    let value = serde_json::to_value(&exploration).expect("serialize");
    assert_eq!(value["start"], 6174);
    assert_eq!(value["sequence"], serde_json::json!([6174]));
    assert_eq!(value["outcome"], "converged");
}
