use cat_regression::{seeded_hunt_trace, DEFAULT_SEED};

#[test]
fn seeded_hunts_are_deterministic() {
    let baseline = seeded_hunt_trace(DEFAULT_SEED).unwrap();
    let repeat = seeded_hunt_trace(DEFAULT_SEED).unwrap();
    assert_eq!(baseline, repeat, "same seed should match");

    let different = seeded_hunt_trace(7).unwrap();
    assert_ne!(baseline["rounds"], different["rounds"], "different seeds should diverge");
}

#[test]
fn seeded_rolls_stay_in_range() {
    for seed in [1, 2, 3, DEFAULT_SEED] {
        let trace = seeded_hunt_trace(seed).unwrap();
        for round in trace["rounds"].as_array().into_iter().flatten() {
            let report = &round["report"];
            if report["hunt"] == "attempted" {
                let roll = report["roll"].as_i64().unwrap_or_default();
                let score = report["success_score"].as_i64().unwrap_or_default();
                assert!((1..=100).contains(&roll), "roll {roll}");
                assert!((5..=50).contains(&score), "score {score}");
            }
        }
    }
}
