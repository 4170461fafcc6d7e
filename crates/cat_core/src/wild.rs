//! Wild cats: growling, resting and hunting.

use tracing::{debug, info};

use crate::cat::{Cat, Feline};
use crate::hunt::{
    exhausted_line, rest_line, HuntAttempt, HuntOutcome, HuntReport, PreySize, BASE_SUCCESS,
    ESCAPE_ENERGY_COST, MIN_SUCCESS, SIZE_PENALTY, STARVING_PENALTY, TIRED_PENALTY,
};
use crate::rng::Dice;
use crate::vitals::{MAX_LEVEL, MIN_LEVEL};
use crate::voice::Voice;

pub const REST_GAIN_MIN: i32 = 30;
pub const REST_GAIN_MAX: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildCat {
    cat: Cat,
}

enum Readiness {
    Ready,
    Exhausted,
    NotHungry,
}

impl WildCat {
    pub fn new(cat: Cat) -> Self {
        Self { cat }
    }

    /// Adds 30..=50 energy.
    ///
    /// Known quirk: unlike feed/play/sleep the result is not capped at 100.
    pub fn rest(&mut self, dice: &mut impl Dice) -> i32 {
        let gained = dice.next_int(REST_GAIN_MIN, REST_GAIN_MAX);
        self.cat.vitals_mut().shift_energy(gained);
        info!(target: "cat", "{}", rest_line(self.cat.name(), gained));
        self.cat.log_levels("rest");
        gained
    }

    pub fn hunt(&mut self, dice: &mut impl Dice) -> HuntReport {
        let report = match self.readiness() {
            Readiness::Exhausted => {
                info!(target: "cat", "{}", exhausted_line(self.cat.name()));
                HuntReport::Exhausted {
                    rested: self.rest(dice),
                }
            }
            Readiness::NotHungry => HuntReport::NotHungry,
            Readiness::Ready => {
                let prey = self.size_prey();
                let score = self.success_score(prey);
                HuntReport::Attempted(self.resolve(prey, score, dice))
            }
        };

        // the exhausted branch logs as it goes
        if !matches!(report, HuntReport::Exhausted { .. }) {
            for line in report.narrate(self.cat.name()) {
                info!(target: "cat", "{line}");
            }
        }
        report
    }

    fn readiness(&self) -> Readiness {
        if self.cat.hunger() == MAX_LEVEL && self.cat.energy() == MIN_LEVEL {
            Readiness::Exhausted
        } else if self.cat.hunger() == MIN_LEVEL {
            Readiness::NotHungry
        } else {
            Readiness::Ready
        }
    }

    fn size_prey(&self) -> PreySize {
        PreySize::assess(self.cat.energy(), self.cat.hunger())
    }

    fn success_score(&self, prey: PreySize) -> i32 {
        let mut score = BASE_SUCCESS;
        if prey != PreySize::Medium {
            score -= SIZE_PENALTY;
        }
        if self.cat.energy() <= 30 {
            score -= TIRED_PENALTY;
        }
        if self.cat.hunger() >= 80 {
            score -= STARVING_PENALTY;
        }
        score.max(MIN_SUCCESS)
    }

    /// Rolls against `score` and applies the reward or the penalty.
    ///
    /// Known quirk: neither branch clamps energy or hunger.
    fn resolve(&mut self, prey: PreySize, score: i32, dice: &mut impl Dice) -> HuntAttempt {
        let roll = dice.next_int(1, 100);
        debug!(target: "cat.hunt", %prey, score, roll, "hunt roll");

        let outcome = if roll <= score {
            let gain = prey.energy_gain();
            let relief = prey.hunger_relief();
            let energy_gain = dice.next_int(*gain.start(), *gain.end());
            let hunger_relief = dice.next_int(*relief.start(), *relief.end());
            HuntOutcome::Caught {
                energy_gain,
                hunger_relief,
            }
        } else {
            HuntOutcome::Escaped {
                energy_cost: ESCAPE_ENERGY_COST,
            }
        };
        self.apply(outcome);

        HuntAttempt {
            prey,
            success_score: score,
            roll,
            outcome,
        }
    }

    fn apply(&mut self, outcome: HuntOutcome) {
        let vitals = self.cat.vitals_mut();
        match outcome {
            HuntOutcome::Caught {
                energy_gain,
                hunger_relief,
            } => {
                vitals.shift_energy(energy_gain);
                vitals.shift_hunger(-hunger_relief);
            }
            HuntOutcome::Escaped { energy_cost } => vitals.shift_energy(-energy_cost),
        }
        self.cat.log_levels("hunt");
    }
}

impl Feline for WildCat {
    fn cat(&self) -> &Cat {
        &self.cat
    }

    fn cat_mut(&mut self) -> &mut Cat {
        &mut self.cat
    }

    fn voice(&self) -> Voice {
        Voice::Growl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedDice;
    use crate::test_support::capture_logs;

    fn wild(energy: i32, hunger: i32) -> WildCat {
        WildCat::new(Cat::new("Shere", 4, "Orange").with_vitals(energy, hunger))
    }

    fn levels(cat: &WildCat) -> (i32, i32) {
        (cat.cat().energy(), cat.cat().hunger())
    }

    #[test]
    fn growls_by_hunger_tier() {
        let expected = [
            (19, "Rrrrr... 🐆"),
            (20, "Grrr! 🐆"),
            (49, "Grrr! 🐆"),
            (50, "GRRRRR... 🐅"),
            (79, "GRRRRR... 🐅"),
            (80, "ROOOOAAAR!! 🐅"),
        ];
        for (hunger, sound) in expected {
            assert_eq!(sound, wild(100, hunger).vocalize().to_string());
        }
    }

    #[test]
    fn rest_draws_from_rest_range() {
        let mut cat = wild(40, 30);
        let mut dice = ScriptedDice::fixed(35);
        assert_eq!(35, cat.rest(&mut dice));
        assert_eq!((75, 30), levels(&cat));
        assert_eq!(&[(30, 50)], dice.requests());
    }

    #[test]
    fn rest_is_not_capped() {
        let mut cat = wild(90, 30);
        cat.rest(&mut ScriptedDice::fixed(50));
        assert_eq!(140, cat.cat().energy());
    }

    #[test]
    fn readiness_checks() {
        assert!(matches!(wild(0, 100).readiness(), Readiness::Exhausted));
        assert!(matches!(wild(50, 0).readiness(), Readiness::NotHungry));
        assert!(matches!(wild(0, 0).readiness(), Readiness::NotHungry));
        assert!(matches!(wild(1, 100).readiness(), Readiness::Ready));
    }

    #[test]
    fn exhausted_cat_rests_instead_of_hunting() {
        let mut cat = wild(0, 100);
        let mut dice = ScriptedDice::fixed(40);
        let report = cat.hunt(&mut dice);
        assert_eq!(HuntReport::Exhausted { rested: 40 }, report);
        assert_eq!((40, 100), levels(&cat));
        assert_eq!(&[(30, 50)], dice.requests());
    }

    #[test]
    fn sated_cat_skips_the_hunt() {
        let mut cat = wild(70, 0);
        let mut dice = ScriptedDice::default();
        assert_eq!(HuntReport::NotHungry, cat.hunt(&mut dice));
        assert_eq!((70, 0), levels(&cat));
        assert!(dice.requests().is_empty());
    }

    #[test]
    fn success_score_deductions() {
        assert_eq!(50, wild(50, 50).success_score(PreySize::Medium));
        assert_eq!(40, wild(50, 50).success_score(PreySize::Large));
        assert_eq!(40, wild(50, 50).success_score(PreySize::Small));
        assert_eq!(40, wild(30, 50).success_score(PreySize::Medium));
        assert_eq!(40, wild(50, 80).success_score(PreySize::Medium));
        assert_eq!(20, wild(10, 90).success_score(PreySize::Small));
    }

    #[test]
    fn sizing_uses_current_levels() {
        assert_eq!(PreySize::Large, wild(100, 20).size_prey());
        assert_eq!(PreySize::Medium, wild(50, 50).size_prey());
        assert_eq!(PreySize::Small, wild(20, 90).size_prey());
    }

    #[test]
    fn guaranteed_medium_catch() {
        let mut cat = wild(50, 50);
        let mut dice = ScriptedDice::fixed(30);
        let attempt = cat.resolve(PreySize::Medium, 100, &mut dice);
        assert_eq!(
            HuntOutcome::Caught {
                energy_gain: 30,
                hunger_relief: 30
            },
            attempt.outcome
        );
        assert_eq!((80, 20), levels(&cat));
        assert_eq!(&[(1, 100), (10, 30), (20, 40)], dice.requests());
    }

    #[test]
    fn reward_ranges_follow_prey_size() {
        let mut dice = ScriptedDice::fixed(1);
        wild(50, 50).resolve(PreySize::Large, 50, &mut dice);
        wild(50, 50).resolve(PreySize::Small, 50, &mut dice);
        assert_eq!(
            &[(1, 100), (20, 40), (30, 50), (1, 100), (5, 20), (10, 30)],
            dice.requests()
        );
    }

    #[test]
    fn roll_equal_to_score_succeeds() {
        let mut cat = wild(50, 50);
        let mut dice = ScriptedDice::new([50, 10, 20]);
        let attempt = cat.resolve(PreySize::Medium, 50, &mut dice);
        assert!(matches!(attempt.outcome, HuntOutcome::Caught { .. }));
        assert_eq!((60, 30), levels(&cat));
    }

    #[test]
    fn escape_costs_energy_only() {
        let mut cat = wild(50, 50);
        let mut dice = ScriptedDice::fixed(51);
        let attempt = cat.resolve(PreySize::Medium, 50, &mut dice);
        assert_eq!(HuntOutcome::Escaped { energy_cost: 10 }, attempt.outcome);
        assert_eq!((40, 50), levels(&cat));
        assert_eq!(&[(1, 100)], dice.requests());
    }

    #[test]
    fn hunt_results_are_not_clamped() {
        let mut tired = wild(5, 60);
        tired.resolve(PreySize::Small, 5, &mut ScriptedDice::fixed(100));
        assert_eq!(-5, tired.cat().energy());

        let mut strong = wild(95, 25);
        strong.resolve(PreySize::Large, 100, &mut ScriptedDice::new([1, 40, 50]));
        assert_eq!((135, -25), levels(&strong));
    }

    #[test]
    fn full_hunt_pipeline() {
        let mut cat = wild(50, 50);
        let mut dice = ScriptedDice::new([30, 30, 30]);
        let report = cat.hunt(&mut dice);
        assert_eq!(
            HuntReport::Attempted(HuntAttempt {
                prey: PreySize::Medium,
                success_score: 50,
                roll: 30,
                outcome: HuntOutcome::Caught {
                    energy_gain: 30,
                    hunger_relief: 30
                },
            }),
            report
        );
        assert_eq!((80, 20), levels(&cat));
    }

    #[test]
    fn exhausted_hunt_logs_exhaustion_then_rest() {
        let mut cat = wild(0, 100);
        let logs = capture_logs(|| {
            cat.hunt(&mut ScriptedDice::fixed(40));
        });
        let exhausted = logs.find("Shere is too exhausted to hunt");
        let rested = logs.find("Shere is resting to regain energy (+40)");
        assert!(exhausted.is_some(), "missing exhaustion line in {logs:?}");
        assert!(rested.is_some(), "missing rest line in {logs:?}");
        assert!(exhausted < rested);
    }

    #[test]
    fn sated_hunt_logs_reason() {
        let mut cat = wild(70, 0);
        let logs = capture_logs(|| {
            cat.hunt(&mut ScriptedDice::default());
        });
        assert!(logs.contains("Shere is not hungry and has no reason to hunt."));
        assert!(!logs.contains("stalking"));
    }

    #[test]
    fn attempted_hunts_log_prey_and_result() {
        let mut hunter = wild(50, 50);
        let caught = capture_logs(|| {
            hunter.hunt(&mut ScriptedDice::fixed(30));
        });
        assert!(caught.contains("Shere is stalking medium prey..."));
        assert!(caught.contains("Shere caught the medium prey!"));

        let mut weak = wild(20, 90);
        let missed = capture_logs(|| {
            weak.hunt(&mut ScriptedDice::fixed(100));
        });
        assert!(missed.contains("Shere is stalking small prey..."));
        assert!(missed.contains("The small prey got away from Shere."));
    }

    #[test]
    fn rest_and_growl_are_logged() {
        let mut cat = wild(20, 85);
        let logs = capture_logs(|| {
            cat.vocalize();
            cat.rest(&mut ScriptedDice::fixed(33));
        });
        assert!(logs.contains("ROOOOAAAR!!"));
        assert!(logs.contains("Shere is resting to regain energy (+33)."));
    }
}
