//! Strategy registry and dispatch.
//!
//! [`Scheduler`] holds a fixed, name-keyed set of allocation
//! strategies populated at construction and dispatches
//! [`generate_schedule`](Scheduler::generate_schedule) calls to the
//! matching one. The only condition raised here is
//! [`SchedulerError::UnknownStrategy`]; degenerate inputs are the
//! strategies' business and never fail.

use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

use crate::models::{ScheduleResult, Shift, Staff};
use crate::strategies::{
    DayNightDistributeStrategy, EvenDistributeStrategy, MinimizeDaysStrategy,
    PreferenceBasedStrategy, SchedulingStrategy, ShiftTypeOptimizeStrategy,
};

/// Errors raised by the dispatcher.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The requested strategy name is not registered. Carries the
    /// offending name and every valid name.
    #[error("unknown strategy '{requested}'; available strategies: {}", .available.join(", "))]
    UnknownStrategy {
        /// The name that failed to resolve.
        requested: String,
        /// All registered strategy names.
        available: Vec<String>,
    },
}

/// Name-keyed registry of allocation strategies.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shift_roster::models::{Shift, Staff};
/// use shift_roster::scheduler::Scheduler;
///
/// let staff = vec![Staff::new("alice"), Staff::new("bob")];
/// let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let shifts = vec![Shift::new(
///     "s1",
///     start.and_hms_opt(8, 0, 0).unwrap(),
///     start.and_hms_opt(16, 0, 0).unwrap(),
/// )];
///
/// let scheduler = Scheduler::new();
/// let result = scheduler
///     .generate_schedule("even_distribute", &staff, &shifts, start, start)
///     .unwrap();
/// assert_eq!(result.summary.total_shifts_assigned, 1);
/// ```
#[derive(Debug)]
pub struct Scheduler {
    strategies: Vec<Box<dyn SchedulingStrategy>>,
}

impl Scheduler {
    /// Creates a scheduler with the five built-in strategies.
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(EvenDistributeStrategy::new()),
                Box::new(MinimizeDaysStrategy::new()),
                Box::new(ShiftTypeOptimizeStrategy::new()),
                Box::new(PreferenceBasedStrategy::new()),
                Box::new(DayNightDistributeStrategy::new()),
            ],
        }
    }

    /// Creates a scheduler whose randomized strategies use the given
    /// seed, for reproducible tie-breaking.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            strategies: vec![
                Box::new(EvenDistributeStrategy::with_seed(seed)),
                Box::new(MinimizeDaysStrategy::new()),
                Box::new(ShiftTypeOptimizeStrategy::new()),
                Box::new(PreferenceBasedStrategy::new()),
                Box::new(DayNightDistributeStrategy::with_seed(seed)),
            ],
        }
    }

    /// Dispatches to the named strategy.
    ///
    /// # Errors
    /// [`SchedulerError::UnknownStrategy`] when the name is not
    /// registered. Empty staff or shift lists are not errors.
    pub fn generate_schedule(
        &self,
        strategy_name: &str,
        staff: &[Staff],
        shifts: &[Shift],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<ScheduleResult, SchedulerError> {
        let strategy = self
            .strategies
            .iter()
            .find(|s| s.name() == strategy_name)
            .ok_or_else(|| SchedulerError::UnknownStrategy {
                requested: strategy_name.to_string(),
                available: self
                    .available_strategies()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            })?;

        debug!("dispatching to strategy '{strategy_name}'");
        Ok(strategy.allocate(staff, shifts, start_date, end_date))
    }

    /// Registered strategy names. Order is not significant.
    pub fn available_strategies(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrategyScore;
    use std::collections::BTreeSet;

    fn window() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        )
    }

    fn sample_shifts() -> Vec<Shift> {
        (4..7)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
                Shift::new(
                    format!("s{d}"),
                    date.and_hms_opt(8, 0, 0).unwrap(),
                    date.and_hms_opt(16, 0, 0).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_all_five_strategies_registered() {
        let scheduler = Scheduler::new();
        let names: BTreeSet<&str> = scheduler.available_strategies().into_iter().collect();
        let expected: BTreeSet<&str> = [
            "even_distribute",
            "minimize_days",
            "shift_type_optimize",
            "preference_based",
            "day_night_distribute",
        ]
        .into_iter()
        .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_unknown_strategy_lists_all_names() {
        let scheduler = Scheduler::new();
        let (start, end) = window();

        let err = scheduler
            .generate_schedule("does_not_exist", &[], &[], start, end)
            .unwrap_err();

        let SchedulerError::UnknownStrategy { requested, available } = &err;
        assert_eq!(requested, "does_not_exist");
        assert_eq!(available.len(), 5);

        let message = err.to_string();
        assert!(message.contains("does_not_exist"));
        for name in [
            "even_distribute",
            "minimize_days",
            "shift_type_optimize",
            "preference_based",
            "day_night_distribute",
        ] {
            assert!(message.contains(name), "message should list {name}");
        }
    }

    #[test]
    fn test_dispatch_reaches_each_strategy() {
        let scheduler = Scheduler::new();
        let staff = vec![Staff::new("a"), Staff::new("b")];
        let shifts = sample_shifts();
        let (start, end) = window();

        for (name, label) in [
            ("even_distribute", "Even Distribution"),
            ("minimize_days", "Minimize Days"),
            ("shift_type_optimize", "Shift Type Optimization"),
            ("preference_based", "Preference Based"),
            ("day_night_distribute", "Day/Night Distribution"),
        ] {
            let result = scheduler
                .generate_schedule(name, &staff, &shifts, start, end)
                .unwrap();
            assert_eq!(result.strategy, label);
            assert!(result.score_value() >= 0.0 && result.score_value() <= 100.0);
        }
    }

    #[test]
    fn test_empty_inputs_are_not_errors() {
        let scheduler = Scheduler::new();
        let (start, end) = window();

        for name in scheduler.available_strategies() {
            let result = scheduler
                .generate_schedule(name, &[], &[], start, end)
                .unwrap();
            assert_eq!(result.summary.total_staff, 0);
            assert!((result.summary.total_hours_assigned - 0.0).abs() < 1e-10);
            assert!((result.score_value() - 0.0).abs() < 1e-10, "{name} score");
        }
    }

    #[test]
    fn test_seeded_scheduler_is_reproducible() {
        let staff: Vec<Staff> = (0..4).map(|i| Staff::new(format!("p{i}"))).collect();
        let shifts = sample_shifts();
        let (start, end) = window();

        let a = Scheduler::with_seed(11)
            .generate_schedule("even_distribute", &staff, &shifts, start, end)
            .unwrap();
        let b = Scheduler::with_seed(11)
            .generate_schedule("even_distribute", &staff, &shifts, start, end)
            .unwrap();
        assert_eq!(a.assignments, b.assignments);
    }

    #[test]
    fn test_even_distribute_result_shape() {
        let scheduler = Scheduler::new();
        let staff = vec![Staff::new("a"), Staff::new("b"), Staff::new("c")];
        let shifts = sample_shifts();
        let (start, end) = window();

        let result = scheduler
            .generate_schedule("even_distribute", &staff, &shifts, start, end)
            .unwrap();

        assert_eq!(result.score, StrategyScore::FairnessScore(100.0));
        assert_eq!(result.schedule.len(), 3); // one entry per date
        assert_eq!(result.start_date, start);
        assert_eq!(result.end_date, end);
    }
}
