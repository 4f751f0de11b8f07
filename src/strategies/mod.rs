//! Allocation strategies and their shared contract.
//!
//! Each strategy implements [`SchedulingStrategy`] with a distinct
//! assignment policy and scoring metric:
//!
//! | Strategy | Policy | Score |
//! |----------|--------|-------|
//! | [`EvenDistributeStrategy`] | balance hours via rotating queue | `fairness_score` |
//! | [`MinimizeDaysStrategy`] | consolidate work into few days | `efficiency_score` |
//! | [`ShiftTypeOptimizeStrategy`] | match declared type preferences | `preference_score` |
//! | [`PreferenceBasedStrategy`] | preference-ranked, availability-hard | `preference_score` |
//! | [`DayNightDistributeStrategy`] | balanced day/night pools | `distribution_score` |
//!
//! Shared mechanics (accumulator reset, eligibility checks, date
//! grouping, summary aggregation) live in the run-scoped
//! `AllocationContext`. Every run is reset, allocate, summarize;
//! strategies hold no state across calls.

mod context;
mod day_night;
mod even_distribute;
mod minimize_days;
mod preference;
mod shift_type;

pub use day_night::DayNightDistributeStrategy;
pub use even_distribute::EvenDistributeStrategy;
pub use minimize_days::MinimizeDaysStrategy;
pub use preference::PreferenceBasedStrategy;
pub use shift_type::ShiftTypeOptimizeStrategy;

pub(crate) use context::AllocationContext;

use crate::models::{ScheduleResult, Shift, Staff};
use chrono::NaiveDate;
use std::fmt::Debug;

/// Default seed for strategies that shuffle their staff queue.
///
/// Runs are deterministic: the same seed and inputs always produce the
/// same allocation. Override per strategy via `with_seed`.
pub(crate) const DEFAULT_SEED: u64 = 42;

/// A named, pluggable allocation algorithm.
///
/// Implementations allocate staff to shifts for a date range and
/// return a [`ScheduleResult`] bundle. Degenerate inputs (empty staff
/// or shift lists) must be handled without error: the summary comes
/// back all-zero and the score is 0.0. Shifts with no eligible
/// candidate are left under-staffed.
///
/// Inputs are only read; allocations are reported through the result's
/// ledger, so concurrent calls may share the same slices.
pub trait SchedulingStrategy: Send + Sync + Debug {
    /// Registry key (e.g. `"even_distribute"`).
    fn name(&self) -> &'static str;

    /// Human-readable algorithm name placed in the result
    /// (e.g. `"Even Distribution"`).
    fn label(&self) -> &'static str;

    /// Allocates staff to shifts over the given date range.
    fn allocate(
        &self,
        staff: &[Staff],
        shifts: &[Shift],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ScheduleResult;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.label()
    }
}

/// Population variance of a value set. Zero for fewer than two values.
pub(crate) fn variance(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64
}

/// Hour-balance fairness metric: `max(0, 100 - 5 * variance(hours))`.
///
/// Returns 0.0 for an empty hour vector.
pub(crate) fn fairness_from_hours(hours: &[f64]) -> f64 {
    if hours.is_empty() {
        return 0.0;
    }
    (100.0 - 5.0 * variance(hours)).max(0.0)
}
