//! Shift-type preference strategy.
//!
//! Matches staff to shifts whose type tag appears in their declared
//! preference list, favoring members whose assignments so far contain
//! the smallest share of preferred work.

use chrono::NaiveDate;
use log::debug;

use super::{AllocationContext, SchedulingStrategy};
use crate::models::{ScheduleResult, Shift, Staff, StrategyScore};

/// Assigns shifts to staff who prefer their type.
///
/// Shifts are grouped by type; only staff listing the type as
/// preferred are candidates (plus the usual weekday/skill checks), so
/// shifts of a type nobody prefers stay unstaffed. Candidates are
/// ranked ascending by their current preferred-shift ratio, putting
/// under-served members first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftTypeOptimizeStrategy;

impl ShiftTypeOptimizeStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

/// Average preference-match score over all staff: each member
/// contributes `(matched / assigned) * 100`, or 0 with no assignments.
pub(crate) fn preference_score(ctx: &AllocationContext<'_>) -> f64 {
    let staff_count = ctx.staff_count();
    if staff_count == 0 {
        return 0.0;
    }
    let total: f64 = (0..staff_count).map(|s| ctx.preferred_ratio(s) * 100.0).sum();
    total / staff_count as f64
}

impl SchedulingStrategy for ShiftTypeOptimizeStrategy {
    fn name(&self) -> &'static str {
        "shift_type_optimize"
    }

    fn label(&self) -> &'static str {
        "Shift Type Optimization"
    }

    fn description(&self) -> &'static str {
        "Give staff shifts of the types they declared preferred"
    }

    fn allocate(
        &self,
        staff: &[Staff],
        shifts: &[Shift],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ScheduleResult {
        debug!(
            "shift type optimization over {} staff, {} shifts ({start_date}..={end_date})",
            staff.len(),
            shifts.len()
        );

        let mut ctx = AllocationContext::new(staff, shifts);
        ctx.reset();

        for (shift_type, shift_idxs) in ctx.shifts_by_type() {
            for shift_idx in shift_idxs {
                if ctx.is_fully_staffed(shift_idx) {
                    continue;
                }

                let mut candidates: Vec<usize> = staff
                    .iter()
                    .enumerate()
                    .filter(|(s, person)| {
                        person.prefers_type(&shift_type)
                            && ctx.is_eligible(*s, shift_idx)
                            && !ctx.is_on_shift(*s, shift_idx)
                    })
                    .map(|(s, _)| s)
                    .collect();
                // Under-served preferred staff first; stable sort keeps
                // index order on ties.
                candidates.sort_by(|&a, &b| {
                    ctx.preferred_ratio(a)
                        .partial_cmp(&ctx.preferred_ratio(b))
                        .unwrap_or(std::cmp::Ordering::Equal)
                });

                for &s in &candidates {
                    if ctx.is_fully_staffed(shift_idx) {
                        break;
                    }
                    if ctx.within_hour_cap(s, shift_idx) {
                        ctx.assign(s, shift_idx);
                    }
                }
            }
        }

        let score = if staff.is_empty() || shifts.is_empty() {
            0.0
        } else {
            preference_score(&ctx)
        };

        ctx.build_result(
            self.label(),
            StrategyScore::PreferenceScore(score),
            start_date,
            end_date,
        )
    }
}
