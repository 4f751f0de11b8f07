//! Day-minimization strategy.
//!
//! Consolidates each member's work into as few distinct calendar days
//! as possible by filling a whole day's shifts before drawing on staff
//! who would start a fresh day.

use chrono::NaiveDate;
use log::debug;

use super::{AllocationContext, SchedulingStrategy};
use crate::models::{ScheduleResult, Shift, Staff, StrategyScore};

/// Minimizes the number of distinct days each staff member works.
///
/// Shifts are grouped by date; for every shift the candidate pool is
/// restricted to staff not yet working that date and ranked by how few
/// days they have accumulated so far. Hour caps are respected; a shift
/// whose candidates are all capped out stays under-staffed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimizeDaysStrategy;

impl MinimizeDaysStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    fn efficiency_score(ctx: &AllocationContext<'_>) -> f64 {
        let staff_count = ctx.staff_count();
        if staff_count == 0 {
            return 0.0;
        }
        let total: f64 = (0..staff_count)
            .map(|s| {
                let days = ctx.days_worked(s);
                if days == 0 {
                    return 0.0;
                }
                let hours_per_day = ctx.hours(s) / days as f64;
                (hours_per_day * 10.0).min(100.0)
            })
            .sum();
        total / staff_count as f64
    }
}

impl SchedulingStrategy for MinimizeDaysStrategy {
    fn name(&self) -> &'static str {
        "minimize_days"
    }

    fn label(&self) -> &'static str {
        "Minimize Days"
    }

    fn description(&self) -> &'static str {
        "Stack work onto few distinct days per staff member"
    }

    fn allocate(
        &self,
        staff: &[Staff],
        shifts: &[Shift],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ScheduleResult {
        debug!(
            "day minimization over {} staff, {} shifts ({start_date}..={end_date})",
            staff.len(),
            shifts.len()
        );

        let mut ctx = AllocationContext::new(staff, shifts);
        ctx.reset();

        for (date, shift_idxs) in ctx.shifts_by_date() {
            for shift_idx in shift_idxs {
                if ctx.is_fully_staffed(shift_idx) {
                    continue;
                }

                let mut candidates: Vec<usize> = (0..staff.len())
                    .filter(|&s| ctx.is_eligible(s, shift_idx) && !ctx.has_worked_date(s, date))
                    .collect();
                // Stable sort: index order breaks days-worked ties.
                candidates.sort_by_key(|&s| ctx.days_worked(s));

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
            Self::efficiency_score(&ctx)
        };

        ctx.build_result(
            self.label(),
            StrategyScore::EfficiencyScore(score),
            start_date,
            end_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn window() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        )
    }

    #[test]
    fn test_consolidates_below_distinct_date_count() {
        // 3 shifts over 2 dates, 2 staff with room to spare:
        // average days worked must undercut the distinct date count.
        let staff = vec![Staff::new("a"), Staff::new("b")];
        let shifts = vec![
            Shift::new("s1", dt(4, 8), dt(4, 12)),
            Shift::new("s2", dt(4, 12), dt(4, 16)),
            Shift::new("s3", dt(5, 8), dt(5, 16)),
        ];
        let (start, end) = window();

        let result = MinimizeDaysStrategy::new().allocate(&staff, &shifts, start, end);

        assert_eq!(result.summary.total_shifts_assigned, 3);
        let total_days: usize = result.staff_utilization.iter().map(|u| u.days_worked).sum();
        let avg_days = total_days as f64 / staff.len() as f64;
        assert!(avg_days < 2.0, "avg days {avg_days} should be < 2 distinct dates");
    }

    #[test]
    fn test_one_person_per_date_per_shift_pool() {
        // Two shifts on one date, two staff: each takes one shift
        // because a member never works the same date twice here.
        let staff = vec![Staff::new("a"), Staff::new("b")];
        let shifts = vec![
            Shift::new("s1", dt(4, 8), dt(4, 16)),
            Shift::new("s2", dt(4, 16), dt(4, 22)),
        ];
        let (start, end) = window();

        let result = MinimizeDaysStrategy::new().allocate(&staff, &shifts, start, end);

        assert_eq!(result.summary.total_shifts_assigned, 2);
        for u in &result.staff_utilization {
            assert_eq!(u.shifts_assigned, 1);
            assert_eq!(u.days_worked, 1);
        }
    }

    #[test]
    fn test_hour_cap_skips_to_next_candidate() {
        let staff = vec![
            Staff::new("capped").with_max_hours(4.0),
            Staff::new("open"),
        ];
        let shifts = vec![Shift::new("s1", dt(4, 8), dt(4, 16))]; // 8h
        let (start, end) = window();

        let result = MinimizeDaysStrategy::new().allocate(&staff, &shifts, start, end);

        assert_eq!(result.assignments.len(), 1);
        assert_eq!(result.assignments[0].staff_id, "open");
    }

    #[test]
    fn test_respects_availability_and_skills() {
        // 2024-03-04 is a Monday
        let staff = vec![
            Staff::new("off-monday").with_skill("till").with_unavailable_day(0),
            Staff::new("unskilled"),
        ];
        let shifts = vec![Shift::new("s1", dt(4, 8), dt(4, 16)).with_required_skill("till")];
        let (start, end) = window();

        let result = MinimizeDaysStrategy::new().allocate(&staff, &shifts, start, end);
        assert!(result.assignments.is_empty());
    }

    #[test]
    fn test_prefers_staff_with_fewer_days() {
        // After day one, "a" has a day on the books; the day-two shift
        // should go to "b", who has fewer days worked.
        let staff = vec![Staff::new("a"), Staff::new("b")];
        let shifts = vec![
            Shift::new("d1", dt(4, 8), dt(4, 16)),
            Shift::new("d2", dt(5, 8), dt(5, 16)),
        ];
        let (start, end) = window();

        let result = MinimizeDaysStrategy::new().allocate(&staff, &shifts, start, end);

        assert_eq!(result.assignments[0].staff_id, "a");
        assert_eq!(result.assignments[1].staff_id, "b");
    }

    #[test]
    fn test_efficiency_score_full_days() {
        // One member, one 10h day → hours_per_day*10 caps at 100.
        let staff = vec![Staff::new("a")];
        let shifts = vec![Shift::new("s1", dt(4, 8), dt(4, 18))];
        let (start, end) = window();

        let result = MinimizeDaysStrategy::new().allocate(&staff, &shifts, start, end);
        assert_eq!(result.score, StrategyScore::EfficiencyScore(100.0));
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let (start, end) = window();
        let result = MinimizeDaysStrategy::new().allocate(&[], &[], start, end);
        assert_eq!(result.score, StrategyScore::EfficiencyScore(0.0));
        assert_eq!(result.summary.total_staff, 0);
    }
}
