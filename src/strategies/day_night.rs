//! Day/night pool distribution strategy.
//!
//! Splits the staff into a day pool and a night pool, classifies
//! shifts by time-of-day, and runs the even-distribution policy
//! independently inside each pool.

use chrono::{NaiveDate, Timelike};
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::even_distribute::distribute_evenly;
use super::{fairness_from_hours, AllocationContext, SchedulingStrategy, DEFAULT_SEED};
use crate::models::{ScheduleResult, Shift, Staff, StrategyScore};

/// Night class boundary: shifts starting at or after this hour are
/// night shifts...
const NIGHT_START_HOUR: u32 = 22;
/// ...as are shifts starting before this hour.
const NIGHT_END_HOUR: u32 = 6;

/// Distributes day and night shifts over preference-derived pools.
///
/// Staff with a night-like preferred type form the night pool, staff
/// with any other declared preference the day pool; members with no
/// declared preference are split positionally, alternating onto the
/// smaller pool. With fewer than two staff the strategy falls back to
/// a single even-distribution pass over everyone.
#[derive(Debug, Clone)]
pub struct DayNightDistributeStrategy {
    seed: u64,
}

impl DayNightDistributeStrategy {
    /// Creates the strategy with the default seed.
    pub fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    /// Creates the strategy with a caller-supplied seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Splits staff indices into (day, night) pools.
    fn partition_staff(staff: &[Staff]) -> (Vec<usize>, Vec<usize>) {
        let mut day = Vec::new();
        let mut night = Vec::new();
        let mut unsignaled = Vec::new();

        for (i, person) in staff.iter().enumerate() {
            if person.preferred_shift_types.iter().any(|t| is_night_type(t)) {
                night.push(i);
            } else if !person.preferred_shift_types.is_empty() {
                day.push(i);
            } else {
                unsignaled.push(i);
            }
        }

        // No signal: alternate onto the smaller pool, day on ties.
        for i in unsignaled {
            if day.len() <= night.len() {
                day.push(i);
            } else {
                night.push(i);
            }
        }

        (day, night)
    }
}

impl Default for DayNightDistributeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a shift-type tag signals night work.
fn is_night_type(shift_type: &str) -> bool {
    shift_type.to_ascii_lowercase().contains("night")
}

/// Whether a shift belongs to the night class by start time.
fn is_night_shift(shift: &Shift) -> bool {
    let hour = shift.start.hour();
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

impl SchedulingStrategy for DayNightDistributeStrategy {
    fn name(&self) -> &'static str {
        "day_night_distribute"
    }

    fn label(&self) -> &'static str {
        "Day/Night Distribution"
    }

    fn description(&self) -> &'static str {
        "Balance day and night coverage across dedicated staff pools"
    }

    fn allocate(
        &self,
        staff: &[Staff],
        shifts: &[Shift],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ScheduleResult {
        debug!(
            "day/night distribution over {} staff, {} shifts ({start_date}..={end_date})",
            staff.len(),
            shifts.len()
        );

        let mut ctx = AllocationContext::new(staff, shifts);
        ctx.reset();

        if staff.is_empty() || shifts.is_empty() {
            return ctx.build_result(
                self.label(),
                StrategyScore::DistributionScore(0.0),
                start_date,
                end_date,
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let order = ctx.shifts_chronological();

        if staff.len() < 2 {
            // Too few staff for two pools: single even pass.
            let mut queue: Vec<usize> = (0..staff.len()).collect();
            distribute_evenly(&mut ctx, &mut queue, &order);
            let score = fairness_from_hours(&ctx.hours_vector()).clamp(0.0, 100.0);
            return ctx.build_result(
                self.label(),
                StrategyScore::DistributionScore(score),
                start_date,
                end_date,
            );
        }

        let (day_pool, night_pool) = Self::partition_staff(staff);
        let (night_shifts, day_shifts): (Vec<usize>, Vec<usize>) = order
            .iter()
            .copied()
            .partition(|&idx| is_night_shift(ctx.shift(idx)));

        let mut day_queue = day_pool.clone();
        day_queue.shuffle(&mut rng);
        distribute_evenly(&mut ctx, &mut day_queue, &day_shifts);

        let mut night_queue = night_pool.clone();
        night_queue.shuffle(&mut rng);
        distribute_evenly(&mut ctx, &mut night_queue, &night_shifts);

        // Balance within each pool and between the pools.
        let mut within_scores = Vec::new();
        if !day_pool.is_empty() {
            within_scores.push(fairness_from_hours(&ctx.hours_for(&day_pool)));
        }
        if !night_pool.is_empty() {
            within_scores.push(fairness_from_hours(&ctx.hours_for(&night_pool)));
        }
        let within = if within_scores.is_empty() {
            0.0
        } else {
            within_scores.iter().sum::<f64>() / within_scores.len() as f64
        };

        let day_total: f64 = ctx.hours_for(&day_pool).iter().sum();
        let night_total: f64 = ctx.hours_for(&night_pool).iter().sum();
        let combined = day_total + night_total;
        let between = if combined > 0.0 {
            100.0 * (1.0 - (day_total - night_total).abs() / combined)
        } else {
            100.0
        };

        let score = (0.5 * within + 0.5 * between).clamp(0.0, 100.0);

        ctx.build_result(
            self.label(),
            StrategyScore::DistributionScore(score),
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

    fn day_shift(id: &str, day: u32) -> Shift {
        Shift::new(id, dt(day, 8), dt(day, 16)).with_shift_type("day")
    }

    fn night_shift(id: &str, day: u32) -> Shift {
        Shift::new(id, dt(day, 22), dt(day + 1, 6)).with_shift_type("night")
    }

    #[test]
    fn test_shift_classification() {
        assert!(!is_night_shift(&day_shift("d", 4)));
        assert!(is_night_shift(&night_shift("n", 4)));
        // Early-morning starts count as night, evening starts as day.
        assert!(is_night_shift(&Shift::new("e", dt(4, 2), dt(4, 8))));
        assert!(!is_night_shift(&Shift::new("l", dt(4, 16), dt(4, 22))));
    }

    #[test]
    fn test_preference_driven_pools() {
        let staff = vec![
            Staff::new("owl").with_preferred_type("night"),
            Staff::new("lark").with_preferred_type("morning"),
        ];
        let shifts = vec![day_shift("d1", 4), night_shift("n1", 4)];
        let (start, end) = window();

        let result = DayNightDistributeStrategy::new().allocate(&staff, &shifts, start, end);

        assert_eq!(result.assignments_for_shift("d1")[0].staff_id, "lark");
        assert_eq!(result.assignments_for_shift("n1")[0].staff_id, "owl");
    }

    #[test]
    fn test_positional_split_without_signal() {
        let staff = vec![
            Staff::new("p0"),
            Staff::new("p1"),
            Staff::new("p2"),
            Staff::new("p3"),
        ];
        let (day, night) = DayNightDistributeStrategy::partition_staff(&staff);
        assert_eq!(day, vec![0, 2]);
        assert_eq!(night, vec![1, 3]);
    }

    #[test]
    fn test_mixed_signal_split() {
        let staff = vec![
            Staff::new("owl").with_preferred_type("late-night"),
            Staff::new("lark").with_preferred_type("morning"),
            Staff::new("whoever"),
        ];
        let (day, night) = DayNightDistributeStrategy::partition_staff(&staff);
        assert_eq!(day, vec![1, 2]); // unsignaled balances onto day
        assert_eq!(night, vec![0]);
    }

    #[test]
    fn test_balanced_pools_score_high() {
        let staff = vec![
            Staff::new("owl").with_preferred_type("night"),
            Staff::new("lark").with_preferred_type("day"),
        ];
        let shifts = vec![
            day_shift("d1", 4),
            night_shift("n1", 4),
            day_shift("d2", 5),
            night_shift("n2", 5),
        ];
        let (start, end) = window();

        let result = DayNightDistributeStrategy::new().allocate(&staff, &shifts, start, end);

        // Each pool member works 16h: perfect within and between.
        assert_eq!(result.score, StrategyScore::DistributionScore(100.0));
        assert_eq!(result.summary.total_shifts_assigned, 4);
    }

    #[test]
    fn test_single_staff_fallback_covers_everything() {
        let staff = vec![Staff::new("solo")];
        let shifts = vec![day_shift("d1", 4), night_shift("n1", 5)];
        let (start, end) = window();

        let result = DayNightDistributeStrategy::new().allocate(&staff, &shifts, start, end);

        // One member takes both classes; score key stays distribution.
        assert_eq!(result.summary.total_shifts_assigned, 2);
        assert!(matches!(result.score, StrategyScore::DistributionScore(_)));
        assert!((result.score_value() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_pool_members_never_cross_classes() {
        let staff = vec![
            Staff::new("owl").with_preferred_type("night"),
            Staff::new("lark").with_preferred_type("day"),
        ];
        // Two night shifts, no day shifts: lark gets nothing.
        let shifts = vec![night_shift("n1", 4), night_shift("n2", 5)];
        let (start, end) = window();

        let result = DayNightDistributeStrategy::new().allocate(&staff, &shifts, start, end);

        assert_eq!(result.utilization_for("lark").unwrap().shifts_assigned, 0);
        assert_eq!(result.utilization_for("owl").unwrap().shifts_assigned, 2);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let (start, end) = window();
        let result = DayNightDistributeStrategy::new().allocate(&[], &[], start, end);
        assert_eq!(result.score, StrategyScore::DistributionScore(0.0));

        let staff = vec![Staff::new("a"), Staff::new("b")];
        let no_shifts = DayNightDistributeStrategy::new().allocate(&staff, &[], start, end);
        assert_eq!(no_shifts.score, StrategyScore::DistributionScore(0.0));
    }

    #[test]
    fn test_unavailable_days_hold_within_pools() {
        // 2024-03-04 is a Monday
        let staff = vec![
            Staff::new("owl").with_preferred_type("night").with_unavailable_day(0),
            Staff::new("lark").with_preferred_type("day"),
        ];
        let shifts = vec![night_shift("n1", 4)];
        let (start, end) = window();

        let result = DayNightDistributeStrategy::new().allocate(&staff, &shifts, start, end);
        assert!(result.assignments.is_empty());
    }
}
