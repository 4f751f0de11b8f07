//! Even-distribution strategy.
//!
//! Balances total hours and shift counts across staff: shifts are
//! processed chronologically and each open slot goes to the
//! least-loaded eligible member of a rotating queue.

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use chrono::NaiveDate;

use super::{fairness_from_hours, AllocationContext, SchedulingStrategy, DEFAULT_SEED};
use crate::models::{ScheduleResult, Shift, Staff, StrategyScore};

/// Balances hours across staff via a rotating least-loaded queue.
///
/// The initial queue order is shuffled with a seeded RNG so that
/// hour ties do not always favor the same staff; runs with the same
/// seed and inputs are identical.
#[derive(Debug, Clone)]
pub struct EvenDistributeStrategy {
    seed: u64,
}

impl EvenDistributeStrategy {
    /// Creates the strategy with the default seed.
    pub fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    /// Creates the strategy with a caller-supplied seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for EvenDistributeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingStrategy for EvenDistributeStrategy {
    fn name(&self) -> &'static str {
        "even_distribute"
    }

    fn label(&self) -> &'static str {
        "Even Distribution"
    }

    fn description(&self) -> &'static str {
        "Balance total hours and shift counts evenly across staff"
    }

    fn allocate(
        &self,
        staff: &[Staff],
        shifts: &[Shift],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ScheduleResult {
        debug!(
            "even distribution over {} staff, {} shifts ({start_date}..={end_date})",
            staff.len(),
            shifts.len()
        );

        let mut ctx = AllocationContext::new(staff, shifts);
        ctx.reset();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut queue: Vec<usize> = (0..staff.len()).collect();
        queue.shuffle(&mut rng);

        let order = ctx.shifts_chronological();
        distribute_evenly(&mut ctx, &mut queue, &order);

        let score = if staff.is_empty() || shifts.is_empty() {
            0.0
        } else {
            fairness_from_hours(&ctx.hours_vector())
        };

        ctx.build_result(
            self.label(),
            StrategyScore::FairnessScore(score),
            start_date,
            end_date,
        )
    }
}

/// Core even-distribution pass over a staff pool and shift set.
///
/// For each shift (in the given order), repeatedly assigns the
/// least-total-hours eligible member of `queue` (ties favor the
/// earliest queue position), rotating the queue by one after every
/// assignment, until the shift is fully staffed or no eligible
/// candidate remains (the shift is then left under-staffed).
///
/// Eligibility: weekday availability, required skills, and not already
/// on the shift. Hour caps are not consulted here.
///
/// Also used by the day/night strategy to run the same policy within
/// each of its pools.
pub(crate) fn distribute_evenly(
    ctx: &mut AllocationContext<'_>,
    queue: &mut [usize],
    shift_order: &[usize],
) {
    for &shift_idx in shift_order {
        while !ctx.is_fully_staffed(shift_idx) {
            let mut best: Option<usize> = None;
            for (pos, &s) in queue.iter().enumerate() {
                if !ctx.is_eligible(s, shift_idx) || ctx.is_on_shift(s, shift_idx) {
                    continue;
                }
                match best {
                    None => best = Some(pos),
                    Some(b) if ctx.hours(s) < ctx.hours(queue[b]) => best = Some(pos),
                    Some(_) => {}
                }
            }

            match best {
                Some(pos) => {
                    ctx.assign(queue[pos], shift_idx);
                    queue.rotate_left(1);
                }
                None => break,
            }
        }
    }
}
