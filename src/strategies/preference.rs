//! Preference-based strategy.
//!
//! Like shift-type optimization, but preference ranks candidates
//! rather than gating them: a shift nobody prefers is still staffed,
//! while unavailable days and missing skills are never overridden.

use chrono::NaiveDate;
use log::debug;

use super::shift_type::preference_score;
use super::{AllocationContext, SchedulingStrategy};
use crate::models::{ScheduleResult, Shift, Staff, StrategyScore};

/// Preference-ranked allocation with hard availability.
///
/// Shifts are processed chronologically. Candidates are all staff
/// passing the weekday and skill checks; members preferring the
/// shift's type rank ahead of the rest, then by ascending
/// preferred-shift ratio so under-served members come first. Hour caps
/// and staffing slots are respected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceBasedStrategy;

impl PreferenceBasedStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl SchedulingStrategy for PreferenceBasedStrategy {
    fn name(&self) -> &'static str {
        "preference_based"
    }

    fn label(&self) -> &'static str {
        "Preference Based"
    }

    fn description(&self) -> &'static str {
        "Rank staff by declared preference without leaving shifts open"
    }

    fn allocate(
        &self,
        staff: &[Staff],
        shifts: &[Shift],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ScheduleResult {
        debug!(
            "preference-based allocation over {} staff, {} shifts ({start_date}..={end_date})",
            staff.len(),
            shifts.len()
        );

        let mut ctx = AllocationContext::new(staff, shifts);
        ctx.reset();

        for shift_idx in ctx.shifts_chronological() {
            let shift_type = ctx.shift(shift_idx).shift_type.clone();

            let mut candidates: Vec<usize> = (0..staff.len())
                .filter(|&s| ctx.is_eligible(s, shift_idx) && !ctx.is_on_shift(s, shift_idx))
                .collect();
            // Preferring members first, then the under-served; stable
            // sort keeps index order on full ties.
            candidates.sort_by(|&a, &b| {
                let pref_a = !staff[a].prefers_type(&shift_type);
                let pref_b = !staff[b].prefers_type(&shift_type);
                pref_a.cmp(&pref_b).then_with(|| {
                    ctx.preferred_ratio(a)
                        .partial_cmp(&ctx.preferred_ratio(b))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
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
