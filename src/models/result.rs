//! Allocation result model.
//!
//! The output bundle every strategy returns: a date-grouped schedule
//! projection, aggregate summary statistics, an explicit assignment
//! ledger, per-staff rollups, and a strategy-specific quality score.
//!
//! Strategies never mutate the staff/shift records they are given;
//! the ledger is the authoritative record of what was allocated and
//! the caller decides how (or whether) to apply it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single staff-to-shift allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned staff ID.
    pub staff_id: String,
    /// Target shift ID.
    pub shift_id: String,
    /// Calendar date the shift starts on.
    pub date: NaiveDate,
    /// Shift duration in hours.
    pub hours: f64,
}

impl Assignment {
    /// Creates a new ledger entry.
    pub fn new(
        staff_id: impl Into<String>,
        shift_id: impl Into<String>,
        date: NaiveDate,
        hours: f64,
    ) -> Self {
        Self {
            staff_id: staff_id.into(),
            shift_id: shift_id.into(),
            date,
            hours,
        }
    }
}

/// One shift entry in the date-grouped schedule projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledShift {
    /// Shift ID.
    pub shift_id: String,
    /// Shift start.
    pub start: NaiveDateTime,
    /// Shift end.
    pub end: NaiveDateTime,
    /// Shift type tag.
    pub shift_type: String,
    /// Display names of the staff allocated to this shift.
    pub staff: Vec<String>,
}

/// Per-staff allocation rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUtilization {
    /// Staff ID.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// Total hours allocated across all shifts.
    pub total_hours: f64,
    /// Number of shifts allocated.
    pub shifts_assigned: usize,
    /// Number of distinct calendar days worked.
    pub days_worked: usize,
}

/// Aggregate statistics over the staff list.
///
/// All fields are zero when the staff list is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of staff considered.
    pub total_staff: usize,
    /// Number of staff that received at least one shift.
    pub staff_with_assignments: usize,
    /// Sum of allocated hours across all staff.
    pub total_hours_assigned: f64,
    /// Mean allocated hours per staff member.
    pub average_hours_per_staff: f64,
    /// Minimum allocated hours across staff.
    pub min_hours: f64,
    /// Maximum allocated hours across staff.
    pub max_hours: f64,
    /// Total number of shift allocations.
    pub total_shifts_assigned: usize,
}

/// Strategy-specific quality score, 0–100.
///
/// Serializes as a single key named after the metric, e.g.
/// `{"fairness_score": 97.5}`, so a result carries exactly one
/// strategy-specific score field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyScore {
    /// Hour-balance metric used by even distribution.
    FairnessScore(f64),
    /// Day-consolidation metric used by day minimization.
    EfficiencyScore(f64),
    /// Preference-match metric used by preference-driven strategies.
    PreferenceScore(f64),
    /// Pool-balance metric used by day/night distribution.
    DistributionScore(f64),
}

impl StrategyScore {
    /// The numeric score value.
    pub fn value(&self) -> f64 {
        match *self {
            StrategyScore::FairnessScore(v)
            | StrategyScore::EfficiencyScore(v)
            | StrategyScore::PreferenceScore(v)
            | StrategyScore::DistributionScore(v) => v,
        }
    }

    /// The serialized field name of this score.
    pub fn kind(&self) -> &'static str {
        match self {
            StrategyScore::FairnessScore(_) => "fairness_score",
            StrategyScore::EfficiencyScore(_) => "efficiency_score",
            StrategyScore::PreferenceScore(_) => "preference_score",
            StrategyScore::DistributionScore(_) => "distribution_score",
        }
    }
}

/// The result bundle returned by every strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Human-readable algorithm name, e.g. "Even Distribution".
    pub strategy: String,
    /// First date of the requested allocation window.
    pub start_date: NaiveDate,
    /// Last date of the requested allocation window.
    pub end_date: NaiveDate,
    /// Shifts grouped by calendar date, chronological within each date.
    pub schedule: BTreeMap<NaiveDate, Vec<ScheduledShift>>,
    /// Aggregate statistics over the staff list.
    pub summary: ScheduleSummary,
    /// Explicit allocation ledger (staff ↔ shift pairs).
    pub assignments: Vec<Assignment>,
    /// Per-staff rollups.
    pub staff_utilization: Vec<StaffUtilization>,
    /// Strategy-specific quality score, 0–100.
    #[serde(flatten)]
    pub score: StrategyScore,
}

impl ScheduleResult {
    /// The numeric score value regardless of metric kind.
    pub fn score_value(&self) -> f64 {
        self.score.value()
    }

    /// Rollup for a specific staff member, if present.
    pub fn utilization_for(&self, staff_id: &str) -> Option<&StaffUtilization> {
        self.staff_utilization.iter().find(|u| u.staff_id == staff_id)
    }

    /// All ledger entries for a specific shift.
    pub fn assignments_for_shift(&self, shift_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.shift_id == shift_id)
            .collect()
    }
}
