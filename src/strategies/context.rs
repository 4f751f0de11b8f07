//! Run-scoped allocation state shared by all strategies.
//!
//! [`AllocationContext`] holds the per-run accumulators over borrowed
//! staff/shift slices: assigned shifts, total hours, and distinct days
//! worked per staff member, plus the roster per shift. All mutation
//! goes through [`AllocationContext::assign`], which keeps the
//! accumulators consistent with each other:
//!
//! - `total_hours` equals the summed duration of assigned shifts,
//! - `days_worked` equals the count of distinct shift dates,
//! - a roster never exceeds the shift's `required_staff`.
//!
//! The caller-owned records themselves are never written to.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{
    Assignment, ScheduleResult, ScheduleSummary, ScheduledShift, Shift, Staff, StaffUtilization,
    StrategyScore,
};

/// Working state for a single allocation run.
#[derive(Debug)]
pub(crate) struct AllocationContext<'a> {
    staff: &'a [Staff],
    shifts: &'a [Shift],
    /// Per staff: indices of assigned shifts, in assignment order.
    assigned_shifts: Vec<Vec<usize>>,
    /// Per staff: summed hours of assigned shifts.
    total_hours: Vec<f64>,
    /// Per staff: distinct dates worked.
    days: Vec<BTreeSet<NaiveDate>>,
    /// Per shift: indices of assigned staff, in assignment order.
    rosters: Vec<Vec<usize>>,
}

impl<'a> AllocationContext<'a> {
    /// Creates a zeroed context over the given records.
    pub(crate) fn new(staff: &'a [Staff], shifts: &'a [Shift]) -> Self {
        Self {
            staff,
            shifts,
            assigned_shifts: vec![Vec::new(); staff.len()],
            total_hours: vec![0.0; staff.len()],
            days: vec![BTreeSet::new(); staff.len()],
            rosters: vec![Vec::new(); shifts.len()],
        }
    }

    /// Zeroes every accumulator. Idempotent.
    pub(crate) fn reset(&mut self) {
        for list in &mut self.assigned_shifts {
            list.clear();
        }
        for hours in &mut self.total_hours {
            *hours = 0.0;
        }
        for dates in &mut self.days {
            dates.clear();
        }
        for roster in &mut self.rosters {
            roster.clear();
        }
    }

    pub(crate) fn staff_count(&self) -> usize {
        self.staff.len()
    }

    pub(crate) fn shift(&self, shift_idx: usize) -> &Shift {
        &self.shifts[shift_idx]
    }

    /// Records an allocation, updating both sides of the relation.
    pub(crate) fn assign(&mut self, staff_idx: usize, shift_idx: usize) {
        let shift = &self.shifts[shift_idx];
        self.assigned_shifts[staff_idx].push(shift_idx);
        self.total_hours[staff_idx] += shift.duration_hours();
        self.days[staff_idx].insert(shift.date());
        self.rosters[shift_idx].push(staff_idx);
    }

    /// Whether the shift's roster has reached `required_staff`.
    pub(crate) fn is_fully_staffed(&self, shift_idx: usize) -> bool {
        self.rosters[shift_idx].len() >= self.shifts[shift_idx].required_staff
    }

    /// Whether the member is already on this shift's roster.
    pub(crate) fn is_on_shift(&self, staff_idx: usize, shift_idx: usize) -> bool {
        self.rosters[shift_idx].contains(&staff_idx)
    }

    /// Combined weekday-availability and skill check.
    pub(crate) fn is_eligible(&self, staff_idx: usize, shift_idx: usize) -> bool {
        let person = &self.staff[staff_idx];
        let shift = &self.shifts[shift_idx];
        person.is_available_on(shift.weekday())
            && shift.required_skills.iter().all(|s| person.has_skill(s))
    }

    /// Whether taking the shift keeps the member within their hour cap.
    pub(crate) fn within_hour_cap(&self, staff_idx: usize, shift_idx: usize) -> bool {
        self.total_hours[staff_idx] + self.shifts[shift_idx].duration_hours()
            <= self.staff[staff_idx].max_hours_per_week
    }

    /// Whether the member already works a shift on the given date.
    pub(crate) fn has_worked_date(&self, staff_idx: usize, date: NaiveDate) -> bool {
        self.days[staff_idx].contains(&date)
    }

    pub(crate) fn hours(&self, staff_idx: usize) -> f64 {
        self.total_hours[staff_idx]
    }

    pub(crate) fn days_worked(&self, staff_idx: usize) -> usize {
        self.days[staff_idx].len()
    }

    /// Hours per staff member, in staff order.
    pub(crate) fn hours_vector(&self) -> Vec<f64> {
        self.total_hours.clone()
    }

    /// Hours for a subset of staff, in pool order.
    pub(crate) fn hours_for(&self, pool: &[usize]) -> Vec<f64> {
        pool.iter().map(|&s| self.total_hours[s]).collect()
    }

    /// Fraction of the member's assigned shifts whose type appears in
    /// their preference list. Zero with no assignments.
    pub(crate) fn preferred_ratio(&self, staff_idx: usize) -> f64 {
        let assigned = &self.assigned_shifts[staff_idx];
        if assigned.is_empty() {
            return 0.0;
        }
        let person = &self.staff[staff_idx];
        let matched = assigned
            .iter()
            .filter(|&&i| person.prefers_type(&self.shifts[i].shift_type))
            .count();
        matched as f64 / assigned.len() as f64
    }

    /// Shift indices ordered by start time (ID as tie-break).
    pub(crate) fn shifts_chronological(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.shifts.len()).collect();
        order.sort_by(|&a, &b| {
            let (sa, sb) = (&self.shifts[a], &self.shifts[b]);
            sa.start.cmp(&sb.start).then_with(|| sa.id.cmp(&sb.id))
        });
        order
    }

    /// Shift indices grouped by start date, chronological within each.
    pub(crate) fn shifts_by_date(&self) -> BTreeMap<NaiveDate, Vec<usize>> {
        let mut groups: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
        for idx in self.shifts_chronological() {
            groups.entry(self.shifts[idx].date()).or_default().push(idx);
        }
        groups
    }

    /// Shift indices grouped by type tag, chronological within each.
    pub(crate) fn shifts_by_type(&self) -> BTreeMap<String, Vec<usize>> {
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for idx in self.shifts_chronological() {
            groups
                .entry(self.shifts[idx].shift_type.clone())
                .or_default()
                .push(idx);
        }
        groups
    }

    /// Date-grouped schedule projection with assigned staff names.
    pub(crate) fn grouped_schedule(&self) -> BTreeMap<NaiveDate, Vec<ScheduledShift>> {
        let mut schedule: BTreeMap<NaiveDate, Vec<ScheduledShift>> = BTreeMap::new();
        for idx in self.shifts_chronological() {
            let shift = &self.shifts[idx];
            let entry = ScheduledShift {
                shift_id: shift.id.clone(),
                start: shift.start,
                end: shift.end,
                shift_type: shift.shift_type.clone(),
                staff: self.rosters[idx]
                    .iter()
                    .map(|&s| self.staff[s].display_name().to_string())
                    .collect(),
            };
            schedule.entry(shift.date()).or_default().push(entry);
        }
        schedule
    }

    /// Aggregate summary over the staff list. All-zero when empty.
    pub(crate) fn summary(&self) -> ScheduleSummary {
        if self.staff.is_empty() {
            return ScheduleSummary::default();
        }

        let total_hours: f64 = self.total_hours.iter().sum();
        let min_hours = self.total_hours.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_hours = self.total_hours.iter().cloned().fold(0.0, f64::max);

        ScheduleSummary {
            total_staff: self.staff.len(),
            staff_with_assignments: self
                .assigned_shifts
                .iter()
                .filter(|list| !list.is_empty())
                .count(),
            total_hours_assigned: total_hours,
            average_hours_per_staff: total_hours / self.staff.len() as f64,
            min_hours,
            max_hours,
            total_shifts_assigned: self.assigned_shifts.iter().map(Vec::len).sum(),
        }
    }

    /// Explicit allocation ledger, chronological by shift.
    pub(crate) fn ledger(&self) -> Vec<Assignment> {
        let mut entries = Vec::new();
        for idx in self.shifts_chronological() {
            let shift = &self.shifts[idx];
            for &s in &self.rosters[idx] {
                entries.push(Assignment::new(
                    self.staff[s].id.clone(),
                    shift.id.clone(),
                    shift.date(),
                    shift.duration_hours(),
                ));
            }
        }
        entries
    }

    /// Per-staff rollups, in staff order.
    pub(crate) fn staff_utilization(&self) -> Vec<StaffUtilization> {
        self.staff
            .iter()
            .enumerate()
            .map(|(i, person)| StaffUtilization {
                staff_id: person.id.clone(),
                name: person.display_name().to_string(),
                total_hours: self.total_hours[i],
                shifts_assigned: self.assigned_shifts[i].len(),
                days_worked: self.days[i].len(),
            })
            .collect()
    }

    /// Assembles the result bundle from the current state.
    pub(crate) fn build_result(
        &self,
        label: &str,
        score: StrategyScore,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ScheduleResult {
        ScheduleResult {
            strategy: label.to_string(),
            start_date,
            end_date,
            schedule: self.grouped_schedule(),
            summary: self.summary(),
            assignments: self.ledger(),
            staff_utilization: self.staff_utilization(),
            score,
        }
    }
}
