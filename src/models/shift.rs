//! Shift slot model.
//!
//! A shift is a bounded time interval requiring a number of staff with
//! specified skills, tagged with a shift type ("morning", "night", ...).

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Default shift type applied when none is given.
pub const DEFAULT_SHIFT_TYPE: &str = "regular";

/// A shift slot to be staffed.
///
/// Strategies read this record and report assignments through the
/// result ledger; the slot itself is never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Shift start.
    pub start: NaiveDateTime,
    /// Shift end. Expected to be after `start`.
    pub end: NaiveDateTime,
    /// Shift type tag used for preference matching.
    pub shift_type: String,
    /// Skill tags every assigned member must hold.
    pub required_skills: Vec<String>,
    /// Number of staff this slot needs.
    pub required_staff: usize,
}

impl Shift {
    /// Creates a new shift slot of type [`DEFAULT_SHIFT_TYPE`] needing
    /// one staff member.
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            shift_type: DEFAULT_SHIFT_TYPE.to_string(),
            required_skills: Vec::new(),
            required_staff: 1,
        }
    }

    /// Sets the shift type tag.
    pub fn with_shift_type(mut self, shift_type: impl Into<String>) -> Self {
        self.shift_type = shift_type.into();
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Sets the required staff count.
    pub fn with_required_staff(mut self, required_staff: usize) -> Self {
        self.required_staff = required_staff;
        self
    }

    /// Shift duration in hours (fractional for sub-hour intervals).
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_minutes() as f64 / 60.0
    }

    /// Calendar date the shift starts on.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Weekday the shift starts on (0 = Monday .. 6 = Sunday).
    #[inline]
    pub fn weekday(&self) -> u8 {
        self.start.weekday().num_days_from_monday() as u8
    }
}
