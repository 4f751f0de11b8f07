//! Staff member model.
//!
//! A staff member is the entity shifts are allocated to. Each member
//! carries skill tags, an ordered list of preferred shift types, a set
//! of unavailable weekdays, and a weekly hour cap.
//!
//! # Weekday Convention
//! Weekdays are integers 0..=6 with Monday = 0 and Sunday = 6
//! (`chrono::Weekday::num_days_from_monday`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A staff member available for shift allocation.
///
/// Allocation strategies never mutate this record; run-scoped
/// assignment state lives inside the allocation pass and is returned
/// to the caller as an explicit ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Display name used in schedule projections. Falls back to `id`
    /// when empty.
    pub name: String,
    /// Skill tags this member holds.
    pub skills: Vec<String>,
    /// Shift types this member prefers, in preference order.
    pub preferred_shift_types: Vec<String>,
    /// Weekdays (0 = Monday .. 6 = Sunday) this member must never work.
    pub unavailable_days: Vec<u8>,
    /// Maximum hours this member may be assigned per week.
    pub max_hours_per_week: f64,
    /// Domain-specific key-value metadata.
    pub attributes: HashMap<String, String>,
}

impl Staff {
    /// Creates a new staff member with the given ID and a 40-hour cap.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            skills: Vec::new(),
            preferred_shift_types: Vec::new(),
            unavailable_days: Vec::new(),
            max_hours_per_week: 40.0,
            attributes: HashMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Adds a preferred shift type (appended to the preference order).
    pub fn with_preferred_type(mut self, shift_type: impl Into<String>) -> Self {
        self.preferred_shift_types.push(shift_type.into());
        self
    }

    /// Marks a weekday (0 = Monday .. 6 = Sunday) as unavailable.
    pub fn with_unavailable_day(mut self, weekday: u8) -> Self {
        self.unavailable_days.push(weekday);
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_max_hours(mut self, max_hours_per_week: f64) -> Self {
        self.max_hours_per_week = max_hours_per_week;
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether this member holds a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Whether this member lists a shift type as preferred.
    pub fn prefers_type(&self, shift_type: &str) -> bool {
        self.preferred_shift_types.iter().any(|t| t == shift_type)
    }

    /// Whether this member may work on a given weekday (0 = Monday).
    pub fn is_available_on(&self, weekday: u8) -> bool {
        !self.unavailable_days.contains(&weekday)
    }

    /// Display name, falling back to the ID when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
