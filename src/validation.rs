//! Input validation for rostering problems.
//!
//! Optional pre-flight checks over staff and shift records before
//! allocation. Detects:
//! - Duplicate staff or shift IDs
//! - Shifts whose end does not follow their start
//! - Shifts requiring zero staff
//! - Unavailable-day values outside 0..=6
//! - Non-positive weekly hour caps
//!
//! The engine itself never runs these checks; strategies degrade
//! gracefully on odd inputs instead. Callers that load records from
//! external sources can validate here first and report everything
//! found in one pass.

use std::collections::HashSet;

use crate::models::{Shift, Staff};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same ID.
    DuplicateId,
    /// A shift's end is not after its start.
    InvalidInterval,
    /// A shift requires zero staff.
    ZeroRequiredStaff,
    /// An unavailable-day value is outside 0..=6.
    InvalidWeekday,
    /// A staff member's weekly hour cap is zero or negative.
    InvalidHourCap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates staff and shift records for allocation.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(staff: &[Staff], shifts: &[Shift]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_ids = HashSet::new();
    for person in staff {
        if !staff_ids.insert(person.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", person.id),
            ));
        }

        for &day in &person.unavailable_days {
            if day > 6 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWeekday,
                    format!("Staff '{}' has unavailable day {day} outside 0..=6", person.id),
                ));
            }
        }

        if person.max_hours_per_week <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHourCap,
                format!(
                    "Staff '{}' has non-positive hour cap {}",
                    person.id, person.max_hours_per_week
                ),
            ));
        }
    }

    let mut shift_ids = HashSet::new();
    for shift in shifts {
        if !shift_ids.insert(shift.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {}", shift.id),
            ));
        }

        if shift.end <= shift.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!("Shift '{}' ends at or before its start", shift.id),
            ));
        }

        if shift.required_staff == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroRequiredStaff,
                format!("Shift '{}' requires zero staff", shift.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_valid_input_passes() {
        let staff = vec![Staff::new("alice"), Staff::new("bob").with_unavailable_day(6)];
        let shifts = vec![Shift::new("s1", dt(4, 8), dt(4, 16))];
        assert!(validate_input(&staff, &shifts).is_ok());
    }

    #[test]
    fn test_empty_input_passes() {
        assert!(validate_input(&[], &[]).is_ok());
    }

    #[test]
    fn test_duplicate_staff_id() {
        let staff = vec![Staff::new("alice"), Staff::new("alice")];
        let errors = validate_input(&staff, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_duplicate_shift_id() {
        let shifts = vec![
            Shift::new("s1", dt(4, 8), dt(4, 16)),
            Shift::new("s1", dt(5, 8), dt(5, 16)),
        ];
        let errors = validate_input(&[], &shifts).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_inverted_interval() {
        let shifts = vec![Shift::new("s1", dt(4, 16), dt(4, 8))];
        let errors = validate_input(&[], &shifts).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::InvalidInterval));
    }

    #[test]
    fn test_zero_required_staff() {
        let shifts = vec![Shift::new("s1", dt(4, 8), dt(4, 16)).with_required_staff(0)];
        let errors = validate_input(&[], &shifts).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroRequiredStaff));
    }

    #[test]
    fn test_out_of_range_weekday() {
        let staff = vec![Staff::new("alice").with_unavailable_day(7)];
        let errors = validate_input(&staff, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::InvalidWeekday));
    }

    #[test]
    fn test_non_positive_hour_cap() {
        let staff = vec![Staff::new("alice").with_max_hours(0.0)];
        let errors = validate_input(&staff, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::InvalidHourCap));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let staff = vec![Staff::new("a").with_max_hours(-1.0), Staff::new("a")];
        let shifts = vec![Shift::new("s", dt(4, 8), dt(4, 8))];
        let errors = validate_input(&staff, &shifts).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
