//! Rostering domain models.
//!
//! Core data types for shift allocation: the input records
//! ([`Staff`], [`Shift`]) and the output bundle ([`ScheduleResult`]
//! with its ledger, projection, summary, and score types).
//!
//! Input records are plain data constructed by the caller (typically a
//! persistence layer) through builder methods. The engine only reads
//! them; allocation outcomes are reported through the result ledger.

mod result;
mod shift;
mod staff;

pub use result::{
    Assignment, ScheduleResult, ScheduleSummary, ScheduledShift, StaffUtilization, StrategyScore,
};
pub use shift::{Shift, DEFAULT_SHIFT_TYPE};
pub use staff::Staff;
