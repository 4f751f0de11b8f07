//! Staff shift rostering engine.
//!
//! Allocates work shifts to staff under availability, skill, and
//! hour-cap constraints using interchangeable allocation strategies
//! selected at call time. The engine is a fast, deterministic
//! heuristic allocator: it does not persist data, does not enforce
//! authorization, and does not chase global optimality. Callers load
//! records into [`models::Staff`] / [`models::Shift`], pick a strategy
//! by name, and apply the returned assignment ledger however they
//! see fit.
//!
//! # Modules
//!
//! - **`models`**: domain types: `Staff`, `Shift`, and the
//!   `ScheduleResult` output bundle (ledger, projection, summary,
//!   score)
//! - **`strategies`**: the `SchedulingStrategy` contract and the five
//!   built-in allocation policies
//! - **`scheduler`**: the name-keyed strategy registry
//! - **`validation`**: optional pre-flight input checks
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use shift_roster::{Scheduler, Shift, Staff};
//!
//! let staff = vec![
//!     Staff::new("alice").with_skill("cashier"),
//!     Staff::new("bob").with_skill("cashier"),
//! ];
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let tuesday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let shifts = vec![
//!     Shift::new(
//!         "mon-open",
//!         monday.and_hms_opt(8, 0, 0).unwrap(),
//!         monday.and_hms_opt(16, 0, 0).unwrap(),
//!     )
//!     .with_required_skill("cashier"),
//!     Shift::new(
//!         "tue-open",
//!         tuesday.and_hms_opt(8, 0, 0).unwrap(),
//!         tuesday.and_hms_opt(16, 0, 0).unwrap(),
//!     ),
//! ];
//!
//! let scheduler = Scheduler::new();
//! let result = scheduler
//!     .generate_schedule("even_distribute", &staff, &shifts, monday, tuesday)
//!     .unwrap();
//!
//! assert_eq!(result.summary.total_shifts_assigned, 2);
//! assert!((result.summary.total_hours_assigned - 16.0).abs() < 1e-10);
//! ```
//!
//! # Concurrency
//!
//! Strategies only read the staff/shift slices they are given; all
//! run-scoped state is internal and every outcome is reported through
//! the result ledger. Concurrent calls may therefore share the same
//! input data.

pub mod models;
pub mod scheduler;
pub mod strategies;
pub mod validation;

pub use models::{ScheduleResult, Shift, Staff};
pub use scheduler::{Scheduler, SchedulerError};
pub use strategies::SchedulingStrategy;
