//! trackme-domain
//!
//! Pure domain models (Transaction, Budget, RecurringRule, Goal) plus the
//! period and cadence arithmetic they share. No I/O, no clock access.

pub mod budget;
pub mod common;
pub mod goal;
pub mod recurring;
pub mod transaction;

pub use budget::*;
pub use common::*;
pub use goal::*;
pub use recurring::*;
pub use transaction::*;
