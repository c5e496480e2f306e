//! HR module: employee records and the bounded in-memory roster.

mod employee;
mod error;
mod log;
mod role;
mod roster;

pub use employee::{DEFAULT_BASIC_SALARY, Employee};
pub use error::{HrError, HrResult};
pub use log::{ActionLog, ConsoleLog, MemoryLog};
pub use role::Role;
pub use roster::{AddOutcome, MAX_CAPACITY, MIN_CAPACITY, Roster, UpdateOutcome};
