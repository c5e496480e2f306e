use chrono::Local;

use crate::{ActionLog, Employee, HrError, HrResult};

pub const MIN_CAPACITY: usize = 2;
pub const MAX_CAPACITY: usize = 5;

/// Result of [`Roster::add`]. Rejections are ordinary outcomes, not errors.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AddOutcome {
    Added,
    Full,
    DuplicateId,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        matches!(self, AddOutcome::Added)
    }

    fn as_str(self) -> &'static str {
        match self {
            AddOutcome::Added => "added",
            AddOutcome::Full => "full",
            AddOutcome::DuplicateId => "duplicate_id",
        }
    }
}

/// Result of [`Roster::update_bonus`].
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UpdateOutcome {
    Updated,
    UnknownId,
    InvalidBonus,
}

impl UpdateOutcome {
    pub fn is_updated(self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }

    fn as_str(self) -> &'static str {
        match self {
            UpdateOutcome::Updated => "updated",
            UpdateOutcome::UnknownId => "unknown_id",
            UpdateOutcome::InvalidBonus => "invalid_bonus",
        }
    }
}

/// Bounded, insertion-ordered set of employees keyed by employee id.
pub struct Roster {
    capacity: usize,
    employees: Vec<Employee>,
    sink: Box<dyn ActionLog>,
}

impl Roster {
    pub fn new(capacity: usize, log: Box<dyn ActionLog>) -> HrResult<Self> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(HrError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            employees: Vec::with_capacity(capacity),
            sink: log,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.employees.len() >= self.capacity
    }

    pub fn add(&mut self, employee: Employee) -> AddOutcome {
        let id = employee.employee_id();
        let (outcome, message) = if self.is_full() {
            let message = format!(
                "Rejected employee {} (ID {id}): roster is full ({} of {})",
                employee.name(),
                self.len(),
                self.capacity
            );
            (AddOutcome::Full, message)
        } else if self.exists(id) {
            let message = format!(
                "Rejected employee {} (ID {id}): employee ID already exists",
                employee.name()
            );
            (AddOutcome::DuplicateId, message)
        } else {
            let message = format!(
                "Added employee {} (ID {id}) as {}",
                employee.name(),
                employee.role()
            );
            self.employees.push(employee);
            (AddOutcome::Added, message)
        };
        self.log(&message);
        tracing::info!(employee_id = id, outcome = outcome.as_str(), "roster add");
        outcome
    }

    pub fn update_bonus(&mut self, employee_id: i64, bonus: f64) -> UpdateOutcome {
        let outcome = match self.get_mut(employee_id) {
            None => UpdateOutcome::UnknownId,
            Some(employee) => match employee.set_bonus(bonus) {
                Ok(()) => UpdateOutcome::Updated,
                Err(_) => UpdateOutcome::InvalidBonus,
            },
        };
        let message = match outcome {
            UpdateOutcome::Updated => format!("Updated bonus for ID {employee_id} to {bonus:.2}"),
            UpdateOutcome::UnknownId => {
                format!("Bonus update failed: no employee with ID {employee_id}")
            }
            UpdateOutcome::InvalidBonus => {
                format!("Bonus update failed for ID {employee_id}: invalid bonus {bonus}")
            }
        };
        self.log(&message);
        tracing::info!(employee_id, outcome = outcome.as_str(), "roster bonus update");
        outcome
    }

    pub fn exists(&self, employee_id: i64) -> bool {
        self.get(employee_id).is_some()
    }

    pub fn get(&self, employee_id: i64) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|employee| employee.employee_id() == employee_id)
    }

    fn get_mut(&mut self, employee_id: i64) -> Option<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|employee| employee.employee_id() == employee_id)
    }

    /// Employees in insertion order.
    pub fn list_all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn log(&mut self, message: &str) {
        tracing::debug!(action = message, "action log");
        self.sink.append(Local::now(), message);
    }
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roster")
            .field("capacity", &self.capacity)
            .field("employees", &self.employees)
            .finish_non_exhaustive()
    }
}
