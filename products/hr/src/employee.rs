use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{HrError, HrResult, Role};

/// Basic salary used when none is given at creation.
pub const DEFAULT_BASIC_SALARY: f64 = 5000.0;

/// A single roster entry. Only the bonus can change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Employee {
    name: String,
    employee_id: i64,
    role: Role,
    basic_salary: f64,
    bonus: f64,
}

impl Employee {
    /// Build a validated employee; `basic_salary` falls back to
    /// [`DEFAULT_BASIC_SALARY`] when `None`.
    pub fn new(
        name: impl Into<String>,
        employee_id: i64,
        role: Role,
        basic_salary: Option<f64>,
    ) -> HrResult<Self> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(HrError::invalid("name must not be blank"));
        }
        if employee_id <= 0 {
            return Err(HrError::invalid(format!(
                "employee id must be positive, got {employee_id}"
            )));
        }
        let basic_salary = basic_salary.unwrap_or(DEFAULT_BASIC_SALARY);
        ensure_amount("basic salary", basic_salary)?;

        Ok(Self {
            name: name.to_string(),
            employee_id,
            role,
            basic_salary,
            bonus: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn basic_salary(&self) -> f64 {
        self.basic_salary
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    pub fn total_salary(&self) -> f64 {
        self.basic_salary + self.bonus
    }

    /// Replace the bonus. A rejected value leaves the previous bonus in place.
    pub fn set_bonus(&mut self, bonus: f64) -> HrResult<()> {
        ensure_amount("bonus", bonus)?;
        if !(self.basic_salary + bonus).is_finite() {
            return Err(HrError::invalid(format!(
                "bonus {bonus} overflows total salary"
            )));
        }
        self.bonus = bonus;
        Ok(())
    }
}

fn ensure_amount(field: &str, value: f64) -> HrResult<()> {
    if !value.is_finite() {
        return Err(HrError::invalid(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(HrError::invalid(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

impl Serialize for Employee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Employee", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("employee_id", &self.employee_id)?;
        state.serialize_field("role", &self.role)?;
        state.serialize_field("basic_salary", &self.basic_salary)?;
        state.serialize_field("bonus", &self.bonus)?;
        state.serialize_field("total_salary", &self.total_salary())?;
        state.end()
    }
}
