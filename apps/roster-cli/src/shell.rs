use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use products_hr::{AddOutcome, Employee, Roster, UpdateOutcome};

use crate::{config::DisplayFormat, prompt::Prompter};

const MENU: &str = "\n=== Employee Roster ===\n\
1. Add employee\n\
2. Update bonus\n\
3. Display all employees\n\
4. Exit";

pub const FAREWELL: &str = "Goodbye!";
pub const EMPTY_ROSTER: &str = "No employees to display.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop driving a [`Roster`] from line-based input.
///
/// The shell owns the roster for the whole session. Field validation
/// failures are reported and the menu is shown again; only I/O errors on
/// the underlying streams end [`Shell::run`] early.
pub struct Shell<R, W> {
    roster: Roster,
    prompt: Prompter<R, W>,
    format: DisplayFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(roster: Roster, prompt: Prompter<R, W>, format: DisplayFormat) -> Self {
        Self {
            roster,
            prompt,
            format,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Run until the user picks exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(capacity = self.roster.capacity(), "roster session started");
        loop {
            if self.step().context("roster session I/O failed")? == Flow::Exit {
                break;
            }
        }
        self.prompt.say(FAREWELL)?;
        tracing::info!(employees = self.roster.len(), "roster session finished");
        Ok(())
    }

    fn step(&mut self) -> std::io::Result<Flow> {
        self.prompt.say(MENU)?;
        let Some(choice) = self.prompt.ask("Choose an option: ")? else {
            return Ok(Flow::Exit);
        };
        match choice.trim() {
            "1" => self.add_employee(),
            "2" => self.update_bonus(),
            "3" => self.display().map(|()| Flow::Continue),
            "4" => Ok(Flow::Exit),
            other => {
                tracing::debug!(choice = other, "unknown menu choice");
                self.prompt.say("Invalid choice, please enter 1-4.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_employee(&mut self) -> std::io::Result<Flow> {
        let Some(name) = self.prompt.ask("Enter name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(employee_id) = self.prompt.ask_integer("Enter employee ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(role) = self.prompt.ask_role()? else {
            return Ok(Flow::Exit);
        };
        let Some(basic_salary) = self.prompt.ask_basic_salary()? else {
            return Ok(Flow::Exit);
        };

        let employee = match Employee::new(name, employee_id, role, basic_salary) {
            Ok(employee) => employee,
            Err(err) => {
                tracing::warn!(code = err.code(), error = %err, "employee rejected");
                self.prompt.say(format!("Could not add employee: {err}"))?;
                return Ok(Flow::Continue);
            }
        };

        let message = match self.roster.add(employee) {
            AddOutcome::Added => "Employee added successfully.".to_string(),
            AddOutcome::Full => format!(
                "Roster is full ({} employees); employee not added.",
                self.roster.capacity()
            ),
            AddOutcome::DuplicateId => {
                format!("An employee with ID {employee_id} already exists.")
            }
        };
        self.prompt.say(message)?;
        Ok(Flow::Continue)
    }

    fn update_bonus(&mut self) -> std::io::Result<Flow> {
        let Some(employee_id) = self.prompt.ask_integer("Enter employee ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(bonus) = self.prompt.ask_amount("Enter bonus: ")? else {
            return Ok(Flow::Exit);
        };

        let message = match self.roster.update_bonus(employee_id, bonus) {
            UpdateOutcome::Updated => "Bonus updated successfully.".to_string(),
            UpdateOutcome::UnknownId => format!("No employee found with ID {employee_id}."),
            UpdateOutcome::InvalidBonus => {
                "Bonus rejected: it must not be negative or push the total out of range."
                    .to_string()
            }
        };
        self.prompt.say(message)?;
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> std::io::Result<()> {
        let employees = self.roster.list_all();
        if employees.is_empty() {
            return self.prompt.say(EMPTY_ROSTER);
        }
        match self.format {
            DisplayFormat::Table => {
                let rows: Vec<String> = employees.iter().map(format_row).collect();
                for row in rows {
                    self.prompt.say(row)?;
                }
                Ok(())
            }
            DisplayFormat::Json => {
                let json = serde_json::to_string_pretty(employees)?;
                self.prompt.say(json)
            }
        }
    }
}

/// One display line; currency fields carry two decimals.
pub fn format_row(employee: &Employee) -> String {
    format!(
        "Name: {} | ID: {} | Role: {} | Basic: {:.2} | Bonus: {:.2} | Total: {:.2}",
        employee.name(),
        employee.employee_id(),
        employee.role(),
        employee.basic_salary(),
        employee.bonus(),
        employee.total_salary()
    )
}

#[cfg(test)]
mod tests {
    use products_hr::{MemoryLog, Role};

    use super::*;

    fn run_session(
        capacity: usize,
        format: DisplayFormat,
        script: &str,
    ) -> (String, Vec<Employee>, MemoryLog) {
        let log = MemoryLog::new();
        let roster = Roster::new(capacity, Box::new(log.clone())).unwrap();
        let prompt = Prompter::new(script.as_bytes(), Vec::new());
        let mut shell = Shell::new(roster, prompt, format);
        shell.run().unwrap();
        let employees = shell.roster().list_all().to_vec();
        let out = String::from_utf8(shell.into_output()).unwrap();
        (out, employees, log)
    }

    #[test]
    fn row_uses_two_decimals() {
        let mut emp = Employee::new("Alice", 1, Role::Engineer, None).unwrap();
        emp.set_bonus(500.0).unwrap();
        assert_eq!(
            format_row(&emp),
            "Name: Alice | ID: 1 | Role: Engineer | Basic: 5000.00 | Bonus: 500.00 | Total: 5500.00"
        );
    }

    #[test]
    fn empty_roster_is_reported() {
        let (out, employees, _) = run_session(2, DisplayFormat::Table, "3\n4\n");
        assert!(employees.is_empty());
        assert!(out.contains(EMPTY_ROSTER));
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn add_then_display() {
        let script = "1\nAlice\n1\nengineer\n\n1\nBob\n2\nHR\n6000\n3\n4\n";
        let (out, employees, log) = run_session(2, DisplayFormat::Table, script);
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].basic_salary(), 6000.0);
        assert!(out.contains("Name: Bob | ID: 2 | Role: HR | Basic: 6000.00"));
        assert_eq!(out.matches("Employee added successfully.").count(), 2);
        assert_eq!(log.messages().len(), 2);
    }

    #[test]
    fn blank_name_aborts_without_state_change() {
        let (out, employees, log) = run_session(2, DisplayFormat::Table, "1\n   \n1\nSales\n\n4\n");
        assert!(employees.is_empty());
        assert!(out.contains("Could not add employee: invalid argument: name must not be blank"));
        assert!(log.messages().is_empty());
    }

    #[test]
    fn negative_salary_is_reported() {
        let (out, employees, _) = run_session(2, DisplayFormat::Table, "1\nZed\n5\nIntern\n-1\n4\n");
        assert!(employees.is_empty());
        assert!(out.contains("basic salary must not be negative"));
    }

    #[test]
    fn invalid_salary_text_falls_back_to_default() {
        let (out, employees, _) = run_session(2, DisplayFormat::Table, "1\nZed\n5\nIntern\nabc\n4\n");
        assert_eq!(employees[0].basic_salary(), 5000.0);
        assert!(out.contains("Warning:"));
    }

    #[test]
    fn bonus_updates_and_rejections() {
        let script = "1\nAlice\n1\nEngineer\n\n2\n1\n500\n2\n99\n100\n2\n1\n-5\n4\n";
        let (out, employees, _) = run_session(2, DisplayFormat::Table, script);
        assert_eq!(employees[0].total_salary(), 5500.0);
        assert!(out.contains("Bonus updated successfully."));
        assert!(out.contains("No employee found with ID 99."));
        assert!(out.contains("Bonus rejected: it must not be negative or push the total out of range."));
    }

    #[test]
    fn duplicate_and_full_are_reported() {
        let script = "1\nAl\n1\nSales\n\n1\nAl2\n1\nSales\n\n1\nBo\n2\nSales\n\n1\nCy\n3\nSales\n\n4\n";
        let (out, employees, _) = run_session(2, DisplayFormat::Table, script);
        assert_eq!(employees.len(), 2);
        assert!(out.contains("An employee with ID 1 already exists."));
        assert!(out.contains("Roster is full (2 employees); employee not added."));
    }

    #[test]
    fn unknown_choice_and_eof() {
        let (out, _, _) = run_session(2, DisplayFormat::Table, "9\n");
        assert!(out.contains("Invalid choice, please enter 1-4."));
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn garbled_input_does_not_end_the_session() {
        let log = MemoryLog::new();
        let roster = Roster::new(2, Box::new(log.clone())).unwrap();
        let script: &[u8] = b"1\n\xff\xfeBob\n1\nEngineer\n\n1\nAlice\n\xff\n2\nSales\n\n3\n4\n";
        let mut shell = Shell::new(roster, Prompter::new(script, Vec::new()), DisplayFormat::Table);
        shell.run().unwrap();
        let names: Vec<&str> = shell.roster().list_all().iter().map(Employee::name).collect();
        assert_eq!(names, ["\u{fffd}\u{fffd}Bob", "Alice"]);
        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn json_listing() {
        let (out, _, _) = run_session(3, DisplayFormat::Json, "1\nAlice\n1\nManager\n\n3\n4\n");
        assert!(out.contains("\"employee_id\": 1"));
        assert!(out.contains("\"role\": \"Manager\""));
        assert!(out.contains("\"total_salary\": 5000.0"));
    }
}
