use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{HrError, HrResult};

/// Job category of an employee.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Role {
    Intern,
    Engineer,
    Manager,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Sales,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Intern,
        Role::Engineer,
        Role::Manager,
        Role::Hr,
        Role::Finance,
        Role::Sales,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Intern => "Intern",
            Role::Engineer => "Engineer",
            Role::Manager => "Manager",
            Role::Hr => "HR",
            Role::Finance => "Finance",
            Role::Sales => "Sales",
        }
    }

    /// Case-insensitive parse of a role label, ignoring surrounding whitespace.
    pub fn parse(text: &str) -> HrResult<Self> {
        let needle = text.trim();
        if needle.is_empty() {
            return Err(HrError::InvalidRole(text.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| HrError::InvalidRole(needle.to_string()))
    }
}

impl FromStr for Role {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Role::parse("engineer"), Ok(Role::Engineer));
        assert_eq!(Role::parse("  MANAGER\n"), Ok(Role::Manager));
        assert_eq!(Role::parse("hr"), Ok(Role::Hr));
        assert_eq!("Sales".parse::<Role>(), Ok(Role::Sales));
    }

    #[test]
    fn every_label_parses_back() {
        for role in Role::ALL {
            assert_eq!(Role::parse(&role.to_string()), Ok(role));
        }
    }

    #[test]
    fn blank_and_unknown_text_is_rejected() {
        assert_eq!(Role::parse("   "), Err(HrError::InvalidRole("   ".into())));
        assert_eq!(
            Role::parse(" janitor "),
            Err(HrError::InvalidRole("janitor".into()))
        );
    }
}
