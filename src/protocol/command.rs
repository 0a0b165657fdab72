//! Protocol commands.
//!
//! A command is `<name><operator>[<value>]` with no separating whitespace,
//! for example `Main.Volume?`, `Main.Volume=-11` or `Ipod.Track+`.

use std::fmt;

use crate::protocol::Operator;

/// A single command sent to the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    operator: Operator,
    value: Option<String>,
}

impl Command {
    /// Creates a query command (`<name>?`).
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self::without_value(name, Operator::Query)
    }

    /// Creates an assignment command (`<name>=<value>`).
    #[must_use]
    pub fn assign(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operator: Operator::Assign,
            value: Some(value.into()),
        }
    }

    /// Creates an increment command (`<name>+`).
    #[must_use]
    pub fn increment(name: impl Into<String>) -> Self {
        Self::without_value(name, Operator::Increment)
    }

    /// Creates a decrement command (`<name>-`).
    #[must_use]
    pub fn decrement(name: impl Into<String>) -> Self {
        Self::without_value(name, Operator::Decrement)
    }

    fn without_value(name: impl Into<String>, operator: Operator) -> Self {
        Self {
            name: name.into(),
            operator,
            value: None,
        }
    }

    /// Variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Operator.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// Assigned value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.operator)?;
        if let Some(value) = &self.value {
            f.write_str(value)?;
        }
        Ok(())
    }
}
