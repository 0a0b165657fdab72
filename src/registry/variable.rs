//! Variable descriptors.

use std::fmt;

use crate::protocol::OperatorSet;

/// Inclusive integer range with a step, e.g. `-12..=12` in steps of 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    /// Lowest legal value.
    pub start: i32,
    /// Highest legal value.
    pub end: i32,
    /// Distance between legal values, counted from `start`.
    pub step: i32,
}

impl ValueRange {
    /// Creates a range with a step of one.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self::stepped(start, end, 1)
    }

    /// Creates a stepped range.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive.
    #[must_use]
    pub const fn stepped(start: i32, end: i32, step: i32) -> Self {
        assert!(step > 0, "range step must be positive");
        Self { start, end, step }
    }

    /// Returns true if `value` lies within the bounds and on a step.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.start && value <= self.end && (value - self.start) % self.step == 0
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)?;
        if self.step != 1 {
            write!(f, " step {}", self.step)?;
        }
        Ok(())
    }
}

/// Legal values of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowedValues {
    /// Any non-empty value (IR codes, tuner frequencies), or no value at all
    /// for read-only and step-only variables.
    Unconstrained,
    /// One of a fixed set of tokens.
    Enumerated(&'static [&'static str]),
    /// An integer within a range.
    Range(ValueRange),
}

impl AllowedValues {
    /// Returns true if `value` is legal.
    ///
    /// Values are always checked for wire safety: they must be non-empty
    /// printable ASCII and must not contain the frame delimiter.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        let wire_safe =
            !value.is_empty() && value.bytes().all(|b| b.is_ascii_graphic() || b == b' ');
        if !wire_safe {
            return false;
        }
        match self {
            Self::Unconstrained => true,
            Self::Enumerated(tokens) => tokens.iter().any(|token| *token == value),
            // Only the canonical form, so `+5` or `05` never reach the wire
            Self::Range(range) => value
                .parse::<i32>()
                .is_ok_and(|v| range.contains(v) && v.to_string() == value),
        }
    }
}

impl fmt::Display for AllowedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconstrained => f.write_str("any value"),
            Self::Enumerated(tokens) => write!(f, "{{{}}}", tokens.join(", ")),
            Self::Range(range) => write!(f, "{range}"),
        }
    }
}

/// Static description of one protocol variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Human-readable description.
    pub description: &'static str,
    /// Legal values for assignment.
    pub allowed: AllowedValues,
    /// Legal operators.
    pub operators: OperatorSet,
}

impl Variable {
    /// Creates a variable accepting every operator.
    #[must_use]
    pub const fn new(description: &'static str, allowed: AllowedValues) -> Self {
        Self {
            description,
            allowed,
            operators: OperatorSet::ALL,
        }
    }

    /// Creates a variable taking one of `tokens`.
    #[must_use]
    pub const fn enumerated(description: &'static str, tokens: &'static [&'static str]) -> Self {
        Self::new(description, AllowedValues::Enumerated(tokens))
    }

    /// Creates an integer variable.
    #[must_use]
    pub const fn range(description: &'static str, range: ValueRange) -> Self {
        Self::new(description, AllowedValues::Range(range))
    }

    /// Creates a variable taking free-form values.
    #[must_use]
    pub const fn free_form(description: &'static str) -> Self {
        Self::new(description, AllowedValues::Unconstrained)
    }

    /// Creates a query-only variable.
    #[must_use]
    pub const fn read_only(description: &'static str) -> Self {
        Self::free_form(description).with_operators(OperatorSet::QUERY)
    }

    /// Restricts the legal operators.
    #[must_use]
    pub const fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    /// Parses a reply payload according to the variable's value type.
    ///
    /// Returns `None` if a range variable answered with a non-integer.
    #[must_use]
    pub fn parse(&self, payload: &str) -> Option<Value> {
        match self.allowed {
            AllowedValues::Range(_) => payload.parse().ok().map(Value::Integer),
            AllowedValues::Enumerated(_) | AllowedValues::Unconstrained => {
                Some(Value::Text(payload.to_owned()))
            }
        }
    }
}

/// A parsed variable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer setting (volume, levels, distances).
    Integer(i32),
    /// Token or free text.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
