//! Command operators for the NAD control protocol.
//!
//! Every command is a variable name followed by one operator character and,
//! for assignments, a value.

use std::fmt;

/// Operator applied to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operator {
    /// Read the current value (`?`).
    Query = b'?',
    /// Assign a new value (`=`).
    Assign = b'=',
    /// Step the value up (`+`).
    Increment = b'+',
    /// Step the value down (`-`).
    Decrement = b'-',
}

impl Operator {
    /// All operators, in the order the receiver documentation lists them.
    pub const ALL: [Self; 4] = [Self::Assign, Self::Increment, Self::Decrement, Self::Query];

    /// Parses an operator from its wire character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Self::Query),
            '=' => Some(Self::Assign),
            '+' => Some(Self::Increment),
            '-' => Some(Self::Decrement),
            _ => None,
        }
    }

    /// Returns the wire character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Returns true if the operator carries a value on the wire.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Assign)
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Query => 0x01,
            Self::Assign => 0x02,
            Self::Increment => 0x04,
            Self::Decrement => 0x08,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Operator> for u8 {
    fn from(op: Operator) -> Self {
        op as Self
    }
}

/// Set of operators a variable accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorSet(u8);

impl OperatorSet {
    /// No operators.
    pub const EMPTY: Self = Self(0);
    /// Query only (read-only telemetry).
    pub const QUERY: Self = Self::EMPTY.with(Operator::Query);
    /// Assign only (write-only triggers such as IR codes).
    pub const ASSIGN: Self = Self::EMPTY.with(Operator::Assign);
    /// Increment and decrement only.
    pub const STEP: Self = Self::EMPTY
        .with(Operator::Increment)
        .with(Operator::Decrement);
    /// Every operator; the default for a variable.
    pub const ALL: Self = Self::QUERY
        .with(Operator::Assign)
        .with(Operator::Increment)
        .with(Operator::Decrement);

    /// Returns a copy of the set with `op` added.
    #[must_use]
    pub const fn with(self, op: Operator) -> Self {
        Self(self.0 | op.bit())
    }

    /// Returns true if `op` is in the set.
    #[must_use]
    pub const fn contains(self, op: Operator) -> bool {
        self.0 & op.bit() != 0
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the operators in the set.
    pub fn iter(self) -> impl Iterator<Item = Operator> {
        Operator::ALL.into_iter().filter(move |op| self.contains(*op))
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for op in self.iter() {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_chars() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.as_char()), Some(op));
        }
        assert_eq!(Operator::from_char('!'), None);
        assert_eq!(u8::from(Operator::Query), b'?');
    }

    #[test]
    fn test_default_set_is_all() {
        let set = OperatorSet::default();
        for op in Operator::ALL {
            assert!(set.contains(op));
        }
        assert_eq!(set.to_string(), "=+-?");
    }

    #[test]
    fn test_restricted_sets() {
        assert!(OperatorSet::QUERY.contains(Operator::Query));
        assert!(!OperatorSet::QUERY.contains(Operator::Assign));
        assert_eq!(OperatorSet::STEP.to_string(), "+-");
        assert_eq!(OperatorSet::EMPTY.to_string(), "none");

        let collected: OperatorSet = [Operator::Increment, Operator::Decrement]
            .into_iter()
            .collect();
        assert_eq!(collected, OperatorSet::STEP);
    }
}
