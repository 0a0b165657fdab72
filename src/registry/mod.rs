//! Variable registries for each receiver model.
//!
//! A [`Registry`] maps dotted variable names (`Main.Volume`, `Zone2.Mute`,
//! `Tuner.FM.Frequency`, ...) to their [`Variable`] descriptors. Every model
//! shares the [`base`] table; [`models`] lists what each model adds or
//! replaces. Registries are built once, on first use, and never change.

pub mod base;
pub mod models;
pub mod variable;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{Error, Result};

pub use variable::{AllowedValues, Value, ValueRange, Variable};

/// Supported receiver models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Command set common to all models.
    Generic,
    /// NAD T777.
    T777,
    /// NAD T787.
    T787,
    /// NAD T187.
    T187,
}

impl Model {
    /// All models.
    pub const ALL: [Self; 4] = [Self::Generic, Self::T777, Self::T787, Self::T187];

    /// Returns the model name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::T777 => "T777",
            Self::T787 => "T787",
            Self::T187 => "T187",
        }
    }

    /// Returns the entries this model adds to or replaces in the base table.
    #[must_use]
    pub const fn overrides(self) -> &'static [(&'static str, Variable)] {
        match self {
            Self::Generic => &[],
            Self::T777 => models::T777_OVERRIDES,
            Self::T787 => models::T787_OVERRIDES,
            Self::T187 => models::T187_OVERRIDES,
        }
    }

    /// Returns the model's registry, building it on first use.
    #[must_use]
    pub fn registry(self) -> &'static Registry {
        static GENERIC: OnceLock<Registry> = OnceLock::new();
        static T777: OnceLock<Registry> = OnceLock::new();
        static T787: OnceLock<Registry> = OnceLock::new();
        static T187: OnceLock<Registry> = OnceLock::new();

        let cell = match self {
            Self::Generic => &GENERIC,
            Self::T777 => &T777,
            Self::T787 => &T787,
            Self::T187 => &T187,
        };
        cell.get_or_init(|| Registry::compose(self, base::BASE, self.overrides()))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown model name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown receiver model '{0}'")]
pub struct UnknownModel(pub String);

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownModel(s.to_owned()))
    }
}

/// Immutable mapping from variable name to descriptor for one model.
#[derive(Debug, Clone)]
pub struct Registry {
    model: Model,
    variables: BTreeMap<&'static str, Variable>,
}

impl Registry {
    /// Builds a registry from a base table and a list of overrides.
    ///
    /// Overrides replace base entries with the same name; new names extend
    /// the table.
    #[must_use]
    pub fn compose(
        model: Model,
        base: &[(&'static str, Variable)],
        overrides: &[(&'static str, Variable)],
    ) -> Self {
        let mut variables: BTreeMap<_, _> = base.iter().copied().collect();
        let mut replaced = 0usize;
        for &(name, variable) in overrides {
            if variables.insert(name, variable).is_some() {
                replaced += 1;
            }
        }
        tracing::debug!(
            "built {} registry: {} variables, {} overrides ({} replaced)",
            model,
            variables.len(),
            overrides.len(),
            replaced
        );
        Self { model, variables }
    }

    /// Returns the model this registry describes.
    #[must_use]
    pub const fn model(&self) -> Model {
        self.model
    }

    /// Looks up a variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVariable`] if the name is not in the registry.
    pub fn lookup(&self, name: &str) -> Result<&Variable> {
        self.get(name).ok_or_else(|| Error::UnknownVariable {
            name: name.to_owned(),
        })
    }

    /// Returns the variable for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Returns true if `name` is in the registry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates all variables ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Variable)> {
        self.variables.iter().map(|(name, variable)| (*name, variable))
    }

    /// Iterates the variables of one subsystem, e.g. `Zone2` or `Tuner.FM`.
    pub fn subsystem<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'static str, &'a Variable)> + 'a {
        self.iter().filter(move |(name, _)| {
            name.strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}
