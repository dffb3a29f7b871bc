// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Function configuration seam.
//!
//! The helpers in this crate never own a function definition. They borrow
//! anything implementing [`FunctionConfig`] for the duration of one call and
//! read or write named environment entries on it.

use std::collections::BTreeMap;

/// Mutable view over the environment of a deployable function.
pub trait FunctionConfig {
    /// Current value of the environment entry `name`, if set.
    fn environment_value(&self, name: &str) -> Option<&str>;

    /// Set (or overwrite) the environment entry `name`.
    fn add_environment(&mut self, name: &str, value: &str);
}

impl<T: FunctionConfig + ?Sized> FunctionConfig for &mut T {
    fn environment_value(&self, name: &str) -> Option<&str> {
        (**self).environment_value(name)
    }

    fn add_environment(&mut self, name: &str, value: &str) {
        (**self).add_environment(name, value);
    }
}

impl<T: FunctionConfig + ?Sized> FunctionConfig for Box<T> {
    fn environment_value(&self, name: &str) -> Option<&str> {
        (**self).environment_value(name)
    }

    fn add_environment(&mut self, name: &str, value: &str) {
        (**self).add_environment(name, value);
    }
}

/// In-memory function environment, ordered by variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionEnvironment {
    name: String,
    variables: BTreeMap<String, String>,
}

impl FunctionEnvironment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_variables<I, K, V>(name: impl Into<String>, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            variables: variables
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }
}

impl FunctionConfig for FunctionEnvironment {
    fn environment_value(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    fn add_environment(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }
}
