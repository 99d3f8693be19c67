//! In-memory value source.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use analyzer_template_core::{
    application::{ApplicationError, ports::VarSource},
    domain::UserVar,
    error::ScaffoldResult,
};

/// Thread-safe answers keyed by variable name.
#[derive(Debug, Clone, Default)]
pub struct MemoryVarSource {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryVarSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding `answers`.
    pub fn from_answers<K, V>(answers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let answers = answers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            inner: Arc::new(RwLock::new(answers)),
        }
    }

    /// Add or replace an answer.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.insert(name.into(), value.into());
        Ok(())
    }

    pub fn len(&self) -> ScaffoldResult<usize> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.len())
    }

    pub fn is_empty(&self) -> ScaffoldResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn lock_poisoned() -> ApplicationError {
    ApplicationError::VarSource {
        reason: "answer store lock poisoned".into(),
    }
}

impl VarSource for MemoryVarSource {
    fn value_for(&self, var: &UserVar) -> ScaffoldResult<Option<String>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.get(var.name()).cloned())
    }
}
