use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

/// Server-side session record.
///
/// A named map of values addressed by a random identifier. Changes only take
/// effect once the session is saved back to its store.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: String,
    name: String,
    values: HashMap<String, Value>,
    /// Lifetime in seconds; negative marks the session for deletion
    max_age: i64,
    is_new: bool,
}

impl Session {
    /// Create an empty session with a fresh identifier.
    pub fn new(name: impl Into<String>, max_age: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            values: HashMap::new(),
            max_age,
            is_new: true,
        }
    }

    /// Rebuild a previously persisted session.
    pub fn restore(
        id: impl Into<String>,
        name: impl Into<String>,
        values: HashMap<String, Value>,
        max_age: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values,
            max_age,
            is_new: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True until the session has been loaded back from a store.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    pub fn max_age(&self) -> i64 {
        self.max_age
    }

    pub fn set_max_age(&mut self, max_age: i64) {
        self.max_age = max_age;
    }

    /// Mark the session for deletion on the next save.
    pub fn expire(&mut self) {
        self.max_age = -1;
    }

    pub fn is_expired(&self) -> bool {
        self.max_age < 0
    }
}
