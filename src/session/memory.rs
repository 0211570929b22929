use std::collections::HashMap;

use super::store::SessionStore;
use crate::auth::UserRecord;

pub struct InMemorySession {
    data: HashMap<String, UserRecord>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for InMemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySession {
    fn exists(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
    fn get(&self, key: &str) -> Option<UserRecord> {
        self.data.get(key).cloned()
    }
    fn set(&mut self, key: &str, user: UserRecord) {
        self.data.insert(key.to_string(), user);
    }
    fn destroy(&mut self) {
        self.data.clear();
    }
}
