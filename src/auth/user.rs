use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The data of one authenticated user, as handed over by the credential
/// lookup: attribute name to arbitrary JSON value. Carries at least an
/// identity field; may carry an `admin` flag.
///
/// An empty record is never a valid login subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl UserRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert, convenient at construction sites.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для UserRecord
////////////////////////////////////////////////////////////////////////////////

impl From<Map<String, Value>> for UserRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for UserRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_record() {
        let record = UserRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert_eq!(record.get("id"), None);
    }

    #[test]
    fn test_with_builds_record() {
        let record = UserRecord::new()
            .with("id", 1)
            .with("username", "PeeHaa")
            .with("admin", true);

        assert!(!record.is_empty());
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("id"), Some(&json!(1)));
        assert_eq!(record.get("username"), Some(&json!("PeeHaa")));
        assert!(record.contains_key("admin"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = UserRecord::new().with("id", 1);
        let previous = record.insert("id", 2);

        assert_eq!(previous, Some(json!(1)));
        assert_eq!(record.get("id"), Some(&json!(2)));
    }

    #[test]
    fn test_serde_transparent() {
        let record = UserRecord::new().with("id", 1).with("admin", false);
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: UserRecord = serde_json::from_str(&encoded).unwrap();

        // сериализуется как обычный JSON-объект, без обёртки
        assert_eq!(encoded, r#"{"admin":false,"id":1}"#);
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_nested_values() {
        let record = UserRecord::new().with("profile", json!({"theme": "dark"}));
        assert_eq!(record.get("profile"), Some(&json!({"theme": "dark"})));
    }
}
