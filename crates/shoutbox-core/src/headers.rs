//! Ordered custom headers

use crate::{CoreError, CoreResult};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Caller-supplied headers, kept in insertion order
///
/// Names compare ASCII case-insensitively. Inserting a name that is already
/// present replaces its value but keeps its original position, so the last
/// value for a name wins and the output order never depends on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a header
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a header value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every header can be written to a message without corrupting it
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in self.iter() {
            validate_header_name(name)?;
            validate_header_value(name, value)?;
        }
        Ok(())
    }
}

/// Header names are printable ASCII (RFC 5322 ftext), never empty
pub fn validate_header_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidHeader {
            name: name.to_string(),
            reason: "empty name".to_string(),
        });
    }
    if let Some(c) = name.chars().find(|&c| !matches!(c, '!'..='9' | ';'..='~')) {
        return Err(CoreError::InvalidHeader {
            name: name.to_string(),
            reason: format!("illegal character {:?} in name", c),
        });
    }
    Ok(())
}

/// Values must stay on one line
pub fn validate_header_value(name: &str, value: &str) -> CoreResult<()> {
    if value.contains(['\r', '\n']) {
        return Err(CoreError::InvalidHeader {
            name: name.to_string(),
            reason: "value contains a line break".to_string(),
        });
    }
    Ok(())
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_and_replacement() {
        let mut headers = Headers::new();
        headers.insert("X-B", "1");
        headers.insert("X-A", "2");
        headers.insert("x-b", "3");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(entries, vec![("X-B", "3"), ("X-A", "2")]);
        assert_eq!(headers.get("X-B"), Some("3"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let headers: Headers = [("X-Zeta", "z"), ("X-Alpha", "a")].into_iter().collect();
        let json = serde_json::to_string(&headers).unwrap();
        assert_eq!(json, r#"{"X-Zeta":"z","X-Alpha":"a"}"#);
    }

    #[test]
    fn test_validation() {
        let ok: Headers = [("X-Application", "Shoutbox Example")].into_iter().collect();
        assert!(ok.validate().is_ok());

        let injected: Headers = [("X-Test", "a\r\nBcc: victim@example.com")].into_iter().collect();
        assert!(injected.validate().is_err());

        let bad_name: Headers = [("X Test", "v")].into_iter().collect();
        assert!(bad_name.validate().is_err());

        let colon: Headers = [("X-Test:", "v")].into_iter().collect();
        assert!(colon.validate().is_err());

        let empty: Headers = [("", "v")].into_iter().collect();
        assert!(empty.validate().is_err());
    }
}
