use crate::domain::ports::{RosterStore, Storage};
use crate::domain::roster::Roster;
use crate::utils::error::{Result, RosterError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Roster persisted as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonRosterStore<S: Storage> {
    storage: S,
    path: String,
    pretty: bool,
}

impl<S: Storage> JsonRosterStore<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// JSON has no representation for infinite or NaN tenure, so such rosters are refused.
    pub fn encode(&self, roster: &Roster) -> Result<Vec<u8>> {
        if let Some(employee) = roster.iter().find(|e| !e.tenure.is_finite()) {
            return Err(RosterError::UnsupportedValue {
                field: format!("tenure of '{}'", employee.name),
                value: employee.tenure.to_string(),
            });
        }

        let mut data = if self.pretty {
            serde_json::to_vec_pretty(roster)?
        } else {
            serde_json::to_vec(roster)?
        };
        data.push(b'\n');
        Ok(data)
    }

    /// A `null` document is an empty roster; older releases wrote one for an empty list.
    pub fn decode(&self, data: &[u8]) -> Result<Roster> {
        let roster: Option<Roster> =
            serde_json::from_slice(data).map_err(|source| RosterError::Decode {
                path: PathBuf::from(&self.path),
                source,
            })?;
        Ok(roster.unwrap_or_default())
    }
}

#[async_trait]
impl<S: Storage> RosterStore for JsonRosterStore<S> {
    async fn exists(&self) -> bool {
        self.storage.exists(&self.path).await
    }

    async fn load(&self) -> Result<Roster> {
        let data = self.storage.read_file(&self.path).await?;
        let roster = self.decode(&data)?;
        tracing::debug!("Loaded {} employees from {}", roster.len(), self.path);
        Ok(roster)
    }

    async fn save(&self, roster: &Roster) -> Result<()> {
        let data = self.encode(roster)?;
        self.storage.write_file(&self.path, &data).await?;
        tracing::info!("Saved {} employees to {}", roster.len(), self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.storage.remove_file(&self.path).await?;
        tracing::info!("Removed roster file {}", self.path);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;

    fn store() -> JsonRosterStore<LocalStorage> {
        JsonRosterStore::new(LocalStorage::default(), "employees.json")
    }

    #[test]
    fn test_decode_null_as_empty() {
        let roster = store().decode(b"null\n").unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        let err = store().decode(b"[{\"fullname\": 1}]").unwrap_err();
        assert!(matches!(err, RosterError::Decode { .. }));
        assert!(err.to_string().starts_with("decode failed:"));
    }

    #[test]
    fn test_decode_empty_file_fails() {
        assert!(store().decode(b"").is_err());
    }

    #[test]
    fn test_non_finite_tenure_not_encoded() {
        for tenure in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, -f64::NAN] {
            let mut roster = Roster::new();
            roster.add("A", "Dev", 1.0);
            roster.add("B", "Dev", tenure);

            let err = store().encode(&roster).unwrap_err();
            assert!(matches!(err, RosterError::UnsupportedValue { .. }));
            assert!(err.to_string().contains("tenure of 'B'"));
        }
    }

    #[test]
    fn test_compact_encoding() {
        let mut roster = Roster::new();
        roster.add("A", "Dev", 1.5);

        let data = store().with_pretty(false).encode(&roster).unwrap();

        assert_eq!(
            String::from_utf8(data).unwrap(),
            "[{\"fullname\":\"A\",\"position\":\"Dev\",\"experience\":1.5}]\n"
        );
    }
}
