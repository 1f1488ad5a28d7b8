use crate::domain::roster::Roster;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Byte-level file access used by the roster store.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// True only for an existing regular file.
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Persisted roster state as seen by the session.
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn exists(&self) -> bool;
    async fn load(&self) -> Result<Roster>;
    async fn save(&self, roster: &Roster) -> Result<()>;
    /// Deletes the persisted state so the next run starts empty.
    async fn clear(&self) -> Result<()>;
    fn location(&self) -> String;
}
