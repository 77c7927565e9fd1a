use crate::error::Result;
use async_trait::async_trait;
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Overwrites any existing object with the same name.
    async fn upload(&self, filename: &str, content: &[u8]) -> Result<()>;
    async fn list_files(&self) -> Result<Vec<String>>;
    async fn delete(&self, filename: &str) -> Result<()>;
    async fn download(&self, filename: &str) -> Result<Vec<u8>>;
    fn name(&self) -> &'static str;
}
