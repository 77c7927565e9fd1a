use crate::database::ConnectionInfo;
use crate::error::{BackupError, Result};
use async_trait::async_trait;
use std::path::Path;
#[async_trait]
pub trait DatabaseDumper: Send + Sync {
    /// Runs the external dump tool for this engine, writing the dump to
    /// `target`. The password travels through the child environment, never
    /// through the argument list.
    async fn produce_dump(&self, conn: &ConnectionInfo, target: &Path) -> Result<()>;
    fn tool_name(&self) -> &'static str;
}

/// A zero exit code alone does not prove the tool wrote anything.
pub(crate) fn verify_dump_file(target: &Path) -> Result<()> {
    if target.is_file() {
        Ok(())
    } else {
        Err(BackupError::Dump(format!(
            "dump file {} was not created",
            target.display()
        )))
    }
}
