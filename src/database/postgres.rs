use super::dumper::{verify_dump_file, DatabaseDumper};
use crate::database::ConnectionInfo;
use crate::error::{BackupError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;
use which::which;

pub struct PostgresDumper;

#[async_trait]
impl DatabaseDumper for PostgresDumper {
    async fn produce_dump(&self, conn: &ConnectionInfo, target: &Path) -> Result<()> {
        let pg_dump = which("pg_dump").map_err(|_| {
            BackupError::Dump("pg_dump executable not found in PATH".to_string())
        })?;
        debug!("Using pg_dump at {}", pg_dump.display());

        let mut cmd = Command::new(pg_dump);
        cmd.arg("-h").arg(&conn.host);
        if let Some(port) = conn.port {
            cmd.arg("-p").arg(port.to_string());
        }
        cmd.arg("-U")
            .arg(&conn.username)
            .arg("-f")
            .arg(target)
            .arg("-d")
            .arg(&conn.database)
            .env("PGPASSWORD", &conn.password);

        let output = cmd
            .output()
            .await
            .map_err(|e| BackupError::Dump(format!("failed to execute pg_dump: {}", e)))?;

        if !output.status.success() {
            return Err(BackupError::Dump(format!(
                "pg_dump exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        verify_dump_file(target)
    }

    fn tool_name(&self) -> &'static str {
        "pg_dump"
    }
}
