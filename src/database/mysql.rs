use super::dumper::{verify_dump_file, DatabaseDumper};
use crate::database::ConnectionInfo;
use crate::error::{BackupError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;
use which::which;

pub struct MysqlDumper;

#[async_trait]
impl DatabaseDumper for MysqlDumper {
    async fn produce_dump(&self, conn: &ConnectionInfo, target: &Path) -> Result<()> {
        let mysqldump = which("mysqldump").map_err(|_| {
            BackupError::Dump("mysqldump executable not found in PATH".to_string())
        })?;
        debug!("Using mysqldump at {}", mysqldump.display());

        let mut cmd = Command::new(mysqldump);
        cmd.arg("-h").arg(&conn.host);
        if let Some(port) = conn.port {
            cmd.arg("-P").arg(port.to_string());
        }
        cmd.arg("-u")
            .arg(&conn.username)
            .arg("--result-file")
            .arg(target)
            .arg(&conn.database)
            .env("MYSQL_PWD", &conn.password);

        let output = cmd
            .output()
            .await
            .map_err(|e| BackupError::Dump(format!("failed to execute mysqldump: {}", e)))?;

        if !output.status.success() {
            return Err(BackupError::Dump(format!(
                "mysqldump exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        verify_dump_file(target)
    }

    fn tool_name(&self) -> &'static str {
        "mysqldump"
    }
}
