use crate::backup;
use crate::error::{BackupError, Result};
use crate::web::AppState;
use std::sync::Arc;
use tracing::info;

const USAGE: &str =
    "Usage: dumpkeeper [manual_backup <CONFIG_VAR> [LABEL] | trim_history <CONFIG_VAR> <DAYS> | fetch <FILENAME>]";

pub async fn run(state: Arc<AppState>, args: &[String]) -> Result<()> {
    match args[0].as_str() {
        "manual_backup" => {
            let config_var = args
                .get(1)
                .ok_or_else(|| BackupError::Config("missing CONFIG_VAR argument".to_string()))?;
            let label = args.get(2).map(String::as_str);

            let backup_file = backup::manual_backup(
                state.backend.as_ref(),
                state.notifier.as_ref(),
                config_var,
                label,
            )
            .await?;
            println!("Manual backup completed. Backup file: {}", backup_file);
            Ok(())
        }
        "trim_history" => {
            let config_var = args
                .get(1)
                .ok_or_else(|| BackupError::Config("missing CONFIG_VAR argument".to_string()))?;
            let days_raw = args
                .get(2)
                .ok_or_else(|| BackupError::Config("missing DAYS argument".to_string()))?;
            let days = days_raw.parse().map_err(|_| {
                BackupError::Config(format!("days must be a number, got '{}'", days_raw))
            })?;

            let (deleted, failed) = backup::trim_backup_history(
                state.backend.as_ref(),
                state.notifier.as_ref(),
                config_var,
                days,
            )
            .await?;
            println!(
                "Trim history completed. Deleted files: {:?}, Failed deletes: {:?}",
                deleted, failed
            );
            Ok(())
        }
        "fetch" => {
            let filename = args
                .get(1)
                .ok_or_else(|| BackupError::Config("missing FILENAME argument".to_string()))?;

            let content = state.backend.download(filename).await?;
            std::fs::write(filename, &content)?;
            info!(
                "Fetched {} ({} bytes) from {}",
                filename,
                content.len(),
                state.backend.name()
            );
            println!("Fetched {} ({} bytes)", filename, content.len());
            Ok(())
        }
        other => {
            eprintln!("{}", USAGE);
            Err(BackupError::Config(format!("unknown subcommand '{}'", other)))
        }
    }
}
