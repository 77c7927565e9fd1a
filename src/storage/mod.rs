mod backend;
mod ftp;
mod s3;

pub use backend::StorageBackend;
pub use ftp::FtpBackend;
pub use s3::S3Backend;

use crate::config::{AppConfig, UploadDestination};
use crate::error::{BackupError, Result};
pub async fn create_backend(config: &AppConfig) -> Result<Box<dyn StorageBackend>> {
    match config.destination {
        UploadDestination::S3 => {
            let s3_config = config.s3.as_ref().ok_or_else(|| {
                BackupError::Config("S3 destination selected but S3 settings are missing".to_string())
            })?;
            Ok(Box::new(S3Backend::new(s3_config).await))
        }
        UploadDestination::Ftp => {
            let ftp_config = config.ftp.as_ref().ok_or_else(|| {
                BackupError::Config("FTP destination selected but FTP settings are missing".to_string())
            })?;
            Ok(Box::new(FtpBackend::new(ftp_config)))
        }
    }
}
