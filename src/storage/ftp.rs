use super::backend::StorageBackend;
use crate::config::FtpConfig;
use crate::error::{BackupError, Result};
use async_trait::async_trait;
use std::io::Cursor;
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};
use tracing::debug;

pub struct FtpBackend {
    config: FtpConfig,
}

impl FtpBackend {
    pub fn new(config: &FtpConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// One short-lived authenticated session per operation.
    fn connect(&self) -> std::result::Result<FtpStream, FtpError> {
        debug!(
            "Connecting to ftp://{}:{}",
            self.config.hostname, self.config.port
        );
        let mut ftp = FtpStream::connect((self.config.hostname.as_str(), self.config.port))?;
        ftp.login(&self.config.username, &self.config.password)?;
        if let Some(path) = &self.config.path {
            ftp.cwd(path)?;
        }
        ftp.transfer_type(FileType::Binary)?;
        Ok(ftp)
    }
}

#[async_trait]
impl StorageBackend for FtpBackend {
    async fn upload(&self, filename: &str, content: &[u8]) -> Result<()> {
        let mut ftp = self
            .connect()
            .map_err(|e| BackupError::Upload(format!("FTP connection failed: {}", e)))?;
        ftp.put_file(filename, &mut Cursor::new(content))
            .map_err(|e| BackupError::Upload(format!("FTP upload of {} failed: {}", filename, e)))?;
        let _ = ftp.quit();
        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<String>> {
        let mut ftp = self.connect()?;
        let files = ftp.nlst(None)?;
        let _ = ftp.quit();
        Ok(files)
    }

    async fn delete(&self, filename: &str) -> Result<()> {
        let mut ftp = self.connect()?;
        ftp.rm(filename)?;
        let _ = ftp.quit();
        Ok(())
    }

    async fn download(&self, filename: &str) -> Result<Vec<u8>> {
        let mut ftp = self.connect()?;
        let buffer = ftp.retr_as_buffer(filename)?;
        let _ = ftp.quit();
        Ok(buffer.into_inner())
    }

    fn name(&self) -> &'static str {
        "FTP"
    }
}
