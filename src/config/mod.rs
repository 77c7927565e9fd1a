mod types;

pub use types::*;

use crate::error::{BackupError, Result};
use std::env;
use tracing::{debug, warn};

const DEFAULT_FTP_PORT: u16 = 21;

/// Builds the process-wide configuration from environment variables.
/// Called once at startup; the result is read-only for the process lifetime.
pub fn load() -> Result<AppConfig> {
    let destination_raw = require("UPLOAD_DESTINATION")?;
    let destination = UploadDestination::parse(&destination_raw).ok_or_else(|| {
        BackupError::Config(format!(
            "UPLOAD_DESTINATION must be 'S3' or 'FTP', got '{}'",
            destination_raw
        ))
    })?;

    let smtp = match optional("SMTP_CREDENTIALS") {
        Some(raw) => Some(parse_smtp_credentials(&raw)?),
        None => {
            warn!("SMTP_CREDENTIALS not set, email notifications are disabled");
            None
        }
    };
    let notify_recipients = optional("NOTIFY_RECIPIENTS")
        .map(|raw| parse_recipients(&raw))
        .unwrap_or_default();

    let ftp = match destination {
        UploadDestination::Ftp => Some(FtpConfig {
            hostname: require("FTP_HOSTNAME")?,
            port: parse_ftp_port(optional("FTP_PORT").as_deref())?,
            username: require("FTP_USER")?,
            password: require("FTP_PASS")?,
            path: optional("FTP_PATH"),
        }),
        UploadDestination::S3 => None,
    };

    let s3 = match destination {
        UploadDestination::S3 => Some(S3Config {
            access_key_id: require("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require("AWS_SECRET_ACCESS_KEY")?,
            bucket: require("AWS_S3_BUCKET")?,
            region: require("AWS_S3_REGION")?,
        }),
        UploadDestination::Ftp => None,
    };

    debug!("Configuration loaded, upload destination: {}", destination);

    Ok(AppConfig {
        destination,
        smtp,
        notify_recipients,
        ftp,
        s3,
        secret_key: optional("SECRET_KEY"),
    })
}

fn require(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BackupError::Config(format!("missing required environment variable {}", name)))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

pub fn parse_smtp_credentials(raw: &str) -> Result<SmtpConfig> {
    serde_json::from_str(raw)
        .map_err(|e| BackupError::Config(format!("invalid SMTP_CREDENTIALS JSON: {}", e)))
}

pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

fn parse_ftp_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_FTP_PORT),
        Some(v) => v
            .parse()
            .map_err(|_| BackupError::Config(format!("FTP_PORT must be a port number, got '{}'", v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_destination() {
        assert_eq!(UploadDestination::parse("S3"), Some(UploadDestination::S3));
        assert_eq!(UploadDestination::parse("ftp"), Some(UploadDestination::Ftp));
        assert_eq!(UploadDestination::parse("dropbox"), None);
        assert_eq!(UploadDestination::parse(""), None);
    }

    #[test]
    fn test_parse_smtp_credentials() {
        let raw = r#"{
            "smtp_server": "smtp.example.com",
            "smtp_port": 587,
            "smtp_username": "backup@example.com",
            "smtp_password": "secret"
        }"#;

        let smtp = parse_smtp_credentials(raw).unwrap();
        assert_eq!(smtp.smtp_server, "smtp.example.com");
        assert_eq!(smtp.smtp_port, 587);
        assert_eq!(smtp.smtp_username, "backup@example.com");
        assert_eq!(smtp.smtp_password, "secret");
    }

    #[test]
    fn test_parse_smtp_credentials_rejects_garbage() {
        assert!(parse_smtp_credentials("not json").is_err());
        assert!(parse_smtp_credentials("{}").is_err());
    }

    #[test]
    fn test_parse_recipients() {
        assert_eq!(
            parse_recipients("ops@example.com, dba@example.com"),
            vec!["ops@example.com", "dba@example.com"]
        );
        assert_eq!(parse_recipients("solo@example.com"), vec!["solo@example.com"]);
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients(" , ,").is_empty());
    }

    #[test]
    fn test_parse_ftp_port() {
        assert_eq!(parse_ftp_port(None).unwrap(), 21);
        assert_eq!(parse_ftp_port(Some("2121")).unwrap(), 2121);
        assert!(parse_ftp_port(Some("twenty-one")).is_err());
    }
}
