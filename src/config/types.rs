use serde::Deserialize;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDestination {
    S3,
    Ftp,
}

impl UploadDestination {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("S3") {
            Some(UploadDestination::S3)
        } else if value.eq_ignore_ascii_case("FTP") {
            Some(UploadDestination::Ftp)
        } else {
            None
        }
    }
}

impl std::fmt::Display for UploadDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadDestination::S3 => write!(f, "S3"),
            UploadDestination::Ftp => write!(f, "FTP"),
        }
    }
}
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
}
#[derive(Debug, Clone)]
pub struct FtpConfig {
    pub hostname: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub path: Option<String>,
}
#[derive(Debug, Clone)]
pub struct S3Config {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub region: String,
}
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub destination: UploadDestination,
    pub smtp: Option<SmtpConfig>,
    pub notify_recipients: Vec<String>,
    pub ftp: Option<FtpConfig>,
    pub s3: Option<S3Config>,
    pub secret_key: Option<String>,
}
