use crate::error::{BackupError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Gzip-compresses `source` into `<source>.gz`, streaming through a fixed
/// buffer. The uncompressed source is left in place.
pub fn compress_file(source: &Path) -> Result<PathBuf> {
    if !source.is_file() {
        return Err(BackupError::Compression(format!(
            "source file {} not found",
            source.display()
        )));
    }

    let mut dest_name = source.as_os_str().to_os_string();
    dest_name.push(".gz");
    let dest = PathBuf::from(dest_name);

    info!("Compressing {} to {}", source.display(), dest.display());

    let source_file = File::open(source).map_err(|e| {
        BackupError::Compression(format!("cannot read {}: {}", source.display(), e))
    })?;
    let dest_file = File::create(&dest).map_err(|e| {
        BackupError::Compression(format!("cannot write {}: {}", dest.display(), e))
    })?;

    let mut reader = BufReader::new(source_file);
    let mut encoder = GzEncoder::new(BufWriter::new(dest_file), Compression::default());

    std::io::copy(&mut reader, &mut encoder).map_err(|e| {
        BackupError::Compression(format!("error compressing {}: {}", source.display(), e))
    })?;
    encoder.finish().map_err(|e| {
        BackupError::Compression(format!("error finishing {}: {}", dest.display(), e))
    })?;

    let dest_size = std::fs::metadata(&dest)?.len();
    debug!("Compression complete: {} bytes", dest_size);

    Ok(dest)
}

pub fn calculate_sha256(file_path: &Path) -> Result<String> {
    use sha2::{Digest, Sha256};

    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_compress_produces_suffixed_path() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("orders_20240601123045");

        let mut file = File::create(&source).unwrap();
        file.write_all(b"-- dump content\nCREATE TABLE t (id int);").unwrap();

        let dest = compress_file(&source).unwrap();
        assert_eq!(dest, dir.path().join("orders_20240601123045.gz"));
        assert!(dest.exists());
    }

    #[test]
    fn test_round_trip_reproduces_original_bytes() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("dump.sql");
        let content = b"INSERT INTO orders VALUES (1, 'widget');\n".repeat(500);

        File::create(&source).unwrap().write_all(&content).unwrap();

        let dest = compress_file(&source).unwrap();

        let mut decoder = GzDecoder::new(File::open(&dest).unwrap());
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).unwrap();
        assert_eq!(decompressed, content);
    }

    #[test]
    fn test_source_is_kept() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("dump.sql");
        File::create(&source).unwrap().write_all(b"data").unwrap();

        compress_file(&source).unwrap();
        assert!(source.exists());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let result = compress_file(&dir.path().join("nope.sql"));
        match result {
            Err(BackupError::Compression(_)) => {}
            other => panic!("expected Compression error, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_sha256() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        File::create(&file_path).unwrap().write_all(b"hello world").unwrap();

        let hash = calculate_sha256(&file_path).unwrap();
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }
}
