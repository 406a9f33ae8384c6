//! On-disk persistence for drawing documents.
//!
//! Saves are atomic: the payload is written to a temporary file, synced, and
//! renamed over the target while holding an advisory lock, so a crash or a
//! concurrent writer can never leave a half-written document behind. Loads
//! sniff for gzip so a compressed document opens transparently; saves write
//! plain JSON unless compression is requested.

use super::document::DrawingDocument;
use anyhow::{Context, Result};
use flate2::{bufread::GzDecoder, write::GzEncoder, Compression};
use fs2::FileExt;
use log::{info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Compression preference for saved documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionMode {
    /// Always write plain JSON (the default; documents stay readable text)
    #[default]
    Off,
    /// Always write gzip-compressed JSON
    On,
    /// Gzip when the payload exceeds `threshold_bytes`
    Auto {
        threshold_bytes: u64,
    },
}

/// Persist a document to `path`.
pub fn save_document(
    document: &DrawingDocument,
    path: &Path,
    compression: CompressionMode,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let lock_path = lock_path_for(path);
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("failed to open lock file {}", lock_path.display()))?;
    lock_file
        .lock_exclusive()
        .with_context(|| format!("failed to lock {}", lock_path.display()))?;

    let result = save_document_inner(document, path, compression);

    if let Err(err) = fs2::FileExt::unlock(&lock_file) {
        warn!("failed to unlock {}: {err}", lock_path.display());
    }

    result
}

fn save_document_inner(
    document: &DrawingDocument,
    path: &Path,
    compression: CompressionMode,
) -> Result<()> {
    let mut bytes =
        serde_json::to_vec_pretty(document).context("failed to serialize drawing document")?;

    let should_compress = match compression {
        CompressionMode::Off => false,
        CompressionMode::On => true,
        CompressionMode::Auto { threshold_bytes } => bytes.len() as u64 >= threshold_bytes,
    };
    if should_compress {
        bytes = compress_bytes(&bytes)?;
    }

    let tmp_path = temp_path(path);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| format!("failed to open temporary file {}", tmp_path.display()))?;
        tmp_file
            .write_all(&bytes)
            .context("failed to write drawing document")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary file")?;
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to move {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    info!(
        "drawing saved to {} ({} objects, {} images, {} bytes, compressed={})",
        path.display(),
        document.objects.len(),
        document.images.len(),
        bytes.len(),
        should_compress
    );
    Ok(())
}

/// Load a document from `path`, decompressing transparently if needed.
pub fn load_document(path: &Path) -> Result<DrawingDocument> {
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .with_context(|| format!("failed to read {}", path.display()))?;

    let payload = if is_gzip(&bytes) {
        let mut decoder = GzDecoder::new(&bytes[..]);
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .context("failed to decompress drawing document")?;
        out
    } else {
        bytes
    };

    let document: DrawingDocument =
        serde_json::from_slice(&payload).context("failed to parse drawing document")?;
    info!(
        "drawing loaded from {} ({} objects, {} images)",
        path.display(),
        document.objects.len(),
        document.images.len()
    );
    Ok(document)
}

fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .context("failed to compress drawing document")?;
    encoder
        .finish()
        .context("failed to finalize compressed drawing document")
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn lock_path_for(path: &Path) -> PathBuf {
    path.with_extension("lock")
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("json.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("json.tmp{counter}"));
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_document() -> DrawingDocument {
        DrawingDocument {
            objects: vec![json!({
                "type": "line",
                "coords": [0.0, 0.0, 10.0, 10.0],
                "color": "#000000",
                "width": 1
            })],
            images: Vec::new(),
        }
    }

    #[test]
    fn save_writes_plain_json_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drawing.json");
        save_document(&sample_document(), &path, CompressionMode::Off).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"objects\""));

        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.objects.len(), 1);
    }

    #[test]
    fn load_sniffs_gzip_payloads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drawing.json");
        save_document(&sample_document(), &path, CompressionMode::On).unwrap();

        let raw = fs::read(&path).unwrap();
        assert!(is_gzip(&raw));

        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.objects.len(), 1);
    }

    #[test]
    fn auto_mode_compresses_only_above_threshold() {
        let dir = TempDir::new().unwrap();
        let small = dir.path().join("small.json");
        save_document(
            &sample_document(),
            &small,
            CompressionMode::Auto {
                threshold_bytes: 1024 * 1024,
            },
        )
        .unwrap();
        assert!(!is_gzip(&fs::read(&small).unwrap()));

        let big = dir.path().join("big.json");
        save_document(
            &sample_document(),
            &big,
            CompressionMode::Auto { threshold_bytes: 1 },
        )
        .unwrap();
        assert!(is_gzip(&fs::read(&big).unwrap()));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_document(&dir.path().join("absent.json")).is_err());
    }
}
