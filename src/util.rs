use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

pub fn utc_compact_string(ts: DateTime<Utc>) -> String {
    ts.format("%Y%m%dT%H%M%SZ").to_string()
}

pub fn run_id(prefix: &str) -> String {
    format!("{prefix}-{}", utc_compact_string(Utc::now()))
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(value).context("failed to serialize json")?;
    data.push(b'\n');
    Ok(data)
}

/// Writes through a sibling temp file and renames it over `path`, so a failed
/// write never truncates the existing file.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_directory(parent)?;

    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
    file.write_all(data)
        .with_context(|| format!("failed to write temp file for {}", path.display()))?;
    file.as_file()
        .sync_all()
        .with_context(|| format!("failed to flush temp file for {}", path.display()))?;
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .with_context(|| format!("failed to copy permissions of {}", path.display()))?;
    }
    file.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fs;

    use serde_json::json;

    use super::{sha256_bytes, to_json_pretty, write_atomic};

    #[test]
    fn write_atomic_replaces_content_without_leftovers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("templates.json");
        fs::write(&path, b"old").expect("seed file");

        write_atomic(&path, b"new").expect("atomic write");

        assert_eq!(fs::read(&path).expect("read back"), b"new");
        let entries = fs::read_dir(dir.path()).expect("list dir").count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("templates.json");
        fs::write(&path, b"old").expect("seed file");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        write_atomic(&path, b"new").expect("atomic write");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn failed_replace_leaves_target_and_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("templates.json");
        fs::create_dir(&target).expect("target dir");
        fs::write(target.join("keep.json"), b"original").expect("seed file");

        assert!(write_atomic(&target, b"new").is_err());

        assert_eq!(fs::read(target.join("keep.json")).expect("read back"), b"original");
        let entries = fs::read_dir(dir.path()).expect("list dir").count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn serialization_failure_leaves_original_intact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("templates.json");
        fs::write(&path, b"original").expect("seed file");

        let unserializable = BTreeMap::from([((1, 2), "tuple keys are not json keys")]);
        let result = to_json_pretty(&unserializable).and_then(|data| write_atomic(&path, &data));

        assert!(result.is_err());
        assert_eq!(fs::read(&path).expect("read back"), b"original");
        let entries = fs::read_dir(dir.path()).expect("list dir").count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn write_atomic_creates_missing_parent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("assets").join("thumbnails").join("dna_1.png");

        write_atomic(&path, &[1, 2, 3]).expect("atomic write");

        assert_eq!(fs::read(&path).expect("read back"), vec![1, 2, 3]);
    }

    #[test]
    fn to_json_pretty_keeps_non_ascii_and_trailing_newline() {
        let data = to_json_pretty(&json!({"tone": "모던한"})).expect("serialize");
        let text = String::from_utf8(data).expect("utf8");
        assert_eq!(text, "{\n  \"tone\": \"모던한\"\n}\n");
    }

    #[test]
    fn sha256_bytes_is_stable_hex() {
        assert_eq!(
            sha256_bytes(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
