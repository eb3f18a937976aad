use std::path::{Path, PathBuf};

use crate::error::ListingError;

/// HTML 출력 경로 검증
/// - 부모 디렉토리가 존재해야 하며, canonicalize 후 시스템 디렉토리는 차단합니다.
pub fn validate_output_path(path_str: &str) -> Result<PathBuf, ListingError> {
    let path = Path::new(path_str);
    if path.is_dir() {
        return Err(ListingError::Config(format!("{} is a directory", path_str)));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.exists() {
        return Err(ListingError::Config(format!(
            "Parent directory does not exist: {}",
            parent.display()
        )));
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| ListingError::Config(format!("Not a file path: {}", path_str)))?;
    let canonical = parent.canonicalize()?.join(file_name);

    if is_blocked_path(&canonical) {
        return Err(ListingError::Config(
            "Writing into a system directory is blocked.".to_string(),
        ));
    }

    Ok(canonical)
}

fn is_blocked_path(path: &Path) -> bool {
    let path_str = path.to_string_lossy();

    #[cfg(target_os = "windows")]
    {
        let lower = path_str.to_lowercase();
        if lower.contains(r"c:\windows") || lower.contains(r"c:\program files") {
            return true;
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        const BLOCKED: [&str; 8] = [
            "/etc", "/proc", "/sys", "/bin", "/sbin", "/usr/bin", "/usr/sbin", "/boot",
        ];
        if BLOCKED
            .iter()
            .any(|prefix| path_str == *prefix || path_str.starts_with(&format!("{}/", prefix)))
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_in_existing_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("listing.html");
        let resolved = validate_output_path(target.to_str().unwrap()).unwrap();
        assert_eq!(resolved.file_name().unwrap(), "listing.html");
    }

    #[test]
    fn test_missing_parent_is_rejected() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nope").join("listing.html");
        assert!(validate_output_path(target.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_directory_target_is_rejected() {
        let dir = tempdir().unwrap();
        assert!(validate_output_path(dir.path().to_str().unwrap()).is_err());
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_system_directory_is_blocked() {
        assert!(validate_output_path("/etc/listing.html").is_err());
    }
}
