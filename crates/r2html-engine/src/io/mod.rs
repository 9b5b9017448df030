use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating it if needed.
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(IoError::Io)
}

/// Insert `insert` right after the first occurrence of `pattern` in the
/// file at `path`, overwriting the file.
///
/// Returns whether an insertion happened; when the pattern is absent the
/// file is left byte-for-byte untouched.
pub fn insert_after(path: &Path, pattern: &str, insert: &str) -> Result<bool, IoError> {
    let content = read_file(path)?;
    let Some(location) = content.find(pattern) else {
        return Ok(false);
    };

    let location = location + pattern.len();
    let mut updated = String::with_capacity(content.len() + insert.len());
    updated.push_str(&content[..location]);
    updated.push_str(insert);
    updated.push_str(&content[location..]);
    write_file(path, &updated)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_file_not_found() {
        let result = read_file(Path::new("/this/path/does/not/exist.R"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn read_write_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.Rmd");

        write_file(&path, "# Title\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn insert_after_first_match() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "page.html", "<style>a</style><style>b</style>");

        let inserted = insert_after(&path, "</style>", "EXTRA").unwrap();

        assert!(inserted);
        assert_eq!(
            read_file(&path).unwrap(),
            "<style>a</style>EXTRA<style>b</style>"
        );
    }

    #[test]
    fn insert_after_missing_pattern_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "page.html", "<html></html>");

        let inserted = insert_after(&path, "</style>", "EXTRA").unwrap();

        assert!(!inserted);
        assert_eq!(read_file(&path).unwrap(), "<html></html>");
    }
}
