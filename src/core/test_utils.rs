use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "alice.txt", "Alice was beginning to get very tired\nof sitting by her sister on the bank")?;
    create_test_file(&dir, "moby.txt", "Call me Ishmael.\nSome years ago, never mind how long precisely\n")?;
    create_test_file(&dir, "notes.md", "# Notes\n\nThe the THE.\n")?;
    create_test_file(&dir, "nested/dracula.txt", "3 May. Bistritz. Left Munich at 8:35 P.M.\n")?;

    create_test_file(&dir, ".hidden.txt", "Hidden words never counted")?;

    Ok(dir)
}
