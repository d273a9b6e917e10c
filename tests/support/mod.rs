use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for wordweb
pub fn wordweb() -> Command {
    let mut cmd = cargo_bin_cmd!("wordweb");
    cmd.env_remove("WORDWEB_LOG")
        .env_remove("RUST_LOG")
        .env_remove("WORDWEB_CONFIG");
    cmd
}

/// Write `words` (one per line) into a fresh temp dir
pub fn word_list(words: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, words.join("\n") + "\n").unwrap();
    (dir, path)
}
