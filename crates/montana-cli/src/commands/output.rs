//! File output shared by the rendering commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

/// One written asset, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRecord {
    /// `sprite`, `sound` or `tone`.
    pub asset_type: &'static str,
    /// Request name, e.g. `alan:1` or `footstep`.
    pub name: String,
    /// Where the file was written.
    pub path: String,
    /// File size in bytes.
    pub bytes: usize,
    /// BLAKE3 of the decoded content: pixel bytes for sprites, PCM for sounds.
    pub content_hash: String,
}

impl AssetRecord {
    /// Prints the record as one status line.
    pub fn print(&self) {
        println!(
            "{} {} -> {} ({} bytes)",
            "Wrote".green().bold(),
            self.name,
            self.path,
            self.bytes
        );
        println!("  {} {}", "blake3:".dimmed(), self.content_hash);
    }
}

/// Writes `bytes` to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write: {}", path.display()))
}
