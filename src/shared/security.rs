use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest catalogue or config file we agree to load (10 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a UTF-8 input file after checking it is safe to load.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected rather than its target.
/// Symbolic links, non-regular files and files over `max_size` are rejected.
///
/// # Arguments
/// * `path` - The file to read
/// * `description` - What the file is (e.g., "catalogue", "config file") for error messages
/// * `max_size` - Maximum allowed size in bytes
pub fn read_checked_file(path: &Path, description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} {} is a symbolic link. Symbolic links are not accepted as input.",
            description,
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} {} is not a regular file", description, path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            description,
            path.display(),
            metadata.len(),
            max_size
        );
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} {}: {}", description, path.display(), e))
}
