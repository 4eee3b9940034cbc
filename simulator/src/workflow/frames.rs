use anyhow::Context;
use std::fs;
use std::path::Path;

/// Read recorded payloads, one JSON frame per line. Blank lines are skipped.
pub fn read_frames<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Vec<u8>>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading frame log {}", path_ref.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.as_bytes().to_vec())
        .collect())
}
