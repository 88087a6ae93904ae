use std::fs;
use std::io::Error;
use std::path::Path;

/// Anything at `path`, file or directory, counts as present.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn copy_placeholder(source: &Path, output_path: &Path) -> std::io::Result<()> {
    let copy_error = |e: Error| {
        Error::new(
            e.kind(),
            format!(
                "Failed to copy {} -> {}: {e}",
                source.display(),
                output_path.display()
            ),
        )
    };
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(copy_error)?;
    }
    fs::copy(source, output_path).map_err(copy_error)?;
    Ok(())
}
