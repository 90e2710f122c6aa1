use std::path::Path;

/// Path relative to `root` in `./`-prefixed display form.
///
/// Falls back to the path as given when it does not live under `root`.
#[must_use]
pub fn get_relative_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => format!("./{}", relative.to_string_lossy()),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
