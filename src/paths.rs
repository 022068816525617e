use std::path::{Path, PathBuf};

/// Suffix that replaces the input extension when naming an output file
pub const OUTPUT_SUFFIX: &str = "_out.txt";

/// Normalize an extension to lowercase with a leading dot
///
/// Accepts either form (`"JSON"`, `".json"`) and always yields `".json"`.
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Extract the normalized extension of a path, e.g. `data.JSON` -> `".json"`
///
/// Returns `None` for paths without an extension (`Makefile`, `.hidden`).
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| normalize_extension(&e.to_string_lossy()))
}

/// Derive the sibling output path: `dir/data.json` -> `dir/data_out.txt`
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}
