// batch-resize/src/utils/mod.rs
use crate::core::{ImageToolError, Result, SuffixStyle};
use std::path::{Path, PathBuf};

/// Splits the comma-separated input list. Entries are kept verbatim, empty
/// ones included; only a completely empty list is rejected.
pub fn parse_input_files(list: &str) -> Result<Vec<String>> {
    if list.is_empty() {
        return Err(ImageToolError::InvalidParameter(
            "At least one input file must be given".to_string(),
        ));
    }

    Ok(list.split(',').map(str::to_string).collect())
}

pub fn resolve_input_path(base_dir: Option<&Path>, entry: &str) -> PathBuf {
    let entry_path = Path::new(entry);
    match base_dir {
        Some(base) if !base.as_os_str().is_empty() && !entry_path.is_absolute() => {
            base.join(entry_path)
        }
        _ => entry_path.to_path_buf(),
    }
}

/// Output file name for a source `file_name`.
///
/// Legacy style renders every dot-separated segment as a bracketed list and
/// appends `<suffix>.<last segment>`: `A01.jpg` becomes `[A01 jpg]_resized.jpg`
/// and `README` becomes `[README]_resized.README`.
pub fn output_file_name(file_name: &str, suffix: &str, style: SuffixStyle) -> String {
    if suffix.is_empty() {
        return file_name.to_string();
    }

    match style {
        SuffixStyle::Legacy => {
            let segments: Vec<&str> = file_name.split('.').collect();
            let last = segments.last().copied().unwrap_or_default();
            format!("[{}]{}.{}", segments.join(" "), suffix, last)
        }
        SuffixStyle::BeforeExtension => {
            let path = Path::new(file_name);
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file_name);
            match path.extension().and_then(|ext| ext.to_str()) {
                Some(extension) => format!("{}{}.{}", stem, suffix, extension),
                None => format!("{}{}", stem, suffix),
            }
        }
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}
