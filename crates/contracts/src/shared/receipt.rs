//! Receipt file acceptance rules.
//!
//! Acceptance is decided on the declared file name alone. The MIME type a
//! browser attaches to the upload is advisory and is never consulted, so a
//! GIF renamed to `.png` is accepted here and a PNG named `.gif` is not.

/// Extensions accepted for receipt images, lower-cased.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Lower-cased extension of a file name, if it has one.
pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// True when the file name carries a supported receipt extension.
pub fn is_supported(file_name: &str) -> bool {
    match extension_of(file_name) {
        Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}
