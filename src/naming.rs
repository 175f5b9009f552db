//! Name conventions shared by every catalog entity.
//!
//! ## Image Files
//!
//! A file belongs to a collection when its name ends in one of
//! [`IMAGE_EXTENSIONS`], compared case-insensitively:
//! - `a.JPG`, `a.gif`, `a.png` → image
//! - `a.txt`, `a.jp`, `a.gig`, `a` → not an image
//!
//! Only the name is inspected; content is never sniffed.
//!
//! ## URLs vs Paths
//!
//! URLs are always joined with `/`, whatever the host separator is. Native
//! paths are joined with [`Path::join`](std::path::Path::join) at the call
//! sites and never pass through this module.

/// Recognized image extensions, lowercase, without the dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["gif", "jpg", "png"];

/// True if `name` ends in `.gif`, `.jpg` or `.png`, ignoring ASCII case.
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Join a URL prefix and a single segment with exactly one `/`.
///
/// - `("https://host/x", "coll-a")` → `"https://host/x/coll-a"`
/// - `("https://host/x/", "/coll-a")` → `"https://host/x/coll-a"`
/// - `("/", "coll-a")` → `"/coll-a"`
/// - `("", "coll-a")` → `"coll-a"`
///
/// The scheme's `//` is left alone.
pub fn join_url(base: &str, segment: &str) -> String {
    let segment = segment.trim_start_matches('/');
    if base.is_empty() {
        return segment.to_string();
    }
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        return format!("/{segment}");
    }
    format!("{trimmed}/{segment}")
}
