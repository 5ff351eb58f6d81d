//! Structural parse of a path into `{root, dir, base, name, ext}` and back.

use crate::path::separator::{is_separator, BACK_SEPARATOR};
use crate::path::types::ParsedPath;

/// Splits the leading root off `path`.
///
/// Returns the root (an optional drive letter plus at most one separator)
/// and the length of the whole root prefix, which also covers any further
/// leading separators.
fn split_root(path: &str) -> (&str, usize) {
    let bytes = path.as_bytes();
    let drive_end = if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        2
    } else {
        0
    };
    let separators = path[drive_end..]
        .bytes()
        .take_while(|&b| b == b'/' || b == b'\\')
        .count();

    (&path[..drive_end + separators.min(1)], drive_end + separators)
}

/// Splits a base name into `(name, ext)`.
///
/// Leading dots belong to the name, so `.bashrc` has no extension.
fn split_extension(base: &str) -> (&str, &str) {
    let stem_start = base.len() - base.trim_start_matches('.').len();
    match base[stem_start..].rfind('.') {
        Some(dot) => base.split_at(stem_start + dot),
        None => (base, ""),
    }
}

/// Splits a root-less remainder into `(dirname, basename)`.
///
/// Trailing separators are ignored. A bare name has dirname `.` and an empty
/// remainder has an empty dirname.
fn split_dirname(rest: &str) -> (&str, &str) {
    if rest.is_empty() {
        return ("", "");
    }
    let trimmed = rest.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(i) => (trimmed[..i].trim_end_matches(is_separator), &trimmed[i + 1..]),
        None => (".", trimmed),
    }
}

/// Decomposes `path` into its structural parts.
///
/// `dir` is the whole root prefix (drive and every leading separator)
/// followed by the directory name, which is `.` for a bare name. Never
/// fails: whatever cannot be classified is left empty.
///
/// # Examples
///
/// ```
/// use drivepath::parse;
///
/// let parsed = parse("/home/user/archive.tar.gz");
/// assert_eq!(parsed.root, "/");
/// assert_eq!(parsed.dir, "/home/user");
/// assert_eq!(parsed.base, "archive.tar.gz");
/// assert_eq!(parsed.name, "archive.tar");
/// assert_eq!(parsed.ext, ".gz");
///
/// let bare = parse("C:\\notes.md");
/// assert_eq!(bare.root, "C:\\");
/// assert_eq!(bare.dir, "C:\\.");
/// assert_eq!(parse("notes.md").dir, ".");
/// ```
#[must_use]
pub fn parse(path: &str) -> ParsedPath {
    let (root, prefix_len) = split_root(path);
    let (dirname, base) = split_dirname(&path[prefix_len..]);
    let (name, ext) = split_extension(base);

    ParsedPath {
        root: root.to_owned(),
        dir: format!("{}{dirname}", &path[..prefix_len]),
        base: base.to_owned(),
        name: name.to_owned(),
        ext: ext.to_owned(),
    }
}

/// Reassembles a path from its parts; the inverse of [`parse`].
///
/// The leading component is `dir`, or `root` when `dir` is empty. The
/// trailing component is `base`, or `name + ext` when `base` is empty. The
/// two are always joined with `\`.
///
/// # Examples
///
/// ```
/// use drivepath::{format, ParsedPath};
///
/// let parts = ParsedPath {
///     dir: "C:\\docs".to_string(),
///     name: "report".to_string(),
///     ext: ".txt".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(format(&parts), "C:\\docs\\report.txt");
/// ```
#[must_use]
pub fn format(parts: &ParsedPath) -> String {
    let lead = if parts.dir.is_empty() {
        &parts.root
    } else {
        &parts.dir
    };
    let trail = if parts.base.is_empty() {
        format!("{}{}", parts.name, parts.ext)
    } else {
        parts.base.clone()
    };

    format!("{lead}{BACK_SEPARATOR}{trail}")
}
