//! Segment splitting and stack-based resolution of `.` and `..`.

use crate::path::drive::carries_drive;
use crate::path::separator::{is_separator, Separator, BACK_SEPARATOR, BACK_SEPARATOR_STR};

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Whether `path` is a root marker: it begins with a separator and is not
/// itself a UNC prefix.
fn is_root_marker(path: &str) -> bool {
    path.starts_with(is_separator) && !carries_drive(path)
}

/// Splits drive-stripped paths into one flat list of segments.
///
/// Empty inputs are dropped. If any input is a root marker, everything
/// before the last one is discarded (the last absolute root wins). The rest
/// are joined and split on separators. Empty segments are kept; a leading
/// root marker therefore yields a leading `""`.
///
/// # Examples
///
/// ```
/// use drivepath::path::segment::split_segments;
///
/// assert_eq!(split_segments(&["a", "/b", "c"]), ["", "b", "c"]);
/// assert_eq!(split_segments(&["a\\\\b", "", "c/"]), ["a", "b", "c", ""]);
/// ```
#[must_use]
pub fn split_segments<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let non_empty: Vec<&str> = paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .collect();

    let start = non_empty
        .iter()
        .rposition(|p| is_root_marker(p))
        .unwrap_or(0);

    let joined = non_empty[start..]
        .iter()
        .map(|p| Separator::Back.separate(p))
        .collect::<Vec<_>>()
        .join(BACK_SEPARATOR_STR);

    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(BACK_SEPARATOR).map(str::to_owned).collect()
}

/// Collapses `.` and `..` segments left to right.
///
/// Empty and `.` segments are skipped. `..` pops the last pushed segment.
/// With nothing to pop, a `..` is dropped when `rooted` (one cannot climb
/// above an established root) and kept when the path is relative, so
/// `../a` stays `../a`.
///
/// # Examples
///
/// ```
/// use drivepath::path::segment::resolve_segments;
///
/// assert_eq!(resolve_segments(["a", "b", "..", ".", "c"], true), ["a", "c"]);
/// assert_eq!(resolve_segments(["..", "a"], true), ["a"]);
/// assert_eq!(resolve_segments(["..", "a"], false), ["..", "a"]);
/// ```
pub fn resolve_segments<I, S>(segments: I, rooted: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stack: Vec<String> = Vec::new();

    for segment in segments {
        match segment.as_ref() {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match stack.last().map(String::as_str) {
                Some(PARENT_DIR) | None if !rooted => stack.push(PARENT_DIR.to_owned()),
                Some(PARENT_DIR) | None => {}
                Some(_) => {
                    stack.pop();
                }
            },
            other => stack.push(other.to_owned()),
        }
    }

    stack
}
