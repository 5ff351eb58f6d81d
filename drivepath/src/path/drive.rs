//! Drive and UNC prefix extraction.
//!
//! A drive marker is either a drive letter (`C:`) or a UNC prefix: two
//! separators, a host made of word characters, one or more separators, and a
//! share made of word characters (`\\server\share`, `//server/share`).

use crate::path::types::Drive;

fn is_separator_byte(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn run_length(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| pred(b)).count())
}

fn unc_length(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < 2 || !is_separator_byte(bytes[0]) || !is_separator_byte(bytes[1]) {
        return None;
    }

    let host_seps_share: [fn(u8) -> bool; 3] = [is_word_byte, is_separator_byte, is_word_byte];
    let mut end = 2;
    for pred in host_seps_share {
        let len = run_length(bytes, end, pred);
        if len == 0 {
            return None;
        }
        end += len;
    }
    Some(end)
}

/// Returns the drive or UNC token at the start of `path`, if any.
///
/// # Examples
///
/// ```
/// use drivepath::path::drive::match_drive;
///
/// assert_eq!(match_drive("c:\\windows"), Some("c:"));
/// assert_eq!(match_drive("\\\\server\\share\\dir"), Some("\\\\server\\share"));
/// assert_eq!(match_drive("\\\\server"), None);
/// assert_eq!(match_drive("relative\\dir"), None);
/// ```
#[must_use]
pub fn match_drive(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return Some(&path[..2]);
    }
    // Every byte counted by unc_length is ASCII, so the slice is on a char boundary.
    unc_length(bytes).map(|len| &path[..len])
}

/// Whether `path` starts with a drive letter or UNC prefix.
#[must_use]
pub fn carries_drive(path: &str) -> bool {
    match_drive(path).is_some()
}

/// Extracts the authoritative drive from `paths`.
///
/// The last element carrying a drive marker wins. Its token is removed from
/// the front of that element in place, so the remaining list can be
/// segmented without it. When no element carries a marker the drive is empty
/// and `paths` is left untouched.
///
/// # Examples
///
/// ```
/// use drivepath::path::drive::extract_drive;
///
/// let mut paths = vec!["C:\\a".to_string(), "D:\\b".to_string(), "c".to_string()];
/// let drive = extract_drive(&mut paths);
/// assert_eq!(drive.as_str(), "D:");
/// assert_eq!(paths, ["C:\\a", "\\b", "c"]);
/// ```
pub fn extract_drive(paths: &mut [String]) -> Drive {
    let Some((index, len)) = paths
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, p)| match_drive(p).map(|token| (i, token.len())))
    else {
        return Drive::default();
    };

    let token: String = paths[index].drain(..len).collect();
    log::debug!("extracted drive {token:?} from input #{index}");
    Drive::new(token)
}
