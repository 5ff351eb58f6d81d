//! The join/resolve façade.
//!
//! [`PathResolver`] ties the pieces together: drive extraction, segment
//! splitting, `.`/`..` collapsing, and reattaching the drive. Every
//! intermediate value is local to one call, so a resolver can be shared
//! freely between threads.

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::path::drive::{carries_drive, extract_drive, match_drive};
use crate::path::segment::{resolve_segments, split_segments};
use crate::path::separator::{Separator, BACK_SEPARATOR, BACK_SEPARATOR_STR};
use crate::path::types::Drive;
use crate::path::working_dir::{FixedWorkingDirectory, SystemWorkingDirectory, WorkingDirectory};

/// Prefix marking a Windows namespaced path.
pub const NAMESPACE_PREFIX: &str = r"\\?\";

/// Resolves, joins and normalizes path strings.
///
/// Output always uses `\` and carries the drive found in the inputs, or the
/// one of the working directory when no input had a drive.
///
/// # Examples
///
/// ```
/// use drivepath::path::{FixedWorkingDirectory, PathResolver};
///
/// let resolver = PathResolver::new()
///     .with_working_dir(FixedWorkingDirectory::new("C:\\work"));
///
/// assert_eq!(resolver.resolve(&["src", "../lib"]).unwrap(), "C:\\work\\lib");
/// assert_eq!(resolver.resolve(&["D:/data", "x"]).unwrap(), "D:\\data\\x");
/// assert_eq!(resolver.join(&["a", "..", "b"]).unwrap(), "\\work\\b");
/// ```
#[derive(Clone)]
pub struct PathResolver {
    working_dir: Arc<dyn WorkingDirectory>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            working_dir: Arc::new(SystemWorkingDirectory),
        }
    }
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver").finish_non_exhaustive()
    }
}

impl PathResolver {
    /// Create a resolver backed by the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver honouring the configured `working_dir`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use drivepath::{Config, PathResolver};
    ///
    /// let config = Config {
    ///     working_dir: Some("E:\\base".to_string()),
    ///     ..Default::default()
    /// };
    /// let resolver = PathResolver::from_config(&config);
    /// assert_eq!(resolver.resolve(&["x"]).unwrap(), "E:\\base\\x");
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        match &config.working_dir {
            Some(dir) => Self::new().with_working_dir(FixedWorkingDirectory::new(dir.clone())),
            None => Self::new(),
        }
    }

    /// Replace the fallback root provider.
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: impl WorkingDirectory + 'static) -> Self {
        self.working_dir = Arc::new(working_dir);
        self
    }

    /// Resolve `paths` into one absolute, drive-qualified path.
    ///
    /// The last input carrying a drive or UNC prefix supplies the drive; the
    /// last input starting with a separator discards everything before it.
    /// When no input carries a drive, the working directory is used as the
    /// base.
    ///
    /// # Errors
    ///
    /// Returns an error only when the working directory is needed and the
    /// provider cannot supply it.
    pub fn resolve<S: AsRef<str>>(&self, paths: &[S]) -> Result<String> {
        let mut paths: Vec<String> = paths.iter().map(|p| p.as_ref().to_owned()).collect();

        if !paths.iter().any(|p| carries_drive(p)) {
            let cwd = self.working_dir.current_dir()?;
            log::debug!("no drive in inputs, resolving against {cwd:?}");
            paths.insert(0, cwd);
        }

        let drive = extract_drive(&mut paths);
        let segments = split_segments(&paths);
        let rooted = !drive.is_empty() || segments.first().is_some_and(String::is_empty);
        let stack = resolve_segments(&segments, rooted);

        Ok(attach(&drive, &stack, rooted))
    }

    /// Join `paths` and normalize the result.
    ///
    /// The inputs are joined with `\` and resolved as one path; the drive or
    /// UNC prefix is then stripped from the front. Unlike
    /// [`resolve`](Self::resolve), the output is drive-less.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn join<S: AsRef<str>>(&self, paths: &[S]) -> Result<String> {
        let combined = paths
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(BACK_SEPARATOR_STR);

        let resolved = self.resolve(&[combined])?;
        Ok(match match_drive(&resolved) {
            Some(token) => resolved[token.len()..].to_owned(),
            None => resolved,
        })
    }

    /// Normalize a single path; same as joining just that path.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn normalize(&self, path: &str) -> Result<String> {
        self.join(&[path])
    }

    /// Resolve `path` and express it as a Windows namespaced path.
    ///
    /// `C:\x` becomes `\\?\C:\x` and `\\host\share\x` becomes
    /// `\\?\UNC\host\share\x`. The marker is prepended to every result,
    /// so a drive-less `\tmp\x` becomes `\\?\\tmp\x`.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn to_namespaced_path(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(&[path])?;
        let unc = match_drive(&resolved).is_some_and(|token| Drive::new(token).is_unc());

        let body = if unc {
            format!("UNC{BACK_SEPARATOR}{}", &resolved[2..])
        } else {
            resolved
        };
        Ok(format!("{NAMESPACE_PREFIX}{}", Separator::Back.separate(&body)))
    }
}

/// Reassemble the drive and the resolved stack with `\`.
///
/// An unrooted stack (only reachable through a relative working directory)
/// gets no leading separator, so kept `..` segments stay relative.
fn attach(drive: &Drive, stack: &[String], rooted: bool) -> String {
    let body = stack.join(BACK_SEPARATOR_STR);
    if rooted {
        format!("{}{BACK_SEPARATOR}{body}", drive.canonical())
    } else {
        body
    }
}

/// Resolve `paths` against the process working directory.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn resolve<S: AsRef<str>>(paths: &[S]) -> Result<String> {
    PathResolver::new().resolve(paths)
}

/// Join `paths` against the process working directory.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn join<S: AsRef<str>>(paths: &[S]) -> Result<String> {
    PathResolver::new().join(paths)
}

/// Normalize `path` against the process working directory.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn normalize(path: &str) -> Result<String> {
    PathResolver::new().normalize(path)
}

/// Namespace `path` after resolving it against the process working directory.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn to_namespaced_path(path: &str) -> Result<String> {
    PathResolver::new().to_namespaced_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::working_dir::MockWorkingDirectory;

    fn resolver(cwd: &str) -> PathResolver {
        PathResolver::new().with_working_dir(FixedWorkingDirectory::new(cwd))
    }

    #[test]
    fn test_resolve_plain_segments_in_order() {
        let r = resolver("C:\\base");
        assert_eq!(r.resolve(&["a", "b/c"]).unwrap(), "C:\\base\\a\\b\\c");
    }

    #[test]
    fn test_resolve_parent_equivalence() {
        let r = resolver("C:\\base");
        assert_eq!(r.resolve(&["a/b/../c"]).unwrap(), r.resolve(&["a/c"]).unwrap());
    }

    #[test]
    fn test_resolve_cannot_climb_above_drive() {
        let r = resolver("C:\\");
        assert_eq!(r.resolve(&["../../a"]).unwrap(), "C:\\a");
        assert_eq!(r.resolve(&["D:\\.."]).unwrap(), "D:\\");
    }

    #[test]
    fn test_resolve_last_drive_wins() {
        let r = resolver("Z:\\unused");
        assert_eq!(r.resolve(&["C:\\a", "D:\\b", "c"]).unwrap(), "D:\\b\\c");
    }

    #[test]
    fn test_resolve_root_marker_discards_earlier_inputs() {
        let r = resolver("C:\\base");
        assert_eq!(r.resolve(&["a", "/b", "c"]).unwrap(), "C:\\b\\c");
    }

    #[test]
    fn test_resolve_unc_drive() {
        let r = resolver("C:\\base");
        assert_eq!(
            r.resolve(&["//server/share/dir", "../f.txt"]).unwrap(),
            "\\\\server\\share\\f.txt"
        );
    }

    #[test]
    fn test_resolve_drive_relative_input() {
        let r = resolver("C:\\base");
        assert_eq!(r.resolve(&["D:x", "y"]).unwrap(), "D:\\x\\y");
    }

    #[test]
    fn test_resolve_only_dots_yields_base() {
        let r = resolver("C:\\base");
        assert_eq!(r.resolve(&[".", "./."]).unwrap(), "C:\\base");
        assert_eq!(resolver("C:").resolve(&["."]).unwrap(), "C:\\");
    }

    #[test]
    fn test_resolve_without_any_drive() {
        let r = resolver("/home/user");
        assert_eq!(r.resolve(&["proj", "./src"]).unwrap(), "\\home\\user\\proj\\src");
    }

    #[test]
    fn test_resolve_relative_working_dir_stays_relative() {
        let r = resolver("proj");
        let resolved = r.resolve(&["../../x"]).unwrap();
        assert_eq!(resolved, "..\\x");
        assert!(!resolved.starts_with(BACK_SEPARATOR));
    }

    #[test]
    fn test_resolve_relative_working_dir_collapses_to_empty() {
        let r = resolver("proj");
        assert_eq!(r.resolve(&[".."]).unwrap(), "");
    }

    #[test]
    fn test_resolve_skips_working_dir_when_drive_present() {
        let mut mock = MockWorkingDirectory::new();
        mock.expect_current_dir().never();
        let r = PathResolver::new().with_working_dir(mock);
        assert_eq!(r.resolve(&["C:/a"]).unwrap(), "C:\\a");
    }

    #[test]
    fn test_resolve_propagates_working_dir_failure() {
        let mut mock = MockWorkingDirectory::new();
        mock.expect_current_dir().times(1).returning(|| {
            Err(Error::WorkingDirectoryUnavailable {
                reason: "deleted".to_string(),
            })
        });
        let r = PathResolver::new().with_working_dir(mock);
        let err = r.resolve(&["a"]).unwrap_err();
        assert!(matches!(err, Error::WorkingDirectoryUnavailable { .. }));
    }

    #[test]
    fn test_join_strips_drive() {
        let r = resolver("C:\\base");
        assert_eq!(r.join(&["a", "..", "b"]).unwrap(), "\\base\\b");
        assert_eq!(r.join(&["C:\\x", "y"]).unwrap(), "\\x\\y");
        assert_eq!(r.join(&["\\\\srv\\share", "y"]).unwrap(), "\\y");
    }

    #[test]
    fn test_join_only_dots_collapses_to_root() {
        let r = resolver("C:\\");
        assert_eq!(r.join(&[".", "."]).unwrap(), "\\");
        let empty: [&str; 0] = [];
        assert_eq!(r.join(&empty).unwrap(), "\\");
    }

    #[test]
    fn test_normalize_is_single_join() {
        let r = resolver("C:\\base");
        assert_eq!(
            r.normalize("C:/temp//foo/bar/..").unwrap(),
            r.join(&["C:/temp//foo/bar/.."]).unwrap()
        );
        assert_eq!(r.normalize("C:/temp//foo/bar/..").unwrap(), "\\temp\\foo");
    }

    #[test]
    fn test_to_namespaced_path_drive() {
        let r = resolver("C:\\base");
        assert_eq!(r.to_namespaced_path("a\\b").unwrap(), "\\\\?\\C:\\base\\a\\b");
    }

    #[test]
    fn test_to_namespaced_path_unc() {
        let r = resolver("C:\\base");
        assert_eq!(
            r.to_namespaced_path("//server/share/x").unwrap(),
            "\\\\?\\UNC\\server\\share\\x"
        );
    }

    #[test]
    fn test_to_namespaced_path_without_drive_still_prefixed() {
        let r = resolver("/home/u");
        let namespaced = r.to_namespaced_path("x").unwrap();
        assert!(namespaced.starts_with(NAMESPACE_PREFIX));
        assert_eq!(namespaced, "\\\\?\\\\home\\u\\x");
    }

    #[test]
    fn test_from_config_without_working_dir_uses_process() {
        let r = PathResolver::from_config(&Config::default());
        let expected = resolve(&["x"]).unwrap();
        assert_eq!(r.resolve(&["x"]).unwrap(), expected);
    }

    #[test]
    fn test_resolver_is_shareable_across_threads() {
        let r = resolver("C:\\base");
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let r = r.clone();
                std::thread::spawn(move || r.resolve(&[format!("t{i}")]).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("C:\\base\\t{i}"));
        }
    }
}
