// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Library loading and pool configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the SDL3 shared library to load
pub const LIBRARY_ENV: &str = "SDL3_LIBRARY";

/// Environment variable naming the SDL_shadercross shared library to load
pub const SHADERCROSS_LIBRARY_ENV: &str = "SDL3_SHADERCROSS_LIBRARY";

/// Idle buffers kept per size class unless configured otherwise
pub const DEFAULT_MAX_RETAINED_PER_SIZE: usize = 8;

/// Configuration used by [`Sdl::with_options`](crate::Sdl::with_options)
///
/// Use the builder pattern to customize loading:
///
/// ```no_run
/// use sdl3::Options;
///
/// let opts = Options::new()
///     .library_path("/opt/sdl3/lib/libSDL3.so.0")
///     .max_retained_per_size(16);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    library_path: Option<PathBuf>,
    shadercross_library_path: Option<PathBuf>,
    max_retained_per_size: usize,
    search_defaults: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Create new options with default values
    pub fn new() -> Self {
        Self {
            library_path: None,
            shadercross_library_path: None,
            max_retained_per_size: DEFAULT_MAX_RETAINED_PER_SIZE,
            search_defaults: true,
        }
    }

    /// Load SDL3 from this path before trying anything else
    pub fn library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Load SDL_shadercross from this path before trying anything else
    pub fn shadercross_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.shadercross_library_path = Some(path.into());
        self
    }

    /// Set how many idle buffers each pool size class keeps (default: 8)
    pub fn max_retained_per_size(mut self, count: usize) -> Self {
        self.max_retained_per_size = count;
        self
    }

    /// Fall back to the environment, the pkg-config hint and the platform
    /// file names when the explicit path fails (default: true)
    pub fn search_defaults(mut self, enable: bool) -> Self {
        self.search_defaults = enable;
        self
    }

    pub(crate) fn retained_per_size(&self) -> usize {
        self.max_retained_per_size
    }

    /// Paths tried, in order, when loading SDL3
    pub fn library_candidates(&self) -> Vec<PathBuf> {
        candidates(
            self.library_path.as_deref(),
            std::env::var_os(LIBRARY_ENV),
            sdl3_sys::DEFAULT_LIBRARY_NAMES,
            self.search_defaults,
        )
    }

    /// Paths tried, in order, when loading SDL_shadercross
    pub fn shadercross_candidates(&self) -> Vec<PathBuf> {
        candidates(
            self.shadercross_library_path.as_deref(),
            std::env::var_os(SHADERCROSS_LIBRARY_ENV),
            sdl3_sys::DEFAULT_SHADERCROSS_NAMES,
            self.search_defaults,
        )
    }
}

fn candidates(
    explicit: Option<&Path>,
    env: Option<OsString>,
    names: &[&str],
    search_defaults: bool,
) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(path) = explicit {
        out.push(path.to_path_buf());
    }
    if !search_defaults {
        return out;
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        out.push(PathBuf::from(path));
    }
    if let Some(dir) = sdl3_sys::pkg_config_libdir() {
        out.extend(names.iter().map(|name| Path::new(dir).join(name)));
    }
    out.extend(names.iter().map(PathBuf::from));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.retained_per_size(), DEFAULT_MAX_RETAINED_PER_SIZE);
        assert!(opts.search_defaults);
        assert!(opts.library_path.is_none());
    }

    #[test]
    fn test_explicit_path_only() {
        let opts = Options::new().library_path("/nowhere/libSDL3.so").search_defaults(false);
        assert_eq!(opts.library_candidates(), vec![PathBuf::from("/nowhere/libSDL3.so")]);
    }

    #[test]
    fn test_search_order() {
        let found = candidates(
            Some(Path::new("/explicit/lib.so")),
            Some(OsString::from("/from/env/lib.so")),
            &["a.so", "b.so"],
            true,
        );
        assert_eq!(found[0], PathBuf::from("/explicit/lib.so"));
        assert_eq!(found[1], PathBuf::from("/from/env/lib.so"));
        // platform names always come last, bare, in declaration order
        let n = found.len();
        assert_eq!(found[n - 2], PathBuf::from("a.so"));
        assert_eq!(found[n - 1], PathBuf::from("b.so"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let found = candidates(None, Some(OsString::new()), &["a.so"], true);
        assert!(found.iter().all(|p| !p.as_os_str().is_empty()));
        assert_eq!(found.last(), Some(&PathBuf::from("a.so")));
    }

    #[test]
    fn test_builder_chain() {
        let opts = Options::new()
            .shadercross_library_path("/x/libSDL3_shadercross.so")
            .max_retained_per_size(2)
            .search_defaults(false);
        assert_eq!(opts.retained_per_size(), 2);
        assert_eq!(
            opts.shadercross_candidates(),
            vec![PathBuf::from("/x/libSDL3_shadercross.so")]
        );
        assert!(opts.library_candidates().is_empty());
    }
}
