// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic: how paths are compared when
//! sorting walk results, and where the C preprocessor lives by default.

use std::path::{Path, PathBuf};

// ============================================================================
// Path Normalization
// ============================================================================

/// Trait for platform-aware path normalization used in sorting and deduplication.
pub trait PathNormalizer {
    /// Type of the normalized key used for comparison.
    type Key: Ord + Eq;

    /// Normalize a path to a comparable key.
    fn normalize(&self, path: &Path) -> Self::Key;
}

/// Windows path normalizer - case-insensitive comparison.
#[cfg(windows)]
pub struct WindowsPathNormalizer;

#[cfg(windows)]
impl PathNormalizer for WindowsPathNormalizer {
    type Key = String;

    fn normalize(&self, path: &Path) -> Self::Key {
        path.to_string_lossy().to_lowercase()
    }
}

/// Unix path normalizer - case-sensitive byte comparison.
#[cfg(unix)]
pub struct UnixPathNormalizer;

#[cfg(unix)]
impl PathNormalizer for UnixPathNormalizer {
    type Key = Vec<u8>;

    fn normalize(&self, path: &Path) -> Self::Key {
        use std::os::unix::ffi::OsStrExt;
        path.as_os_str().as_bytes().to_vec()
    }
}

/// Fallback path normalizer for other platforms.
#[cfg(all(not(windows), not(unix)))]
pub struct FallbackPathNormalizer;

#[cfg(all(not(windows), not(unix)))]
impl PathNormalizer for FallbackPathNormalizer {
    type Key = String;

    fn normalize(&self, path: &Path) -> Self::Key {
        path.to_string_lossy().into_owned()
    }
}

#[cfg(windows)]
pub type DefaultPathNormalizer = WindowsPathNormalizer;

#[cfg(unix)]
pub type DefaultPathNormalizer = UnixPathNormalizer;

#[cfg(all(not(windows), not(unix)))]
pub type DefaultPathNormalizer = FallbackPathNormalizer;

/// Create a default path normalizer for the current platform.
pub fn default_path_normalizer() -> DefaultPathNormalizer {
    #[cfg(windows)]
    return WindowsPathNormalizer;

    #[cfg(unix)]
    return UnixPathNormalizer;

    #[cfg(all(not(windows), not(unix)))]
    return FallbackPathNormalizer;
}

/// Sorts `paths` by their normalized key and drops entries whose keys repeat.
pub fn sort_and_dedup(paths: &mut Vec<PathBuf>) {
    let normalizer = default_path_normalizer();
    paths.sort_by_cached_key(|p| normalizer.normalize(p));
    paths.dedup_by(|a, b| normalizer.normalize(a) == normalizer.normalize(b));
}

// ============================================================================
// Preprocessor Resolution
// ============================================================================

/// Resolves the C preprocessor executable for the current platform.
pub struct PreprocessorResolver;

impl PreprocessorResolver {
    /// Preprocessor used when none is configured.
    ///
    /// On Windows a bundled `utils/cpp.exe` next to the running executable is
    /// preferred, then `cpp.exe` from `PATH`. Elsewhere the system `cpp`.
    pub fn resolve() -> PathBuf {
        #[cfg(windows)]
        {
            Self::resolve_windows()
        }

        #[cfg(not(windows))]
        {
            PathBuf::from("cpp")
        }
    }

    #[cfg(windows)]
    fn resolve_windows() -> PathBuf {
        if let Some(bundled) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("utils").join("cpp.exe")))
            .filter(|candidate| candidate.is_file())
        {
            return bundled;
        }
        PathBuf::from("cpp.exe")
    }
}
