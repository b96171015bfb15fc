//! Release target matrix.
//!
//! A release is built for every combination of the supported architectures
//! and platforms. The matrix order is fixed: architectures form the outer
//! loop and platforms the inner loop, each in declaration order.

use std::fmt;

/// CPU architecture of a release binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 64-bit ARM (`arm64`).
    Arm64,
    /// 64-bit x86 (`amd64`).
    Amd64,
}

impl Arch {
    /// All supported architectures in matrix order.
    pub const ALL: [Self; 2] = [Self::Arm64, Self::Amd64];

    /// Return the compiler's name for this architecture.
    ///
    /// # Examples
    ///
    /// ```
    /// use lk_release::target::Arch;
    ///
    /// assert_eq!(Arch::Amd64.as_str(), "amd64");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::Amd64 => "amd64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system of a release binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS (`darwin`).
    Darwin,
    /// Linux (`linux`).
    Linux,
    /// Windows (`windows`).
    Windows,
}

impl Platform {
    /// All supported platforms in matrix order.
    pub const ALL: [Self; 3] = [Self::Darwin, Self::Linux, Self::Windows];

    /// Return the compiler's name for this platform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }

    /// Return the executable filename suffix for this platform.
    ///
    /// Only Windows executables carry a suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use lk_release::target::Platform;
    ///
    /// assert_eq!(Platform::Windows.executable_suffix(), ".exe");
    /// assert_eq!(Platform::Linux.executable_suffix(), "");
    /// ```
    #[must_use]
    pub const fn executable_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Darwin | Self::Linux => "",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (architecture, platform) combination to build for.
///
/// Displays as `<platform>-<arch>`, the form used in progress messages.
///
/// # Examples
///
/// ```
/// use lk_release::target::{Arch, Platform, Target};
///
/// let target = Target::new(Arch::Arm64, Platform::Windows);
/// assert_eq!(target.to_string(), "windows-arm64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    arch: Arch,
    platform: Platform,
}

impl Target {
    /// Create a target from its components.
    #[must_use]
    pub const fn new(arch: Arch, platform: Platform) -> Self {
        Self { arch, platform }
    }

    /// Return the architecture component.
    #[must_use]
    pub const fn arch(self) -> Arch {
        self.arch
    }

    /// Return the platform component.
    #[must_use]
    pub const fn platform(self) -> Platform {
        self.platform
    }

    /// Return the executable suffix for this target's platform.
    #[must_use]
    pub const fn executable_suffix(self) -> &'static str {
        self.platform.executable_suffix()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}

/// Number of targets in the release matrix.
pub const MATRIX_SIZE: usize = Arch::ALL.len() * Platform::ALL.len();

/// Iterate over the release matrix in build order.
///
/// # Examples
///
/// ```
/// use lk_release::target::{Arch, Platform, Target, build_matrix};
///
/// let first = build_matrix().next();
/// assert_eq!(first, Some(Target::new(Arch::Arm64, Platform::Darwin)));
/// assert_eq!(build_matrix().count(), 6);
/// ```
pub fn build_matrix() -> impl Iterator<Item = Target> {
    Arch::ALL.into_iter().flat_map(|arch| {
        Platform::ALL
            .into_iter()
            .map(move |platform| Target::new(arch, platform))
    })
}
