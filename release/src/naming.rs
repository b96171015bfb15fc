//! Artefact naming policy for release binaries.
//!
//! Constructs deterministic filenames in the format
//! `lk-<platform>-<arch>-v<version>[.exe]`.

use crate::target::Target;
use crate::version::Version;
use std::fmt;

/// The fixed program name prefixed to every artefact.
pub const PROGRAM_NAME: &str = "lk";

/// A fully-qualified release artefact filename.
///
/// # Examples
///
/// ```
/// use lk_release::naming::ArtefactName;
/// use lk_release::target::{Arch, Platform, Target};
/// use lk_release::version::Version;
///
/// let name = ArtefactName::new(
///     Target::new(Arch::Amd64, Platform::Windows),
///     Version::from("1.2.3"),
/// );
/// assert_eq!(name.to_string(), "lk-windows-amd64-v1.2.3.exe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtefactName {
    target: Target,
    version: Version,
}

impl ArtefactName {
    /// Create an artefact name from its components.
    #[must_use]
    pub const fn new(target: Target, version: Version) -> Self {
        Self { target, version }
    }

    /// Return the filename as a string without consuming the value.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArtefactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PROGRAM_NAME}-{}-{}-v{}{}",
            self.target.platform(),
            self.target.arch(),
            self.version,
            self.target.executable_suffix()
        )
    }
}
