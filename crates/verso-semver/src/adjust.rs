//! Increasing the numeric parts of a version

use std::fmt;

use crate::version::{Version, VersionError, MAX_COMPONENT};

/// The numeric parts of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericPart {
    Major,
    Minor,
    Patch,
}

impl NumericPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericPart::Major => "major",
            NumericPart::Minor => "minor",
            NumericPart::Patch => "patch",
        }
    }
}

impl fmt::Display for NumericPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Version {
    /// Returns the next version, increasing `part`.
    ///
    /// Increasing the major version resets minor and patch to 0, increasing the
    /// minor version resets patch to 0. Prerelease identifiers and metadata are
    /// dropped unless the corresponding `keep_*` flag is set. Fails if `part`
    /// is already at [`MAX_COMPONENT`].
    pub fn next(
        &self,
        part: NumericPart,
        keep_prerelease: bool,
        keep_metadata: bool,
    ) -> Result<Version, VersionError> {
        let mut next = self.clone();
        next.increase(part, keep_prerelease, keep_metadata)?;
        Ok(next)
    }

    /// Increase `part` in place. See [`Version::next`]. On error the version is left unchanged.
    pub fn increase(
        &mut self,
        part: NumericPart,
        keep_prerelease: bool,
        keep_metadata: bool,
    ) -> Result<(), VersionError> {
        let current = match part {
            NumericPart::Major => self.major(),
            NumericPart::Minor => self.minor(),
            NumericPart::Patch => self.patch(),
        };
        let increased = current
            .checked_add(1)
            .filter(|value| *value <= MAX_COMPONENT)
            .ok_or(VersionError::ComponentOutOfRange {
                part,
                value: current,
            })?;

        match part {
            NumericPart::Major => {
                self.set_major(increased)?;
                self.set_minor(0)?;
                self.set_patch(0)?;
            }
            NumericPart::Minor => {
                self.set_minor(increased)?;
                self.set_patch(0)?;
            }
            NumericPart::Patch => self.set_patch(increased)?,
        }
        if !keep_prerelease {
            self.clear_prerelease();
        }
        if !keep_metadata {
            self.clear_metadata();
        }
        Ok(())
    }
}
