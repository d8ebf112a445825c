//! The semantic version value type

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

use crate::adjust::NumericPart;
use crate::identifier::{join_identifiers, split_identifiers, validate_identifier, IdentifierError};
use crate::parser::{parse, VersionComponents};
use crate::prerelease::PrereleaseIdentifier;

/// The largest value a numeric part can hold.
///
/// Version strings carry numerals that must fit in an `i64`, so larger parts
/// could not be formatted and parsed back.
pub const MAX_COMPONENT: u64 = i64::MAX as u64;

/// Error type for version construction and conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("The {part} version component {value} exceeds {max}", max = MAX_COMPONENT)]
    ComponentOutOfRange { part: NumericPart, value: u64 },
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

/// A version following the rules of Semantic Versioning 2.0.
///
/// Equality, ordering and hashing consider `major`, `minor`, `patch` and the
/// prerelease identifiers. Metadata is carried along for formatting but never
/// takes part in comparisons; use [`Version::is_identical`] when it matters.
///
/// See <https://semver.org>.
#[derive(Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<PrereleaseIdentifier>,
    metadata: Vec<String>,
}

fn check_component(part: NumericPart, value: u64) -> Result<u64, VersionError> {
    if value > MAX_COMPONENT {
        return Err(VersionError::ComponentOutOfRange { part, value });
    }
    Ok(value)
}

fn validate_metadata(metadata: Vec<String>) -> Result<Vec<String>, IdentifierError> {
    for entry in &metadata {
        validate_identifier(entry)?;
    }
    Ok(metadata)
}

impl Version {
    /// Create a version without prerelease or metadata.
    ///
    /// Fails if a part exceeds [`MAX_COMPONENT`].
    pub fn new(major: u64, minor: u64, patch: u64) -> Result<Self, VersionError> {
        Ok(Version {
            major: check_component(NumericPart::Major, major)?,
            minor: check_component(NumericPart::Minor, minor)?,
            patch: check_component(NumericPart::Patch, patch)?,
            prerelease: Vec::new(),
            metadata: Vec::new(),
        })
    }

    /// Create a version from components, validating the numeric parts and the metadata.
    pub fn from_components(components: VersionComponents) -> Result<Self, VersionError> {
        Ok(Version {
            major: check_component(NumericPart::Major, components.major)?,
            minor: check_component(NumericPart::Minor, components.minor)?,
            patch: check_component(NumericPart::Patch, components.patch)?,
            prerelease: components.prerelease,
            metadata: validate_metadata(components.metadata)?,
        })
    }

    /// Build from components the parser or decoder already checked.
    pub(crate) fn from_checked_components(components: VersionComponents) -> Self {
        Version {
            major: components.major,
            minor: components.minor,
            patch: components.patch,
            prerelease: components.prerelease,
            metadata: components.metadata,
        }
    }

    /// Parse a version string, returning `None` if it is not a valid version.
    pub fn parse(input: &str) -> Option<Self> {
        parse(input).map(Self::from_checked_components)
    }

    /// Replace the prerelease identifiers.
    pub fn with_prerelease(mut self, prerelease: Vec<PrereleaseIdentifier>) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Replace the metadata, validating every entry.
    pub fn with_metadata<I, S>(mut self, metadata: I) -> Result<Self, IdentifierError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_metadata(metadata.into_iter().map(Into::into).collect())?;
        Ok(self)
    }

    /// The major version
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease identifiers, empty for a normal version
    pub fn prerelease(&self) -> &[PrereleaseIdentifier] {
        &self.prerelease
    }

    /// The build metadata, in the order it was given
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    /// Set the major version. Fails if it exceeds [`MAX_COMPONENT`].
    pub fn set_major(&mut self, major: u64) -> Result<(), VersionError> {
        self.major = check_component(NumericPart::Major, major)?;
        Ok(())
    }

    /// Set the minor version. Fails if it exceeds [`MAX_COMPONENT`].
    pub fn set_minor(&mut self, minor: u64) -> Result<(), VersionError> {
        self.minor = check_component(NumericPart::Minor, minor)?;
        Ok(())
    }

    /// Set the patch version. Fails if it exceeds [`MAX_COMPONENT`].
    pub fn set_patch(&mut self, patch: u64) -> Result<(), VersionError> {
        self.patch = check_component(NumericPart::Patch, patch)?;
        Ok(())
    }

    /// Set the prerelease identifiers. An empty list makes this a normal version.
    pub fn set_prerelease(&mut self, prerelease: Vec<PrereleaseIdentifier>) {
        self.prerelease = prerelease;
    }

    /// Replace the metadata. On error the version is left unchanged.
    pub fn set_metadata(&mut self, metadata: Vec<String>) -> Result<(), IdentifierError> {
        self.metadata = validate_metadata(metadata)?;
        Ok(())
    }

    pub(crate) fn clear_prerelease(&mut self) {
        self.prerelease.clear();
    }

    pub(crate) fn clear_metadata(&mut self) {
        self.metadata.clear();
    }

    /// Returns whether this version has prerelease identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The prerelease identifiers joined with dots, empty if there are none.
    pub fn prerelease_string(&self) -> String {
        join_identifiers(self.prerelease.iter().map(|p| p.to_string()))
    }

    /// The metadata joined with dots, empty if there is none.
    pub fn metadata_string(&self) -> String {
        join_identifiers(&self.metadata)
    }

    /// Replace the prerelease identifiers from a dot-joined string.
    ///
    /// Numeric pieces become numeric identifiers. On error the version is left unchanged.
    pub fn set_prerelease_string(&mut self, prerelease: &str) -> Result<(), IdentifierError> {
        self.prerelease = split_identifiers(prerelease)
            .iter()
            .map(|s| PrereleaseIdentifier::new(s))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Returns whether this version equals `other` including its metadata.
    ///
    /// Unless `require_identical_metadata_ordering` is set, metadata holding the
    /// same entries in a different order is considered identical.
    pub fn is_identical(&self, other: &Version, require_identical_metadata_ordering: bool) -> bool {
        if self != other {
            return false;
        }
        if require_identical_metadata_ordering {
            return self.metadata == other.metadata;
        }
        self.metadata.len() == other.metadata.len()
            && self.metadata.iter().collect::<HashSet<_>>() == other.metadata.iter().collect::<HashSet<_>>()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        (self.major, self.minor, self.patch) == (other.major, other.minor, other.patch)
            && self.prerelease == other.prerelease
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let core = (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch));
        if core != Ordering::Equal {
            return core;
        }

        // A prerelease has lower precedence than the associated normal version.
        match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        for (a, b) in self.prerelease.iter().zip(&other.prerelease) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        // More prerelease fields win once all shared ones are equal.
        self.prerelease.len().cmp(&other.prerelease.len())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(Default::default()))
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("major", &self.major)
            .field("minor", &self.minor)
            .field("patch", &self.patch)
            .field("prerelease", &self.prerelease_string())
            .field("metadata", &self.metadata_string())
            .finish()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| VersionError::InvalidVersion(s.to_string()))
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<VersionComponents> for Version {
    type Error = VersionError;

    fn try_from(components: VersionComponents) -> Result<Self, Self::Error> {
        Self::from_components(components)
    }
}
