//! Serde support for [`Version`] and [`PrereleaseIdentifier`]
//!
//! A version is encoded either as an object of its components or as a single
//! version string. The plain `Serialize`/`Deserialize` implementations use the
//! components form with the prerelease as a dot-joined string and the metadata
//! as a list. Other layouts are selected with [`Version::encoded`] and
//! [`DecodingStrategy`], or per field with [`as_string`] and [`as_components`].
//! Fully custom layouts are written with serde's `serialize_with` and
//! `deserialize_with` attributes.

use std::fmt;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjust::NumericPart;
use crate::format::FormattingOptions;
use crate::identifier::{are_valid_identifiers, is_valid_identifier, split_identifiers};
use crate::parser::VersionComponents;
use crate::prerelease::PrereleaseIdentifier;
use crate::version::Version;

const FIELDS: &[&str] = &["major", "minor", "patch", "prerelease", "metadata"];

/// Error type for decoding versions from structured data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid {part} version component: {value}")]
    InvalidComponent { part: NumericPart, value: i64 },
    #[error("Invalid prerelease: {0:?}")]
    InvalidPrerelease(Vec<String>),
    #[error("Invalid metadata: {0:?}")]
    InvalidMetadata(Vec<String>),
    #[error("Invalid prerelease identifier: \"{0}\"")]
    InvalidPrereleaseIdentifier(String),
    #[error("Cannot convert {0} to Version!")]
    InvalidVersionString(String),
}

fn corrupted<E: de::Error>(err: DecodeError) -> E {
    log::debug!("Rejecting encoded version: {}", err);
    E::custom(err)
}

/// How a [`Version`] is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingStrategy {
    /// An object with `major`, `minor`, `patch`, `prerelease` and `metadata` keys.
    /// The suffixes are written as dot-joined strings or as lists.
    Components {
        prerelease_as_string: bool,
        metadata_as_string: bool,
    },
    /// A single version string rendered with the given options.
    String(FormattingOptions),
}

impl EncodingStrategy {
    pub const COMPONENTS: Self = EncodingStrategy::Components {
        prerelease_as_string: true,
        metadata_as_string: false,
    };
    pub const STRING: Self = EncodingStrategy::String(FormattingOptions::FULL_VERSION);
}

impl Default for EncodingStrategy {
    fn default() -> Self {
        Self::COMPONENTS
    }
}

/// How a [`Version`] is deserialized.
///
/// Implements [`DeserializeSeed`], so a strategy picked at run time can drive
/// any serde deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodingStrategy {
    /// An object of components. Missing `minor` and `patch` default to 0,
    /// missing suffixes to empty lists, unknown keys are ignored.
    Components {
        prerelease_as_string: bool,
        metadata_as_string: bool,
    },
    /// A single version string.
    String,
}

impl DecodingStrategy {
    pub const COMPONENTS: Self = DecodingStrategy::Components {
        prerelease_as_string: true,
        metadata_as_string: false,
    };
}

impl Default for DecodingStrategy {
    fn default() -> Self {
        Self::COMPONENTS
    }
}

/// A [`Version`] paired with the strategy used to serialize it.
#[derive(Debug, Clone, Copy)]
pub struct Encoded<'a> {
    version: &'a Version,
    strategy: EncodingStrategy,
}

impl Version {
    /// Returns a serializable view of this version using `strategy`.
    pub fn encoded(&self, strategy: EncodingStrategy) -> Encoded<'_> {
        Encoded {
            version: self,
            strategy,
        }
    }
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let version = self.version;
        match self.strategy {
            EncodingStrategy::Components {
                prerelease_as_string,
                metadata_as_string,
            } => {
                let mut state = serializer.serialize_struct("Version", FIELDS.len())?;
                state.serialize_field("major", &version.major())?;
                state.serialize_field("minor", &version.minor())?;
                state.serialize_field("patch", &version.patch())?;
                if prerelease_as_string {
                    state.serialize_field("prerelease", &version.prerelease_string())?;
                } else {
                    state.serialize_field("prerelease", version.prerelease())?;
                }
                if metadata_as_string {
                    state.serialize_field("metadata", &version.metadata_string())?;
                } else {
                    state.serialize_field("metadata", version.metadata())?;
                }
                state.end()
            }
            EncodingStrategy::String(options) => serializer.serialize_str(&version.to_string_with(options)),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encoded(EncodingStrategy::default()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DecodingStrategy::default().deserialize(deserializer)
    }
}

impl<'de> DeserializeSeed<'de> for DecodingStrategy {
    type Value = Version;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Version, D::Error> {
        match self {
            DecodingStrategy::Components {
                prerelease_as_string,
                metadata_as_string,
            } => deserializer.deserialize_struct(
                "Version",
                FIELDS,
                ComponentsVisitor {
                    prerelease_as_string,
                    metadata_as_string,
                },
            ),
            DecodingStrategy::String => deserializer.deserialize_str(StringVisitor),
        }
    }
}

struct StringVisitor;

impl<'de> Visitor<'de> for StringVisitor {
    type Value = Version;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a version string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Version, E> {
        Version::parse(v).ok_or_else(|| corrupted(DecodeError::InvalidVersionString(v.to_string())))
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Major,
    Minor,
    Patch,
    Prerelease,
    Metadata,
    #[serde(other)]
    Ignored,
}

struct ComponentsVisitor {
    prerelease_as_string: bool,
    metadata_as_string: bool,
}

fn numeric_component<E: de::Error>(part: NumericPart, value: i64) -> Result<u64, E> {
    u64::try_from(value).map_err(|_| corrupted(DecodeError::InvalidComponent { part, value }))
}

impl<'de> Visitor<'de> for ComponentsVisitor {
    type Value = Version;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a version object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Version, A::Error> {
        let mut major: Option<u64> = None;
        let mut minor: Option<u64> = None;
        let mut patch: Option<u64> = None;
        let mut prerelease: Option<Vec<PrereleaseIdentifier>> = None;
        let mut metadata: Option<Vec<String>> = None;

        while let Some(key) = map.next_key::<Field>()? {
            match key {
                Field::Major => {
                    if major.is_some() {
                        return Err(de::Error::duplicate_field("major"));
                    }
                    major = Some(numeric_component::<A::Error>(NumericPart::Major, map.next_value()?)?);
                }
                Field::Minor => {
                    if minor.is_some() {
                        return Err(de::Error::duplicate_field("minor"));
                    }
                    if let Some(value) = map.next_value::<Option<i64>>()? {
                        minor = Some(numeric_component::<A::Error>(NumericPart::Minor, value)?);
                    }
                }
                Field::Patch => {
                    if patch.is_some() {
                        return Err(de::Error::duplicate_field("patch"));
                    }
                    if let Some(value) = map.next_value::<Option<i64>>()? {
                        patch = Some(numeric_component::<A::Error>(NumericPart::Patch, value)?);
                    }
                }
                Field::Prerelease => {
                    if prerelease.is_some() {
                        return Err(de::Error::duplicate_field("prerelease"));
                    }
                    if self.prerelease_as_string {
                        if let Some(joined) = map.next_value::<Option<String>>()? {
                            let identifiers = split_identifiers(&joined);
                            if !are_valid_identifiers(&identifiers) {
                                return Err(corrupted(DecodeError::InvalidPrerelease(identifiers)));
                            }
                            prerelease =
                                Some(identifiers.iter().map(|s| PrereleaseIdentifier::classify(s)).collect());
                        }
                    } else {
                        prerelease = map.next_value::<Option<Vec<PrereleaseIdentifier>>>()?;
                    }
                }
                Field::Metadata => {
                    if metadata.is_some() {
                        return Err(de::Error::duplicate_field("metadata"));
                    }
                    let decoded = if self.metadata_as_string {
                        map.next_value::<Option<String>>()?
                            .map(|joined| split_identifiers(&joined))
                    } else {
                        map.next_value::<Option<Vec<String>>>()?
                    };
                    if let Some(entries) = decoded {
                        if !are_valid_identifiers(&entries) {
                            return Err(corrupted(DecodeError::InvalidMetadata(entries)));
                        }
                        metadata = Some(entries);
                    }
                }
                Field::Ignored => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let major = major.ok_or_else(|| de::Error::missing_field("major"))?;
        Ok(Version::from_checked_components(VersionComponents {
            major,
            minor: minor.unwrap_or(0),
            patch: patch.unwrap_or(0),
            prerelease: prerelease.unwrap_or_default(),
            metadata: metadata.unwrap_or_default(),
        }))
    }
}

impl Serialize for PrereleaseIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PrereleaseIdentifierVisitor;

impl<'de> Visitor<'de> for PrereleaseIdentifierVisitor {
    type Value = PrereleaseIdentifier;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a prerelease identifier string or integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PrereleaseIdentifier, E> {
        if !is_valid_identifier(v) {
            return Err(corrupted(DecodeError::InvalidPrereleaseIdentifier(v.to_string())));
        }
        Ok(PrereleaseIdentifier::classify(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PrereleaseIdentifier, E> {
        Ok(PrereleaseIdentifier::number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PrereleaseIdentifier, E> {
        // Out of range for a numeric identifier, kept as its digits.
        Ok(PrereleaseIdentifier::classify(&v.to_string()))
    }
}

impl<'de> Deserialize<'de> for PrereleaseIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PrereleaseIdentifierVisitor)
    }
}

/// Serialize a version as a full version string, for use with `#[serde(with = "...")]`.
pub mod as_string {
    use super::*;

    pub fn serialize<S: Serializer>(version: &Version, serializer: S) -> Result<S::Ok, S::Error> {
        version.encoded(EncodingStrategy::STRING).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Version, D::Error> {
        DecodingStrategy::String.deserialize(deserializer)
    }
}

/// Serialize a version as components with list suffixes, for use with `#[serde(with = "...")]`.
pub mod as_components {
    use super::*;

    const ENCODING: EncodingStrategy = EncodingStrategy::Components {
        prerelease_as_string: false,
        metadata_as_string: false,
    };
    const DECODING: DecodingStrategy = DecodingStrategy::Components {
        prerelease_as_string: false,
        metadata_as_string: false,
    };

    pub fn serialize<S: Serializer>(version: &Version, serializer: S) -> Result<S::Ok, S::Error> {
        version.encoded(ENCODING).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Version, D::Error> {
        DECODING.deserialize(deserializer)
    }
}
