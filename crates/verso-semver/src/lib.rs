//! Semantic Versioning 2.0 version type
//!
//! This crate provides parsing, formatting and precedence comparison for
//! versions following <https://semver.org>.
//!
//! The parser is slightly more permissive than the SemVer 2.0 grammar:
//! numeric prerelease identifiers may have leading zeros, and segments such
//! as `-2` are read as negative numbers.

mod adjust;
pub mod codec;
mod format;
mod identifier;
#[doc(hidden)]
pub mod literal;
mod parser;
mod prerelease;
mod version;

pub use adjust::NumericPart;
pub use codec::{DecodeError, DecodingStrategy, Encoded, EncodingStrategy};
pub use format::FormattingOptions;
pub use identifier::{
    are_valid_identifiers, is_valid_identifier, join_identifiers, split_identifiers, validate_identifier, IdentifierError,
    IDENTIFIER_SEPARATOR,
};
pub use literal::is_valid_version;
pub use parser::{parse, ComponentsParser, RegexParser, ScanningParser, VersionComponents};
pub use prerelease::PrereleaseIdentifier;
pub use version::{Version, VersionError, MAX_COMPONENT};
