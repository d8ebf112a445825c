//! Identifier validation shared by prerelease and metadata segments

use thiserror::Error;

/// Separator between the dot-separated segments of a prerelease or metadata suffix.
pub const IDENTIFIER_SEPARATOR: char = '.';

/// Error type for identifier validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Invalid identifier \"{0}\"")]
    Invalid(String),
    #[error("Identifier \"{0}\" is numeric and cannot be stored as text")]
    NumericText(String),
}

/// Returns whether `byte` may appear in a prerelease or metadata identifier.
#[inline]
pub const fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

/// Check if a string is a valid identifier.
///
/// Valid identifiers are non-empty and only contain ASCII letters, digits and hyphens.
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(is_identifier_byte)
}

/// Check that every identifier in the list is valid.
pub fn are_valid_identifiers<S: AsRef<str>>(identifiers: &[S]) -> bool {
    identifiers.iter().all(|i| is_valid_identifier(i.as_ref()))
}

/// Validate a single identifier, returning it on success.
pub fn validate_identifier(identifier: &str) -> Result<&str, IdentifierError> {
    if is_valid_identifier(identifier) {
        Ok(identifier)
    } else {
        Err(IdentifierError::Invalid(identifier.to_string()))
    }
}

/// Split a dot-joined suffix into its identifiers.
///
/// Empty pieces are dropped, so `""` yields an empty list and `"a..b"` yields `["a", "b"]`.
/// The pieces are not validated.
pub fn split_identifiers(joined: &str) -> Vec<String> {
    joined
        .split(IDENTIFIER_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join identifiers with the identifier separator.
pub fn join_identifiers<I, S>(identifiers: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, identifier) in identifiers.into_iter().enumerate() {
        if i > 0 {
            joined.push(IDENTIFIER_SEPARATOR);
        }
        joined.push_str(identifier.as_ref());
    }
    joined
}
