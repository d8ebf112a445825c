//! Prerelease identifiers and their precedence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::identifier::{is_valid_identifier, IdentifierError};

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr {
    Number(i64),
    Text(String),
}

/// One dot-separated segment of a version's prerelease suffix.
///
/// A segment is either numeric or textual. Text identifiers never hold a
/// payload that parses as an integer: constructing one from such a string
/// either yields a numeric identifier ([`PrereleaseIdentifier::new`]) or
/// fails ([`PrereleaseIdentifier::text`]).
///
/// Numeric payloads are signed. Segments such as `-2` are valid identifier
/// characters and parse as integers, so they become `Number(-2)`. Leading
/// zeros are accepted as well (`007` is `Number(7)`). Both are looser than
/// the SemVer 2.0 grammar and are kept for compatibility.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrereleaseIdentifier(Repr);

impl PrereleaseIdentifier {
    /// Create a numeric identifier
    pub fn number(number: i64) -> Self {
        PrereleaseIdentifier(Repr::Number(number))
    }

    /// Create an identifier from a string, classifying numeric strings as numbers.
    pub fn new(identifier: &str) -> Result<Self, IdentifierError> {
        if !is_valid_identifier(identifier) {
            return Err(IdentifierError::Invalid(identifier.to_string()));
        }
        Ok(Self::classify(identifier))
    }

    /// Create a text identifier without attempting to parse a number.
    ///
    /// Fails if the string is not a valid identifier or if it parses as an integer.
    pub fn text(identifier: &str) -> Result<Self, IdentifierError> {
        if !is_valid_identifier(identifier) {
            return Err(IdentifierError::Invalid(identifier.to_string()));
        }
        if identifier.parse::<i64>().is_ok() {
            return Err(IdentifierError::NumericText(identifier.to_string()));
        }
        Ok(PrereleaseIdentifier(Repr::Text(identifier.to_string())))
    }

    /// Classify an already validated segment.
    pub(crate) fn classify(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(number) => PrereleaseIdentifier(Repr::Number(number)),
            Err(_) => PrereleaseIdentifier(Repr::Text(segment.to_string())),
        }
    }

    /// The numeric value, or `None` for text identifiers.
    pub fn as_number(&self) -> Option<i64> {
        match &self.0 {
            Repr::Number(number) => Some(*number),
            Repr::Text(_) => None,
        }
    }

    /// The text value, or `None` for numeric identifiers.
    pub fn as_text(&self) -> Option<&str> {
        match &self.0 {
            Repr::Number(_) => None,
            Repr::Text(text) => Some(text),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self.0, Repr::Number(_))
    }
}

impl Ord for PrereleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Number(a), Repr::Number(b)) => a.cmp(b),
            // String's Ord is bytewise, which is ASCII order for valid identifiers
            (Repr::Text(a), Repr::Text(b)) => a.cmp(b),
            (Repr::Number(_), Repr::Text(_)) => Ordering::Less,
            (Repr::Text(_), Repr::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for PrereleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Number(number) => write!(f, "{}", number),
            Repr::Text(text) => f.write_str(text),
        }
    }
}

impl fmt::Debug for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Repr::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<i64> for PrereleaseIdentifier {
    fn from(number: i64) -> Self {
        Self::number(number)
    }
}

impl FromStr for PrereleaseIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PrereleaseIdentifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
