//! Version string parsing
//!
//! The accepted grammar is
//!
//! ```text
//! major ( "." minor ( "." patch )? )? ( "-" segment ( "." segment )* )? ( "+" segment ( "." segment )* )?
//! ```
//!
//! where the numeric parts are ASCII digits that must fit in an `i64` and a
//! segment is one or more ASCII letters, digits or hyphens. The whole input
//! must match. Two implementations of this grammar exist behind the
//! [`ComponentsParser`] trait: [`ScanningParser`] is a single linear pass over
//! the bytes and is what [`parse`] uses; [`RegexParser`] matches an anchored
//! pattern. Both accept exactly the same language.

use lazy_static::lazy_static;
use regex::Regex;

use crate::identifier::is_identifier_byte;
use crate::prerelease::PrereleaseIdentifier;

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(concat!(
        r"^([0-9]+)(?:\.([0-9]+)(?:\.([0-9]+))?)?",
        r"(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    ))
    .unwrap();
}

/// The typed parts of a parsed version string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionComponents {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<PrereleaseIdentifier>,
    pub metadata: Vec<String>,
}

/// A strategy for splitting a version string into its components.
pub trait ComponentsParser {
    /// Parse `input`, returning `None` if it does not match the version grammar.
    fn parse(&self, input: &str) -> Option<VersionComponents>;
}

/// Parse a version string with the canonical parser.
pub fn parse(input: &str) -> Option<VersionComponents> {
    ScanningParser.parse(input)
}

/// Parse a numeral made of ASCII digits, rejecting values outside the `i64` range.
fn parse_numeral(digits: &str) -> Option<u64> {
    let value = digits.parse::<i64>().ok()?;
    u64::try_from(value).ok()
}

fn classify_segments<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<PrereleaseIdentifier> {
    segments.map(PrereleaseIdentifier::classify).collect()
}

/// Hand-written single pass parser. This is the canonical implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanningParser;

impl ScanningParser {
    /// Consume one or more ASCII digits starting at `*pos`.
    fn scan_numeral(input: &str, pos: &mut usize) -> Option<u64> {
        let bytes = input.as_bytes();
        let start = *pos;
        while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
            *pos += 1;
        }
        if start == *pos {
            return None;
        }
        let value = parse_numeral(&input[start..*pos]);
        if value.is_none() {
            log::trace!("numeral {:?} in {:?} is out of range", &input[start..*pos], input);
        }
        value
    }

    /// Consume a dot-separated list of non-empty segments starting at `*pos`.
    fn scan_segments<'a>(input: &'a str, pos: &mut usize) -> Option<Vec<&'a str>> {
        let bytes = input.as_bytes();
        let mut segments = Vec::new();
        loop {
            let start = *pos;
            while *pos < bytes.len() && is_identifier_byte(bytes[*pos]) {
                *pos += 1;
            }
            if start == *pos {
                log::trace!("empty identifier at offset {} in {:?}", start, input);
                return None;
            }
            segments.push(&input[start..*pos]);

            if *pos < bytes.len() && bytes[*pos] == b'.' {
                *pos += 1;
                continue;
            }
            return Some(segments);
        }
    }
}

impl ComponentsParser for ScanningParser {
    fn parse(&self, input: &str) -> Option<VersionComponents> {
        if input.is_empty() {
            return None;
        }

        let bytes = input.as_bytes();
        let mut pos = 0;

        let major = Self::scan_numeral(input, &mut pos)?;
        let mut minor = 0;
        let mut patch = 0;

        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            minor = Self::scan_numeral(input, &mut pos)?;
            if pos < bytes.len() && bytes[pos] == b'.' {
                pos += 1;
                patch = Self::scan_numeral(input, &mut pos)?;
            }
        }

        let mut prerelease = Vec::new();
        if pos < bytes.len() && bytes[pos] == b'-' {
            pos += 1;
            let segments = Self::scan_segments(input, &mut pos)?;
            prerelease = classify_segments(segments.into_iter());
        }

        let mut metadata = Vec::new();
        if pos < bytes.len() && bytes[pos] == b'+' {
            pos += 1;
            let segments = Self::scan_segments(input, &mut pos)?;
            metadata = segments.into_iter().map(str::to_string).collect();
        }

        if pos != bytes.len() {
            log::trace!("unexpected trailing input at offset {} in {:?}", pos, input);
            return None;
        }

        Some(VersionComponents {
            major,
            minor,
            patch,
            prerelease,
            metadata,
        })
    }
}

/// Parser backed by an anchored regular expression.
///
/// The `regex` crate guarantees linear time matching, so this path has no
/// backtracking blowup either.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexParser;

impl ComponentsParser for RegexParser {
    fn parse(&self, input: &str) -> Option<VersionComponents> {
        if input.is_empty() {
            return None;
        }

        let Some(caps) = VERSION_RE.captures(input) else {
            log::trace!("{:?} does not match the version grammar", input);
            return None;
        };

        let numeral = |index: usize| -> Option<u64> {
            match caps.get(index) {
                Some(m) => parse_numeral(m.as_str()),
                None => Some(0),
            }
        };
        let major = numeral(1)?;
        let minor = numeral(2)?;
        let patch = numeral(3)?;

        let prerelease = caps
            .get(4)
            .map(|m| classify_segments(m.as_str().split('.')))
            .unwrap_or_default();
        let metadata = caps
            .get(5)
            .map(|m| m.as_str().split('.').map(str::to_string).collect())
            .unwrap_or_default();

        Some(VersionComponents {
            major,
            minor,
            patch,
            prerelease,
            metadata,
        })
    }
}
