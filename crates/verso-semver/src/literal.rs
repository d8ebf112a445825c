//! Compile-time validation of version literals

use crate::identifier::is_identifier_byte;
use crate::parser::parse;
use crate::version::Version;

/// Scan a numeral starting at `pos`, returning the position after it or `None`
/// if there are no digits or the value does not fit in an `i64`.
const fn scan_numeral(bytes: &[u8], mut pos: usize) -> Option<usize> {
    let start = pos;
    let mut value: i64 = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        let digit = (bytes[pos] - b'0') as i64;
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add(digit) {
                Some(v) => v,
                None => return None,
            },
            None => return None,
        };
        pos += 1;
    }
    if pos == start {
        None
    } else {
        Some(pos)
    }
}

/// Scan a dot-separated list of non-empty segments starting at `pos`.
const fn scan_segments(bytes: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        let start = pos;
        while pos < bytes.len() && is_identifier_byte(bytes[pos]) {
            pos += 1;
        }
        if pos == start {
            return None;
        }
        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
        } else {
            return Some(pos);
        }
    }
}

/// Returns whether `input` is a valid version string.
///
/// Accepts exactly the strings [`parse`](crate::parse) accepts, but runs in
/// const contexts. The [`version!`](crate::version!) macro uses it to reject
/// invalid literals at compile time.
pub const fn is_valid_version(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let mut pos = match scan_numeral(bytes, 0) {
        Some(pos) => pos,
        None => return false,
    };
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos = match scan_numeral(bytes, pos + 1) {
            Some(pos) => pos,
            None => return false,
        };
        if pos < bytes.len() && bytes[pos] == b'.' {
            pos = match scan_numeral(bytes, pos + 1) {
                Some(pos) => pos,
                None => return false,
            };
        }
    }
    if pos < bytes.len() && bytes[pos] == b'-' {
        pos = match scan_segments(bytes, pos + 1) {
            Some(pos) => pos,
            None => return false,
        };
    }
    if pos < bytes.len() && bytes[pos] == b'+' {
        pos = match scan_segments(bytes, pos + 1) {
            Some(pos) => pos,
            None => return false,
        };
    }
    pos == bytes.len()
}

/// Build a version from a literal already checked by [`is_valid_version`].
#[doc(hidden)]
pub fn from_validated_literal(literal: &str) -> Version {
    match parse(literal) {
        Some(components) => Version::from_checked_components(components),
        None => unreachable!("version literal {:?} passed const validation", literal),
    }
}

/// Create a [`Version`](crate::Version) from a string literal, validated at compile time.
///
/// ```
/// let version = verso_semver::version!("1.2.3-beta+exp.test");
/// assert_eq!(version.to_string(), "1.2.3-beta+exp.test");
/// ```
///
/// An invalid literal fails to compile:
///
/// ```compile_fail
/// let version = verso_semver::version!("1.2.3.4");
/// ```
#[macro_export]
macro_rules! version {
    ($literal:literal) => {{
        const _: () = ::core::assert!(
            $crate::is_valid_version($literal),
            "invalid semantic version literal"
        );
        $crate::literal::from_validated_literal($literal)
    }};
}
