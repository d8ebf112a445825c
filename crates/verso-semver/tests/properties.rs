//! Property-based tests for parsing, formatting and precedence

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use serde::de::DeserializeSeed;
use verso_semver::*;

/// Numeric parts that survive a format/parse round trip
fn numeric_part() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..20, 0u64..=MAX_COMPONENT]
}

/// Text identifiers start with a letter so they never read back as numbers
fn text_identifier() -> impl Strategy<Value = PrereleaseIdentifier> {
    "[a-zA-Z][0-9a-zA-Z-]{0,7}".prop_map(|s| PrereleaseIdentifier::text(&s).unwrap())
}

fn prerelease_identifier() -> impl Strategy<Value = PrereleaseIdentifier> {
    prop_oneof![
        (-1000i64..100_000).prop_map(PrereleaseIdentifier::number),
        text_identifier(),
    ]
}

fn metadata() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[0-9a-zA-Z-]{1,8}", 0..4)
}

fn version() -> impl Strategy<Value = Version> {
    (
        numeric_part(),
        numeric_part(),
        numeric_part(),
        prop::collection::vec(prerelease_identifier(), 0..4),
        metadata(),
    )
        .prop_map(|(major, minor, patch, prerelease, metadata)| {
            Version::new(major, minor, patch)
                .unwrap()
                .with_prerelease(prerelease)
                .with_metadata(metadata)
                .unwrap()
        })
}

/// Small versions collide often, which exercises the tie-breaking rules
fn small_version() -> impl Strategy<Value = Version> {
    (
        0u64..3,
        0u64..3,
        0u64..3,
        prop::collection::vec(
            prop_oneof![
                (0i64..3).prop_map(PrereleaseIdentifier::number),
                "[ab]".prop_map(|s| PrereleaseIdentifier::text(&s).unwrap()),
            ],
            0..3,
        ),
        metadata(),
    )
        .prop_map(|(major, minor, patch, prerelease, metadata)| {
            Version::new(major, minor, patch)
                .unwrap()
                .with_prerelease(prerelease)
                .with_metadata(metadata)
                .unwrap()
        })
}

/// Strings shaped roughly like versions, valid or not
fn version_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9a-zA-Z.+-]{0,16}",
        "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}(-[0-9a-z.-]{0,6})?(\\+[0-9a-z.-]{0,6})?",
        "[0-9]{17,21}(\\.[0-9]{1,21}){0,2}",
        "[0-9]\\.[0-9]\\.[0-9][^0-9]{0,3}",
    ]
}

fn hash_of(version: &Version) -> u64 {
    let mut hasher = DefaultHasher::new();
    version.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn test_parsers_agree(input in version_like()) {
        let scanned = ScanningParser.parse(&input);
        let matched = RegexParser.parse(&input);
        prop_assert_eq!(&scanned, &matched);
        prop_assert_eq!(is_valid_version(&input), scanned.is_some());
        prop_assert_eq!(parse(&input), scanned);
    }

    #[test]
    fn test_format_parse_roundtrip(version in version()) {
        let formatted = version.to_string();
        let parsed = Version::parse(&formatted);
        prop_assert!(parsed.is_some(), "{} did not parse", formatted);
        let parsed = parsed.unwrap();
        prop_assert!(parsed.is_identical(&version, true));
        prop_assert_eq!(parsed.to_string(), formatted);
    }

    #[test]
    fn test_dropping_zeros_keeps_equality(version in version()) {
        let formatted = version.to_string_with(FormattingOptions::all());
        prop_assert_eq!(Version::parse(&formatted), Some(version));
    }

    #[test]
    fn test_ordering_is_antisymmetric(a in small_version(), b in small_version()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn test_ordering_is_transitive(a in small_version(), b in small_version(), c in small_version()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        if a == b && b == c {
            prop_assert_eq!(hash_of(&a), hash_of(&c));
        }
        let mut sorted = [a, b, c];
        sorted.sort();
        for pair in sorted.windows(2) {
            prop_assert_ne!(pair[0].cmp(&pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_prerelease_sorts_below_release(version in version()) {
        let mut release = version.clone();
        release.set_prerelease(Vec::new());
        if version.is_prerelease() {
            prop_assert!(version < release);
        } else {
            prop_assert_eq!(version, release);
        }
    }

    #[test]
    fn test_metadata_is_ignored(version in version(), other in metadata()) {
        let mut changed = version.clone();
        changed.set_metadata(other.clone()).unwrap();
        prop_assert_eq!(&changed, &version);
        prop_assert_eq!(changed.cmp(&version), Ordering::Equal);
        prop_assert_eq!(hash_of(&changed), hash_of(&version));
        prop_assert_eq!(changed.is_identical(&version, true), other.as_slice() == version.metadata());
    }

    #[test]
    fn test_reversed_metadata_is_identical_when_unordered(version in version()) {
        let mut reversed = version.clone();
        reversed.set_metadata(version.metadata().iter().rev().cloned().collect()).unwrap();
        prop_assert!(reversed.is_identical(&version, false));
    }

    #[test]
    fn test_next_is_greater(version in small_version()) {
        for part in [NumericPart::Major, NumericPart::Minor, NumericPart::Patch] {
            let next = version.next(part, false, false).unwrap();
            prop_assert!(next > version);
            prop_assert!(!next.is_prerelease());
            prop_assert!(next.metadata().is_empty());
        }
    }

    #[test]
    fn test_serde_roundtrip(version in version()) {
        let json = serde_json::to_string(&version).unwrap();
        let decoded: Version = serde_json::from_str(&json).unwrap();
        prop_assert!(decoded.is_identical(&version, true));

        let json = serde_json::to_string(&version.encoded(EncodingStrategy::STRING)).unwrap();
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let decoded = DecodingStrategy::String.deserialize(&mut deserializer).unwrap();
        prop_assert!(decoded.is_identical(&version, true));
    }
}
