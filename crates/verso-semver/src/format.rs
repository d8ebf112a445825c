//! Version string formatting

use bitflags::bitflags;

use crate::version::Version;

bitflags! {
    /// Options controlling how a [`Version`] is rendered as a string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormattingOptions: u8 {
        /// Leave out the patch part if it is zero.
        const DROP_PATCH_IF_ZERO = 1 << 0;
        /// Leave out the minor part if it is zero. Only takes effect together with `DROP_PATCH_IF_ZERO`.
        const DROP_MINOR_IF_ZERO = 1 << 1;
        /// Include the prerelease identifiers.
        const INCLUDE_PRERELEASE = 1 << 2;
        /// Include the metadata.
        const INCLUDE_METADATA = 1 << 3;

        const FULL_VERSION = Self::INCLUDE_PRERELEASE.bits() | Self::INCLUDE_METADATA.bits();
        const DROP_TRAILING_ZEROS = Self::DROP_PATCH_IF_ZERO.bits() | Self::DROP_MINOR_IF_ZERO.bits();
    }
}

impl Default for FormattingOptions {
    fn default() -> Self {
        FormattingOptions::FULL_VERSION
    }
}

impl Version {
    /// Render this version using the given options.
    ///
    /// `Display` uses [`FormattingOptions::FULL_VERSION`].
    pub fn to_string_with(&self, options: FormattingOptions) -> String {
        let mut result = self.major().to_string();

        if !options.contains(FormattingOptions::DROP_PATCH_IF_ZERO) || self.patch() != 0 {
            result.push('.');
            result.push_str(&self.minor().to_string());
            result.push('.');
            result.push_str(&self.patch().to_string());
        } else if !options.contains(FormattingOptions::DROP_MINOR_IF_ZERO) || self.minor() != 0 {
            result.push('.');
            result.push_str(&self.minor().to_string());
        }

        if options.contains(FormattingOptions::INCLUDE_PRERELEASE) && self.is_prerelease() {
            result.push('-');
            result.push_str(&self.prerelease_string());
        }
        if options.contains(FormattingOptions::INCLUDE_METADATA) && !self.metadata().is_empty() {
            result.push('+');
            result.push_str(&self.metadata_string());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrereleaseIdentifier;

    fn beta_exp_test() -> Version {
        Version::new(1, 2, 3)
            .unwrap()
            .with_prerelease(vec![PrereleaseIdentifier::new("beta").unwrap()])
            .with_metadata(["exp", "test"])
            .unwrap()
    }

    #[test]
    fn test_default_is_full_version() {
        assert_eq!(FormattingOptions::default(), FormattingOptions::FULL_VERSION);
        let version = beta_exp_test();
        assert_eq!(version.to_string(), version.to_string_with(FormattingOptions::FULL_VERSION));
    }

    #[test]
    fn test_excluding_prerelease() {
        assert_eq!(
            beta_exp_test().to_string_with(FormattingOptions::INCLUDE_METADATA),
            "1.2.3+exp.test"
        );
    }

    #[test]
    fn test_excluding_metadata() {
        assert_eq!(
            beta_exp_test().to_string_with(FormattingOptions::INCLUDE_PRERELEASE),
            "1.2.3-beta"
        );
    }

    #[test]
    fn test_numbers_only() {
        assert_eq!(beta_exp_test().to_string_with(FormattingOptions::empty()), "1.2.3");
    }

    #[test]
    fn test_dropping_zeros() {
        let full = FormattingOptions::FULL_VERSION;
        let v1 = Version::new(1, 0, 0).unwrap();
        let v2 = Version::new(2, 0, 1).unwrap();
        let v3 = Version::new(3, 1, 0).unwrap();

        assert_eq!(v1.to_string_with(full | FormattingOptions::DROP_TRAILING_ZEROS), "1");
        assert_eq!(v1.to_string_with(full | FormattingOptions::DROP_PATCH_IF_ZERO), "1.0");
        assert_eq!(v1.to_string_with(full | FormattingOptions::DROP_MINOR_IF_ZERO), "1.0.0");
        assert_eq!(v2.to_string_with(full | FormattingOptions::DROP_TRAILING_ZEROS), "2.0.1");
        assert_eq!(v2.to_string_with(full | FormattingOptions::DROP_PATCH_IF_ZERO), "2.0.1");
        assert_eq!(v2.to_string_with(full | FormattingOptions::DROP_MINOR_IF_ZERO), "2.0.1");
        assert_eq!(v3.to_string_with(full | FormattingOptions::DROP_TRAILING_ZEROS), "3.1");
        assert_eq!(v3.to_string_with(full | FormattingOptions::DROP_PATCH_IF_ZERO), "3.1");
        assert_eq!(v3.to_string_with(full | FormattingOptions::DROP_MINOR_IF_ZERO), "3.1.0");
    }

    #[test]
    fn test_dropping_zeros_keeps_suffixes() {
        let version = Version::new(1, 0, 0)
            .unwrap()
            .with_prerelease(vec![PrereleaseIdentifier::new("rc").unwrap(), PrereleaseIdentifier::number(1)])
            .with_metadata(["build"])
            .unwrap();
        let formatted = version.to_string_with(FormattingOptions::all());
        assert_eq!(formatted, "1-rc.1+build");
        assert_eq!(Version::parse(&formatted), Some(version));
    }
}
