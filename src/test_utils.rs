//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    use crate::core::system::{Architecture, Board, Distro, System};

    /// Generate a release string with one to three numeric segments
    pub fn release_version() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u64..40).prop_map(|major| major.to_string()),
            (1u64..40, 0u64..13).prop_map(|(major, minor)| format!("{major}.{minor:02}")),
            (1u64..40, 0u64..30, 0u64..10)
                .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}")),
        ]
    }

    /// Generate any supported distro
    pub fn distro() -> impl Strategy<Value = Distro> {
        proptest::sample::select(Distro::iter().collect::<Vec<_>>())
    }

    /// Generate any supported architecture
    pub fn architecture() -> impl Strategy<Value = Architecture> {
        proptest::sample::select(Architecture::iter().collect::<Vec<_>>())
    }

    /// Generate an optional board model
    pub fn board() -> impl Strategy<Value = Option<Board>> {
        proptest::option::of(proptest::sample::select(Board::iter().collect::<Vec<_>>()))
    }

    /// Generate a system descriptor with a parsable version
    pub fn system() -> impl Strategy<Value = System> {
        (distro(), architecture(), release_version())
            .prop_map(|(distro, arch, version)| System::new(distro, arch, version))
    }

    /// Generate a template parameter key
    pub fn param_key() -> impl Strategy<Value = String> {
        "[a-z_][a-z0-9_]{0,12}"
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::version::parse_version;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_release_version_generator(version in release_version()) {
            prop_assert!(parse_version(&version).is_ok());
            let segments = version.split('.').count();
            prop_assert!((1..=3).contains(&segments));
        }

        #[test]
        fn test_system_generator_uses_family_table(system in system()) {
            prop_assert_eq!(system.family, system.distro.family());
        }

        #[test]
        fn test_param_key_generator(key in param_key()) {
            prop_assert!(!key.is_empty());
            prop_assert!(!key.starts_with(|c: char| c.is_ascii_digit()));
        }
    }
}
