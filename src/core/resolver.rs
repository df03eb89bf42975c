//! Package set resolution
//!
//! Computes the ordered list of packages to install for a [`System`]:
//!
//! 1. the common list
//! 2. each catalog selected for the boot mode, in fixed order
//! 3. within a catalog, four lookups in fixed order: (distro, any arch),
//!    (family, any arch), (distro, arch), (family, arch)
//! 4. within a lookup, rules in declaration order, kept when their gate
//!    matches
//!
//! Nothing is ever removed or deduplicated. An unparsable system version
//! fails the whole call; an unparsable catalog constraint only skips its own
//! rule.

use serde::Serialize;
use semver::Version;

use crate::catalogs::CatalogSet;
use crate::core::catalog::{ArchAxis, Catalog, CatalogKind, Gate, Selector};
use crate::core::options::ResolveOptions;
use crate::core::system::{Board, System};
use crate::core::template;
use crate::core::version;
use crate::error::ResolveError;

/// Packages contributed by one catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPackages {
    pub catalog: CatalogKind,
    pub packages: Vec<String>,
}

/// The four lookups performed against every catalog, in output order
pub fn lookup_axes(system: &System) -> [(Selector, ArchAxis); 4] {
    let distro = Selector::Distro(system.distro);
    let family = Selector::Family(system.family);
    let arch = ArchAxis::Only(system.arch);
    [
        (distro, ArchAxis::Any),
        (family, ArchAxis::Any),
        (distro, arch),
        (family, arch),
    ]
}

/// Resolve the flat, ordered package list for `system`
pub fn resolve(
    system: &System,
    options: &ResolveOptions,
    catalogs: &CatalogSet,
) -> Result<Vec<String>, ResolveError> {
    Ok(resolve_grouped(system, options, catalogs)?
        .into_iter()
        .flat_map(|group| group.packages)
        .collect())
}

/// Resolve the package list for `system`, broken down per catalog
///
/// Flattening the groups in order gives exactly the output of [`resolve`].
pub fn resolve_grouped(
    system: &System,
    options: &ResolveOptions,
    catalogs: &CatalogSet,
) -> Result<Vec<CatalogPackages>, ResolveError> {
    let _span = tracing::debug_span!(
        "resolve",
        target = %system,
        mode = %options.boot_mode,
    )
    .entered();

    let version =
        version::parse_version(&system.version).map_err(|source| ResolveError::Version {
            target: system.to_string(),
            source,
        })?;

    let mut groups = vec![CatalogPackages {
        catalog: CatalogKind::Common,
        packages: catalogs.common.iter().map(|p| (*p).to_string()).collect(),
    }];

    for catalog in catalogs.select(options.boot_mode, options.board.is_some()) {
        let packages = collect_catalog(catalog, system, &version, options.board);
        tracing::debug!(catalog = %catalog.kind, count = packages.len(), "Catalog resolved");
        groups.push(CatalogPackages {
            catalog: catalog.kind,
            packages: packages.into_iter().map(str::to_string).collect(),
        });
    }

    if let Some(params) = &options.params {
        for group in &mut groups {
            group.packages = template::expand_all(&group.packages, params)?;
        }
    }

    Ok(groups)
}

fn collect_catalog(
    catalog: &Catalog,
    system: &System,
    version: &Version,
    board: Option<Board>,
) -> Vec<&'static str> {
    let mut packages = Vec::new();

    for (selector, arch) in lookup_axes(system) {
        for rule in catalog.lookup(selector, arch) {
            let matched = gate_matches(&rule.gate, version, board);
            tracing::debug!(
                catalog = %catalog.kind,
                selector = %selector,
                arch = %arch,
                constraint = %rule.gate,
                version = %version,
                matched,
                "Checking constraint"
            );
            if matched {
                tracing::debug!(packages = ?rule.packages, "Adding packages");
                packages.extend_from_slice(rule.packages);
            }
        }
    }

    packages
}

fn gate_matches(gate: &Gate, version: &Version, board: Option<Board>) -> bool {
    match gate {
        Gate::Always => true,
        Gate::Board(wanted) => board == Some(*wanted),
        Gate::Version(expr) => match version::parse_constraint(expr) {
            Ok(constraint) => constraint.matches(version),
            Err(e) => {
                tracing::error!(constraint = %expr, error = %e, "Skipping rule with invalid version constraint");
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Rule, Section};
    use crate::core::options::BootMode;
    use crate::core::system::{Architecture, Distro, Family};
    use crate::core::template::TemplateParams;
    use crate::error::{TemplateError, VersionError};

    static AXES: Catalog = Catalog {
        kind: CatalogKind::Base,
        sections: &[
            Section::family(
                Family::Debian,
                ArchAxis::Only(Architecture::Amd64),
                &[Rule::always(&["family-arch"])],
            ),
            Section::distro(
                Distro::Ubuntu,
                ArchAxis::Only(Architecture::Amd64),
                &[Rule::always(&["distro-arch"])],
            ),
            Section::family(Family::Debian, ArchAxis::Any, &[Rule::always(&["family-any"])]),
            Section::distro(
                Distro::Ubuntu,
                ArchAxis::Any,
                &[
                    Rule::when(">=22.04", &["distro-any-new"]),
                    Rule::always(&["distro-any"]),
                    Rule::when("this is not a constraint", &["never"]),
                    Rule::when("<22.04", &["distro-any-old"]),
                ],
            ),
        ],
    };

    static KERNEL: Catalog = Catalog {
        kind: CatalogKind::Kernel,
        sections: &[Section::distro(
            Distro::Ubuntu,
            ArchAxis::Any,
            &[Rule::always(&["linux-{{.version}}"])],
        )],
    };

    static EMPTY: Catalog = Catalog {
        kind: CatalogKind::BootloaderGrub,
        sections: &[],
    };

    static BOARDS: Catalog = Catalog {
        kind: CatalogKind::BoardSupport,
        sections: &[Section::distro(
            Distro::Ubuntu,
            ArchAxis::Any,
            &[
                Rule::board(Board::Rpi3, &["rpi3-fw"]),
                Rule::board(Board::Rpi4, &["rpi4-fw"]),
            ],
        )],
    };

    static SET: CatalogSet = CatalogSet {
        common: &["common"],
        base: &AXES,
        kernel: &KERNEL,
        kernel_trusted_boot: &EMPTY,
        bootloader_grub: &EMPTY,
        boot_manager_systemd: &EMPTY,
        initrd_tooling: &EMPTY,
        board_support: &BOARDS,
    };

    fn ubuntu(version: &str) -> System {
        System::new(Distro::Ubuntu, Architecture::Amd64, version)
    }

    #[test]
    fn test_axis_and_rule_order() {
        let packages = resolve(&ubuntu("24.04"), &ResolveOptions::default(), &SET).unwrap();
        assert_eq!(
            packages,
            vec![
                "common",
                "distro-any-new",
                "distro-any",
                "family-any",
                "distro-arch",
                "family-arch",
                "linux-{{.version}}",
            ]
        );
    }

    #[test]
    fn test_version_gates_and_invalid_constraint_is_skipped() {
        let packages = resolve(&ubuntu("20.04"), &ResolveOptions::default(), &SET).unwrap();
        assert!(packages.contains(&"distro-any-old".to_string()));
        assert!(!packages.contains(&"distro-any-new".to_string()));
        assert!(!packages.contains(&"never".to_string()));
    }

    #[test]
    fn test_architecture_isolation() {
        let system = System::new(Distro::Ubuntu, Architecture::Arm64, "24.04");
        let packages = resolve(&system, &ResolveOptions::default(), &SET).unwrap();
        assert!(packages.contains(&"distro-any".to_string()));
        assert!(!packages.contains(&"distro-arch".to_string()));
        assert!(!packages.contains(&"family-arch".to_string()));
    }

    #[test]
    fn test_family_is_read_from_the_descriptor() {
        let system = ubuntu("24.04").with_family(Family::RedHat);
        let packages = resolve(&system, &ResolveOptions::default(), &SET).unwrap();
        assert!(packages.contains(&"distro-any".to_string()));
        assert!(!packages.contains(&"family-any".to_string()));
    }

    #[test]
    fn test_invalid_version_fails_every_path() {
        let system = ubuntu("noble");
        let options = ResolveOptions::default();
        let flat = resolve(&system, &options, &SET).unwrap_err();
        let grouped = resolve_grouped(&system, &options, &SET).unwrap_err();
        assert_eq!(flat, grouped);
        assert!(matches!(
            flat,
            ResolveError::Version {
                source: VersionError::InvalidVersion { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_templates_left_verbatim_without_params() {
        let packages = resolve(&ubuntu("24.04"), &ResolveOptions::default(), &SET).unwrap();
        assert_eq!(packages.last().unwrap(), "linux-{{.version}}");
    }

    #[test]
    fn test_templates_expanded_with_params() {
        let options = ResolveOptions::default().with_params(TemplateParams::from([(
            "version".to_string(),
            "24.04".to_string(),
        )]));
        let packages = resolve(&ubuntu("24.04"), &options, &SET).unwrap();
        assert_eq!(packages.last().unwrap(), "linux-24.04");
    }

    #[test]
    fn test_missing_template_param_fails() {
        let options = ResolveOptions::default().with_params(TemplateParams::new());
        let err = resolve(&ubuntu("24.04"), &options, &SET).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Template(TemplateError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_board_support_only_with_board() {
        let packages = resolve(&ubuntu("24.04"), &ResolveOptions::default(), &SET).unwrap();
        assert!(!packages.iter().any(|p| p.ends_with("-fw")));

        let options = ResolveOptions::new(BootMode::TrustedBoot).with_board(Board::Rpi4);
        let groups = resolve_grouped(&ubuntu("24.04"), &options, &SET).unwrap();
        let last = groups.last().unwrap();
        assert_eq!(last.catalog, CatalogKind::BoardSupport);
        assert_eq!(last.packages, vec!["rpi4-fw"]);
    }

    #[test]
    fn test_grouped_flattens_to_flat() {
        let system = ubuntu("22.04");
        let options = ResolveOptions::default();
        let flat = resolve(&system, &options, &SET).unwrap();
        let grouped: Vec<String> = resolve_grouped(&system, &options, &SET)
            .unwrap()
            .into_iter()
            .flat_map(|g| g.packages)
            .collect();
        assert_eq!(flat, grouped);
    }

    #[test]
    fn test_lookup_axes_order() {
        let axes = lookup_axes(&ubuntu("24.04"));
        assert_eq!(axes[0], (Selector::Distro(Distro::Ubuntu), ArchAxis::Any));
        assert_eq!(axes[1], (Selector::Family(Family::Debian), ArchAxis::Any));
        assert_eq!(
            axes[2],
            (
                Selector::Distro(Distro::Ubuntu),
                ArchAxis::Only(Architecture::Amd64)
            )
        );
        assert_eq!(
            axes[3],
            (
                Selector::Family(Family::Debian),
                ArchAxis::Only(Architecture::Amd64)
            )
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalogs;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::options::BootMode;
    use crate::test_utils::generators;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn prop_grouped_flattens_to_flat(
            system in generators::system(),
            trusted in any::<bool>(),
            board in generators::board(),
        ) {
            let mut options = ResolveOptions::new(BootMode::from_trusted_boot(trusted));
            options.board = board;
            let flat = resolve(&system, &options, catalogs::builtin()).unwrap();
            let grouped = resolve_grouped(&system, &options, catalogs::builtin()).unwrap();
            let flattened: Vec<String> = grouped.into_iter().flat_map(|g| g.packages).collect();
            prop_assert_eq!(flat, flattened);
        }

        #[test]
        fn prop_common_packages_lead_every_result(system in generators::system()) {
            let packages =
                resolve(&system, &ResolveOptions::default(), catalogs::builtin()).unwrap();
            let common = catalogs::builtin().common;
            prop_assert!(packages.len() >= common.len());
            for (got, want) in packages.iter().zip(common) {
                prop_assert_eq!(got.as_str(), *want);
            }
        }
    }
}
