//! Resolve command implementation
//!
//! Implements `pkgset resolve`: builds the system descriptor and options
//! from flags and settings, runs the resolver once and prints the result.

use anyhow::{Context, Result};

use crate::catalogs;
use crate::cli::output::{self, OutputFormat};
use crate::core::options::{BootMode, ResolveOptions};
use crate::core::resolver;
use crate::core::settings::Settings;
use crate::core::system::System;

use super::ResolveArgs;

/// Build the system descriptor from command-line arguments
pub fn system_from_args(args: &ResolveArgs) -> System {
    let system = System::new(args.distro, args.arch, args.os_version.trim());
    match args.family {
        Some(family) => system.with_family(family),
        None => system,
    }
}

/// Merge command-line flags over settings into resolution options
pub fn options_from_args(args: &ResolveArgs, settings: &Settings, system: &System) -> ResolveOptions {
    let boot_mode = if args.trusted_boot {
        BootMode::TrustedBoot
    } else if args.legacy {
        BootMode::Legacy
    } else {
        settings.boot_mode()
    };

    let mut options = ResolveOptions::new(boot_mode);
    options.board = args.board.or(settings.build.board);

    let expand = args.expand || !args.params.is_empty() || (settings.expand() && !args.no_expand);
    if expand {
        let mut params = if args.no_derive {
            settings.templates.params.clone()
        } else {
            settings.template_params(system)
        };
        params.extend(args.params.iter().cloned());
        options.params = Some(params);
    }

    options
}

/// Execute the resolve command
pub fn execute(args: &ResolveArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let system = system_from_args(args);
    let options = options_from_args(args, settings, &system);

    tracing::info!(
        target_system = %system,
        mode = %options.boot_mode,
        board = ?options.board,
        expand = options.params.is_some(),
        "Resolving packages"
    );

    let groups = resolver::resolve_grouped(&system, &options, catalogs::builtin())
        .with_context(|| format!("Failed to resolve packages for {system}"))?;

    let rendered = if args.group {
        output::render_groups(&groups, format)?
    } else {
        let packages: Vec<String> = groups.into_iter().flat_map(|g| g.packages).collect();
        tracing::info!(count = packages.len(), "Resolved packages");
        output::render_packages(&packages, format)?
    };

    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::Commands;
    use crate::cli::Cli;
    use crate::core::system::{Architecture, Board, Distro, Family};
    use clap::Parser;

    fn args(argv: &[&str]) -> ResolveArgs {
        let mut full = vec!["pkgset", "resolve"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Some(Commands::Resolve(args)) => args,
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_system_from_args() {
        let a = args(&["-d", "ubuntu", "-a", "x86_64", "-r", "24.04"]);
        let system = system_from_args(&a);
        assert_eq!(system.distro, Distro::Ubuntu);
        assert_eq!(system.arch, Architecture::Amd64);
        assert_eq!(system.family, Family::Debian);
        assert_eq!(system.version, "24.04");

        let a = args(&["-d", "ubuntu", "-a", "arm64", "-r", "24.04", "--family", "redhat-family"]);
        assert_eq!(system_from_args(&a).family, Family::RedHat);
    }

    #[test]
    fn test_flags_override_settings() {
        let mut settings = Settings::default();
        settings.build.trusted_boot = Some(true);
        settings.build.board = Some(Board::Rpi3);

        let a = args(&["-d", "debian", "-a", "arm64", "-r", "13"]);
        let system = system_from_args(&a);
        let options = options_from_args(&a, &settings, &system);
        assert_eq!(options.boot_mode, BootMode::TrustedBoot);
        assert_eq!(options.board, Some(Board::Rpi3));
        assert!(options.params.is_none());

        let a = args(&["-d", "debian", "-a", "arm64", "-r", "13", "--legacy", "-b", "rpi4"]);
        let options = options_from_args(&a, &settings, &system);
        assert_eq!(options.boot_mode, BootMode::Legacy);
        assert_eq!(options.board, Some(Board::Rpi4));
    }

    #[test]
    fn test_params_imply_expansion_and_override_derived() {
        let a = args(&["-d", "ubuntu", "-a", "amd64", "-r", "24.04", "-p", "version=22.04"]);
        let system = system_from_args(&a);
        let options = options_from_args(&a, &Settings::default(), &system);
        let params = options.params.unwrap();
        assert_eq!(params["version"], "22.04");
        assert_eq!(params["arch"], "amd64");
    }

    #[test]
    fn test_no_expand_overrides_settings() {
        let mut settings = Settings::default();
        settings.templates.expand = Some(true);

        let a = args(&["-d", "ubuntu", "-a", "amd64", "-r", "24.04"]);
        let system = system_from_args(&a);
        assert!(options_from_args(&a, &settings, &system).params.is_some());

        let a = args(&["-d", "ubuntu", "-a", "amd64", "-r", "24.04", "--no-expand"]);
        assert!(options_from_args(&a, &settings, &system).params.is_none());
    }

    #[test]
    fn test_no_expand_conflicts_with_params() {
        let result = Cli::try_parse_from([
            "pkgset", "resolve", "-d", "ubuntu", "-a", "amd64", "-r", "24.04", "--no-expand", "-p",
            "version=1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_derive_keeps_only_explicit_params() {
        let a = args(&["-d", "ubuntu", "-a", "amd64", "-r", "24.04", "--expand", "--no-derive"]);
        let system = system_from_args(&a);
        let options = options_from_args(&a, &Settings::default(), &system);
        assert_eq!(options.params, Some(Default::default()));
    }
}
