//! Version constraint evaluation
//!
//! Distribution releases are dotted numbers (`22.04`, `13`, `3.21.2`) that
//! are not strict semver: leading zeros are common and minor/patch are often
//! missing. They are normalised into [`semver::Version`] and constraints are
//! built from [`semver::Comparator`]s, with `!=` layered on top.
//!
//! Constraint grammar:
//!
//! ```text
//! constraint := clause ("," clause)*
//! clause     := op? version
//! op         := "=" | "==" | "!=" | ">" | "<" | ">=" | "<="
//! version    := "v"? number ("." number){0,2}
//! ```
//!
//! Every clause must hold. Missing segments count as zero on both sides, so
//! `24.10` means exactly 24.10.0: it does not match `24.10.1`, and `>12`
//! matches `12.9`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Comparator, Op, Prerelease, Version};

pub use crate::error::VersionError;

/// Constraint key that matches every version
pub const UNCONDITIONAL: &str = "Common";

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$")
        .expect("version pattern is valid")
});

static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(==|!=|>=|<=|=|>|<)?\s*v?(\d+)(?:\.(\d+))?(?:\.(\d+))?$")
        .expect("clause pattern is valid")
});

/// Parse a distribution version
///
/// # Examples
/// ```
/// use pkgset::core::version::parse_version;
///
/// let v = parse_version("22.04").unwrap();
/// assert_eq!((v.major, v.minor, v.patch), (22, 4, 0));
/// ```
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let invalid = |reason: &str| VersionError::InvalidVersion {
        version: version.to_string(),
        reason: reason.to_string(),
    };

    let caps = VERSION_RE
        .captures(version.trim())
        .ok_or_else(|| invalid("expected up to three dot-separated numbers"))?;

    let mut parts = [0u64; 3];
    for (i, part) in parts.iter_mut().enumerate() {
        if let Some(m) = caps.get(i + 1) {
            *part = m
                .as_str()
                .parse()
                .map_err(|_| invalid("numeric segment out of range"))?;
        }
    }

    let pre = match caps.get(4) {
        Some(m) => Prerelease::new(m.as_str()).map_err(|e| invalid(&e.to_string()))?,
        None => Prerelease::EMPTY,
    };
    let build = match caps.get(5) {
        Some(m) => BuildMetadata::new(m.as_str()).map_err(|e| invalid(&e.to_string()))?,
        None => BuildMetadata::EMPTY,
    };

    Ok(Version {
        major: parts[0],
        minor: parts[1],
        patch: parts[2],
        pre,
        build,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Clause {
    Holds(Comparator),
    Excludes(Comparator),
}

impl Clause {
    fn matches(&self, version: &Version) -> bool {
        match self {
            Self::Holds(c) => c.matches(version),
            Self::Excludes(c) => !c.matches(version),
        }
    }
}

/// A parsed, comma-conjoined version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    raw: String,
    clauses: Vec<Clause>,
}

impl Constraint {
    /// Whether every clause holds for `version`
    pub fn matches(&self, version: &Version) -> bool {
        self.clauses.iter().all(|c| c.matches(version))
    }

    /// The constraint as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a version constraint such as `>=20.04, != 24.10`
pub fn parse_constraint(constraint: &str) -> Result<Constraint, VersionError> {
    let invalid = |reason: String| VersionError::InvalidConstraint {
        constraint: constraint.to_string(),
        reason,
    };

    let mut clauses = Vec::new();
    for clause in constraint.split(',') {
        let clause = clause.trim();
        if clause.is_empty() {
            return Err(invalid("empty clause".to_string()));
        }

        let caps = CLAUSE_RE
            .captures(clause)
            .ok_or_else(|| invalid(format!("malformed clause '{clause}'")))?;

        let number = |i: usize| -> Result<Option<u64>, VersionError> {
            caps.get(i)
                .map(|m| m.as_str().parse::<u64>())
                .transpose()
                .map_err(|_| invalid(format!("numeric segment out of range in '{clause}'")))
        };
        // Missing segments are zero: `12` is 12.0.0, never the 12.x series
        let major = number(2)?.unwrap_or_default();
        let minor = Some(number(3)?.unwrap_or_default());
        let patch = Some(number(4)?.unwrap_or_default());

        let comparator = |op| Comparator {
            op,
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
        };

        clauses.push(match caps.get(1).map(|m| m.as_str()) {
            None | Some("=" | "==") => Clause::Holds(comparator(Op::Exact)),
            Some("!=") => Clause::Excludes(comparator(Op::Exact)),
            Some(">") => Clause::Holds(comparator(Op::Greater)),
            Some(">=") => Clause::Holds(comparator(Op::GreaterEq)),
            Some("<") => Clause::Holds(comparator(Op::Less)),
            Some("<=") => Clause::Holds(comparator(Op::LessEq)),
            Some(op) => return Err(invalid(format!("unsupported operator '{op}'"))),
        });
    }

    Ok(Constraint {
        raw: constraint.to_string(),
        clauses,
    })
}

/// Check whether `version` satisfies `constraint`
///
/// The [`UNCONDITIONAL`] key matches without parsing either side.
///
/// # Examples
/// ```
/// use pkgset::core::version::check_constraint;
///
/// assert!(check_constraint("24.04", ">=20.04, != 24.10").unwrap());
/// assert!(!check_constraint("24.10", ">=20.04, != 24.10").unwrap());
/// assert!(check_constraint("not-a-version", "Common").unwrap());
/// ```
pub fn check_constraint(version: &str, constraint: &str) -> Result<bool, VersionError> {
    if constraint == UNCONDITIONAL {
        return Ok(true);
    }
    let version = parse_version(version)?;
    let constraint = parse_constraint(constraint)?;
    Ok(constraint.matches(&version))
}
