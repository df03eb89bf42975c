//! Package name templates
//!
//! Catalog entries may contain `{{.key}}` placeholders, for example
//! `linux-image-generic-hwe-{{.version}}`. Expansion is strict: a key that
//! is not in the parameter map is an error, never an empty substitution.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::system::System;
pub use crate::error::TemplateError;

/// Parameters available to `{{.key}}` placeholders
pub type TemplateParams = BTreeMap<String, String>;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.([A-Za-z_][A-Za-z0-9_]*)$").expect("field pattern is valid"));

/// Whether `entry` contains any placeholder
pub fn is_template(entry: &str) -> bool {
    entry.contains(OPEN)
}

/// Substitute every `{{.key}}` placeholder in `template`
///
/// # Examples
/// ```
/// use pkgset::core::template::{expand, TemplateParams};
///
/// let params = TemplateParams::from([("version".to_string(), "24.04".to_string())]);
/// let name = expand("linux-image-generic-hwe-{{.version}}", &params).unwrap();
/// assert_eq!(name, "linux-image-generic-hwe-24.04");
/// ```
pub fn expand(template: &str, params: &TemplateParams) -> Result<String, TemplateError> {
    let syntax = |reason: String| TemplateError::Syntax {
        template: template.to_string(),
        reason,
    };

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        // Append text before this action
        output.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or_else(|| syntax(format!("unclosed action starting at '{}'", &rest[start..])))?;

        let action = after_open[..end].trim();
        if action.is_empty() {
            return Err(syntax("empty action".to_string()));
        }
        let caps = FIELD_RE
            .captures(action)
            .ok_or_else(|| syntax(format!("unsupported action '{action}', expected .field")))?;
        let key = &caps[1];

        let value = params.get(key).ok_or_else(|| TemplateError::MissingKey {
            template: template.to_string(),
            key: key.to_string(),
        })?;
        output.push_str(value);

        rest = &after_open[end + CLOSE.len()..];
    }

    // Append remaining text after last action
    output.push_str(rest);

    Ok(output)
}

/// Expand an ordered list of entries, stopping at the first failure
pub fn expand_all<S: AsRef<str>>(
    entries: &[S],
    params: &TemplateParams,
) -> Result<Vec<String>, TemplateError> {
    entries
        .iter()
        .map(|entry| {
            expand(entry.as_ref(), params).inspect_err(|e| {
                tracing::error!(package = entry.as_ref(), error = %e, "Failed to expand package template");
            })
        })
        .collect()
}

/// Derive default template parameters from a system descriptor
///
/// Provides `version` (as written, without a leading `v`), `major`,
/// `minor` (empty when absent), `distro`, `family` and `arch`.
pub fn derive_params(system: &System) -> TemplateParams {
    let version = system.version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let mut segments = version.split(['.', '-', '+']);
    let major = segments.next().unwrap_or_default();
    let minor = segments.next().unwrap_or_default();

    TemplateParams::from([
        ("version".to_string(), version.to_string()),
        ("major".to_string(), major.to_string()),
        ("minor".to_string(), minor.to_string()),
        ("distro".to_string(), system.distro.to_string()),
        ("family".to_string(), system.family.to_string()),
        ("arch".to_string(), system.arch.to_string()),
    ])
}
