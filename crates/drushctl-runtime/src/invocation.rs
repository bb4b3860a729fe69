//! Structured external-tool invocations.
//!
//! Every command handed to the runner is an explicit argv vector. Nothing
//! in this crate ever builds a shell string, so user-supplied tokens can
//! never split into extra arguments or shell metacharacters. Identifiers
//! that end up *inside* a php:eval snippet are additionally validated
//! against a closed character class before substitution.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Machine names: entity types, cache bin names after mapping.
static MACHINE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid regex"));

/// Configuration object names and search patterns (dotted lowercase).
static CONFIG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_.\-]+$").expect("valid regex"));

/// A single external command: an optional program override plus argv.
///
/// `program: None` means the configured Drush binary; the runner only
/// appends site options (`--uri`, `--root`) to Drush invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrushInvocation {
    program: Option<String>,
    args: Vec<String>,
}

impl DrushInvocation {
    /// An invocation of the configured Drush binary.
    pub fn drush<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: None,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// An invocation of some other tool on the PATH (e.g. `php -v`).
    pub fn tool<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: Some(program.to_string()),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// A `drush php:eval` invocation carrying a fixed snippet.
    pub fn eval(snippet: String) -> Self {
        Self::drush(vec!["php:eval".to_string(), snippet])
    }

    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Human-readable form for error messages. Eval snippets are elided
    /// so multi-line PHP does not end up in a one-line error.
    pub fn display(&self) -> String {
        let program = self.program.as_deref().unwrap_or("drush");
        let mut parts = vec![program.to_string()];
        for arg in &self.args {
            if arg.contains('\n') {
                parts.push("<snippet>".to_string());
            } else {
                parts.push(arg.clone());
            }
        }
        parts.join(" ")
    }
}

/// Validate an identifier that will be substituted into an eval snippet.
pub fn validate_machine_name(kind: &'static str, value: &str) -> Result<()> {
    if MACHINE_NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            kind,
            value: value.to_string(),
        })
    }
}

/// Validate a configuration name or search pattern.
pub fn validate_config_name(kind: &'static str, value: &str) -> Result<()> {
    if CONFIG_NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            kind,
            value: value.to_string(),
        })
    }
}
