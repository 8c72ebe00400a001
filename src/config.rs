//! Loading `AnalyzerOptions` from a JSON-with-comments file.
//!
//! ```jsonc
//! {
//!   // Target a runtime with different type names
//!   "wellKnownTypes": { "asyncResult": "Rt.Future" },
//!   "rules": {
//!     "BlockingCallConvertibleToAsync": { "enabled": "false" },
//!     "BlockingCallInAsyncContext": { "severity": "warning" },
//!   },
//! }
//! ```

use anyhow::{Context, Result, bail};
use nowait_analyzer::AnalyzerOptions;
use nowait_common::diagnostics::get_rule_descriptor;
use std::path::Path;
use tracing::debug;

/// Parse and validate options from JSONC source text.
pub fn parse_options(source: &str) -> Result<AnalyzerOptions> {
    let normalized = remove_trailing_commas(&strip_comments(source));
    let options: AnalyzerOptions =
        serde_json::from_str(&normalized).context("failed to parse analyzer options JSON")?;
    validate(&options)?;
    Ok(options)
}

/// Read, parse and validate an options file.
pub fn load_options(path: &Path) -> Result<AnalyzerOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read analyzer options: {}", path.display()))?;
    let options = parse_options(&source)
        .with_context(|| format!("invalid analyzer options: {}", path.display()))?;
    debug!(path = %path.display(), rules = options.rules.len(), "loaded analyzer options");
    Ok(options)
}

fn validate(options: &AnalyzerOptions) -> Result<()> {
    let types = &options.well_known_types;
    for (key, value) in [
        ("wellKnownTypes.asyncResult", &types.async_result),
        ("wellKnownTypes.asyncResultOfT", &types.async_result_of_t),
        ("wellKnownTypes.asyncResultAwaiter", &types.async_result_awaiter),
    ] {
        if value.trim().is_empty() {
            bail!("{key} must not be empty");
        }
    }

    let members = &options.members;
    for (key, value) in [
        ("members.blockingWait", &members.blocking_wait),
        ("members.resultExtraction", &members.result_extraction),
        ("members.resultAccessor", &members.result_accessor),
        ("members.asyncSuffix", &members.async_suffix),
        ("members.suspensionOperator", &members.suspension_operator),
    ] {
        if value.trim().is_empty() {
            bail!("{key} must not be empty");
        }
    }

    let mut ids: Vec<_> = options.rules.keys().collect();
    ids.sort();
    for id in ids {
        if get_rule_descriptor(id).is_none() {
            bail!("unknown rule '{id}' in rules");
        }
    }
    Ok(())
}

// =============================================================================
// JSONC normalization
// =============================================================================

/// Tracks whether the cursor is inside a string literal.
#[derive(Default)]
struct StringState {
    in_string: bool,
    escape: bool,
}

impl StringState {
    /// Feed one character; returns true if it belongs to a string literal
    /// (including the quotes).
    fn consume(&mut self, ch: char) -> bool {
        if self.in_string {
            if self.escape {
                self.escape = false;
            } else if ch == '\\' {
                self.escape = true;
            } else if ch == '"' {
                self.in_string = false;
            }
            return true;
        }
        if ch == '"' {
            self.in_string = true;
            return true;
        }
        false
    }
}

/// Drop `//` and `/* */` comments outside strings. Newlines inside comments
/// are kept so that parse errors report the original line.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut strings = StringState::default();

    while let Some(ch) = chars.next() {
        if strings.consume(ch) {
            out.push(ch);
            continue;
        }
        match (ch, chars.peek().copied()) {
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                while let Some(skipped) = chars.next() {
                    if skipped == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        break;
                    }
                    if skipped == '\n' {
                        out.push('\n');
                    }
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Drop commas directly followed (modulo whitespace) by `}` or `]`.
fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut strings = StringState::default();

    while let Some(ch) = chars.next() {
        if strings.consume(ch) {
            out.push(ch);
            continue;
        }
        if ch == ',' {
            let next = chars.clone().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../tests/config_unit_tests.rs"]
mod tests;
