//! Diagnostic types and the rule catalog for the blocking-call analyzer.
//!
//! The analyzer owns exactly two rules. Both are always registered, whether
//! or not either fires in a given compilation, and both default to the
//! informational category so they never fail a build.

use serde::{Deserialize, Serialize};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category (severity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    /// Reported to tooling only, never shown in build output.
    Hidden = 0,
    /// Informational: shown, never fails a build.
    Info = 1,
    Warning = 2,
    Error = 3,
}

/// A reported finding at a source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub rule_id: &'static str,
    pub category: DiagnosticCategory,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    /// Create a diagnostic using the rule's default category.
    #[must_use]
    pub fn from_rule(
        rule: &RuleDescriptor,
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule.id,
            category: rule.default_category,
            file: file.into(),
            start,
            length,
            message_text: message.into(),
        }
    }

    /// Override the category (e.g. from user configuration).
    #[must_use]
    pub const fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }
}

/// Format a message template by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

// =============================================================================
// Rule Catalog
// =============================================================================

/// Static description of a rule: identity, title, template and defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub message_format: &'static str,
    pub category_name: &'static str,
    pub default_category: DiagnosticCategory,
    pub enabled_by_default: bool,
}

impl RuleDescriptor {
    /// Render this rule's message template with a single argument.
    #[must_use]
    pub fn format(&self, arg: &str) -> String {
        format_message(self.message_format, &[arg])
    }
}

pub mod rule_ids {
    /// Blocking call performed inside an asynchronous context.
    pub const BLOCKING_CALL_IN_ASYNC_CONTEXT: &str = "BlockingCallInAsyncContext";
    /// Blocking call whose enclosing executable could be made asynchronous.
    pub const BLOCKING_CALL_CONVERTIBLE_TO_ASYNC: &str = "BlockingCallConvertibleToAsync";
}

pub const BLOCKING_CALL_IN_ASYNC_CONTEXT: RuleDescriptor = RuleDescriptor {
    id: rule_ids::BLOCKING_CALL_IN_ASYNC_CONTEXT,
    title: "Do not use blocking call",
    message_format: "{0}",
    category_name: "Design",
    default_category: DiagnosticCategory::Info,
    enabled_by_default: true,
};

pub const BLOCKING_CALL_CONVERTIBLE_TO_ASYNC: RuleDescriptor = RuleDescriptor {
    id: rule_ids::BLOCKING_CALL_CONVERTIBLE_TO_ASYNC,
    title: "Do not use blocking call (make method async)",
    message_format: "{0}",
    category_name: "Design",
    default_category: DiagnosticCategory::Info,
    enabled_by_default: true,
};

/// Every rule this analyzer supports, in registration order.
pub static RULE_DESCRIPTORS: [RuleDescriptor; 2] =
    [BLOCKING_CALL_IN_ASYNC_CONTEXT, BLOCKING_CALL_CONVERTIBLE_TO_ASYNC];

/// Look up a rule descriptor by identifier.
#[must_use]
pub fn get_rule_descriptor(id: &str) -> Option<&'static RuleDescriptor> {
    RULE_DESCRIPTORS.iter().find(|r| r.id == id)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
