//! Analyzer options.
//!
//! Every field has a default, so an empty options object (or no options at
//! all) yields the standard behavior. Loading these from a file is the job of
//! the embedding application; this module only defines the shape.

use nowait_common::{DiagnosticCategory, RuleDescriptor};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer};

/// Custom deserializer for boolean options that accepts both bool and string values.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

// =============================================================================
// Well-known names
// =============================================================================

/// Fully-qualified metadata names of the asynchronous-computation types.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WellKnownTypeNames {
    /// Non-generic computation handle.
    pub async_result: String,
    /// Generic, value-producing computation handle.
    pub async_result_of_t: String,
    /// Awaiter exposing the blocking result-extraction method.
    pub async_result_awaiter: String,
}

impl Default for WellKnownTypeNames {
    fn default() -> Self {
        Self {
            async_result: "System.Threading.Tasks.Task".to_string(),
            async_result_of_t: "System.Threading.Tasks.Task`1".to_string(),
            async_result_awaiter: "System.Runtime.CompilerServices.TaskAwaiter".to_string(),
        }
    }
}

/// Member names that make up the blocking idioms.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockingMemberNames {
    pub blocking_wait: String,
    pub result_extraction: String,
    pub result_accessor: String,
    pub async_suffix: String,
    /// Spelling of the suspension operator used in suggestions.
    pub suspension_operator: String,
}

impl Default for BlockingMemberNames {
    fn default() -> Self {
        Self {
            blocking_wait: "Wait".to_string(),
            result_extraction: "GetResult".to_string(),
            result_accessor: "Result".to_string(),
            async_suffix: "Async".to_string(),
            suspension_operator: "await".to_string(),
        }
    }
}

// =============================================================================
// Rule settings
// =============================================================================

/// Per-rule override.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSetting {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub severity: Option<DiagnosticCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerOptions {
    pub well_known_types: WellKnownTypeNames,
    pub members: BlockingMemberNames,
    /// Overrides keyed by rule identifier.
    pub rules: FxHashMap<String, RuleSetting>,
    pub analyze_generated_code: bool,
}

impl AnalyzerOptions {
    pub fn rule_enabled(&self, rule: &RuleDescriptor) -> bool {
        self.rules
            .get(rule.id)
            .and_then(|setting| setting.enabled)
            .unwrap_or(rule.enabled_by_default)
    }

    pub fn rule_category(&self, rule: &RuleDescriptor) -> DiagnosticCategory {
        self.rules
            .get(rule.id)
            .and_then(|setting| setting.severity)
            .unwrap_or(rule.default_category)
    }

    pub fn with_rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(id.into(), setting);
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
