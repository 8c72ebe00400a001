//! Final decision: which diagnostic, if any, a blocking call produces.
//!
//! | Async context | Signature | Finding |
//! |---------------|-----------|---------|
//! | async         | any       | `InAsyncContext`: suggestion |
//! | not async     | mutable   | `CanMakeAsync`: suggestion + " and make method async" |
//! | not async     | fixed     | none |

use crate::blocking_call::BlockingCall;
use crate::context::{AsyncContext, SignatureMutability};
use crate::options::AnalyzerOptions;
use nowait_common::diagnostics::{
    BLOCKING_CALL_CONVERTIBLE_TO_ASYNC, BLOCKING_CALL_IN_ASYNC_CONTEXT,
};
use nowait_common::{Diagnostic, RuleDescriptor, Span};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FindingKind {
    InAsyncContext,
    CanMakeAsync,
}

impl FindingKind {
    pub const fn rule(self) -> &'static RuleDescriptor {
        match self {
            Self::InAsyncContext => &BLOCKING_CALL_IN_ASYNC_CONTEXT,
            Self::CanMakeAsync => &BLOCKING_CALL_CONVERTIBLE_TO_ASYNC,
        }
    }
}

/// Outcome for one call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    NoMatch,
    InAsyncContext { span: Span, message: String },
    CanMakeAsync { span: Span, message: String },
}

/// The decision table.
pub const fn decide(context: AsyncContext, signature: SignatureMutability) -> Option<FindingKind> {
    match (context, signature) {
        (AsyncContext::Async, _) => Some(FindingKind::InAsyncContext),
        (AsyncContext::NotAsync, SignatureMutability::Mutable) => Some(FindingKind::CanMakeAsync),
        (AsyncContext::NotAsync, SignatureMutability::Fixed) => None,
    }
}

pub fn select_finding(
    call: Option<BlockingCall>,
    context: AsyncContext,
    signature: SignatureMutability,
    span: Span,
) -> Finding {
    let Some(call) = call else {
        return Finding::NoMatch;
    };
    match decide(context, signature) {
        Some(FindingKind::InAsyncContext) => Finding::InAsyncContext {
            span,
            message: call.suggestion,
        },
        Some(FindingKind::CanMakeAsync) => Finding::CanMakeAsync {
            span,
            message: format!("{} and make method async", call.suggestion),
        },
        None => Finding::NoMatch,
    }
}

impl Finding {
    pub const fn kind(&self) -> Option<FindingKind> {
        match self {
            Self::NoMatch => None,
            Self::InAsyncContext { .. } => Some(FindingKind::InAsyncContext),
            Self::CanMakeAsync { .. } => Some(FindingKind::CanMakeAsync),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NoMatch => None,
            Self::InAsyncContext { message, .. } | Self::CanMakeAsync { message, .. } => {
                Some(message.as_str())
            }
        }
    }

    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::NoMatch => None,
            Self::InAsyncContext { span, .. } | Self::CanMakeAsync { span, .. } => Some(*span),
        }
    }

    /// Build the diagnostic record, honoring per-rule settings. A disabled
    /// rule yields nothing; the other rule never stands in for it.
    pub fn to_diagnostic(&self, file: &str, options: &AnalyzerOptions) -> Option<Diagnostic> {
        let rule = self.kind()?.rule();
        if !options.rule_enabled(rule) {
            return None;
        }
        let span = self.span()?;
        let message = rule.format(self.message()?);
        Some(
            Diagnostic::from_rule(rule, file, span.start, span.len(), message)
                .with_category(options.rule_category(rule)),
        )
    }
}
