//! Blocking-call classification.
//!
//! A call site matches at most one idiom, checked in this order:
//!
//! | # | Shape | Match |
//! |---|-------|-------|
//! | 1 | invocation `Wait` | containing type is either computation handle |
//! | 2 | invocation `GetResult` | containing type is the awaiter |
//! | 3 | property read `Result` | containing type is the generic handle |
//! | 4 | any other invocation not returning a handle | containing type declares an async-returning sibling |
//!
//! Idioms 1 and 2 are decided by name alone: an invocation named `Wait` on
//! an unrelated type is not a match and is not offered to idiom 4 either.

use crate::call_site::{CallSite, InvocationSite, PropertyReadSite};
use crate::options::BlockingMemberNames;
use crate::type_resolver::{CanonicalType, ResolvedTypeSet};
use nowait_semantic::{MethodId, SymbolDatabase};
use tracing::trace;

/// Which blocking idiom a call site matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockingIdiom {
    BlockingWait,
    AwaiterResult,
    SynchronousResult,
    /// The containing type offers an asynchronous sibling of the called method.
    AsyncSibling { candidate: MethodId },
}

/// A matched blocking call and the suggested alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockingCall {
    pub idiom: BlockingIdiom,
    pub suggestion: String,
}

pub struct BlockingCallClassifier<'a> {
    db: &'a dyn SymbolDatabase,
    types: &'a ResolvedTypeSet,
    members: &'a BlockingMemberNames,
}

impl<'a> BlockingCallClassifier<'a> {
    pub fn new(
        db: &'a dyn SymbolDatabase,
        types: &'a ResolvedTypeSet,
        members: &'a BlockingMemberNames,
    ) -> Self {
        Self { db, types, members }
    }

    pub fn classify(&self, site: &CallSite<'_>) -> Option<BlockingCall> {
        let result = match site {
            CallSite::Invocation(invocation) => self.classify_invocation(invocation),
            CallSite::PropertyRead(read) => self.classify_property_read(read),
        };
        trace!(name = site.name(), idiom = ?result.as_ref().map(|call| call.idiom), "classified call site");
        result
    }

    fn classify_invocation(&self, site: &InvocationSite<'_>) -> Option<BlockingCall> {
        let op = &self.members.suspension_operator;

        if site.name == self.members.blocking_wait {
            return self
                .types
                .is_async_handle(site.containing_definition)
                .then(|| BlockingCall {
                    idiom: BlockingIdiom::BlockingWait,
                    suggestion: format!("Use {op} instead of '{}()'", site.name),
                });
        }

        if site.name == self.members.result_extraction {
            return (site.containing_definition == self.types.async_result_awaiter).then(|| {
                BlockingCall {
                    idiom: BlockingIdiom::AwaiterResult,
                    suggestion: format!("Use {op} instead of '{}()'", site.name),
                }
            });
        }

        if self.types.is_async_handle_opt(site.return_type) {
            return None;
        }

        let candidate = self.find_async_sibling(site)?;
        let candidate_name = self.db.method(candidate).map(|m| m.name.as_str())?;
        Some(BlockingCall {
            idiom: BlockingIdiom::AsyncSibling { candidate },
            suggestion: format!("Use '{candidate_name}' instead of '{}'", site.name),
        })
    }

    fn classify_property_read(&self, site: &PropertyReadSite<'_>) -> Option<BlockingCall> {
        if site.name != self.members.result_accessor
            || site.containing_definition != self.types.async_result_of_t
        {
            return None;
        }
        Some(BlockingCall {
            idiom: BlockingIdiom::SynchronousResult,
            suggestion: format!(
                "Use {} instead of '{}'",
                self.members.suspension_operator, site.name
            ),
        })
    }

    /// First directly declared member of the containing type, in declaration
    /// order, that is an asynchronous counterpart of the called method.
    fn find_async_sibling(&self, site: &InvocationSite<'_>) -> Option<MethodId> {
        let suffix = &self.members.async_suffix;
        self.db
            .members(site.containing_type)
            .iter()
            .filter_map(|member| member.as_method())
            .filter(|&id| id != site.target)
            .find(|&id| {
                let Some(candidate) = self.db.method(id) else {
                    return false;
                };
                (!site.is_static || candidate.is_static())
                    && is_same_or_suffixed(&candidate.name, site.name, suffix)
                    && self.types.is_async_handle_opt(
                        candidate
                            .return_type
                            .map(|ty| CanonicalType::of(self.db, ty)),
                    )
            })
    }
}

fn is_same_or_suffixed(candidate: &str, name: &str, suffix: &str) -> bool {
    candidate == name
        || candidate
            .strip_prefix(name)
            .is_some_and(|rest| rest == suffix)
}

#[cfg(test)]
#[path = "../tests/blocking_call_tests.rs"]
mod tests;
