//! Centralized limits for the blocking-call analyzer.
//!
//! Hosts hand the analyzer symbol graphs it did not build. A malformed graph
//! (a base type that eventually names itself, a containing-type loop) must not
//! hang a worker thread, so every walk over such a graph is bounded by one of
//! the constants below.

// =============================================================================
// Hierarchy Walks
// =============================================================================

/// Maximum number of base-type / inherited-interface hops followed when
/// collecting the interface closure of a type.
///
/// Real hierarchies are shallow; hitting this limit means the host produced a
/// cyclic graph and the walk stops with whatever it collected so far.
pub const MAX_TYPE_HIERARCHY_DEPTH: u32 = 64;

/// Maximum number of containing-type hops followed when deciding whether a
/// symbol is visible outside its compilation.
pub const MAX_CONTAINING_TYPE_DEPTH: u32 = 64;

