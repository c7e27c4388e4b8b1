//! Subtree filter to XPath translation (RFC 6241, section 6).
//!
//! Each top-level filter element is rooted at `/module:name` for every module
//! that may own it. Below the root:
//! - content-match leaves become predicates on the current path
//! - attributes in a known namespace become `[@module:name='value']` predicates
//! - every containment or selection child starts its own alternative path
//!
//! Namespaces that map to no module are skips, not errors: they shrink the
//! output instead of failing the request.
//!
//! # Module Organization
//!
//! - `compiler`: the recursive walk and branching
//! - `content`: content value rendering (qualified values)

mod compiler;
mod content;


pub use compiler::Compiler;
