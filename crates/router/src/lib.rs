//! Routing rule table for bus endpoints
//!
//! The dispatcher asks [`RuleTable::ok_to_send`] whether any rule an
//! endpoint registered matches an outgoing message. Rules are opaque
//! predicates supplied by the caller through [`MatchRule`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod rule;
pub mod rule_table;

pub use error::{Error, Result};
pub use rule::MatchRule;
pub use rule_table::{RuleTable, RuleTableGuard, Rules};
