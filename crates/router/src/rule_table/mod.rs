//! Concurrent multi-map from endpoint to match rules
//!
//! Every operation runs under a single mutex, reads included. Single-step
//! operations on [`RuleTable`] take the lock internally. Callers that need
//! the table to stay still across several steps, e.g. walking every rule of
//! an endpoint before deciding delivery, call [`RuleTable::lock`] and work
//! through the returned [`RuleTableGuard`]. Iterators borrow the guard, so
//! they cannot outlive the lock.

use crate::error::{Error, Result};
use crate::rule::MatchRule;
use parking_lot::{Mutex, MutexGuard};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Debug;
use std::ops::Bound;
use std::slice;

/// Rules keyed by endpoint, ordered by endpoint
///
/// Rules for the same endpoint keep their insertion order.
pub struct RuleTable<E, R> {
    rules: Mutex<BTreeMap<E, Vec<R>>>,
}

/// Exclusive access to a [`RuleTable`]; the lock is released on drop
pub struct RuleTableGuard<'a, E, R> {
    rules: MutexGuard<'a, BTreeMap<E, Vec<R>>>,
}

/// Iterator over `(endpoint, rule)` pairs in endpoint order
pub struct Rules<'a, E, R> {
    endpoints: btree_map::Range<'a, E, Vec<R>>,
    current: Option<(&'a E, slice::Iter<'a, R>)>,
}

impl<E, R> Default for RuleTable<E, R> {
    fn default() -> Self {
        Self {
            rules: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<E, R> RuleTable<E, R>
where
    E: Ord + Clone + Debug,
    R: PartialEq,
{
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the table lock for a multi-step sequence
    pub fn lock(&self) -> RuleTableGuard<'_, E, R> {
        RuleTableGuard {
            rules: self.rules.lock(),
        }
    }

    /// Add a rule for an endpoint
    pub fn add_rule(&self, endpoint: &E, rule: R) {
        self.lock().add_rule(endpoint, rule);
    }

    /// Remove the first rule equal to `rule` stored for `endpoint`
    pub fn remove_rule(&self, endpoint: &E, rule: &R) -> Result<()> {
        self.lock().remove_rule(endpoint, rule)
    }

    /// Remove every rule for `endpoint`, returning how many were dropped
    pub fn remove_all_rules(&self, endpoint: &E) -> Result<usize> {
        self.lock().remove_all_rules(endpoint)
    }

    /// True if any rule stored for `endpoint` matches `message`
    pub fn ok_to_send<M>(&self, message: &M, endpoint: &E) -> bool
    where
        M: ?Sized,
        R: MatchRule<M>,
    {
        self.lock().ok_to_send(message, endpoint)
    }

    /// Number of stored rules
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if no endpoint has a rule
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of endpoints with at least one rule
    pub fn endpoint_count(&self) -> usize {
        self.lock().endpoint_count()
    }
}

impl<'a, E, R> RuleTableGuard<'a, E, R>
where
    E: Ord + Clone + Debug,
    R: PartialEq,
{
    /// Every rule, ordered by endpoint
    pub fn begin(&self) -> Rules<'_, E, R> {
        Rules::new(self.rules.range::<E, _>(..))
    }

    /// Rules stored for `endpoint`, empty if there are none
    pub fn find_rules_for_endpoint(&self, endpoint: &E) -> slice::Iter<'_, R> {
        self.rules
            .get(endpoint)
            .map(|rules| rules.iter())
            .unwrap_or_default()
    }

    /// Rules of every endpoint ordered strictly after `endpoint`
    ///
    /// `endpoint` does not need to be present in the table.
    pub fn advance_to_next_endpoint(&self, endpoint: &E) -> Rules<'_, E, R> {
        Rules::new(
            self.rules
                .range::<E, _>((Bound::Excluded(endpoint), Bound::Unbounded)),
        )
    }

    /// Append a rule after any existing rules for `endpoint`
    pub fn add_rule(&mut self, endpoint: &E, rule: R) {
        self.rules.entry(endpoint.clone()).or_default().push(rule);
        tracing::debug!(?endpoint, "added routing rule");
    }

    /// Remove the first rule equal to `rule`; the endpoint is dropped once
    /// its last rule goes
    pub fn remove_rule(&mut self, endpoint: &E, rule: &R) -> Result<()> {
        let rules = self
            .rules
            .get_mut(endpoint)
            .ok_or_else(|| Error::not_found(endpoint))?;
        let index = rules
            .iter()
            .position(|stored| stored == rule)
            .ok_or_else(|| Error::not_found(endpoint))?;
        rules.remove(index);
        if rules.is_empty() {
            self.rules.remove(endpoint);
        }
        tracing::debug!(?endpoint, "removed routing rule");
        Ok(())
    }

    /// Drop `endpoint` and every rule it holds
    pub fn remove_all_rules(&mut self, endpoint: &E) -> Result<usize> {
        let removed = self
            .rules
            .remove(endpoint)
            .ok_or_else(|| Error::not_found(endpoint))?;
        tracing::debug!(?endpoint, count = removed.len(), "removed all routing rules");
        Ok(removed.len())
    }

    /// True if any rule stored for `endpoint` matches `message`
    pub fn ok_to_send<M>(&self, message: &M, endpoint: &E) -> bool
    where
        M: ?Sized,
        R: MatchRule<M>,
    {
        self.find_rules_for_endpoint(endpoint)
            .any(|rule| rule.is_match(message))
    }

    /// Keep only the rules for which `keep` returns true
    ///
    /// Endpoints left without rules are dropped. Returns the number of
    /// rules removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&E, &R) -> bool,
    {
        let mut removed = 0;
        self.rules.retain(|endpoint, rules| {
            let before = rules.len();
            rules.retain(|rule| keep(endpoint, rule));
            removed += before - rules.len();
            !rules.is_empty()
        });
        if removed > 0 {
            tracing::debug!(count = removed, "pruned routing rules");
        }
        removed
    }

    /// Number of stored rules
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// True if no endpoint has a rule
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of endpoints with at least one rule
    pub fn endpoint_count(&self) -> usize {
        self.rules.len()
    }
}

impl<'a, E, R> Rules<'a, E, R> {
    fn new(endpoints: btree_map::Range<'a, E, Vec<R>>) -> Self {
        Self {
            endpoints,
            current: None,
        }
    }
}

impl<'a, E, R> Iterator for Rules<'a, E, R> {
    type Item = (&'a E, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((endpoint, rules)) = self.current.as_mut() {
                if let Some(rule) = rules.next() {
                    return Some((*endpoint, rule));
                }
            }
            let (endpoint, rules) = self.endpoints.next()?;
            self.current = Some((endpoint, rules.iter()));
        }
    }
}
