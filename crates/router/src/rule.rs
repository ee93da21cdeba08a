//! Match predicates stored in the rule table

/// A rule that decides whether a message may be delivered
///
/// The bus supplies the concrete rule type (interface, member, path and
/// sender filters); the table only stores rules and asks them to match.
pub trait MatchRule<M: ?Sized> {
    /// True if `message` satisfies this rule
    fn is_match(&self, message: &M) -> bool;
}

impl<M: ?Sized, F> MatchRule<M> for F
where
    F: Fn(&M) -> bool,
{
    fn is_match(&self, message: &M) -> bool {
        self(message)
    }
}
