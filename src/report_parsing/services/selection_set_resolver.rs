use crate::report_parsing::domain::Selection;
use std::collections::HashSet;
use std::hash::Hash;

/// SelectionSetResolver service turning user selections into an inclusion set
///
/// Tri-state semantics:
/// - empty input, any `NONE`, or no concrete value and no `ALL`: empty set
/// - any `ALL`: the whole domain
/// - otherwise: the concrete values, deduplicated
///
/// The domain is passed explicitly so the resolver never has to enumerate a
/// type's values on its own.
pub struct SelectionSetResolver;

impl SelectionSetResolver {
    pub fn resolve<T>(selections: &[Selection<T>], domain: &[T]) -> HashSet<T>
    where
        T: Clone + Eq + Hash,
    {
        if Self::none_specified(selections) {
            HashSet::new()
        } else if Self::all_specified(selections) {
            domain.iter().cloned().collect()
        } else {
            selections.iter().filter_map(Selection::value).cloned().collect()
        }
    }

    /// True when the selections resolve to nothing regardless of the domain
    pub fn none_specified<T>(selections: &[Selection<T>]) -> bool {
        selections.iter().any(|s| matches!(s, Selection::None))
            || (!Self::all_specified(selections)
                && selections.iter().all(|s| s.value().is_none()))
    }

    pub fn all_specified<T>(selections: &[Selection<T>]) -> bool {
        selections.iter().any(|s| matches!(s, Selection::All))
    }
}
