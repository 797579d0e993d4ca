use super::PotentialMatch;
use serde::{Deserialize, Serialize};

/// Tie-break policy applied when several instances match one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchOrder {
    /// First instance in registration order wins, even if a later sibling
    /// is more specific (`/items/:id` shadows a later `/items/new`).
    #[default]
    DefinedFirst,
    /// Highest specificity score wins; ties keep registration order.
    SpecificFirst,
}

pub fn select_match<'t, V>(
    order: MatchOrder,
    candidates: Vec<PotentialMatch<'t, V>>,
) -> Option<PotentialMatch<'t, V>> {
    match order {
        MatchOrder::DefinedFirst => candidates.into_iter().next(),
        MatchOrder::SpecificFirst => {
            let mut best: Option<PotentialMatch<'t, V>> = None;
            for candidate in candidates {
                let better = best.as_ref().is_none_or(|current| {
                    candidate.instance.pattern().score() > current.instance.pattern().score()
                });
                if better {
                    best = Some(candidate);
                }
            }
            best
        }
    }
}
