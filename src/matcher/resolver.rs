use super::{MatchOrder, extract_params, select_match};
use crate::path::{location_path, split_location};
use crate::pattern::CaptureResult;
use crate::registry::{RouteInstance, RouteTable};
use crate::types::RouteParams;

/// A candidate instance with its match result. `captures` is `None` when the
/// location matched nothing and `instance` is only the fallback carrier.
pub struct PotentialMatch<'t, V> {
    pub instance: &'t RouteInstance<V>,
    pub captures: Option<CaptureResult>,
    pub path: String,
    pub query: Option<String>,
}

impl<V> PotentialMatch<'_, V> {
    pub fn is_match(&self) -> bool {
        self.captures.is_some()
    }

    pub fn params(&self) -> RouteParams {
        let values = self
            .captures
            .as_ref()
            .map(|caps| caps.values.as_slice())
            .unwrap_or_default();
        extract_params(
            self.instance.pattern().param_names(),
            values,
            self.query.as_deref(),
        )
    }
}

impl<V> std::fmt::Debug for PotentialMatch<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PotentialMatch")
            .field("route", &self.instance.id())
            .field("template", &self.instance.path())
            .field("captures", &self.captures)
            .field("path", &self.path)
            .field("query", &self.query)
            .finish()
    }
}

/// Matches `location` against every instance in table order and picks one
/// by `order`. Returns `None` only for an empty table.
#[tracing::instrument(level = "trace", skip(table), fields(instances = table.len() as u64))]
pub fn resolve<'t, V>(
    table: &'t RouteTable<V>,
    location: &str,
    order: MatchOrder,
) -> Option<PotentialMatch<'t, V>> {
    let fallback = table.first()?;

    let parts = split_location(location);
    let path = location_path(parts.path);
    let query = parts.query.map(str::to_string);

    let candidates: Vec<_> = table
        .iter()
        .filter_map(|instance| {
            instance
                .pattern()
                .captures(&path)
                .map(|captures| PotentialMatch {
                    instance,
                    captures: Some(captures),
                    path: path.clone(),
                    query: query.clone(),
                })
        })
        .collect();

    let selected = select_match(order, candidates).unwrap_or_else(|| PotentialMatch {
        instance: fallback,
        captures: None,
        path: path.clone(),
        query,
    });

    tracing::trace!(
        route = %selected.instance.id(),
        matched = selected.is_match(),
        "location resolved"
    );

    Some(selected)
}
