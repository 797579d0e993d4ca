use crate::path::parse_query;
use crate::types::RouteParams;

/// Zips placeholder names with captured values, then overlays query pairs.
/// A repeated placeholder name keeps its last value; query values win over
/// same-named placeholders.
pub fn extract_params(names: &[String], values: &[String], query: Option<&str>) -> RouteParams {
    let mut params = RouteParams::with_capacity(names.len());
    for (name, value) in names.iter().zip(values.iter()) {
        params.insert(name.clone(), value.clone());
    }
    if let Some(query) = query {
        params.extend(parse_query(query));
    }
    params
}
