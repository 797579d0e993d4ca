use super::{RegistryError, RegistryResult, RouteDescriptor, RouteInstance, RouteTable};
use crate::path::{join_paths, normalize_prefix, strip_prefix_occurrence};
use crate::pattern::compile_pattern;
use crate::types::{DEFAULT_MOUNT_TARGET, RouteId};

/// Table-wide settings consumed while flattening descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub prefix: String,
    pub default_target: Option<String>,
}

struct BuildContext<'o, V> {
    prefix: String,
    default_target: &'o str,
    table: RouteTable<V>,
}

/// Flattens a descriptor tree into a fresh table.
#[tracing::instrument(level = "debug", skip(descriptors, options), fields(roots = descriptors.len() as u64, prefix = %options.prefix))]
pub fn build_table<V>(
    descriptors: &[RouteDescriptor<V>],
    options: &BuildOptions,
) -> RegistryResult<RouteTable<V>> {
    if descriptors.is_empty() {
        return Err(RegistryError::NoRoutesProvided);
    }

    let prefix = normalize_prefix(&options.prefix)?;
    let mut ctx = BuildContext {
        table: RouteTable::new(prefix.clone()),
        prefix,
        default_target: options
            .default_target
            .as_deref()
            .unwrap_or(DEFAULT_MOUNT_TARGET),
    };

    walk(&mut ctx, descriptors, "", None, 0)?;

    tracing::debug!(
        instances = ctx.table.len() as u64,
        layouts = ctx.table.stats().layouts as u64,
        "route table built"
    );

    Ok(ctx.table)
}

fn walk<V>(
    ctx: &mut BuildContext<'_, V>,
    descriptors: &[RouteDescriptor<V>],
    accumulated: &str,
    ancestor_layout: Option<RouteId>,
    depth: usize,
) -> RegistryResult<()> {
    for descriptor in descriptors {
        let relative = join_paths([accumulated, descriptor.path.as_str()])?;
        // A subtree that already carries the prefix must not receive it twice.
        let relative = strip_prefix_occurrence(&relative, &ctx.prefix);
        let absolute = join_paths([ctx.prefix.as_str(), relative.as_str()])?;

        let mut next_layout = ancestor_layout;

        match &descriptor.render {
            Some(render) => {
                let id = RouteId::next();
                let instance = RouteInstance {
                    id,
                    pattern: compile_pattern(&absolute)?,
                    path: absolute,
                    render: render.clone(),
                    mount_target: descriptor
                        .mount_target
                        .clone()
                        .unwrap_or_else(|| ctx.default_target.to_string()),
                    is_layout: descriptor.is_layout,
                    parent_layout: ancestor_layout,
                    depth,
                };
                tracing::trace!(route = %id, path = %instance.path, "route instance materialized");
                ctx.table.push(instance);

                if descriptor.is_layout {
                    next_layout = Some(id);
                }
            }
            None if descriptor.is_layout => {
                return Err(RegistryError::LayoutWithoutRender { path: absolute });
            }
            None => ctx.table.stats_mut().record_group(),
        }

        walk(ctx, &descriptor.children, &relative, next_layout, depth + 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> RouteDescriptor<String> {
        let label = path.to_string();
        RouteDescriptor::new(path).render_sync(move |_| Ok(label.clone()))
    }

    fn paths(table: &RouteTable<String>) -> Vec<&str> {
        table.iter().map(|instance| instance.path()).collect()
    }

    #[test]
    fn flattens_in_pre_order_with_absolute_paths() {
        let tree = vec![
            page("/").child(page("about")),
            RouteDescriptor::new("/users/")
                .children([page(":id"), page("//:id/edit/")]),
        ];
        let table = build_table(&tree, &BuildOptions::default()).unwrap();
        assert_eq!(paths(&table), ["/", "/about", "/users/:id", "/users/:id/edit"]);
        assert_eq!(table.stats().groups, 1);
    }

    #[test]
    fn applies_prefix_once() {
        let options = BuildOptions {
            prefix: "/app".to_string(),
            default_target: None,
        };
        let tree = vec![
            page("/home"),
            RouteDescriptor::new("/app/admin").child(page("users")),
            page("/"),
        ];
        let table = build_table(&tree, &options).unwrap();
        assert_eq!(paths(&table), ["/app/home", "/app/admin/users", "/app"]);
    }

    #[test]
    fn nearest_layout_is_recorded() {
        let tree = vec![
            page("/dash")
                .layout()
                .child(page("stats"))
                .child(page("team").layout().child(page(":member"))),
            page("/plain").child(page("inner")),
        ];
        let table = build_table(&tree, &BuildOptions::default()).unwrap();
        let dash = table.find_by_path("/dash").unwrap().id();
        let team = table.find_by_path("/dash/team").unwrap().id();

        assert_eq!(table.find_by_path("/dash").unwrap().parent_layout(), None);
        assert_eq!(table.find_by_path("/dash/stats").unwrap().parent_layout(), Some(dash));
        assert_eq!(table.find_by_path("/dash/team").unwrap().parent_layout(), Some(dash));
        assert_eq!(
            table.find_by_path("/dash/team/:member").unwrap().parent_layout(),
            Some(team)
        );
        assert_eq!(table.find_by_path("/plain/inner").unwrap().parent_layout(), None);

        let member = table.find_by_path("/dash/team/:member").unwrap().id();
        let chain: Vec<_> = table.ancestors(member).iter().map(|i| i.id()).collect();
        assert_eq!(chain, vec![team, dash]);
    }

    #[test]
    fn mount_target_falls_back_through_options_then_default() {
        let tree = vec![page("/a").mount_target("sidebar"), page("/b")];

        let table = build_table(&tree, &BuildOptions::default()).unwrap();
        assert_eq!(table.find_by_path("/a").unwrap().mount_target(), "sidebar");
        assert_eq!(table.find_by_path("/b").unwrap().mount_target(), DEFAULT_MOUNT_TARGET);

        let options = BuildOptions {
            prefix: String::new(),
            default_target: Some("root".to_string()),
        };
        let table = build_table(&tree, &options).unwrap();
        assert_eq!(table.find_by_path("/b").unwrap().mount_target(), "root");
    }

    #[test]
    fn identifiers_are_unique_across_builds() {
        let tree = vec![page("/a"), page("/b")];
        let first = build_table(&tree, &BuildOptions::default()).unwrap();
        let second = build_table(&tree, &BuildOptions::default()).unwrap();
        let mut ids: Vec<_> = first.iter().chain(second.iter()).map(|i| i.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = build_table::<String>(&[], &BuildOptions::default()).unwrap_err();
        assert_eq!(err, RegistryError::NoRoutesProvided);
    }

    #[test]
    fn layout_without_render_is_rejected() {
        let tree = vec![RouteDescriptor::new("/shell").layout().child(page("x"))];
        let err = build_table(&tree, &BuildOptions::default()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::LayoutWithoutRender {
                path: "/shell".to_string()
            }
        );
    }
}
