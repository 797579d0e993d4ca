use outlet_router::{
    Element, MemoryHistory, MemorySurface, NavigationOptions, RenderError, Resolution,
    RouteDescriptor, Router, RouterError, RouterStatus,
};
use std::cell::RefCell;
use std::rc::Rc;

type TestRouter = Router<MemorySurface, MemoryHistory>;

fn router_at(location: &str) -> TestRouter {
    Router::new(
        MemorySurface::new().with_target("app"),
        MemoryHistory::new(location),
    )
}

fn page(path: &str, label: &str) -> RouteDescriptor<Element> {
    let label = label.to_string();
    RouteDescriptor::new(path).render_sync(move |_| Ok(Element::new("p").text(label.clone())))
}

fn app_text(router: &TestRouter) -> String {
    router.with_surface(|surface| surface.target_text("app").unwrap_or_default())
}

fn recording_options(errors: &Rc<RefCell<Vec<RouterError>>>) -> NavigationOptions<Element> {
    let sink = errors.clone();
    NavigationOptions::builder()
        .on_error(move |err| sink.borrow_mut().push(err.clone()))
        .build()
        .expect("options should build")
}

#[test]
fn router_when_registered_then_resolves_current_location_immediately() {
    let router = router_at("/about");
    let routes = [page("/", "Home"), page("/about", "About")];

    let resolution = futures::executor::block_on(router.register(&routes, Default::default()))
        .expect("registration should resolve");

    assert!(matches!(resolution, Resolution::Rendered { .. }));
    assert_eq!(app_text(&router), "About");
    assert_eq!(router.status(), RouterStatus::Idle);
}

#[test]
fn router_when_zero_routes_registered_then_raises_configuration_error() {
    let router = router_at("/");

    let err = futures::executor::block_on(router.register(&[], Default::default()))
        .expect_err("empty registration should fail");

    assert_eq!(err, RouterError::NoRoutesProvided);
    assert!(router.table().is_none());
}

#[test]
fn router_when_zero_routes_registered_with_handler_then_reports_and_builds_nothing() {
    let router = router_at("/");
    let errors = Rc::new(RefCell::new(Vec::new()));

    let resolution = futures::executor::block_on(router.register(&[], recording_options(&errors)))
        .expect("handler should absorb the error");

    assert_eq!(resolution, Resolution::Reported);
    assert_eq!(errors.borrow().as_slice(), [RouterError::NoRoutesProvided]);
    assert!(router.table().is_none());

    let next = futures::executor::block_on(router.resolve_current())
        .expect("handler should absorb the error");
    assert_eq!(next, Resolution::Reported);
    assert_eq!(errors.borrow().last(), Some(&RouterError::EmptyRegistry));
}

#[test]
fn router_when_resolving_without_registration_then_returns_empty_registry() {
    let router = router_at("/");

    let err = futures::executor::block_on(router.resolve_current())
        .expect_err("resolution without routes should fail");

    assert_eq!(err, RouterError::EmptyRegistry);
}

#[test]
fn router_when_location_unmatched_then_returns_no_match() {
    let router = router_at("/missing/");

    let err = futures::executor::block_on(router.register(&[page("/", "Home")], Default::default()))
        .expect_err("unmatched location should fail loudly");

    assert_eq!(
        err,
        RouterError::NoMatch {
            path: "/missing".to_string()
        }
    );
    assert_eq!(app_text(&router), "");
    assert!(router.current_route().is_none());
}

#[test]
fn router_when_reregistered_then_previous_instances_are_discarded() {
    let router = router_at("/old");
    let errors = Rc::new(RefCell::new(Vec::new()));

    futures::executor::block_on(router.register(&[page("/old", "Old")], recording_options(&errors)))
        .expect("first registration should resolve");
    let old_ids: Vec<_> = router
        .table()
        .expect("table should exist")
        .iter()
        .map(|instance| instance.id())
        .collect();

    let resolution = futures::executor::block_on(
        router.register(&[page("/new", "New")], recording_options(&errors)),
    )
    .expect("handler should absorb the error");

    let table = router.table().expect("table should exist");
    assert_eq!(table.len(), 1);
    assert!(old_ids.iter().all(|id| table.get(*id).is_none()));
    assert_eq!(resolution, Resolution::Reported);
    assert_eq!(
        errors.borrow().as_slice(),
        [RouterError::NoMatch {
            path: "/old".to_string()
        }]
    );
}

#[test]
fn router_when_render_fails_then_error_propagates() {
    let router = router_at("/broken");
    let routes = [RouteDescriptor::new("/broken")
        .render(|_| async { Err::<Element, _>(RenderError::new("boom")) })];

    let err = futures::executor::block_on(router.register(&routes, Default::default()))
        .expect_err("render failure should propagate");

    assert_eq!(err, RouterError::Render(RenderError::new("boom")));
    assert_eq!(router.status(), RouterStatus::Idle);
}

#[test]
fn router_when_replace_called_then_current_entry_is_overwritten() {
    let router = router_at("/");
    let routes = [page("/", "Home"), page("/a", "A"), page("/b", "B")];
    futures::executor::block_on(async {
        router.register(&routes, Default::default()).await?;
        router.navigate("/a").await?;
        router.replace("/b").await
    })
    .expect("navigation should succeed");

    assert_eq!(router.history().entries(), vec!["/", "/b"]);
    assert_eq!(app_text(&router), "B");
}

#[test]
fn router_when_render_fails_then_current_route_is_unchanged() {
    let router = router_at("/users/1");
    let routes = [
        page("/users/:id", "User"),
        RouteDescriptor::new("/broken/:id")
            .render(|_| async { Err::<Element, _>(RenderError::new("boom")) }),
    ];
    futures::executor::block_on(router.register(&routes, Default::default()))
        .expect("registration should resolve");

    let err = futures::executor::block_on(router.navigate("/broken/7"))
        .expect_err("render failure should propagate");

    assert_eq!(err, RouterError::Render(RenderError::new("boom")));
    let current = router.current_route().expect("previous route should stay current");
    assert_eq!(current.path, "/users/1");
    assert_eq!(
        router.current_params().get("id").map(String::as_str),
        Some("1")
    );
}

#[test]
fn router_when_location_has_raw_whitespace_then_no_match_is_reported() {
    let router = router_at("/bad\tpath");
    let errors = Rc::new(RefCell::new(Vec::new()));

    let resolution =
        futures::executor::block_on(router.register(&[page("/", "Home")], recording_options(&errors)))
            .expect("handler should absorb the error");

    assert_eq!(resolution, Resolution::Reported);
    assert_eq!(
        errors.borrow().as_slice(),
        [RouterError::NoMatch {
            path: "/bad\tpath".to_string()
        }]
    );
}
