use screenhop::config::Config;
use screenhop::navigation::{BackOutcome, ChangeKind, NavChange, NavHost, RootBackPolicy};
use screenhop::screens::{nav_graph, ScreenContext};
use screenhop::{Route, RouteError};
use std::cell::RefCell;
use std::rc::Rc;

fn mount(policy: RootBackPolicy) -> NavHost {
    let config = Config::default();
    nav_graph(Route::Main)
        .mount(policy, &ScreenContext::new(&config))
        .unwrap()
}

#[test]
fn test_every_route_can_become_active() {
    for route in Route::all() {
        let mut host = mount(RootBackPolicy::Stay);
        host.route_action().navigate_to(*route);
        assert_eq!(host.current(), *route);
        assert_eq!(host.depth(), 2);
    }
}

#[test]
fn test_login_and_back() {
    let mut host = mount(RootBackPolicy::Stay);
    host.route_action().navigate_to(Route::Login);
    assert_eq!(host.current(), Route::Login);

    let outcome = host.route_action().go_back();
    assert_eq!(outcome, BackOutcome::Popped(Route::Login));
    assert_eq!(host.current(), Route::Main);
}

#[test]
fn test_nested_navigation_unwinds_in_order() {
    let mut host = mount(RootBackPolicy::Stay);
    host.route_action().navigate_to(Route::Setting);
    host.route_action().navigate_to(Route::UserProfile);
    assert_eq!(
        host.stack(),
        &[Route::Main, Route::Setting, Route::UserProfile]
    );

    host.route_action().go_back();
    assert_eq!(host.current(), Route::Setting);
    assert_eq!(host.depth(), 2);

    host.route_action().go_back();
    assert_eq!(host.current(), Route::Main);
    assert_eq!(host.depth(), 1);
}

#[test]
fn test_back_at_root_never_underflows() {
    let mut host = mount(RootBackPolicy::Stay);
    for _ in 0..3 {
        assert_eq!(host.route_action().go_back(), BackOutcome::AtRoot);
    }
    assert_eq!(host.stack(), &[Route::Main]);
    assert!(!host.exit_requested());
}

#[test]
fn test_back_at_root_with_exit_policy() {
    let mut host = mount(RootBackPolicy::Exit);
    host.route_action().navigate_to(Route::Register);
    host.route_action().go_back();
    assert!(!host.exit_requested());

    assert_eq!(host.route_action().go_back(), BackOutcome::ExitRequested);
    assert!(host.exit_requested());
    assert_eq!(host.stack(), &[Route::Main]);
}

#[test]
fn test_unknown_id_leaves_stack_untouched() {
    let mut host = mount(RootBackPolicy::Stay);
    host.route_action().navigate_to(Route::Login);

    let err = host.route_action().navigate_to_id("NOPE").unwrap_err();
    assert_eq!(err, RouteError::InvalidRoute("NOPE".to_string()));
    assert_eq!(host.stack(), &[Route::Main, Route::Login]);

    let route = host.route_action().navigate_to_id("register").unwrap();
    assert_eq!(route, Route::Register);
    assert_eq!(host.current(), Route::Register);
}

#[test]
fn test_subscribers_see_each_change_once() {
    let mut host = mount(RootBackPolicy::Stay);
    let seen: Rc<RefCell<Vec<NavChange>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = host.subscribe(move |change| sink.borrow_mut().push(*change));

    host.route_action().navigate_to(Route::Setting);
    host.route_action().go_back();
    // No-op at root: nothing to report.
    host.route_action().go_back();

    {
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].kind, ChangeKind::Push);
        assert_eq!((seen[0].from, seen[0].to, seen[0].depth), (Route::Main, Route::Setting, 2));
        assert_eq!(seen[1].kind, ChangeKind::Pop);
        assert_eq!((seen[1].from, seen[1].to, seen[1].depth), (Route::Setting, Route::Main, 1));
    }

    assert!(host.unsubscribe(id));
    host.route_action().navigate_to(Route::Login);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_mount_at_non_main_start() {
    let config = Config::default();
    let host = nav_graph(Route::UserProfile)
        .mount(RootBackPolicy::Stay, &ScreenContext::new(&config))
        .unwrap();
    assert_eq!(host.stack(), &[Route::UserProfile]);
}

#[test]
fn test_unmount_reports_final_stack() {
    let config = Config::default();
    let ctx = ScreenContext::new(&config);
    let mut host = mount(RootBackPolicy::Stay);
    host.route_action().navigate_to(Route::Login);
    host.route_action().navigate_to(Route::Login);

    let stack = host.unmount(&ctx).unwrap();
    assert_eq!(stack, vec![Route::Main, Route::Login, Route::Login]);
}
