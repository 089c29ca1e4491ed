use super::*;

// =========================================================
// Path parsing
// =========================================================

#[test]
fn parses_public_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/products"), AppRoute::Products);
    assert_eq!(AppRoute::from_path("/products/"), AppRoute::Products);
    assert_eq!(AppRoute::from_path("/products/42"), AppRoute::ProductDetail(42));
    assert_eq!(AppRoute::from_path("/products/42/"), AppRoute::ProductDetail(42));
}

#[test]
fn parses_admin_routes() {
    assert_eq!(AppRoute::from_path("/manage"), AppRoute::Manage);
    assert_eq!(AppRoute::from_path("/manage/7"), AppRoute::ManageEdit(7));
    assert_eq!(AppRoute::from_path("/create-product"), AppRoute::CreateProduct);
}

#[test]
fn parses_auth_routes() {
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login { from: None });
    assert_eq!(
        AppRoute::from_path("/login?from=/manage/3"),
        AppRoute::Login {
            from: Some("/manage/3".to_string())
        }
    );
    assert_eq!(AppRoute::from_path("/logout"), AppRoute::Logout);
}

#[test]
fn unknown_or_malformed_paths_are_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/products/abc"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/manage/abc"), AppRoute::NotFound);
}

#[test]
fn to_path_round_trips() {
    for path in ["/", "/products", "/products/5", "/create-product", "/manage", "/manage/5", "/login", "/logout"] {
        let route = AppRoute::from_path(path);
        assert_eq!(AppRoute::from_path(&route.to_path()), route, "path: {path}");
    }
}

#[test]
fn login_path_carries_return_target() {
    let route = AppRoute::Login {
        from: Some("/manage".to_string()),
    };
    assert_eq!(route.to_path(), "/login?from=/manage");
}

// =========================================================
// Route guard
// =========================================================

#[test]
fn protected_paths_without_session_redirect_with_from() {
    for path in ["/manage", "/manage/", "/manage/12", "/create-product"] {
        match check_access(path, false) {
            GuardDecision::RedirectToLogin { from } => assert_eq!(from, path),
            GuardDecision::Allow => panic!("{path} must not be allowed without a session"),
        }
    }
}

#[test]
fn protected_paths_with_session_are_allowed() {
    // Cookie presence is sufficient; no validity check happens client-side.
    for path in ["/manage", "/manage/12", "/create-product"] {
        assert_eq!(check_access(path, true), GuardDecision::Allow);
    }
}

#[test]
fn public_paths_are_always_allowed() {
    for path in ["/", "/products", "/products/3", "/login", "/logout"] {
        assert_eq!(check_access(path, false), GuardDecision::Allow, "path: {path}");
        assert_eq!(check_access(path, true), GuardDecision::Allow, "path: {path}");
    }
}

#[test]
fn prefix_matching_does_not_leak_to_siblings() {
    // "/management" does not start with the protected "/manage/" segment prefix
    assert!(!is_protected_path("/management"));
    assert!(is_protected_path("/manage/anything/nested"));
}

#[test]
fn guard_ignores_query_string_when_matching() {
    match check_access("/manage?tab=stock", false) {
        GuardDecision::RedirectToLogin { from } => assert_eq!(from, "/manage"),
        GuardDecision::Allow => panic!("query string must not bypass the guard"),
    }
}
