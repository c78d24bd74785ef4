use super::*;

// =============================================================
// Guard decision
// =============================================================

#[test]
fn guard_waits_while_checking() {
    assert_eq!(guard(SessionStatus::Checking, None, None), GuardOutcome::Wait);
    assert_eq!(
        guard(SessionStatus::Checking, None, Some(UserRole::Admin)),
        GuardOutcome::Wait
    );
}

#[test]
fn guard_redirects_when_unauthenticated() {
    assert_eq!(
        guard(SessionStatus::Unauthenticated, None, None),
        GuardOutcome::Redirect
    );
}

#[test]
fn guard_redirects_while_pending_mfa() {
    // The second factor is mandatory; a half-finished login never renders
    // protected content.
    assert_eq!(
        guard(SessionStatus::PendingMfa, None, None),
        GuardOutcome::Redirect
    );
}

#[test]
fn guard_renders_when_authenticated() {
    assert_eq!(
        guard(SessionStatus::Authenticated, Some(UserRole::Staff), None),
        GuardOutcome::Render
    );
}

#[test]
fn guard_enforces_required_role() {
    assert_eq!(
        guard(
            SessionStatus::Authenticated,
            Some(UserRole::Staff),
            Some(UserRole::Admin)
        ),
        GuardOutcome::Redirect
    );
    assert_eq!(
        guard(
            SessionStatus::Authenticated,
            Some(UserRole::Admin),
            Some(UserRole::Admin)
        ),
        GuardOutcome::Render
    );
}

// =============================================================
// Routes
// =============================================================

#[test]
fn test_route_equality() {
    assert_eq!(MainRoute::Home, MainRoute::Home);
    let cat1 = MainRoute::Category {
        slug: "canecas".to_string(),
    };
    let cat2 = MainRoute::Category {
        slug: "canecas".to_string(),
    };
    let cat3 = MainRoute::Category {
        slug: "chaveiros".to_string(),
    };
    assert_eq!(cat1, cat2);
    assert_ne!(cat1, cat3);
}

#[test]
fn test_portal_routes_carry_user_id() {
    let route = MainRoute::Mfa {
        user_id: "f47ac10b-58cc-4372-a567-0e02b2c3d479".to_string(),
    };
    match route {
        MainRoute::Mfa { user_id } => assert_eq!(user_id.len(), 36),
        _ => panic!("Expected Mfa route"),
    }
}

#[test]
fn test_admin_route_labels() {
    assert_eq!(AdminRoute::Products.label_key(), "admin.nav.products");
    assert_eq!(
        AdminRoute::EditProduct {
            id: "caneca".to_string()
        }
        .label_key(),
        "admin.nav.products"
    );
    assert_eq!(AdminRoute::Users.label_key(), "admin.nav.users");
}
