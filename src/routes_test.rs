use super::*;

// =============================================================
// Table lookups
// =============================================================

#[test]
fn users_requires_the_users_permission() {
    let req = requirement_for("/users").unwrap();
    assert_eq!(req.permission, Some(permissions::USERS_VIEW));
    assert!(req.roles.is_empty());
}

#[test]
fn courses_requires_the_courses_permission() {
    let req = requirement_for("/courses").unwrap();
    assert_eq!(req.permission, Some(permissions::COURSES_VIEW));
}

#[test]
fn students_requires_the_enrollments_permission() {
    let req = requirement_for("/students").unwrap();
    assert_eq!(req.permission, Some(permissions::ENROLLMENTS_VIEW));
}

#[test]
fn documents_is_open_to_any_authenticated_role() {
    let req = requirement_for("/documents").unwrap();
    assert_eq!(req.permission, None);
    assert!(req.roles.is_empty());
}

#[test]
fn dashboard_is_gated_by_role_set() {
    let req = requirement_for("/dashboard").unwrap();
    assert_eq!(req.permission, None);
    assert!(req.roles.contains(&roles::ADMIN));
    assert!(req.roles.contains(&roles::PROFESOR));
    assert!(req.roles.contains(&roles::ADMINISTRATIVO));
    assert!(!req.roles.contains(&roles::ESTUDIANTE));
}

#[test]
fn root_is_protected_but_open() {
    let req = requirement_for("/").unwrap();
    assert_eq!(req, RouteRequirement::default());
}

#[test]
fn login_and_unauthorized_are_public() {
    assert!(requirement_for("/login").is_none());
    assert!(requirement_for("/unauthorized").is_none());
}

#[test]
fn unknown_paths_are_public() {
    assert!(requirement_for("/nope").is_none());
}

#[test]
fn trailing_slash_is_normalized() {
    assert_eq!(requirement_for("/users/"), requirement_for("/users"));
    assert!(requirement_for("/users/").is_some());
}

// =============================================================
// Role landing pages
// =============================================================

#[test]
fn students_land_on_courses() {
    assert_eq!(home_for_role(roles::ESTUDIANTE), paths::COURSES);
}

#[test]
fn everyone_else_lands_on_the_dashboard() {
    assert_eq!(home_for_role(roles::ADMIN), paths::DASHBOARD);
    assert_eq!(home_for_role(roles::PROFESOR), paths::DASHBOARD);
    assert_eq!(home_for_role(roles::ADMINISTRATIVO), paths::DASHBOARD);
    assert_eq!(home_for_role("desconocido"), paths::DASHBOARD);
}
