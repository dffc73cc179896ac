//! Route authorization policy.
//!
//! Every protected path is one row in a single static table so the whole
//! policy is auditable in one place. The guard consumes rows via
//! `requirement_for`; paths not listed here are public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Permission strings issued by the backend.
pub mod permissions {
    pub const USERS_VIEW: &str = "usuarios.ver";
    pub const COURSES_VIEW: &str = "cursos.ver";
    pub const ENROLLMENTS_VIEW: &str = "inscripciones.ver";
}

/// Role names issued by the backend.
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const PROFESOR: &str = "profesor";
    pub const ESTUDIANTE: &str = "estudiante";
    pub const ADMINISTRATIVO: &str = "administrativo";
}

/// Client route paths.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const UNAUTHORIZED: &str = "/unauthorized";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PROFILE: &str = "/profile";
    pub const USERS: &str = "/users";
    pub const COURSES: &str = "/courses";
    pub const STUDENTS: &str = "/students";
    pub const DOCUMENTS: &str = "/documents";
}

/// Access requirement for one protected route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    /// Permission string the user must hold, if any.
    pub permission: Option<&'static str>,
    /// Allowed roles; empty means any authenticated role.
    pub roles: &'static [&'static str],
}

const OPEN: RouteRequirement = RouteRequirement {
    permission: None,
    roles: &[],
};

const STAFF: &[&str] = &[roles::ADMIN, roles::PROFESOR, roles::ADMINISTRATIVO];

/// Protected path to requirement, one row per route.
pub const PROTECTED: &[(&str, RouteRequirement)] = &[
    (paths::HOME, OPEN),
    (
        paths::DASHBOARD,
        RouteRequirement {
            permission: None,
            roles: STAFF,
        },
    ),
    (paths::PROFILE, OPEN),
    (
        paths::USERS,
        RouteRequirement {
            permission: Some(permissions::USERS_VIEW),
            roles: &[],
        },
    ),
    (
        paths::COURSES,
        RouteRequirement {
            permission: Some(permissions::COURSES_VIEW),
            roles: &[],
        },
    ),
    (
        paths::STUDENTS,
        RouteRequirement {
            permission: Some(permissions::ENROLLMENTS_VIEW),
            roles: &[],
        },
    ),
    (paths::DOCUMENTS, OPEN),
];

/// Look up the requirement for `path`; `None` means the path is public.
pub fn requirement_for(path: &str) -> Option<RouteRequirement> {
    let normalized = normalize(path);
    PROTECTED
        .iter()
        .find(|(p, _)| *p == normalized)
        .map(|(_, req)| *req)
}

/// Strip one trailing slash, keeping `/` itself intact.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Landing page after login or the `/` redirect.
pub fn home_for_role(role: &str) -> &'static str {
    if role == roles::ESTUDIANTE {
        paths::COURSES
    } else {
        paths::DASHBOARD
    }
}
