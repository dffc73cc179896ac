//! Page components, one module per client route.

pub mod courses;
pub mod dashboard;
pub mod documents;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod students;
pub mod unauthorized;
pub mod users;
