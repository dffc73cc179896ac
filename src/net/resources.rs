//! Typed CRUD clients for the backend entities.
//!
//! One thin function per endpoint over the generic gateway helpers; the
//! screens own presentation, these own the paths. Create/update responses
//! are discarded since every screen reloads its list after a mutation.

use super::api::{self, ApiError};
use super::types::{
    Course, CourseForm, Document, DocumentForm, Enrollment, EnrollmentForm, UserAccount, UserForm,
};

/// List all user accounts.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn list_users() -> Result<Vec<UserAccount>, ApiError> {
    api::get_json("/users").await
}

/// Create a user account.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn create_user(form: &UserForm) -> Result<(), ApiError> {
    api::post_json::<_, serde_json::Value>("/users", form)
        .await
        .map(|_| ())
}

/// Update a user account.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn update_user(id: i64, form: &UserForm) -> Result<(), ApiError> {
    api::put_json::<_, serde_json::Value>(&format!("/users/{id}"), form)
        .await
        .map(|_| ())
}

/// Delete a user account.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/users/{id}")).await
}

/// List all courses.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn list_courses() -> Result<Vec<Course>, ApiError> {
    api::get_json("/cursos").await
}

/// Create a course.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn create_course(form: &CourseForm) -> Result<(), ApiError> {
    api::post_json::<_, serde_json::Value>("/cursos", form)
        .await
        .map(|_| ())
}

/// Update a course.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn update_course(id: i64, form: &CourseForm) -> Result<(), ApiError> {
    api::put_json::<_, serde_json::Value>(&format!("/cursos/{id}"), form)
        .await
        .map(|_| ())
}

/// Delete a course.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn delete_course(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/cursos/{id}")).await
}

/// List all enrollments.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn list_enrollments() -> Result<Vec<Enrollment>, ApiError> {
    api::get_json("/inscripciones").await
}

/// List the enrollments of one student.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn list_student_enrollments(student_id: i64) -> Result<Vec<Enrollment>, ApiError> {
    api::get_json(&format!("/inscripciones/estudiante/{student_id}")).await
}

/// Enroll a student in a course.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn create_enrollment(form: &EnrollmentForm) -> Result<(), ApiError> {
    api::post_json::<_, serde_json::Value>("/inscripciones", form)
        .await
        .map(|_| ())
}

/// Remove an enrollment.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn delete_enrollment(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/inscripciones/{id}")).await
}

/// List all documents.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn list_documents() -> Result<Vec<Document>, ApiError> {
    api::get_json("/documentos").await
}

/// Create a document.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn create_document(form: &DocumentForm) -> Result<(), ApiError> {
    api::post_json::<_, serde_json::Value>("/documentos", form)
        .await
        .map(|_| ())
}

/// Update a document.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn update_document(id: &str, form: &DocumentForm) -> Result<(), ApiError> {
    api::put_json::<_, serde_json::Value>(&format!("/documentos/{id}"), form)
        .await
        .map(|_| ())
}

/// Delete a document.
///
/// # Errors
///
/// Propagates the gateway error.
pub async fn delete_document(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/documentos/{id}")).await
}

/// Aggregate counts for the dashboard cards; a failed count reads as
/// `None` so one broken endpoint does not blank the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub users: Option<usize>,
    pub courses: Option<usize>,
    pub enrollments: Option<usize>,
    pub documents: Option<usize>,
}

/// Fetch all four dashboard counts in one pass.
pub async fn fetch_dashboard_stats() -> DashboardStats {
    DashboardStats {
        users: list_users().await.ok().map(|v| v.len()),
        courses: list_courses().await.ok().map(|v| v.len()),
        enrollments: list_enrollments().await.ok().map(|v| v.len()),
        documents: list_documents().await.ok().map(|v| v.len()),
    }
}
