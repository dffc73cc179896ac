//! Wire models for the campus backend API.
//!
//! The backend speaks Spanish field names on the wire; serde renames map
//! them onto English Rust fields so the rest of the crate reads naturally.
//! Optional or late-added backend fields default instead of failing the
//! whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
}

/// Authenticated user profile as returned by login and `/users/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre_usuario", default)]
    pub username: String,
    #[serde(rename = "nombre", default)]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "rol", default)]
    pub role: Role,
    #[serde(rename = "permisos", default)]
    pub permissions: Vec<String>,
    #[serde(rename = "ultimo_acceso", default)]
    pub last_access: Option<String>,
}

impl User {
    /// Full name for display, falling back to the username when the
    /// profile carries no name.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }

    /// Whether the user's permission set contains `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login payload.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

fn default_true() -> bool {
    true
}

/// Row in the user-administration table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "usuario_id")]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "nombre_usuario", default)]
    pub username: String,
    #[serde(rename = "rol_nombre", default)]
    pub role_name: Option<String>,
    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
}

/// Create/update payload for a user account. An empty password is omitted
/// so edits do not overwrite the stored one.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserForm {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "nombre_usuario")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "rol_id")]
    pub role_id: String,
}

/// Course row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Course {
    #[serde(rename = "curso_id")]
    pub id: i64,
    #[serde(rename = "materia_id", default)]
    pub subject_id: i64,
    #[serde(rename = "profesor_id", default)]
    pub teacher_id: i64,
    #[serde(rename = "codigo_materia", default)]
    pub subject_code: String,
    #[serde(rename = "nombre_materia", default)]
    pub subject_name: String,
    #[serde(rename = "semestre", default)]
    pub semester: String,
    #[serde(rename = "ano_academico", default)]
    pub academic_year: i64,
    #[serde(rename = "cupo_maximo", default)]
    pub capacity: i64,
}

/// Create/update payload for a course. Fields travel as the form entered
/// them; the backend owns coercion.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CourseForm {
    #[serde(rename = "materia_id")]
    pub subject_id: String,
    #[serde(rename = "profesor_id")]
    pub teacher_id: String,
    #[serde(rename = "semestre")]
    pub semester: String,
    #[serde(rename = "ano_academico")]
    pub academic_year: String,
    #[serde(rename = "cupo_maximo")]
    pub capacity: String,
}

/// Enrollment row joining a student to a course.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "inscripcion_id")]
    pub id: i64,
    #[serde(rename = "estudiante_id", default)]
    pub student_id: i64,
    #[serde(rename = "estudiante", default)]
    pub student_name: String,
    #[serde(rename = "codigo_materia", default)]
    pub subject_code: String,
    #[serde(rename = "nombre_materia", default)]
    pub subject_name: String,
    #[serde(rename = "semestre", default)]
    pub semester: String,
}

/// Payload for `POST /inscripciones`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EnrollmentForm {
    #[serde(rename = "estudiante_id")]
    pub student_id: String,
    #[serde(rename = "curso_id")]
    pub course_id: String,
}

/// Document row. Documents live in a separate store keyed by string ids.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "contenido", default)]
    pub content: String,
    #[serde(rename = "etiquetas", default)]
    pub tags: Vec<String>,
    #[serde(rename = "autor_nombre", default)]
    pub author_name: String,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
}

/// Create/update payload for a document.
#[derive(Clone, Debug, Serialize)]
pub struct DocumentForm {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "contenido")]
    pub content: String,
    #[serde(rename = "etiquetas")]
    pub tags: Vec<String>,
    #[serde(rename = "autor_id")]
    pub author_id: i64,
}

impl Default for DocumentForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: "guia".to_owned(),
            content: String::new(),
            tags: Vec::new(),
            author_id: 0,
        }
    }
}

/// Split a comma-separated tag input into trimmed, non-empty tags.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
