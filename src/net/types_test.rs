use super::*;

// =============================================================
// User profile parsing
// =============================================================

#[test]
fn user_parses_the_backend_field_names() {
    let json = r#"{
        "id": 7,
        "nombre_usuario": "jperez",
        "nombre": "Juan",
        "apellido": "Pérez",
        "email": "jperez@campus.edu",
        "rol": {"id": 1, "nombre": "admin"},
        "permisos": ["usuarios.ver", "cursos.ver"],
        "ultimo_acceso": "2024-05-01T10:00:00Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.username, "jperez");
    assert_eq!(user.first_name, "Juan");
    assert_eq!(user.role.name, "admin");
    assert_eq!(user.permissions.len(), 2);
    assert_eq!(user.last_access.as_deref(), Some("2024-05-01T10:00:00Z"));
}

#[test]
fn user_defaults_absent_optional_fields() {
    let json = r#"{"id": 1, "nombre_usuario": "sola"}"#;
    let user: User = serde_json::from_str(json).unwrap();

    assert!(user.permissions.is_empty());
    assert!(user.last_access.is_none());
    assert_eq!(user.role, Role::default());
}

#[test]
fn user_survives_the_localstorage_round_trip() {
    // The session store caches the profile as JSON; what comes back must
    // equal what went in.
    let original = User {
        id: 9,
        username: "mruiz".to_owned(),
        first_name: "María".to_owned(),
        last_name: "Ruiz".to_owned(),
        email: "mruiz@campus.edu".to_owned(),
        role: Role {
            id: 3,
            name: "estudiante".to_owned(),
        },
        permissions: vec!["cursos.ver".to_owned()],
        last_access: Some("2024-05-01T10:00:00Z".to_owned()),
    };
    let blob = serde_json::to_string(&original).unwrap();
    let restored: User = serde_json::from_str(&blob).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn display_name_falls_back_to_username() {
    let user = User {
        username: "jperez".to_owned(),
        ..User::default()
    };
    assert_eq!(user.display_name(), "jperez");

    let named = User {
        first_name: "Juan".to_owned(),
        last_name: "Pérez".to_owned(),
        ..User::default()
    };
    assert_eq!(named.display_name(), "Juan Pérez");
}

#[test]
fn has_permission_matches_whole_strings_only() {
    let user = User {
        permissions: vec!["usuarios.ver".to_owned()],
        ..User::default()
    };
    assert!(user.has_permission("usuarios.ver"));
    assert!(!user.has_permission("usuarios"));
    assert!(!user.has_permission("usuarios.ver.todos"));
}

// =============================================================
// Entity rows
// =============================================================

#[test]
fn user_account_defaults_to_active() {
    let json = r#"{"usuario_id": 4, "nombre_usuario": "lgomez"}"#;
    let account: UserAccount = serde_json::from_str(json).unwrap();
    assert!(account.active);
    assert!(account.role_name.is_none());
}

#[test]
fn user_form_omits_an_empty_password() {
    let form = UserForm {
        first_name: "Luis".to_owned(),
        username: "lgomez".to_owned(),
        role_id: "2".to_owned(),
        ..UserForm::default()
    };
    let value = serde_json::to_value(&form).unwrap();

    assert!(value.get("password").is_none());
    assert_eq!(value["nombre"], "Luis");
    assert_eq!(value["rol_id"], "2");
}

#[test]
fn user_form_sends_a_non_empty_password() {
    let form = UserForm {
        password: "secreto".to_owned(),
        ..UserForm::default()
    };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["password"], "secreto");
}

#[test]
fn course_parses_the_backend_field_names() {
    let json = r#"{
        "curso_id": 12,
        "materia_id": 3,
        "profesor_id": 5,
        "codigo_materia": "MAT101",
        "nombre_materia": "Cálculo I",
        "semestre": "2024-1",
        "ano_academico": 2024,
        "cupo_maximo": 40
    }"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert_eq!(course.id, 12);
    assert_eq!(course.subject_code, "MAT101");
    assert_eq!(course.academic_year, 2024);
    assert_eq!(course.capacity, 40);
}

#[test]
fn enrollment_defaults_absent_join_fields() {
    let json = r#"{"inscripcion_id": 31, "estudiante_id": 9}"#;
    let enrollment: Enrollment = serde_json::from_str(json).unwrap();
    assert_eq!(enrollment.id, 31);
    assert_eq!(enrollment.student_id, 9);
    assert!(enrollment.student_name.is_empty());
}

#[test]
fn document_parses_the_store_id() {
    let json = r#"{
        "_id": "663d1f",
        "titulo": "Guía de estudio",
        "tipo": "guia",
        "contenido": "Capítulos 1 a 3",
        "etiquetas": ["parcial", "2024"],
        "autor_nombre": "Juan Pérez"
    }"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.id, "663d1f");
    assert_eq!(doc.tags, vec!["parcial", "2024"]);
    assert!(doc.created_at.is_none());
}

// =============================================================
// Tag input parsing
// =============================================================

#[test]
fn split_tags_trims_and_drops_empties() {
    assert_eq!(
        split_tags(" parcial, 2024 ,, final "),
        vec!["parcial", "2024", "final"]
    );
}

#[test]
fn split_tags_of_blank_input_is_empty() {
    assert!(split_tags("").is_empty());
    assert!(split_tags(" , , ").is_empty());
}
