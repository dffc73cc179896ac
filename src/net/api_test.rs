use super::*;

// =============================================================
// Credential validation
// =============================================================

#[test]
fn empty_credentials_are_rejected_before_the_network() {
    let err = validate_credentials("", "").unwrap_err();
    assert_eq!(
        err,
        ApiError::Validation("Por favor ingrese usuario y contraseña".to_owned())
    );
}

#[test]
fn whitespace_only_credentials_are_rejected() {
    assert!(validate_credentials("  ", "secreto").is_err());
    assert!(validate_credentials("jperez", "   ").is_err());
}

#[test]
fn non_empty_credentials_pass() {
    assert!(validate_credentials("jperez", "secreto").is_ok());
}

// =============================================================
// Error-body mapping
// =============================================================

#[test]
fn error_message_reads_the_backend_message() {
    assert_eq!(
        error_message(r#"{"message": "Credenciales inválidas"}"#),
        "Credenciales inválidas"
    );
}

#[test]
fn error_message_falls_back_on_garbage() {
    assert_eq!(error_message("<html>504</html>"), "Error en el servidor");
    assert_eq!(error_message(""), "Error en el servidor");
}

#[test]
fn error_message_falls_back_when_the_key_is_missing() {
    assert_eq!(error_message(r#"{"error": "nope"}"#), "Error en el servidor");
    assert_eq!(error_message(r#"{"message": 42}"#), "Error en el servidor");
}

// =============================================================
// Error taxonomy
// =============================================================

#[test]
fn only_401_and_403_count_as_auth_failures() {
    let unauthorized = ApiError::Server {
        status: 401,
        message: "Token expirado".to_owned(),
    };
    let forbidden = ApiError::Server {
        status: 403,
        message: "Sin permiso".to_owned(),
    };
    let server = ApiError::Server {
        status: 500,
        message: "Error en el servidor".to_owned(),
    };

    assert!(unauthorized.is_auth_failure());
    assert!(forbidden.is_auth_failure());
    assert!(!server.is_auth_failure());
    assert!(!ApiError::Validation("x".to_owned()).is_auth_failure());
    assert!(!ApiError::Network("x".to_owned()).is_auth_failure());
}

#[test]
fn server_errors_display_the_backend_message_only() {
    let err = ApiError::Server {
        status: 409,
        message: "El usuario ya existe".to_owned(),
    };
    assert_eq!(err.to_string(), "El usuario ya existe");
}
