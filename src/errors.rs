use thiserror::Error;

/// Client-side checks run before any credential request leaves the form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email y contraseña son requeridos")]
    MissingCredentials,
    #[error("Nombre y apellido son requeridos para registro")]
    MissingName,
    #[error("La contraseña debe tener al menos 8 caracteres")]
    PasswordTooShort,
}

/// Why a credential submission failed. `Display` is the message shown to
/// the user.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Rejected(String),
    #[error("Respuesta del servidor inválida")]
    MalformedResponse,
    #[error("Error de conexión. Verifica que el servidor esté funcionando.")]
    Network(#[source] reqwest::Error),
}

impl FormError {
    pub const REJECTED_FALLBACK: &'static str = "Error en la autenticación";

    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }
}
