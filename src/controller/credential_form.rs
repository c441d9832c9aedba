use serde_json::Value;
use tracing::{info, warn};
use crate::errors::{FormError, ValidationError};
use crate::models::user::Role;
use crate::repositories::api_repo::{ApiConnectionRepo, CredentialRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    SignIn,
    Register,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialFields {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Receives the parsed body of a successful submission.
pub trait CredentialHandler {
    fn on_login(&mut self, payload: Value);
    fn on_register(&mut self, payload: Value);
}

#[derive(Clone, Debug, Default)]
pub struct CredentialForm {
    mode: FormMode,
    fields: CredentialFields,
    is_submitting: bool,
    error: Option<String>,
}

impl CredentialForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::SignIn => FormMode::Register,
            FormMode::Register => FormMode::SignIn,
        };
        self.error = None;
    }

    pub fn fields(&self) -> &CredentialFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut CredentialFields {
        &mut self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::SignIn => "Iniciar Sesión",
            FormMode::Register => "Crear Cuenta",
        }
    }

    /// First failing rule wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = &self.fields;
        if fields.email.is_empty() || fields.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if self.mode == FormMode::Register {
            if fields.first_name.is_empty() || fields.last_name.is_empty() {
                return Err(ValidationError::MissingName);
            }
            if fields.password.chars().count() < MIN_PASSWORD_LEN {
                return Err(ValidationError::PasswordTooShort);
            }
        }
        Ok(())
    }

    pub fn build_request(&self) -> CredentialRequest {
        let fields = &self.fields;
        match self.mode {
            FormMode::SignIn => CredentialRequest::SignIn {
                email: fields.email.trim().to_string(),
                password: fields.password.clone(),
            },
            FormMode::Register => {
                let phone = fields.phone.trim();
                CredentialRequest::Register {
                    email: fields.email.trim().to_string(),
                    password: fields.password.clone(),
                    first_name: fields.first_name.trim().to_string(),
                    last_name: fields.last_name.trim().to_string(),
                    phone: (!phone.is_empty()).then(|| phone.to_string()),
                    role: Role::Customer,
                }
            }
        }
    }

    pub async fn submit<H: CredentialHandler>(
        &mut self,
        api_repo: &ApiConnectionRepo,
        handler: &mut H,
    ) -> Result<(), FormError> {
        self.is_submitting = true;
        self.error = None;

        let submit_res = match self.validate() {
            Ok(()) => api_repo.authenticate(&self.build_request()).await,
            Err(e) => Err(e.into()),
        };
        self.is_submitting = false;

        return match submit_res {
            Ok(payload) => {
                info!("Credential submission succeeded for {}", self.fields.email.trim());
                match self.mode {
                    FormMode::SignIn => handler.on_login(payload),
                    FormMode::Register => handler.on_register(payload),
                }
                self.fields = CredentialFields::default();
                Ok(())
            }
            Err(e) => {
                if !e.is_validation() {
                    warn!("Credential submission failed due to: {}", e);
                }
                self.error = Some(e.to_string());
                Err(e)
            }
        };
    }
}
