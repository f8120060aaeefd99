//! Login form state. Mirrors the signup controller for its two fields;
//! credential checking itself belongs to the backend.

use serde::Serialize;

use crate::forms::OAuthProvider;
use crate::validation::{email_error, MSG_PASSWORD_REQUIRED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Hook invoked by the OAuth buttons. The real flow is a collaborator;
/// this layer only forwards the provider identifier.
pub type OAuthHook = Box<dyn Fn(OAuthProvider) + Send + Sync>;

#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
    email_error: Option<&'static str>,
    password_error: Option<&'static str>,
    oauth_hook: Option<OAuthHook>,
}

impl LoginForm {
    pub fn new() -> LoginForm {
        LoginForm::default()
    }

    pub fn with_oauth_hook(mut self, hook: OAuthHook) -> LoginForm {
        self.oauth_hook = Some(hook);
        self
    }

    pub fn handle_input_change(&mut self, field: LoginField, value: &str) {
        match field {
            LoginField::Email => self.email = value.to_string(),
            LoginField::Password => self.password = value.to_string(),
        }
        self.set_error(field, None);
    }

    pub fn validate_field(&mut self, field: LoginField) {
        let error = match field {
            LoginField::Email => email_error(&self.email),
            // Only presence is checked at login; strength rules apply at
            // signup time.
            LoginField::Password => {
                if self.password.is_empty() {
                    Some(MSG_PASSWORD_REQUIRED)
                } else {
                    None
                }
            }
        };
        self.set_error(field, error);
    }

    pub fn validate_form(&mut self) -> bool {
        self.validate_field(LoginField::Email);
        self.validate_field(LoginField::Password);
        self.email_error.is_none() && self.password_error.is_none()
    }

    pub fn handle_submit(&mut self) -> Option<LoginPayload> {
        if !self.validate_form() {
            return None;
        }
        self.submitting = true;
        let payload = LoginPayload {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        self.submitting = false;
        Some(payload)
    }

    /// Placeholder: no behavior beyond invoking the attached hook.
    pub fn handle_oauth_login(&self, provider: OAuthProvider) {
        if let Some(hook) = &self.oauth_hook {
            hook(provider);
        }
    }

    pub fn error(&self, field: LoginField) -> Option<&'static str> {
        match field {
            LoginField::Email => self.email_error,
            LoginField::Password => self.password_error,
        }
    }

    fn set_error(&mut self, field: LoginField, error: Option<&'static str>) {
        match field {
            LoginField::Email => self.email_error = error,
            LoginField::Password => self.password_error = error,
        }
    }
}
