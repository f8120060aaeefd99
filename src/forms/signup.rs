//! Signup form state: raw field values, per-field error messages, and the
//! submit gate. The controller never talks to the network itself; a valid
//! submit yields a backend-ready payload for the caller to send.

use serde::Serialize;

use crate::forms::Role;
use crate::validation::{
    confirm_password_error, email_error, full_name_error, password_error,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    FullName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

impl SignupField {
    pub const ALL: [SignupField; 5] = [
        SignupField::FullName,
        SignupField::Email,
        SignupField::PhoneNumber,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];
}

/// Payload shape the backend signup endpoint expects.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SignupPayload {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub submitting: bool,
    full_name_error: Option<&'static str>,
    email_error: Option<&'static str>,
    password_error: Option<&'static str>,
    confirm_password_error: Option<&'static str>,
}

impl SignupForm {
    pub fn new() -> SignupForm {
        SignupForm::default()
    }

    /// Stores the raw value and eagerly clears the field's error; the next
    /// blur or submit re-validates.
    pub fn handle_input_change(&mut self, field: SignupField, value: &str) {
        match field {
            SignupField::FullName => self.full_name = value.to_string(),
            SignupField::Email => self.email = value.to_string(),
            SignupField::PhoneNumber => self.phone_number = value.to_string(),
            SignupField::Password => self.password = value.to_string(),
            SignupField::ConfirmPassword => self.confirm_password = value.to_string(),
        }
        self.set_error(field, None);
    }

    /// Blur handler: re-validates one field and sets or clears its message.
    pub fn validate_field(&mut self, field: SignupField) {
        let error = match field {
            SignupField::FullName => full_name_error(&self.full_name),
            SignupField::Email => email_error(&self.email),
            // Lenient by policy: any non-empty value passes, and absence
            // is fine too.
            SignupField::PhoneNumber => None,
            SignupField::Password => password_error(&self.password),
            SignupField::ConfirmPassword => {
                confirm_password_error(&self.password, &self.confirm_password)
            }
        };
        self.set_error(field, error);
    }

    /// Validates every field so all violations surface at once. Returns
    /// true iff the form carries no errors afterwards.
    pub fn validate_form(&mut self) -> bool {
        for field in SignupField::ALL {
            self.validate_field(field);
        }
        self.error(SignupField::FullName).is_none()
            && self.error(SignupField::Email).is_none()
            && self.error(SignupField::Password).is_none()
            && self.error(SignupField::ConfirmPassword).is_none()
    }

    /// Submit gate: an invalid form aborts with no state change; a valid
    /// one passes through `submitting` and hands back the payload.
    pub fn handle_submit(&mut self) -> Option<SignupPayload> {
        if !self.validate_form() {
            return None;
        }
        self.submitting = true;
        let phone = self.phone_number.trim();
        let payload = SignupPayload {
            full_name: self.full_name.trim().to_string(),
            email: self.email.clone(),
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
            password: self.password.clone(),
            role: self.role,
        };
        self.submitting = false;
        Some(payload)
    }

    pub fn handle_role_change(&mut self, role: Role) {
        self.role = role;
    }

    pub fn error(&self, field: SignupField) -> Option<&'static str> {
        match field {
            SignupField::FullName => self.full_name_error,
            SignupField::Email => self.email_error,
            SignupField::PhoneNumber => None,
            SignupField::Password => self.password_error,
            SignupField::ConfirmPassword => self.confirm_password_error,
        }
    }

    fn set_error(&mut self, field: SignupField, error: Option<&'static str>) {
        match field {
            SignupField::FullName => self.full_name_error = error,
            SignupField::Email => self.email_error = error,
            SignupField::PhoneNumber => {}
            SignupField::Password => self.password_error = error,
            SignupField::ConfirmPassword => self.confirm_password_error = error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{
        MSG_CONFIRM_REQUIRED, MSG_EMAIL_REQUIRED, MSG_FULL_NAME_REQUIRED,
        MSG_PASSWORD_REQUIRED, MSG_PASSWORDS_MISMATCH,
    };

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.handle_input_change(SignupField::FullName, "Alice Smith");
        form.handle_input_change(SignupField::Email, "alice@example.com");
        form.handle_input_change(SignupField::Password, "secret123");
        form.handle_input_change(SignupField::ConfirmPassword, "secret123");
        form
    }

    #[test]
    fn defaults_are_fresh_and_customer() {
        let form = SignupForm::new();
        assert_eq!(form.role, Role::Customer);
        assert!(!form.submitting);
        assert!(form.full_name.is_empty());
        for field in SignupField::ALL {
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn empty_submit_surfaces_every_required_error() {
        let mut form = SignupForm::new();
        assert_eq!(form.handle_submit(), None);
        assert!(!form.submitting);
        assert_eq!(form.error(SignupField::FullName), Some(MSG_FULL_NAME_REQUIRED));
        assert_eq!(form.error(SignupField::Email), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(form.error(SignupField::Password), Some(MSG_PASSWORD_REQUIRED));
        assert_eq!(form.error(SignupField::ConfirmPassword), Some(MSG_CONFIRM_REQUIRED));
    }

    #[test]
    fn editing_clears_the_field_error_eagerly() {
        let mut form = SignupForm::new();
        form.validate_field(SignupField::Email);
        assert!(form.error(SignupField::Email).is_some());
        form.handle_input_change(SignupField::Email, "still not valid");
        assert_eq!(form.error(SignupField::Email), None);
    }

    #[test]
    fn blur_validation_sets_and_clears() {
        let mut form = SignupForm::new();
        form.handle_input_change(SignupField::Password, "secret123");
        form.handle_input_change(SignupField::ConfirmPassword, "different1");
        form.validate_field(SignupField::ConfirmPassword);
        assert_eq!(
            form.error(SignupField::ConfirmPassword),
            Some(MSG_PASSWORDS_MISMATCH)
        );
        form.handle_input_change(SignupField::ConfirmPassword, "secret123");
        form.validate_field(SignupField::ConfirmPassword);
        assert_eq!(form.error(SignupField::ConfirmPassword), None);
    }

    #[test]
    fn role_is_always_one_of_two() {
        let mut form = SignupForm::new();
        form.handle_role_change(Role::Provider);
        assert_eq!(form.role, Role::Provider);
        form.handle_role_change(Role::Customer);
        form.handle_role_change(Role::Provider);
        assert_eq!(form.role, Role::Provider);
    }

    #[test]
    fn valid_submit_builds_backend_payload() {
        let mut form = filled_form();
        form.handle_role_change(Role::Provider);
        let payload = form.handle_submit().expect("form should submit");
        assert!(!form.submitting);
        assert_eq!(payload.full_name, "Alice Smith");
        assert_eq!(payload.phone_number, None);
        assert_eq!(payload.role, Role::Provider);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["full_name"], "Alice Smith");
        assert_eq!(json["phone_number"], serde_json::Value::Null);
        assert_eq!(json["role"], "provider");
    }

    #[test]
    fn phone_is_lenient_and_kept_when_present() {
        let mut form = filled_form();
        form.handle_input_change(SignupField::PhoneNumber, "  +45 12 34 56 78 ");
        form.validate_field(SignupField::PhoneNumber);
        assert_eq!(form.error(SignupField::PhoneNumber), None);
        let payload = form.handle_submit().unwrap();
        assert_eq!(payload.phone_number.as_deref(), Some("+45 12 34 56 78"));
    }

    #[test]
    fn invalid_form_shows_all_violations_at_once() {
        let mut form = SignupForm::new();
        form.handle_input_change(SignupField::FullName, "A");
        form.handle_input_change(SignupField::Email, "bad");
        form.handle_input_change(SignupField::Password, "short");
        assert!(!form.validate_form());
        assert!(form.error(SignupField::FullName).is_some());
        assert!(form.error(SignupField::Email).is_some());
        assert!(form.error(SignupField::Password).is_some());
        assert!(form.error(SignupField::ConfirmPassword).is_some());
    }
}
