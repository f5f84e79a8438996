use crate::messages::Locale;
use crate::types::{PasswordChange, ProfileUpdate};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Message to show next to each failing input, keyed by field name.
pub type FieldErrors = BTreeMap<String, &'static str>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[validate(length(min = 1, code = "required"), email(code = "email"))]
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ProfileForm {
    fn changes_password(&self) -> bool {
        !self.old_password.is_empty()
    }

    /// Runs every rule and collects all failures.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        if self.changes_password() && self.password.is_empty() {
            errors.add("password", ValidationError::new("required"));
        } else if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LENGTH
        {
            errors.add("password", ValidationError::new("min_length"));
        }

        if self.changes_password() && self.password_confirmation.is_empty() {
            errors.add("password_confirmation", ValidationError::new("required"));
        } else if self.password_confirmation != self.password {
            errors.add("password_confirmation", ValidationError::new("mismatch"));
        }

        if errors.field_errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Body for `PUT profile`; password fields only go out when the
    /// current password was given.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.changes_password().then(|| PasswordChange {
                old_password: self.old_password.clone(),
                password: self.password.clone(),
                password_confirmation: self.password_confirmation.clone(),
            }),
        }
    }
}

/// One message per field. A missing value wins over any other failure.
pub fn field_errors(errors: &ValidationErrors, locale: Locale) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, failures)| {
            let failure = failures
                .iter()
                .find(|failure| failure.code == "required")
                .or_else(|| failures.first())?;
            let field = field.to_string();
            let message = locale.field_error(&field, &failure.code);
            Some((field, message))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_form() -> ProfileForm {
        ProfileForm {
            name: "Stefan".into(),
            email: "stefan@example.com".into(),
            ..Default::default()
        }
    }

    fn errors_of(form: &ProfileForm) -> FieldErrors {
        field_errors(&form.check().unwrap_err(), Locale::En)
    }

    #[test]
    fn test_valid_form_without_password() {
        valid_form().check().unwrap();
        assert_eq!(valid_form().to_update().password, None);
    }

    #[test]
    fn test_valid_form_with_password() {
        let form = ProfileForm {
            old_password: "123456".into(),
            password: "abcdef".into(),
            password_confirmation: "abcdef".into(),
            ..valid_form()
        };
        form.check().unwrap();

        assert_eq!(
            form.to_update().password,
            Some(PasswordChange {
                old_password: "123456".into(),
                password: "abcdef".into(),
                password_confirmation: "abcdef".into(),
            })
        );
    }

    #[test]
    fn test_empty_form_reports_every_field_once() {
        let errors = errors_of(&ProfileForm::default());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["email"], "E-mail is required");
    }

    #[test]
    fn test_invalid_email() {
        let form = ProfileForm {
            email: "not-an-email".into(),
            ..valid_form()
        };
        let errors = errors_of(&form);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Enter a valid e-mail");
    }

    #[test]
    fn test_password_fields_required_with_old_password() {
        let form = ProfileForm {
            old_password: "123456".into(),
            ..valid_form()
        };
        let errors = errors_of(&form);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["password"], "Required field");
        assert_eq!(errors["password_confirmation"], "Required field");
    }

    #[test_case::test_case("abc", "abc", Some("At least 6 characters"), None)]
    #[test_case::test_case("abcdef", "abcdeg", None, Some("Confirmation does not match"))]
    #[test_case::test_case("abcdef", "", None, Some("Confirmation does not match"))]
    fn test_password_rules(
        password: &str,
        confirmation: &str,
        password_error: Option<&str>,
        confirmation_error: Option<&str>,
    ) {
        let form = ProfileForm {
            password: password.into(),
            password_confirmation: confirmation.into(),
            ..valid_form()
        };
        let errors = errors_of(&form);

        assert_eq!(errors.get("password").copied(), password_error);
        assert_eq!(
            errors.get("password_confirmation").copied(),
            confirmation_error
        );
    }

    #[test]
    fn test_portuguese_messages() {
        let errors = field_errors(&ProfileForm::default().check().unwrap_err(), Locale::PtBr);
        assert_eq!(errors["name"], "Nome obrigatório");
        assert_eq!(errors["email"], "Email obrigatório");
    }
}
