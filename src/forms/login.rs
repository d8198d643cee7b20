use tracing::{debug, info};

use crate::error::FormError;
use crate::models::common::{form_fields, ErrorMap, FieldName};
use crate::services::password::{is_strong, StrengthFeedback, StrengthPolicy};
use crate::services::validators::{evaluate, is_valid_email, Check, FieldRule};

pub const ROLE_SELECTION_PATH: &str = "/role-selection";

form_fields! {
    pub enum LoginField {
        Email => "email",
        Password => "password",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRecord {
    pub email: String,
    pub password: String,
}

// The live indicator and the submit check share StrengthPolicy::default()
const LOGIN_RULES: &[FieldRule<LoginField, LoginRecord>] = &[
    FieldRule {
        field: LoginField::Email,
        checks: &[Check {
            passes: |r| is_valid_email(&r.email),
            message: "Invalid email format",
        }],
    },
    FieldRule {
        field: LoginField::Password,
        checks: &[Check {
            passes: |r| is_strong(&r.password),
            message: "Password is not strong enough.",
        }],
    },
];

/// Admin login. Nothing is sent over the network; a valid login hands the
/// user on to role selection.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    record: LoginRecord,
    errors: ErrorMap<LoginField>,
    feedback: StrengthFeedback,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &LoginRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap<LoginField> {
        &self.errors
    }

    /// Strength indicator for the password typed so far.
    pub fn feedback(&self) -> &StrengthFeedback {
        &self.feedback
    }

    pub fn apply_input(&mut self, field: LoginField, value: &str) {
        match field {
            LoginField::Email => self.record.email = value.to_string(),
            LoginField::Password => {
                self.record.password = value.to_string();
                self.feedback = StrengthFeedback::evaluate(&StrengthPolicy::default(), value);
            }
        }
        debug!("Login field '{}' updated", field);
        self.errors.clear_field(field);
    }

    pub fn apply_named_input(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field =
            LoginField::parse(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.apply_input(field, value);
        Ok(())
    }

    pub fn validate(&mut self) -> bool {
        self.errors = evaluate(LOGIN_RULES, &self.record);
        self.errors.is_empty()
    }

    /// Returns the page to navigate to when the credentials pass validation.
    pub fn submit(&mut self) -> Result<&'static str, FormError> {
        if !self.validate() {
            let fields = self.errors.field_names();
            info!("Login rejected, invalid fields: {:?}", fields);
            return Err(FormError::Validation(fields));
        }

        info!("Login accepted, continuing to role selection");
        Ok(ROLE_SELECTION_PATH)
    }
}
