use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::client::Endpoint;
use crate::error::{FormError, SubmissionError};
use crate::models::common::{form_fields, ErrorMap, FieldName, Notice, SubmissionState, SubmitOutcome};
use crate::services::password::RegistrationStrength;
use crate::services::validators::{
    evaluate, has_listed_symbol, has_min_password_length, has_uppercase, is_not_blank, is_present,
    is_valid_email, is_valid_phone, is_valid_pincode, Check, FieldRule,
};
use crate::services::workflow::FormController;

pub const SUCCESS_PATH: &str = "/registration-success";
pub const REGISTERED_NOTICE: &str = "Registration successful";
pub const FAILED_NOTICE: &str = "Registration failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Helper,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("User"),
            Role::Helper => f.write_str("Helper"),
        }
    }
}

impl FromStr for Role {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Role::User),
            "Helper" => Ok(Role::Helper),
            other => Err(FormError::UnknownOption {
                field: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// Registration progresses strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    RoleSelection,
    DetailsEntry(Role),
    Completed(Role),
}

impl RegistrationStep {
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationStep::RoleSelection => "role-selection",
            RegistrationStep::DetailsEntry(_) => "details-entry",
            RegistrationStep::Completed(_) => "completed",
        }
    }

    /// 1-based position shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            RegistrationStep::RoleSelection => 1,
            RegistrationStep::DetailsEntry(_) | RegistrationStep::Completed(_) => 2,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            RegistrationStep::RoleSelection => None,
            RegistrationStep::DetailsEntry(role) | RegistrationStep::Completed(role) => Some(*role),
        }
    }
}

form_fields! {
    pub enum RegistrationField {
        Name => "name",
        Email => "email",
        Phone => "phone",
        Password => "password",
        City => "city",
        State => "state",
        Pincode => "pincode",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl RegistrationRecord {
    fn field_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Password => &mut self.password,
            RegistrationField::City => &mut self.city,
            RegistrationField::State => &mut self.state,
            RegistrationField::Pincode => &mut self.pincode,
        }
    }
}

const REGISTRATION_RULES: &[FieldRule<RegistrationField, RegistrationRecord>] = &[
    FieldRule {
        field: RegistrationField::Name,
        checks: &[Check {
            passes: |r| is_not_blank(&r.name),
            message: "Name is required",
        }],
    },
    FieldRule {
        field: RegistrationField::Email,
        checks: &[
            Check {
                passes: |r| is_present(&r.email),
                message: "Email is required",
            },
            Check {
                passes: |r| is_valid_email(&r.email),
                message: "Invalid email format",
            },
        ],
    },
    FieldRule {
        field: RegistrationField::Phone,
        checks: &[
            Check {
                passes: |r| is_present(&r.phone),
                message: "Phone number is required",
            },
            Check {
                passes: |r| is_valid_phone(&r.phone),
                message: "Must be 10 digits",
            },
        ],
    },
    FieldRule {
        field: RegistrationField::Password,
        checks: &[
            Check {
                passes: |r| is_present(&r.password),
                message: "Password is required",
            },
            Check {
                passes: |r| has_min_password_length(&r.password),
                message: "Minimum 8 characters",
            },
            Check {
                passes: |r| has_uppercase(&r.password),
                message: "Include uppercase letter",
            },
            Check {
                passes: |r| has_listed_symbol(&r.password),
                message: "Include special character",
            },
        ],
    },
    FieldRule {
        field: RegistrationField::City,
        checks: &[Check {
            passes: |r| is_not_blank(&r.city),
            message: "City is required",
        }],
    },
    FieldRule {
        field: RegistrationField::State,
        checks: &[Check {
            passes: |r| is_not_blank(&r.state),
            message: "State is required",
        }],
    },
    FieldRule {
        field: RegistrationField::Pincode,
        checks: &[
            Check {
                passes: |r| is_present(&r.pincode),
                message: "Pincode is required",
            },
            Check {
                passes: |r| is_valid_pincode(&r.pincode),
                message: "Invalid 6-digit pincode",
            },
        ],
    },
];

/// Request body for `POST /api/register`: the role plus every detail field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub role: Option<Role>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    step: RegistrationStep,
    record: RegistrationRecord,
    errors: ErrorMap<RegistrationField>,
    password_strength: RegistrationStrength,
    submission: SubmissionState,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            step: RegistrationStep::RoleSelection,
            record: RegistrationRecord::default(),
            errors: ErrorMap::new(),
            password_strength: RegistrationStrength::of(""),
            submission: SubmissionState::default(),
        }
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    /// Meter for the password as last typed.
    pub fn password_strength(&self) -> RegistrationStrength {
        self.password_strength
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.submission.notice.as_ref()
    }

    /// Pick a role and move on to details entry. Only allowed once.
    pub fn select_role(&mut self, role: Role) -> Result<(), FormError> {
        match self.step {
            RegistrationStep::RoleSelection => {
                info!("Registration role selected: {}", role);
                self.step = RegistrationStep::DetailsEntry(role);
                Ok(())
            }
            other => Err(FormError::WrongStep(other.name())),
        }
    }

    /// Store one detail value and clear that field's error.
    pub fn apply_input(&mut self, field: RegistrationField, value: &str) -> Result<(), FormError> {
        if !matches!(self.step, RegistrationStep::DetailsEntry(_)) {
            return Err(FormError::WrongStep(self.step.name()));
        }

        *self.record.field_mut(field) = value.to_string();
        if field == RegistrationField::Password {
            self.password_strength = RegistrationStrength::of(value);
        }
        debug!("Registration field '{}' updated", field);
        self.errors.clear_field(field);
        Ok(())
    }

    pub fn apply_named_input(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = RegistrationField::parse(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.apply_input(field, value)
    }
}

impl FormController for RegistrationForm {
    type Field = RegistrationField;
    type Payload = RegistrationPayload;

    const ENDPOINT: Endpoint = Endpoint::Register;

    fn ready(&self) -> Result<(), FormError> {
        match self.step {
            RegistrationStep::DetailsEntry(_) => Ok(()),
            other => Err(FormError::WrongStep(other.name())),
        }
    }

    fn validate(&mut self) -> bool {
        self.errors = evaluate(REGISTRATION_RULES, &self.record);
        self.errors.is_empty()
    }

    fn errors(&self) -> &ErrorMap<RegistrationField> {
        &self.errors
    }

    fn payload(&self) -> RegistrationPayload {
        let record = self.record.clone();
        RegistrationPayload {
            role: self.step.role(),
            name: record.name,
            email: record.email,
            phone: record.phone,
            password: record.password,
            city: record.city,
            state: record.state,
            pincode: record.pincode,
        }
    }

    fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    fn submission_mut(&mut self) -> &mut SubmissionState {
        &mut self.submission
    }

    fn on_success(&mut self) -> SubmitOutcome {
        if let RegistrationStep::DetailsEntry(role) = self.step {
            self.step = RegistrationStep::Completed(role);
        }
        SubmitOutcome {
            notice: Notice::success(REGISTERED_NOTICE),
            navigate_to: Some(SUCCESS_PATH),
        }
    }

    fn on_failure(&mut self, _error: &SubmissionError) -> SubmitOutcome {
        SubmitOutcome {
            notice: Notice::failure(FAILED_NOTICE),
            navigate_to: None,
        }
    }
}
