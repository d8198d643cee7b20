use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::client::Endpoint;
use crate::error::{FormError, SubmissionError};
use crate::models::catalog::{Location, Service, Worker};
use crate::models::common::{form_fields, ErrorMap, FieldName, Notice, SubmissionState, SubmitOutcome};
use crate::services::validators::{
    evaluate, is_letters_and_spaces, is_selectable_date, is_valid_description, is_valid_email,
    is_valid_hour, is_valid_minute, is_valid_period, is_valid_phone, Check, FieldRule,
};
use crate::services::workflow::FormController;

pub const BOOKED_NOTICE: &str = "Booking Submitted! The worker has been notified.";
pub const REJECTED_NOTICE: &str = "Failed to submit booking. Please try again.";
pub const UNREACHABLE_NOTICE: &str = "An error occurred. Please try again later.";

form_fields! {
    pub enum BookingField {
        Date => "date",
        // Combined `HH:MM AM|PM` input, also the key for time errors
        Time => "time",
        Hour => "hour",
        Minute => "minute",
        Period => "period",
        Email => "email",
        Name => "name",
        Phone => "phone",
        Description => "description",
        Location => "location",
        Service => "service",
        Worker => "worker",
    }
}

impl BookingField {
    // Which error entry an input to this field resolves
    fn error_key(self) -> Self {
        match self {
            BookingField::Hour | BookingField::Minute | BookingField::Period => BookingField::Time,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSelection {
    pub hour: String,
    pub minute: String,
    pub period: String,
}

impl Default for TimeSelection {
    fn default() -> Self {
        Self {
            hour: "12".to_string(),
            minute: "00".to_string(),
            period: "AM".to_string(),
        }
    }
}

impl TimeSelection {
    pub fn label(&self) -> String {
        format!("{}:{} {}", self.hour, self.minute, self.period)
    }

    /// Parse `HH:MM AM|PM`. Anything else yields an empty selection.
    fn parse_label(value: &str) -> Self {
        let parsed = value.trim().split_once(' ').and_then(|(clock, period)| {
            let (hour, minute) = clock.split_once(':')?;
            Some(Self {
                hour: hour.to_string(),
                minute: minute.to_string(),
                period: period.trim().to_string(),
            })
        });

        parsed.unwrap_or(Self {
            hour: String::new(),
            minute: String::new(),
            period: String::new(),
        })
    }

    fn is_complete(&self) -> bool {
        is_valid_hour(&self.hour) && is_valid_minute(&self.minute) && is_valid_period(&self.period)
    }
}

/// Personal details block, sent as `formData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub description: String,
}

/// Current values of the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub date: Option<NaiveDate>,
    pub time: TimeSelection,
    pub contact: ContactDetails,
    pub location: Location,
    pub service: Service,
    pub worker: Worker,
    /// Earliest bookable date.
    pub today: NaiveDate,
}

impl BookingRecord {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: Some(today),
            time: TimeSelection::default(),
            contact: ContactDetails::default(),
            location: Location::default(),
            service: Service::default(),
            worker: Worker::default(),
            today,
        }
    }
}

const BOOKING_RULES: &[FieldRule<BookingField, BookingRecord>] = &[
    FieldRule {
        field: BookingField::Email,
        checks: &[Check {
            passes: |r| is_valid_email(&r.contact.email),
            message: "Invalid email format",
        }],
    },
    FieldRule {
        field: BookingField::Name,
        checks: &[Check {
            passes: |r| is_letters_and_spaces(&r.contact.name),
            message: "Name should only contain letters and spaces",
        }],
    },
    FieldRule {
        field: BookingField::Phone,
        checks: &[Check {
            passes: |r| is_valid_phone(&r.contact.phone),
            message: "Phone number must be exactly 10 digits",
        }],
    },
    FieldRule {
        field: BookingField::Description,
        checks: &[Check {
            passes: |r| is_valid_description(&r.contact.description),
            message: "Description should not exceed 200 characters",
        }],
    },
    FieldRule {
        field: BookingField::Date,
        checks: &[Check {
            passes: |r| is_selectable_date(r.date, r.today),
            message: "Please select a valid date",
        }],
    },
    FieldRule {
        field: BookingField::Time,
        checks: &[Check {
            passes: |r| r.time.is_complete(),
            message: "Please select a valid time",
        }],
    },
];

/// Request body for `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: String,
    pub form_data: ContactDetails,
    pub selected_location: Location,
    pub selected_service: Service,
    pub selected_worker: Worker,
}

#[derive(Debug, Clone)]
pub struct BookingForm {
    record: BookingRecord,
    errors: ErrorMap<BookingField>,
    preview_visible: bool,
    submission: SubmissionState,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl BookingForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            record: BookingRecord::new(today),
            errors: ErrorMap::new(),
            preview_visible: false,
            submission: SubmissionState::default(),
        }
    }

    pub fn record(&self) -> &BookingRecord {
        &self.record
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.submission.notice.as_ref()
    }

    /// Store one input value and clear that field's error.
    pub fn apply_input(&mut self, field: BookingField, value: &str) -> Result<(), FormError> {
        let record = &mut self.record;
        match field {
            // Unparsable dates read as "nothing selected"
            BookingField::Date => record.date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
            BookingField::Time => record.time = TimeSelection::parse_label(value),
            BookingField::Hour => record.time.hour = value.to_string(),
            BookingField::Minute => record.time.minute = value.to_string(),
            BookingField::Period => record.time.period = value.to_string(),
            BookingField::Email => record.contact.email = value.to_string(),
            BookingField::Name => record.contact.name = value.to_string(),
            BookingField::Phone => record.contact.phone = value.to_string(),
            BookingField::Description => record.contact.description = value.to_string(),
            BookingField::Location => record.location = parse_option(field, value)?,
            BookingField::Service => record.service = parse_option(field, value)?,
            BookingField::Worker => record.worker = parse_option(field, value)?,
        }

        debug!("Booking field '{}' updated", field);
        self.errors.clear_field(field.error_key());
        Ok(())
    }

    /// Same as [`apply_input`](Self::apply_input), addressing the field by its input name.
    pub fn apply_named_input(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field =
            BookingField::parse(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.apply_input(field, value)
    }

    pub fn show_preview(&mut self) {
        self.preview_visible = true;
    }

    pub fn hide_preview(&mut self) {
        self.preview_visible = false;
    }

    /// Summary of what would be sent, while the preview is open.
    pub fn preview(&self) -> Option<BookingPayload> {
        self.preview_visible.then(|| self.payload())
    }

    fn reset(&mut self) {
        self.record = BookingRecord::new(self.record.today);
        self.errors.clear();
    }
}

fn parse_option<T: std::str::FromStr>(field: BookingField, value: &str) -> Result<T, FormError> {
    value.parse().map_err(|_| FormError::UnknownOption {
        field: field.name(),
        value: value.to_string(),
    })
}

impl FormController for BookingForm {
    type Field = BookingField;
    type Payload = BookingPayload;

    const ENDPOINT: Endpoint = Endpoint::Bookings;

    fn validate(&mut self) -> bool {
        self.errors = evaluate(BOOKING_RULES, &self.record);
        self.errors.is_empty()
    }

    fn errors(&self) -> &ErrorMap<BookingField> {
        &self.errors
    }

    fn payload(&self) -> BookingPayload {
        let record = &self.record;
        BookingPayload {
            selected_date: record.date,
            selected_time: record.time.label(),
            form_data: record.contact.clone(),
            selected_location: record.location,
            selected_service: record.service,
            selected_worker: record.worker,
        }
    }

    fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    fn submission_mut(&mut self) -> &mut SubmissionState {
        &mut self.submission
    }

    fn on_success(&mut self) -> SubmitOutcome {
        self.reset();
        SubmitOutcome {
            notice: Notice::success(BOOKED_NOTICE),
            navigate_to: None,
        }
    }

    fn on_failure(&mut self, error: &SubmissionError) -> SubmitOutcome {
        let message = match error {
            SubmissionError::Status(_) => REJECTED_NOTICE,
            _ => UNREACHABLE_NOTICE,
        };
        SubmitOutcome {
            notice: Notice::failure(message),
            navigate_to: None,
        }
    }
}
