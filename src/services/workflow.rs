//! Submission workflow shared by the booking and registration forms.
//!
//! A submit is split into two pure transitions around the network call:
//! [`begin`] validates and marks the form in flight, [`finish`] applies the
//! outcome. [`submit`] strings them together with exactly one transport call.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::client::{Endpoint, SubmissionTransport};
use crate::error::{FormError, SubmissionError};
use crate::models::common::{ErrorMap, FieldName, SubmissionState, SubmitOutcome};

/// A form that can be validated and posted to the backend.
pub trait FormController {
    type Field: FieldName;
    type Payload: Serialize;

    const ENDPOINT: Endpoint;

    /// Whether the form is in a state that accepts a submit at all.
    fn ready(&self) -> Result<(), FormError> {
        Ok(())
    }

    /// Recompute the error map from scratch and report whether it is empty.
    fn validate(&mut self) -> bool;

    fn errors(&self) -> &ErrorMap<Self::Field>;

    fn payload(&self) -> Self::Payload;

    fn submission(&self) -> &SubmissionState;

    fn submission_mut(&mut self) -> &mut SubmissionState;

    /// Transition after a 2xx response.
    fn on_success(&mut self) -> SubmitOutcome;

    /// Transition after a failed request. Field values must be kept.
    fn on_failure(&mut self, error: &SubmissionError) -> SubmitOutcome;
}

/// Validate the form and, if clean, mark it in flight and build its payload.
pub fn begin<F: FormController>(form: &mut F) -> Result<F::Payload, FormError> {
    if form.submission().in_flight {
        warn!("Submit ignored: a request to {} is already pending", F::ENDPOINT.path());
        return Err(FormError::SubmissionInFlight);
    }
    form.ready()?;

    if !form.validate() {
        let fields = form.errors().field_names();
        info!("Validation failed for fields: {:?}", fields);
        return Err(FormError::Validation(fields));
    }

    let state = form.submission_mut();
    state.in_flight = true;
    state.notice = None;

    Ok(form.payload())
}

/// Clear the in-flight flag and apply the success or failure transition.
pub fn finish<F: FormController>(
    form: &mut F,
    result: Result<(), SubmissionError>,
) -> SubmitOutcome {
    form.submission_mut().in_flight = false;

    let outcome = match result {
        Ok(()) => {
            info!("Submission to {} succeeded", F::ENDPOINT.path());
            form.on_success()
        }
        Err(err) => {
            error!("Submission to {} failed: {}", F::ENDPOINT.path(), err);
            form.on_failure(&err)
        }
    };

    form.submission_mut().notice = Some(outcome.notice.clone());
    outcome
}

/// Holds a form between [`begin`] and [`finish`]. Dropped unsettled, it clears
/// the in-flight flag so the form can be submitted again.
struct InFlightGuard<'a, F: FormController> {
    form: &'a mut F,
    armed: bool,
}

impl<'a, F: FormController> InFlightGuard<'a, F> {
    fn new(form: &'a mut F) -> Self {
        Self { form, armed: true }
    }

    fn settle(mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        self.armed = false;
        finish(&mut *self.form, result)
    }
}

impl<F: FormController> Drop for InFlightGuard<'_, F> {
    fn drop(&mut self) {
        if self.armed {
            warn!("Submission to {} abandoned before a response", F::ENDPOINT.path());
            self.form.submission_mut().in_flight = false;
        }
    }
}

/// Run a full submit: validation, a single request, then the outcome transition.
///
/// Cancelling the returned future mid-request leaves the form idle with its
/// fields untouched and no notice.
pub async fn submit<F, T>(form: &mut F, transport: &T) -> Result<SubmitOutcome, FormError>
where
    F: FormController,
    T: SubmissionTransport + ?Sized,
{
    let payload = begin(form)?;
    let guard = InFlightGuard::new(form);

    let result = match serde_json::to_value(&payload) {
        Ok(body) => transport.post_json(F::ENDPOINT, body).await,
        Err(err) => Err(SubmissionError::Serialization(err)),
    };

    Ok(guard.settle(result))
}
