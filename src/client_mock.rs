use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::client::{Endpoint, SubmissionTransport};
use crate::error::SubmissionError;

// Define a mock transport for the booking backend
mock! {
    pub Transport {}

    #[async_trait]
    impl SubmissionTransport for Transport {
        async fn post_json(&self, endpoint: Endpoint, body: Value) -> Result<(), SubmissionError>;
    }
}

/// How the mocked backend answers every request.
#[derive(Debug, Clone, Copy)]
pub enum MockReply {
    Accept,
    Reject(u16),
    TimeOut,
}

// Requests seen by the mock, in arrival order
#[derive(Default)]
pub struct RequestLog {
    requests: Mutex<Vec<(Endpoint, Value)>>,
}

impl RequestLog {
    pub fn record(&self, endpoint: Endpoint, body: Value) {
        self.requests.lock().unwrap().push((endpoint, body));
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<(Endpoint, Value)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

// Helper function to set up a mock transport that records every request
pub fn setup_mock_transport(reply: MockReply) -> (MockTransport, Arc<RequestLog>) {
    let log = Arc::new(RequestLog::default());
    let log_ref = Arc::clone(&log);

    let mut transport = MockTransport::new();
    transport
        .expect_post_json()
        .returning(move |endpoint, body| {
            log_ref.record(endpoint, body);
            match reply {
                MockReply::Accept => Ok(()),
                MockReply::Reject(status) => Err(SubmissionError::Status(status)),
                MockReply::TimeOut => Err(SubmissionError::Timeout),
            }
        });

    (transport, log)
}

/// A transport that fails the test if it is ever called.
pub fn setup_unreachable_transport() -> MockTransport {
    let mut transport = MockTransport::new();
    transport.expect_post_json().never();
    transport
}
