//! Shared fakes for dispatcher and handler tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::report::{DispatchReport, DispatchReporter};
use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Transport that records requests and answers from a canned queue.
///
/// Once the queue is empty every call answers `200 OK`.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn with_status(status: http::StatusCode) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status))])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(HttpResponse::new(http::StatusCode::OK)))
    }
}

/// Reporter that keeps every rendered line.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DispatchReporter for RecordingReporter {
    fn report(&self, report: &DispatchReport<'_>) {
        self.lines.lock().unwrap().push(report.to_string());
    }
}
