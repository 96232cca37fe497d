//! Fire-and-forget webhook dispatch.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use url::Url;

use super::report::{DispatchReport, DispatchReporter, TracingReporter};
use super::{ApiKey, Category, HttpClient, HttpRequest, Payload, encode};

/// What a call to [`WebhookDispatcher::dispatch`] did.
///
/// This says whether a request was submitted, never whether it was delivered.
/// Delivery outcomes only reach the [`DispatchReporter`].
#[derive(Debug)]
pub enum Dispatch {
    /// No API key configured; nothing was sent.
    MissingApiKey,
    /// No URL configured for the category; nothing was sent.
    MissingUrl(Category),
    /// Dry-run mode; the request was built and logged but not sent.
    DryRun,
    /// The request was submitted and runs on the given task.
    InFlight(JoinHandle<()>),
}

impl Dispatch {
    /// Returns true if a request was submitted.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight(_))
    }

    /// Returns the task handle of a submitted request.
    #[must_use]
    pub fn into_handle(self) -> Option<JoinHandle<()>> {
        match self {
            Self::InFlight(handle) => Some(handle),
            _ => None,
        }
    }

    /// Waits until a submitted request has completed and been reported.
    ///
    /// Returns immediately when nothing was submitted.
    pub async fn finished(self) {
        if let Some(handle) = self.into_handle() {
            if let Err(e) = handle.await {
                tracing::error!("Dispatch task failed: {e}");
            }
        }
    }
}

/// Sends event payloads to their configured webhook.
///
/// [`dispatch`](Self::dispatch) never blocks: it checks the configuration,
/// builds the request, and spawns the outbound call on the runtime behind
/// `runtime`. When the call completes, a single line is reported and the
/// result is dropped. There is no retry.
///
/// # Type Parameters
///
/// - `H`: Transport implementation
/// - `R`: Diagnostics sink (defaults to [`TracingReporter`])
///
/// # Example
///
/// ```no_run
/// use twin_mills::webhook::{ApiKey, Category, Payload, ReqwestClient, WebhookDispatcher};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = WebhookDispatcher::new(ReqwestClient::new(), tokio::runtime::Handle::current());
/// let url = Url::parse("https://hooks.example/login")?;
/// let key = ApiKey::new("K1")?;
/// let payload = Payload::new().with("name", "Alice").with("id", "1");
///
/// dispatcher.dispatch(Category::PlayerLogin, Some(&url), Some(&key), &payload);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookDispatcher<H, R = TracingReporter> {
    client: Arc<H>,
    reporter: Arc<R>,
    runtime: Handle,
    dry_run: bool,
}

impl<H> WebhookDispatcher<H, TracingReporter> {
    /// Creates a dispatcher that spawns calls on `runtime` and logs via `tracing`.
    #[must_use]
    pub fn new(client: H, runtime: Handle) -> Self {
        Self {
            client: Arc::new(client),
            reporter: Arc::new(TracingReporter),
            runtime,
            dry_run: false,
        }
    }
}

impl<H, R> WebhookDispatcher<H, R> {
    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_reporter<R2>(self, reporter: R2) -> WebhookDispatcher<H, R2> {
        WebhookDispatcher {
            client: self.client,
            reporter: Arc::new(reporter),
            runtime: self.runtime,
            dry_run: self.dry_run,
        }
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns true if requests are logged instead of sent.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the transport.
    #[must_use]
    pub fn client(&self) -> &H {
        &self.client
    }

    /// Returns the diagnostics sink.
    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

impl<H, R> WebhookDispatcher<H, R>
where
    H: HttpClient + 'static,
    R: DispatchReporter + 'static,
{
    /// Dispatches one event.
    ///
    /// Checked in order, each a terminal no-op with one diagnostic line:
    /// 1. `api_key` absent or empty
    /// 2. `url` absent
    ///
    /// Otherwise a POST carrying `Authorization: <api_key>` and the encoded
    /// payload is submitted to `url` and this call returns immediately.
    pub fn dispatch(
        &self,
        category: Category,
        url: Option<&Url>,
        api_key: Option<&ApiKey>,
        payload: &Payload,
    ) -> Dispatch {
        let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
            self.reporter.report(&DispatchReport::MissingApiKey);
            return Dispatch::MissingApiKey;
        };

        let Some(url) = url else {
            self.reporter.report(&DispatchReport::MissingUrl(category));
            return Dispatch::MissingUrl(category);
        };

        let request = build_request(url, api_key, payload);

        if self.dry_run {
            self.reporter.report(&DispatchReport::DryRun {
                category,
                body: &request.body,
            });
            return Dispatch::DryRun;
        }

        let client = Arc::clone(&self.client);
        let reporter = Arc::clone(&self.reporter);

        let handle = self.runtime.spawn(async move {
            match client.request(request).await {
                Ok(response) => reporter.report(&DispatchReport::Completed {
                    category,
                    status: response.status,
                }),
                Err(error) => reporter.report(&DispatchReport::Failed {
                    category,
                    error: &error,
                }),
            }
        });

        Dispatch::InFlight(handle)
    }
}

/// Builds the outbound request for one dispatch.
///
/// The header set holds only `Authorization`, whose value is the API key
/// verbatim. The body is [`encode`]d from `payload`.
#[must_use]
pub fn build_request(url: &Url, api_key: &ApiKey, payload: &Payload) -> HttpRequest {
    HttpRequest::post(url.clone())
        .with_header(http::header::AUTHORIZATION, api_key.header_value().clone())
        .with_body(encode(payload))
}
