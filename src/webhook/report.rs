//! Dispatch diagnostics.
//!
//! Every dispatch attempt produces exactly one [`DispatchReport`]: a guard
//! clause failure, a dry-run notice, or the completion of the outbound call.

use std::fmt;

use super::{Category, HttpError};

/// One diagnostic line produced by the dispatcher.
#[derive(Debug)]
pub enum DispatchReport<'a> {
    /// No API key is configured; nothing was sent.
    MissingApiKey,

    /// No URL is configured for the category; nothing was sent.
    MissingUrl(Category),

    /// The endpoint answered with a status code (any status).
    Completed {
        /// Category of the dispatched event
        category: Category,
        /// Response status
        status: http::StatusCode,
    },

    /// The call failed before a status was received.
    Failed {
        /// Category of the dispatched event
        category: Category,
        /// Transport failure
        error: &'a HttpError,
    },

    /// Dry-run mode: the request was built but not sent.
    DryRun {
        /// Category of the event
        category: Category,
        /// Encoded body that would have been sent
        body: &'a str,
    },
}

impl fmt::Display for DispatchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => f.write_str("ApiKey is not configured"),
            Self::MissingUrl(category) => write!(f, "{category} is not configured"),
            Self::Completed { category, status } => {
                write!(f, "{category}(Status:{})", status.as_u16())
            }
            Self::Failed { category, error } => write!(f, "{category}(Error:{error})"),
            Self::DryRun { category, body } => write!(f, "{category} dry-run: {body}"),
        }
    }
}

/// Sink for dispatch diagnostics.
///
/// Called on the submitting thread for guard-clause reports and on a runtime
/// worker for completion reports, so implementations must be thread-safe.
pub trait DispatchReporter: Send + Sync {
    /// Records one report.
    fn report(&self, report: &DispatchReport<'_>);
}

/// Reporter that writes each report to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl DispatchReporter for TracingReporter {
    fn report(&self, report: &DispatchReport<'_>) {
        match report {
            DispatchReport::MissingApiKey
            | DispatchReport::MissingUrl(_)
            | DispatchReport::Failed { .. } => tracing::warn!("{report}"),
            DispatchReport::Completed { .. } | DispatchReport::DryRun { .. } => {
                tracing::info!("{report}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_line() {
        assert_eq!(
            DispatchReport::MissingApiKey.to_string(),
            "ApiKey is not configured"
        );
    }

    #[test]
    fn missing_url_line_names_category() {
        let report = DispatchReport::MissingUrl(Category::PlayerLoot);
        assert_eq!(report.to_string(), "PlayerLoot is not configured");
    }

    #[test]
    fn completed_line_has_numeric_status() {
        let report = DispatchReport::Completed {
            category: Category::PlayerDeath,
            status: http::StatusCode::NOT_FOUND,
        };
        assert_eq!(report.to_string(), "PlayerDeath(Status:404)");
    }

    #[test]
    fn failed_line_includes_error() {
        let error = HttpError::Timeout;
        let report = DispatchReport::Failed {
            category: Category::EntityDestroyed,
            error: &error,
        };
        assert_eq!(report.to_string(), "EntityDestroyed(Error:Request timed out)");
    }

    #[test]
    fn dry_run_line_includes_body() {
        let report = DispatchReport::DryRun {
            category: Category::PlayerLogin,
            body: "name=A&id=1",
        };
        assert_eq!(report.to_string(), "PlayerLogin dry-run: name=A&id=1");
    }

    #[test]
    fn tracing_reporter_accepts_every_variant() {
        let error = HttpError::InvalidUrl("x".to_string());
        let reporter = TracingReporter;
        reporter.report(&DispatchReport::MissingApiKey);
        reporter.report(&DispatchReport::MissingUrl(Category::PlayerKill));
        reporter.report(&DispatchReport::Failed {
            category: Category::PlayerKill,
            error: &error,
        });
    }
}
