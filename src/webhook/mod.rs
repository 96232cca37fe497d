//! Outbound webhook layer.
//!
//! This module provides:
//! - Event payloads and their form-style encoding ([`Payload`], [`encode`])
//! - Event categories ([`Category`]) and the API key credential ([`ApiKey`])
//! - Transport abstraction ([`HttpClient`], [`HttpRequest`], [`HttpResponse`])
//! - Production transport ([`ReqwestClient`])
//! - Fire-and-forget dispatch ([`WebhookDispatcher`], [`Dispatch`])
//! - Dispatch diagnostics ([`DispatchReport`], [`DispatchReporter`], [`TracingReporter`])

mod api_key;
mod category;
mod client;
mod dispatcher;
mod encode;
mod error;
mod http;
mod payload;
mod report;

#[cfg(test)]
mod dispatcher_tests;
#[cfg(test)]
pub(crate) mod test_support;

pub use api_key::ApiKey;
pub use category::Category;
pub use client::ReqwestClient;
pub use dispatcher::{Dispatch, WebhookDispatcher, build_request};
pub use encode::encode;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use payload::Payload;
pub use report::{DispatchReport, DispatchReporter, TracingReporter};
