//! Generic REST execution layer.
//!
//! This module provides:
//! - HTTP request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - Production transport implementation ([`ReqwestClient`])
//! - The one-shot request executor with typed failures ([`RestExecutor`])
//!
//! Nothing here knows about webhooks or embeds; the executor speaks plain
//! method/URL/body and classifies responses.

mod client;
mod error;
mod executor;
mod http;


pub use client::ReqwestClient;
pub use error::{HttpError, RestError};
pub use executor::{RestExecutor, USER_AGENT};
pub use http::{HttpClient, HttpRequest, HttpResponse};
