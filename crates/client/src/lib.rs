//! Submission client for the contact form.
//!
//! This crate owns everything that happens after a form passes validation:
//! the JSON wire model, the HTTP client that POSTs it, the local cache used
//! as a fallback, and the service that applies the delivery-mode policy.

pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod service;

pub use cache::{JsonFileCache, MemoryCache, SubmissionCache, open_submission_cache};
pub use client::builder::SubmissionClientBuilder;
pub use client::{Delivery, SubmissionClient};
pub use error::{CacheError, ClientError, Result};
pub use models::{ContactDetails, SubmissionPayload};
pub use service::{SubmissionOutcome, SubmissionService};
