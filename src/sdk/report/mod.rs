pub mod client;
pub mod error;

pub use client::{ReportClient, NO_CONTENT_SENTINEL};
pub use error::ReportError;
