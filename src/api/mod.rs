//! Client side of the analysis service.
//!
//! Two endpoints: a status probe (GET, JSON `{message}`) and a multipart
//! upload (POST, JSON `{score, recommendations}` or `{error}`).

mod client;
mod error;
mod types;

pub use client::AnalyzerClient;
pub use error::{ApiError, CONNECTIVITY_MESSAGE, SERVER_ERROR_FALLBACK};
pub use types::{AnalysisResult, CvFile, StatusResponse};
