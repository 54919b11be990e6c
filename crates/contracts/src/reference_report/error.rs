use super::tab::ReportTab;
use thiserror::Error;

/// Ошибки загрузки набора данных
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataLoadError {
    #[error("no data resource is mapped to tab {0}")]
    Unmapped(ReportTab),

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status} while loading {url}")]
    Http { status: u16, url: String },

    #[error("failed to parse dataset: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DataLoadError {
    fn from(err: serde_json::Error) -> Self {
        DataLoadError::Parse(err.to_string())
    }
}
