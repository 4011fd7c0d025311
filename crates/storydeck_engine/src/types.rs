use std::fmt;

/// Request generation assigned by the caller and echoed on completion so
/// superseded responses can be told apart from current ones.
pub type Generation = u64;

/// One decoded search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub url: String,
    pub title: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
}

/// A decoded result page; `page` is the server's page index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        generation: Generation,
        result: Result<SearchResults, SearchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Structured failure causes. These are kept for logging only; the UI layer
/// collapses them into a single failure state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
