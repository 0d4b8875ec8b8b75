#[derive(Debug, thiserror::Error)]
pub enum PagetextError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{backend} could not parse the document: {reason}")]
    Parse { backend: String, reason: String },

    #[error("{backend} could not extract text from page {page}: {reason}")]
    PageText {
        backend: String,
        page: u32,
        reason: String,
    },

    #[error("{backend} panicked: {message}")]
    Panicked { backend: String, message: String },

    #[error("unknown backend '{name}'. Available: {available}")]
    UnknownBackend { name: String, available: String },

    #[error("backend '{0}' listed more than once")]
    DuplicateBackend(String),

    #[error("no extraction backends configured")]
    EmptyChain,
}
