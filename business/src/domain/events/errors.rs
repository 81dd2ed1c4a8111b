#[derive(Debug, thiserror::Error)]
pub enum EventSourceError {
    #[error("event_source.read")]
    Read(#[from] std::io::Error),
}
