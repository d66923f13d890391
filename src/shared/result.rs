/// Result alias with anyhow::Error, used by every layer above the parser core.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
