use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    /// Input text could not be parsed as extended JSON.
    #[error("not valid JSON text: {0}")]
    Decode(#[from] serde_json::Error),

    /// A parsed document carries a value that does not fit the field it
    /// names, e.g. a non-boolean `private`.
    #[error("document does not fit the model: {0}")]
    Malformed(#[from] mongodb::bson::de::Error),

    /// Deserialization input lacks the `_id` key.
    #[error("document has no `_id` key")]
    MissingIdentity,
}
