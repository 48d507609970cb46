#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A model or data-access declaration is missing required structure.
    #[error("Convention violation: {0}")]
    ConventionViolation(String),

    /// A convention-named query refers to a field the model does not have.
    /// `span` is the byte range of the offending words within `query`.
    #[error("Cannot build `{query}`: model has no field `{field}` (bytes {}..{})", .span.0, .span.1)]
    CustomSqlBuild {
        query: String,
        field: String,
        span: (usize, usize),
    },

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Nothing to update in `{0}`: no field besides `id` is set")]
    NothingToUpdate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}
