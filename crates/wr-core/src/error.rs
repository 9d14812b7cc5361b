/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when loading or validating world data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The world document is not valid JSON or does not match the schema.
    #[error("invalid world data: {0}")]
    Parse(#[from] serde_json::Error),

    /// An exit points at a location that does not exist.
    #[error("location \"{from}\" has exit \"{direction}\" to unknown location \"{to}\"")]
    DanglingExit {
        /// Location owning the exit.
        from: String,
        /// Direction label of the exit.
        direction: String,
        /// Missing destination id.
        to: String,
    },

    /// An item list references an item id with no definition.
    #[error("{owner} references unknown item \"{item}\"")]
    UnknownItem {
        /// The undefined item id.
        item: String,
        /// Who holds the reference (a location or the rider).
        owner: String,
    },

    /// A location id could not be resolved.
    #[error("location not found: \"{0}\"")]
    LocationNotFound(String),
}
