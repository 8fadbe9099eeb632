//! Error type for the extraction pipeline.
//!
//! Messages are part of the observable behavior: callers match on them, so the
//! `Display` output of each variant is fixed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The source text is not valid module syntax. Carries the parser's message as-is.
    #[error("{0}")]
    Parse(String),

    #[error("No export default declaration found")]
    MissingDefaultExport,

    /// `export default <ident>` where `<ident>` names no top-level class or variable.
    #[error("Could not find expression for identifier {0}")]
    UnresolvedIdentifier(String),

    #[error("Invalid export default declaration")]
    InvalidExport,
}

pub type Result<T> = std::result::Result<T, ExtractError>;
