use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by [`crate::client::CatalogClient`] operations.
///
/// Nothing is retried or transformed internally: every operation either
/// returns fully-populated data or the first error it hit, unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fetch collaborator failed (network, timeout, bad status).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body is not well-formed XML for the expected shape.
    #[error("malformed catalog document: {0}")]
    MalformedDocument(#[from] quick_xml::DeError),

    /// A single-result query decoded a list of some other length.
    #[error("expected exactly one series in response, found {0}")]
    UnexpectedResultCount(usize),

    /// A series id scraped from the search page did not fit in a u64.
    #[error("invalid series id on search page: {0}")]
    InvalidCandidateId(#[from] std::num::ParseIntError),
}
