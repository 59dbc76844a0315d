/// Raised when a name string does not match any known enumeration constant.
///
/// Lookups are exact: names are case-sensitive and carry no aliases. The
/// offending string is preserved for the caller's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreProcessError {
    #[error("unrecognized color format name: {0:?}")]
    UnknownColorFormat(String),
    #[error("unrecognized resize algorithm name: {0:?}")]
    UnknownResizeAlgorithm(String),
    #[error("unrecognized mean variant name: {0:?}")]
    UnknownMeanVariant(String),
}
