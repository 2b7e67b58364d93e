//! Error types for the EIP-681 codec.
//!
//! Every malformed input collapses to a single rejection at the first
//! failing stage; the variants exist so callers can tell the stages apart
//! without the codec ever returning a partially-filled request.

/// Reasons a string failed to decode as an EIP-681 URI.
///
/// Decoding is fail-fast and single-pass: the first structural deviation
/// from the grammar produces the matching variant and nothing else is
/// parsed. Callers that only care about valid-vs-invalid can treat the
/// whole enum as one `MalformedInput` case via `Result::ok`.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The string does not start with the `ethereum:` scheme.
    #[error("URI does not start with the `ethereum:` scheme")]
    Scheme,

    /// More than one `:` appears in the URI; only the scheme separator is
    /// permitted.
    #[error("URI contains more than one `:` separator")]
    ExtraSeparator,

    /// The target does not match the `0x` + 40-hex-digit address pattern.
    #[error("invalid target address `{0}`")]
    InvalidTarget(String),

    /// The `@<chainId>` suffix is not an unsigned decimal integer.
    #[error("invalid chain id `{0}`")]
    InvalidChainId(String),

    /// The URI has no `/`-separated function segment.
    #[error("missing function segment")]
    MissingFunction,

    /// The function name is empty or contains characters outside
    /// `[A-Za-z0-9_]`.
    #[error("invalid function name `{0}`")]
    InvalidFunctionName(String),

    /// A query pair has no `=`, an empty key, or an empty value.
    #[error("malformed query pair `{0}`")]
    EmptyPair(String),

    /// A reserved builtin key (`value`, `gasPrice`, `gasLimit`, `gas`)
    /// carries a value that is not an unsigned decimal integer.
    #[error("invalid numeric value `{value}` for builtin `{key}`")]
    InvalidBuiltin {
        /// The builtin query key.
        key: String,
        /// The literal value that failed to parse.
        value: String,
    },

    /// An argument could not be ABI-encoded against its declared type.
    #[error(transparent)]
    Abi(#[from] alloy_dyn_abi::Error),
}

/// Reasons a request could not be encoded into a URI.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum EncodeError {
    /// The request has no target address.
    #[error("request has no target address")]
    MissingTarget,

    /// The request has no function.
    #[error("request has no function")]
    MissingFunction,
}
