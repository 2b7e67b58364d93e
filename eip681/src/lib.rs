#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Codec for EIP-681 payment and contract-call request URIs.
//!
//! EIP-681 encodes an Ethereum payment or contract call as a single line:
//!
//! ```text
//! ethereum:[pay-]<target>[@<chainId>]/<function>?<type=value>&<builtins>
//! ```
//!
//! This crate converts between that wire form and a typed
//! [`Eip681Request`]. Decoding derives the canonical function signature
//! from the ordered query keys, computes the 4-byte selector from its
//! keccak-256 digest, and ABI-encodes the argument values into ready-to-send
//! calldata. Encoding assembles the URI back from a request built by the
//! caller.
//!
//! ```
//! let uri = "ethereum:0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7/transfer\
//!            ?address=0x8e23ee67d1332ad560396262c48ffbb01f93d052&uint256=1";
//! let request = eip681::decode(uri).unwrap();
//! assert_eq!(request.function, "transfer(address,uint256)");
//! assert_eq!(eip681::encode(&request).unwrap(), uri);
//! ```
//!
//! # Modules
//!
//! - [`request`] - The [`Eip681Request`] data model and reserved query keys
//! - [`uri`] - The URI codec itself ([`decode`] / [`encode`])
//! - [`calldata`] - Selector derivation and dynamic ABI encoding
//! - [`error`] - Decode and encode error taxonomies
//!
//! # Scope
//!
//! The codec is pure and synchronous. Executing a decoded request against a
//! node lives in the companion `eip681-provider` crate; name resolution and
//! EIP-1559 fee parameters are out of scope entirely.

pub mod calldata;
pub mod error;
pub mod request;
pub mod uri;

pub use error::{DecodeError, EncodeError};
pub use request::{AbiArgument, Eip681Request};
pub use uri::{decode, encode};
