#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Execute decoded EIP-681 requests against EVM nodes.
//!
//! The `eip681` codec turns a URI into a typed request; this crate carries
//! that request to a node. The seam between the two is the [`CallSender`]
//! trait: an opaque capability that accepts a resolved [`CallRequest`]
//! (target address, calldata, optional value and gas parameters) and
//! returns the raw response bytes of an `eth_call`, or fails.
//!
//! [`Eip681Provider`] composes the two halves: decode the URI, build the
//! descriptor, hand it to the sender. [`RpcCallSender`] is the stock sender
//! backed by any alloy [`Provider`](alloy_provider::Provider).
//!
//! Transport errors are surfaced to the caller unmodified; this crate does
//! not decode return values, verify that the target implements the
//! referenced function, or resolve names.

pub mod call;
pub mod rpc;

pub use call::{CallError, CallRequest, CallSender, Eip681Provider};
pub use rpc::{RpcCallError, RpcCallSender};
