//! Selector derivation and dynamic ABI encoding.
//!
//! The codec learns argument types at runtime from query-string keys, so
//! encoding goes through [`alloy_dyn_abi`]'s dynamic types rather than
//! compile-time `sol!` definitions: each type name is parsed into a
//! [`DynSolType`], the literal value string is coerced into a matching
//! [`DynSolValue`], and the collection is encoded as function parameters.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{Bytes, Selector, keccak256};

use crate::request::AbiArgument;

/// Computes the 4-byte function selector for a canonical signature.
///
/// The selector is the leading 4 bytes of the keccak-256 digest of the
/// UTF-8 signature string, e.g. `transfer(address,uint256)` → `0xa9059cbb`.
#[must_use]
pub fn selector(signature: &str) -> Selector {
    let digest = keccak256(signature.as_bytes());
    Selector::from_slice(&digest[..4])
}

/// ABI-encodes ordered arguments as canonical function parameters.
///
/// Each argument's type name is parsed as a Solidity type and its value
/// string coerced into that type. Argument order determines encoding
/// position.
///
/// # Errors
///
/// Returns an error if a type name is not a valid Solidity type or a value
/// cannot be coerced into its declared type.
pub fn encode_arguments(arguments: &[AbiArgument]) -> Result<Vec<u8>, alloy_dyn_abi::Error> {
    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let ty = DynSolType::parse(&argument.type_name)?;
        values.push(ty.coerce_str(&argument.value)?);
    }
    Ok(DynSolValue::Tuple(values).abi_encode_params())
}

/// Builds full calldata for a signature and its arguments:
/// `selector(signature) ++ abiEncode(arguments)`.
///
/// # Errors
///
/// Returns an error if argument encoding fails; see [`encode_arguments`].
pub fn build(signature: &str, arguments: &[AbiArgument]) -> Result<Bytes, alloy_dyn_abi::Error> {
    let encoded = encode_arguments(arguments)?;
    let mut calldata = Vec::with_capacity(4 + encoded.len());
    calldata.extend_from_slice(selector(signature).as_slice());
    calldata.extend_from_slice(&encoded);
    Ok(calldata.into())
}
