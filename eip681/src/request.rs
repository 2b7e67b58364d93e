//! The EIP-681 request data model.
//!
//! An [`Eip681Request`] is the typed form of one EIP-681 URI: a target
//! address, an optional chain, a function with its ordered arguments, and
//! the transaction builtins (`value`, `gasLimit`, `gasPrice`). Requests are
//! plain value types with no identity beyond their fields; [`crate::decode`]
//! builds them from wire text and [`crate::encode`] consumes caller-built
//! ones without mutating them.

use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

/// A decoded EIP-681 payment or contract-call request.
///
/// Produced by [`crate::decode`], or built field-by-field (via
/// [`Default`]) for [`crate::encode`]. The `calldata` field is derived
/// during decode as `selector(function) ++ abiEncode(arguments)` and is
/// never authored independently; encode ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip681Request {
    /// Whether the URI carried the `pay-` prefix (a payment intent rather
    /// than a plain contract call).
    pub pay: bool,

    /// Recipient contract or account, as the `0x`-prefixed 40-hex-digit
    /// string from the URI. Mixed case is preserved as given; no EIP-55
    /// checksum is enforced.
    pub target: String,

    /// Target chain identifier from the `@<chainId>` suffix, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<U256>,

    /// Canonical function signature, e.g. `transfer(address,uint256)`.
    ///
    /// Decode reconstructs this from the function name and the ordered
    /// non-builtin query keys.
    pub function: String,

    /// Positional call arguments in query order. Order is significant: it
    /// fixes both the signature and each argument's ABI position.
    pub arguments: Vec<AbiArgument>,

    /// Native-currency amount attached to the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,

    /// Gas ceiling (`gasLimit` key, or its `gas` alias).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<U256>,

    /// Legacy gas price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,

    /// Derived call payload: 4-byte selector followed by the ABI-encoded
    /// arguments. Defaults to empty (`0x`).
    #[serde(default)]
    pub calldata: Bytes,
}

/// One positional call argument: a Solidity type name and its literal
/// string value, exactly as they appeared in the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiArgument {
    /// Solidity type name, e.g. `address` or `uint256`.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Literal argument value, e.g. `0x8e23...` or `1`.
    pub value: String,
}

impl AbiArgument {
    /// Creates an argument from a type name and value.
    pub fn new<T: Into<String>, V: Into<String>>(type_name: T, value: V) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }
}

/// Reserved query keys that configure transaction mechanics rather than
/// supplying an ABI argument.
///
/// The wire format addresses these by name, so decoding needs an explicit
/// mapping from the fixed key set onto [`Eip681Request`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    /// The `value` key: native-currency amount.
    Value,
    /// The `gasPrice` key.
    GasPrice,
    /// The `gasLimit` key, also reachable through the `gas` alias.
    GasLimit,
}

impl Builtin {
    /// Maps a query key onto a builtin, or `None` for ABI type names.
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        match key {
            "value" => Some(Self::Value),
            "gasPrice" => Some(Self::GasPrice),
            "gasLimit" | "gas" => Some(Self::GasLimit),
            _ => None,
        }
    }

    /// Stores a parsed builtin value into the matching request field.
    pub(crate) fn store(self, request: &mut Eip681Request, amount: U256) {
        match self {
            Self::Value => request.value = Some(amount),
            Self::GasPrice => request.gas_price = Some(amount),
            Self::GasLimit => request.gas_limit = Some(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mapping_covers_reserved_keys() {
        assert_eq!(Builtin::from_key("value"), Some(Builtin::Value));
        assert_eq!(Builtin::from_key("gasPrice"), Some(Builtin::GasPrice));
        assert_eq!(Builtin::from_key("gasLimit"), Some(Builtin::GasLimit));
        assert_eq!(Builtin::from_key("gas"), Some(Builtin::GasLimit));
        assert_eq!(Builtin::from_key("uint256"), None);
        assert_eq!(Builtin::from_key("address"), None);
        // Reserved keys are case-sensitive
        assert_eq!(Builtin::from_key("gaslimit"), None);
    }

    #[test]
    fn test_builtin_store_targets_the_right_field() {
        let mut request = Eip681Request::default();
        Builtin::GasLimit.store(&mut request, U256::from(100));
        Builtin::GasPrice.store(&mut request, U256::from(10));
        Builtin::Value.store(&mut request, U256::from(32));
        assert_eq!(request.gas_limit, Some(U256::from(100)));
        assert_eq!(request.gas_price, Some(U256::from(10)));
        assert_eq!(request.value, Some(U256::from(32)));
    }

    #[test]
    fn test_serde_uses_camel_case_wire_names() {
        let request = Eip681Request {
            target: "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7".into(),
            function: "transfer(address,uint256)".into(),
            arguments: vec![AbiArgument::new("uint256", "1")],
            gas_limit: Some(U256::from(100)),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("gasLimit").is_some());
        assert!(json.get("gas_limit").is_none());
        assert_eq!(json["arguments"][0]["type"], "uint256");
        // Empty calldata serializes as the 0x default
        assert_eq!(json["calldata"], "0x");
    }

    #[test]
    fn test_serde_roundtrip() {
        let request = Eip681Request {
            pay: true,
            target: "0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7".into(),
            chain_id: Some(U256::from(10)),
            function: "transfer(address,uint256)".into(),
            arguments: vec![
                AbiArgument::new("address", "0x8e23ee67d1332ad560396262c48ffbb01f93d052"),
                AbiArgument::new("uint256", "1"),
            ],
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: Eip681Request = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
