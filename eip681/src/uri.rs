//! The EIP-681 URI codec.
//!
//! Grammar handled here (ABNF-ish):
//!
//! ```text
//! uri     = "ethereum:" ["pay-"] target ["@" chainid] "/" funcname ["?" pair *("&" pair)]
//! target  = "0x" 40HEXDIG
//! chainid = 1*DIGIT
//! pair    = key "=" value    ; key is an ABI type name or a reserved builtin
//! ```
//!
//! [`decode`] turns wire text into an [`Eip681Request`], deriving the
//! canonical signature and calldata along the way. [`encode`] assembles the
//! URI from a caller-built request. Both are pure, single-pass, and
//! stateless; decoding rejects at the first malformed stage and never
//! returns a partial request.

use std::sync::LazyLock;

use alloy_primitives::U256;
use regex::Regex;

use crate::calldata;
use crate::error::{DecodeError, EncodeError};
use crate::request::{AbiArgument, Builtin, Eip681Request};

const SCHEME: &str = "ethereum:";
const PAY_PREFIX: &str = "pay-";

/// Strict target shape: `0x` followed by exactly 40 hex digits, any case,
/// no EIP-55 checksum enforcement.
static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^0x[a-fA-F0-9]{40}$").expect("valid address pattern"));

/// Parses an unsigned decimal integer per the `1*DIGIT` grammar.
///
/// `U256::from_str_radix` alone tolerates `_` digit separators, so the
/// shape is checked first; anything but plain ASCII digits is rejected.
fn parse_decimal(digits: &str) -> Option<U256> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(digits, 10).ok()
}

/// Decodes an EIP-681 URI into a typed request.
///
/// Walks the grammar left to right: scheme, optional `pay-` prefix, target
/// with optional `@chainId` suffix, function name, then the query pairs.
/// Reserved builtin keys (`value`, `gasPrice`, `gasLimit`, `gas`) populate
/// the matching request fields; every other key is an ABI type name whose
/// pair joins `arguments` in input order. The canonical signature is
/// reconstructed from the collected types and the calldata derived as
/// `selector(signature) ++ abiEncode(arguments)`.
///
/// Numeric builtins and the chain id are decimal-only.
///
/// # Errors
///
/// Returns the [`DecodeError`] variant for the first stage at which the
/// input deviates from the grammar. There is no partial result.
pub fn decode(uri: &str) -> Result<Eip681Request, DecodeError> {
    let body = uri.strip_prefix(SCHEME).ok_or(DecodeError::Scheme)?;

    // Only the scheme separator itself may be a colon.
    if body.contains(':') {
        return Err(DecodeError::ExtraSeparator);
    }

    let (pay, body) = match body.strip_prefix(PAY_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let (target_segment, method_segment) =
        body.split_once('/').ok_or(DecodeError::MissingFunction)?;

    let mut request = Eip681Request {
        pay,
        ..Eip681Request::default()
    };

    let target = match target_segment.split_once('@') {
        Some((address, chain_id)) => {
            let parsed = parse_decimal(chain_id)
                .ok_or_else(|| DecodeError::InvalidChainId(chain_id.to_string()))?;
            request.chain_id = Some(parsed);
            address
        }
        None => target_segment,
    };

    if !ADDRESS_PATTERN.is_match(target) {
        return Err(DecodeError::InvalidTarget(target.to_string()));
    }
    request.target = target.to_string();

    let (name, query) = match method_segment.split_once('?') {
        Some((name, query)) => (name, Some(query)),
        None => (method_segment, None),
    };
    if name.is_empty()
        || !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Err(DecodeError::InvalidFunctionName(name.to_string()));
    }

    if let Some(query) = query {
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(DecodeError::EmptyPair(pair.to_string()));
            };
            if key.is_empty() || value.is_empty() {
                return Err(DecodeError::EmptyPair(pair.to_string()));
            }
            if let Some(builtin) = Builtin::from_key(key) {
                // Duplicate builtin keys follow last-wins semantics.
                let amount =
                    parse_decimal(value).ok_or_else(|| DecodeError::InvalidBuiltin {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                builtin.store(&mut request, amount);
            } else {
                request.arguments.push(AbiArgument::new(key, value));
            }
        }
    }

    let types: Vec<&str> = request
        .arguments
        .iter()
        .map(|argument| argument.type_name.as_str())
        .collect();
    request.function = format!("{name}({})", types.join(","));
    request.calldata = calldata::build(&request.function, &request.arguments)?;

    #[cfg(feature = "telemetry")]
    tracing::trace!(to = %request.target, function = %request.function, "Decoded EIP-681 URI");

    Ok(request)
}

/// Encodes a request into an EIP-681 URI.
///
/// Requires `target` and `function`; everything else is optional. The bare
/// function name (text before the first `(`) goes into the URI, followed by
/// the argument pairs in order and then any builtins in the fixed order
/// `gasPrice`, `gasLimit`, `value`, all rendered in decimal.
///
/// Encode does not re-derive calldata and does not verify that the
/// signature's parameter list matches `arguments`; that consistency is the
/// caller's responsibility.
///
/// # Errors
///
/// Returns [`EncodeError::MissingTarget`] or [`EncodeError::MissingFunction`]
/// when the corresponding field is empty.
pub fn encode(request: &Eip681Request) -> Result<String, EncodeError> {
    if request.target.is_empty() {
        return Err(EncodeError::MissingTarget);
    }
    if request.function.is_empty() {
        return Err(EncodeError::MissingFunction);
    }

    let mut uri = String::from(SCHEME);
    if request.pay {
        uri.push_str(PAY_PREFIX);
    }
    uri.push_str(&request.target);

    if let Some(chain_id) = request.chain_id {
        uri.push('@');
        uri.push_str(&chain_id.to_string());
    }

    let name = match request.function.split_once('(') {
        Some((name, _)) => name,
        None => request.function.as_str(),
    };
    uri.push('/');
    uri.push_str(name);

    let mut pairs: Vec<String> = request
        .arguments
        .iter()
        .map(|argument| format!("{}={}", argument.type_name, argument.value))
        .collect();
    if let Some(gas_price) = request.gas_price {
        pairs.push(format!("gasPrice={gas_price}"));
    }
    if let Some(gas_limit) = request.gas_limit {
        pairs.push(format!("gasLimit={gas_limit}"));
    }
    if let Some(value) = request.value {
        pairs.push(format!("value={value}"));
    }
    if !pairs.is_empty() {
        uri.push('?');
        uri.push_str(&pairs.join("&"));
    }

    Ok(uri)
}
