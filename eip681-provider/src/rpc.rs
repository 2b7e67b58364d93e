//! Alloy-backed call sender.

use alloy_network::TransactionBuilder;
use alloy_primitives::Bytes;
use alloy_primitives::ruint::FromUintError;
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use alloy_transport::TransportError;

use crate::call::{CallRequest, CallSender};

/// Errors from [`RpcCallSender`].
#[derive(Debug, thiserror::Error)]
pub enum RpcCallError {
    /// RPC transport error, passed through from alloy.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request's gas limit does not fit the wire format's `u64`.
    #[error("gas limit out of range")]
    GasLimit(#[source] FromUintError<u64>),

    /// The request's gas price does not fit the wire format's `u128`.
    #[error("gas price out of range")]
    GasPrice(#[source] FromUintError<u128>),
}

/// [`CallSender`] backed by an alloy [`Provider`].
///
/// Maps the resolved descriptor onto an `eth_call` transaction request and
/// executes it read-only; nothing is signed or submitted. Works with any
/// provider composition (plain HTTP, filler stacks, test providers).
#[derive(Debug, Clone)]
pub struct RpcCallSender<P> {
    inner: P,
}

impl<P> RpcCallSender<P> {
    /// Wraps an alloy provider.
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying provider.
    pub const fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Provider + Send + Sync> CallSender for RpcCallSender<P> {
    type Error = RpcCallError;

    async fn send_call(&self, call: CallRequest) -> Result<Bytes, RpcCallError> {
        let mut tx = TransactionRequest::default()
            .with_to(call.to)
            .with_input(call.data);

        if let Some(value) = call.value {
            tx.set_value(value);
        }
        if let Some(gas_limit) = call.gas_limit {
            tx.set_gas_limit(u64::try_from(gas_limit).map_err(RpcCallError::GasLimit)?);
        }
        if let Some(gas_price) = call.gas_price {
            tx.set_gas_price(u128::try_from(gas_price).map_err(RpcCallError::GasPrice)?);
        }

        Ok(self.inner.call(tx).await?)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    // The sender narrows U256 gas parameters to the wire format's integer
    // widths; these pin the conversions it relies on, without a node.
    #[test]
    fn test_gas_range_checks_reject_oversized_values() {
        assert!(u64::try_from(U256::MAX).is_err());
        assert!(u128::try_from(U256::MAX).is_err());
        assert_eq!(u64::try_from(U256::from(100u64)).unwrap(), 100);
        assert_eq!(u128::try_from(U256::from(10u64)).unwrap(), 10);
    }
}
