//! The resolved call descriptor and the provider that executes it.

use std::future::Future;

use alloy_primitives::hex::FromHexError;
use alloy_primitives::{Address, Bytes, U256};
use eip681::{DecodeError, Eip681Request};

/// A resolved call descriptor, ready for the execution layer.
///
/// This is the shape handed to a [`CallSender`]: the typed target address,
/// the derived calldata, and whichever transaction builtins the URI
/// carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    /// Target contract or account address.
    pub to: Address,
    /// Call payload: selector plus ABI-encoded arguments.
    pub data: Bytes,
    /// Native-currency amount to attach.
    pub value: Option<U256>,
    /// Gas ceiling.
    pub gas_limit: Option<U256>,
    /// Legacy gas price.
    pub gas_price: Option<U256>,
}

impl CallRequest {
    /// Builds a descriptor from a decoded request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request's target is not parseable as an
    /// address. Requests coming out of [`eip681::decode`] always are; this
    /// guards caller-built requests.
    pub fn from_request(request: &Eip681Request) -> Result<Self, FromHexError> {
        Ok(Self {
            to: request.target.parse()?,
            data: request.calldata.clone(),
            value: request.value,
            gas_limit: request.gas_limit,
            gas_price: request.gas_price,
        })
    }
}

/// Capability for executing a resolved call against a node.
///
/// Implementations own the transport entirely; the provider places no
/// ordering or cancellation requirements on them beyond accepting the
/// eventual success or failure outcome.
pub trait CallSender: Send + Sync {
    /// Error type for a failed call.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes the call and returns the raw response bytes.
    fn send_call(
        &self,
        call: CallRequest,
    ) -> impl Future<Output = Result<Bytes, Self::Error>> + Send;
}

/// Errors from [`Eip681Provider::call`].
#[derive(Debug, thiserror::Error)]
pub enum CallError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// The URI failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded target could not be parsed as an address.
    #[error("invalid target address: {0}")]
    Target(#[from] FromHexError),

    /// The sender failed; the underlying error is surfaced unmodified.
    #[error(transparent)]
    Send(E),
}

/// Executes EIP-681 URIs against a node.
///
/// Decodes the URI, resolves it into a [`CallRequest`], and delegates to
/// the configured [`CallSender`]. Pure plumbing: no retries, no response
/// decoding.
#[derive(Debug, Clone)]
pub struct Eip681Provider<S> {
    sender: S,
}

impl<S: CallSender> Eip681Provider<S> {
    /// Creates a provider around a call sender.
    pub const fn new(sender: S) -> Self {
        Self { sender }
    }

    /// Returns a reference to the underlying sender.
    pub const fn sender(&self) -> &S {
        &self.sender
    }

    /// Decodes `uri` and executes the resulting call.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Decode`] for a malformed URI (the sender is
    /// never invoked), [`CallError::Target`] for an unparseable target, or
    /// [`CallError::Send`] carrying the sender's own error.
    pub async fn call(&self, uri: &str) -> Result<Bytes, CallError<S::Error>> {
        let request = eip681::decode(uri)?;
        let call = CallRequest::from_request(&request)?;

        #[cfg(feature = "telemetry")]
        tracing::debug!(to = %call.to, data = %call.data, "Executing EIP-681 call");

        self.sender.send_call(call).await.map_err(CallError::Send)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::Mutex;

    struct RecordingSender {
        response: Bytes,
        seen: Mutex<Vec<CallRequest>>,
    }

    impl RecordingSender {
        fn new(response: Bytes) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl CallSender for RecordingSender {
        type Error = Infallible;

        async fn send_call(&self, call: CallRequest) -> Result<Bytes, Infallible> {
            self.seen.lock().unwrap().push(call);
            Ok(self.response.clone())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("node unreachable")]
    struct NodeUnreachable;

    struct FailingSender;

    impl CallSender for FailingSender {
        type Error = NodeUnreachable;

        async fn send_call(&self, _call: CallRequest) -> Result<Bytes, NodeUnreachable> {
            Err(NodeUnreachable)
        }
    }

    const URI: &str = "ethereum:0x4200000000000000000000000000000000000042/balanceOf\
                       ?address=0x2a82ae142b2e62cb7d10b55e323acb1cab663a26\
                       &value=32&gasLimit=100&gasPrice=10";

    #[tokio::test]
    async fn test_call_maps_decoded_fields_onto_descriptor() {
        let provider = Eip681Provider::new(RecordingSender::new(Bytes::from(vec![1u8; 32])));
        let response = provider.call(URI).await.unwrap();
        assert_eq!(response, Bytes::from(vec![1u8; 32]));

        let seen = provider.sender().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let call = &seen[0];
        assert_eq!(
            call.to,
            "0x4200000000000000000000000000000000000042"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(call.value, Some(U256::from(32)));
        assert_eq!(call.gas_limit, Some(U256::from(100)));
        assert_eq!(call.gas_price, Some(U256::from(10)));
        // selector ++ one encoded address argument
        assert_eq!(call.data.len(), 4 + 32);
    }

    #[tokio::test]
    async fn test_decode_failure_short_circuits_without_sending() {
        let provider = Eip681Provider::new(RecordingSender::new(Bytes::new()));
        let result = provider.call("ethereum:notanaddress/transfer?x=1").await;
        assert!(matches!(result, Err(CallError::Decode(_))));
        assert!(provider.sender().seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sender_errors_surface_unmodified() {
        let provider = Eip681Provider::new(FailingSender);
        let err = provider.call(URI).await.unwrap_err();
        match err {
            CallError::Send(inner) => assert_eq!(inner.to_string(), "node unreachable"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_descriptor_rejects_unparseable_target() {
        let request = Eip681Request {
            target: "not-an-address".into(),
            function: "decimals()".into(),
            ..Eip681Request::default()
        };
        assert!(CallRequest::from_request(&request).is_err());
    }
}
