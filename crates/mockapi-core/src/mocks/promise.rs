//! Future returned by promise-style requests.

use crate::error::RequestError;
use crate::types::response::{ErrorResponse, ResponseMeta};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot::{self, error::TryRecvError};

pub(crate) type Settlement = Result<PromiseValue, ErrorResponse>;

/// Resolved value of a promise-style request.
#[derive(Debug, Clone, PartialEq)]
pub enum PromiseValue {
    /// Response body only
    Body(Value),
    /// Every success callback argument, when all args were requested
    AllArgs {
        body: Value,
        meta: Value,
        response: ResponseMeta,
    },
}

impl PromiseValue {
    pub fn body(&self) -> &Value {
        match self {
            PromiseValue::Body(body) | PromiseValue::AllArgs { body, .. } => body,
        }
    }

    pub fn into_body(self) -> Value {
        match self {
            PromiseValue::Body(body) | PromiseValue::AllArgs { body, .. } => body,
        }
    }
}

/// Settles once the request's success or error callback runs.
///
/// Resolves to [`RequestError::Cancelled`] when the request is dropped
/// without an answer, e.g. when no fixture matched.
#[derive(Debug)]
pub struct ResponseFuture {
    rx: oneshot::Receiver<Settlement>,
}

impl ResponseFuture {
    pub(crate) fn new(rx: oneshot::Receiver<Settlement>) -> Self {
        Self { rx }
    }

    /// Check for an outcome without waiting. `None` while still pending.
    pub fn try_settle(&mut self) -> Option<Result<PromiseValue, RequestError>> {
        match self.rx.try_recv() {
            Ok(settlement) => Some(settlement.map_err(RequestError::Response)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(RequestError::Cancelled)),
        }
    }
}

impl Future for ResponseFuture {
    type Output = Result<PromiseValue, RequestError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(settlement) => settlement.map_err(RequestError::Response),
            Err(_) => Err(RequestError::Cancelled),
        })
    }
}
