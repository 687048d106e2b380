//! Mock response registry and client.
//!
//! - [`MockRegistry`](registry::MockRegistry): Stores fixtures newest-first and finds the one answering a request
//! - [`MockRecorder`](recorder::MockRecorder): Invocation history handle returned on registration
//! - [`EventQueue`](queue::EventQueue): Deferred callbacks and deferred raises
//! - [`MockClient`](client::MockClient): Callback-style request surface dispatching against the registry

pub mod client;
pub mod promise;
pub mod queue;
pub mod recorder;
pub mod registry;
