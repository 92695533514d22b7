//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! - `SessionRegistry` - Concurrent store of live session state
//! - `CallbackConnector` / `CallbackClient` - Outbound notification transport
//! - `MessageDispatcher` - The external action performed by `send`
//! - `CorrelationSource` - Field lookup on an inbound transport envelope

mod callback;
mod correlation;
mod message_dispatcher;
mod session_registry;

pub use callback::{
    CallbackClient, CallbackConnector, ConnectError, DeliveryError, NotifyForMessageRequest,
};
pub use correlation::{CorrelationSource, REPLY_TO_FIELD, TEST_SESSION_ID_FIELD};
pub use message_dispatcher::{DispatchError, MessageDispatcher};
pub use session_registry::SessionRegistry;
