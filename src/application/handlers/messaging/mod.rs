//! Messaging protocol command handlers.
//!
//! One handler per orchestrator operation. Handlers receive plain values;
//! extracting them from the transport is the HTTP adapter's job.

mod deliver_inbound;
mod describe_module;
mod finalize;
mod initiate;
mod list_sessions;
mod receive;
mod send;
mod transaction;

pub use deliver_inbound::{DeliverInboundCommand, DeliverInboundHandler};
pub use describe_module::DescribeModuleHandler;
pub use finalize::{FinalizeCommand, FinalizeHandler, FinalizeResult};
pub use initiate::{ActorConfiguration, InitiateCommand, InitiateHandler, InitiateResult};
pub use list_sessions::ListSessionsHandler;
pub use receive::{ReceiveCommand, ReceiveHandler};
pub use send::{NamedValue, SendCommand, SendHandler, SendResult};
pub use transaction::{
    BeginTransactionCommand, BeginTransactionHandler, EndTransactionCommand,
    EndTransactionHandler,
};
