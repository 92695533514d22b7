//! Application handlers.
//!
//! Command handlers that orchestrate registry, dispatcher and notification
//! operations for the messaging protocol.

pub mod messaging;

pub use messaging::{
    ActorConfiguration, BeginTransactionCommand, BeginTransactionHandler, DeliverInboundCommand,
    DeliverInboundHandler, DescribeModuleHandler, EndTransactionCommand,
    EndTransactionHandler, FinalizeCommand, FinalizeHandler, FinalizeResult, InitiateCommand,
    InitiateHandler, InitiateResult, ListSessionsHandler, NamedValue, ReceiveCommand,
    ReceiveHandler, SendCommand, SendHandler, SendResult,
};
