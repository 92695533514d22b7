//! HTTP adapter for the messaging protocol endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActorConfigurationDto, CommandResponse, ErrorResponse, FinalizeResponse, InboundRequest,
    InitiateRequest, InitiateResponse, NamedValueDto, SendRequest, SendResponse,
    SessionListResponse, TransactionRequest,
};
pub use handlers::MessagingHandlers;
pub use routes::messaging_routes;
