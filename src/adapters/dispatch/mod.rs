//! Send-action adapters.

mod logging;

pub use logging::LoggingDispatcher;
