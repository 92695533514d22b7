//! Session registry adapters.
//!
//! - **InMemorySessionRegistry** - Sharded concurrent map, the only store
//! - **SessionReaper** - Optional background expiry of abandoned sessions

mod in_memory;
mod reaper;

pub use in_memory::InMemorySessionRegistry;
pub use reaper::SessionReaper;
