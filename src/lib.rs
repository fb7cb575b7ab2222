//! MCP server delegating code generation to an external responder
//! ("Bob") through a file-based exchange.
//!
//! The exchange is a single-slot channel on the local filesystem: a
//! request artifact plus a lock marker published per call, a response
//! artifact produced out-of-band by the responder, and a poll loop that
//! treats the lock's removal as the completion signal.

pub mod config;
pub mod error;
pub mod exchange;
pub mod server;

pub use error::{BobMcpError, Result};
pub use server::BobServer;
