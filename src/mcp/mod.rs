//! Streaming tool-call protocol (MCP over SSE)
//!
//! JSON-RPC 2.0 messages flow over a long-lived Server-Sent-Events stream:
//! the client opens `/sse`, learns its session endpoint, and POSTs requests
//! to `/messages?session_id=...`; responses are pushed back on the stream.

pub mod protocol;
pub mod server;
pub mod session;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use server::{McpServer, ServerInfo, PROTOCOL_VERSION};
pub use session::{SessionHandle, SessionRegistry};
