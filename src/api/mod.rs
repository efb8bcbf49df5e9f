/// JSON-RPC front end for the habit tracker
///
/// The service speaks line-oriented JSON-RPC 2.0 over stdin/stdout; this
/// module holds the wire types and the server loop.

pub mod protocol;
pub mod server;

pub use protocol::{error_codes, JsonRpcRequest, JsonRpcResponse};
pub use server::RpcServer;
