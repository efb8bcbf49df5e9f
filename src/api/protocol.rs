/// JSON-RPC 2.0 message structures
///
/// This module defines the message format the habit tracker service speaks
/// over stdin/stdout, one request or response per line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request message
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (always "2.0")
    #[allow(dead_code)]
    pub jsonrpc: String,
    /// Unique identifier for this request
    pub id: Value,
    /// The operation to invoke (e.g., "habit_create")
    pub method: String,
    /// Parameters for the operation
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Build a request by hand (useful for tests)
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response message
///
/// Contains either a successful result or an error, never both.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request id this responds to
    pub id: Value,
    /// Successful result (if no error occurred)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error information (if something went wrong)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error information
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// Error code (standard JSON-RPC codes plus the application range)
    pub code: i32,
    /// Human-readable error message
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a successful response
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError { code, message }),
        }
    }
}

/// JSON-RPC error codes
pub mod error_codes {
    /// Parse error - invalid JSON was received
    pub const PARSE_ERROR: i32 = -32700;
    /// Method not found - the requested operation doesn't exist
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid parameters - operation exists but parameters are wrong
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error
    pub const INTERNAL_ERROR: i32 = -32603;

    // Application-specific codes (the -32000 to -32099 range the JSON-RPC
    // 2.0 spec reserves for implementations)
    /// The referenced habit doesn't exist
    pub const HABIT_NOT_FOUND: i32 = -32001;
    /// Input validation failed
    pub const VALIDATION_ERROR: i32 = -32002;
    /// Storage operation failed
    pub const STORAGE_ERROR: i32 = -32003;
}

/// Map an operation error to its JSON-RPC error code
pub fn op_error_code(error: &crate::ops::OpError) -> i32 {
    use crate::ops::OpError;

    match error {
        OpError::Domain(_) => error_codes::VALIDATION_ERROR,
        OpError::HabitNotFound(_) => error_codes::HABIT_NOT_FOUND,
        OpError::Store(_) => error_codes::STORAGE_ERROR,
    }
}
