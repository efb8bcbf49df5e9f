/// JSON-RPC server loop for the habit tracker
///
/// This module implements the service front end:
/// 1. Reads JSON-RPC requests from stdin, one per line
/// 2. Dispatches them onto the operation set
/// 3. Writes JSON-RPC responses to stdout

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::api::protocol::*;
use crate::ops::{self, OpError};
use crate::{HabitTracker, ServerError};

/// Server handling JSON-RPC requests against one habit tracker instance
pub struct RpcServer {
    tracker: HabitTracker,
}

impl RpcServer {
    /// Create a new server around a habit tracker
    pub fn new(tracker: HabitTracker) -> Self {
        Self { tracker }
    }

    /// Run the server, handling JSON-RPC over stdin/stdout
    ///
    /// Blocks until stdin closes or an I/O error occurs.
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Listening for JSON-RPC requests on stdin...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("Shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    fn process_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                ));
            }
        };

        Some(self.handle_request(request))
    }

    /// Dispatch a JSON-RPC request onto the operation set
    pub fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let store = self.tracker.store();
        let rule = self.tracker.streak_rule();

        match request.method.as_str() {
            "habit_create" => call(request, |params| ops::create_habit(store, params)),
            "habit_update" => call(request, |params| ops::update_habit(store, params)),
            "habit_delete" => call(request, |params| ops::delete_habit(store, params)),
            "habit_get" => call(request, |params: ops::GetHabitParams| {
                let habit_id = params.habit_id;
                ops::get_habit(store, params)?.ok_or(OpError::HabitNotFound(habit_id))
            }),
            "habit_list" => call_no_params(request, || ops::list_habits(store)),
            "habit_stats" => call_no_params(request, || ops::habits_with_stats(store, rule)),
            "dashboard_stats" => call_no_params(request, || ops::dashboard_stats(store, rule)),
            "log_list" => call(request, |params| ops::logs_for_date(store, params)),
            "log_history" => call(request, |params| ops::logs_for_habit(store, params)),
            "log_upsert" => call(request, |params| ops::upsert_log(store, params)),
            "log_toggle" => call(request, |params| ops::toggle_completion(store, params)),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
            ),
        }
    }
}

/// Run an operation that takes parameters, mapping errors to wire codes
fn call<P, T, F>(request: JsonRpcRequest, op: F) -> JsonRpcResponse
where
    P: DeserializeOwned,
    T: serde::Serialize,
    F: FnOnce(P) -> Result<T, OpError>,
{
    let params: P = match serde_json::from_value(request.params.unwrap_or(Value::Null)) {
        Ok(p) => p,
        Err(e) => {
            return JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_PARAMS,
                format!("Invalid parameters: {}", e),
            );
        }
    };

    finish(request.id, op(params))
}

/// Run a parameterless operation, mapping errors to wire codes
fn call_no_params<T, F>(request: JsonRpcRequest, op: F) -> JsonRpcResponse
where
    T: serde::Serialize,
    F: FnOnce() -> Result<T, OpError>,
{
    finish(request.id, op())
}

/// Serialize an operation outcome into a JSON-RPC response
fn finish<T: serde::Serialize>(id: Value, outcome: Result<T, OpError>) -> JsonRpcResponse {
    match outcome {
        Ok(value) => match serde_json::to_value(value) {
            Ok(json) => JsonRpcResponse::success(id, json),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                JsonRpcResponse::error(
                    id,
                    error_codes::INTERNAL_ERROR,
                    "Internal error".to_string(),
                )
            }
        },
        Err(OpError::Store(e)) => {
            // Internal failures are logged in full but surfaced generically.
            error!("Storage operation failed: {}", e);
            JsonRpcResponse::error(
                id,
                error_codes::STORAGE_ERROR,
                "Storage operation failed".to_string(),
            )
        }
        Err(e) => JsonRpcResponse::error(id, op_error_code(&e), e.to_string()),
    }
}
