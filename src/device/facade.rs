use serde::Serialize;

use crate::device::command::extract_command;
use crate::http::response::{Response, StatusCode};

/// Simulated sensor readings for the snapshot endpoint.
const SIMULATED_TEMPERATURE: f64 = 23.4;
const SIMULATED_HUMIDITY: f64 = 45.0;

/// Immutable device identity, fixed at startup from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    #[serde(rename = "device_name")]
    pub name: String,
    #[serde(rename = "device_model")]
    pub model: String,
    pub manufacturer: String,
    #[serde(rename = "device_type")]
    pub kind: String,
    #[serde(rename = "primary_protocol")]
    pub protocol: String,
}

/// A point-in-time sensor reading. Values are canned; no device is queried.
#[derive(Debug, Clone, Serialize)]
pub struct DataSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub status: &'static str,
}

/// Produces the response bodies for the three device endpoints.
///
/// All operations are synchronous and touch no real device. The identity
/// record never changes after construction, so repeated `info` calls yield
/// byte-identical bodies.
pub struct DeviceFacade {
    info: DeviceInfo,
}

impl DeviceFacade {
    pub fn new(info: DeviceInfo) -> Self {
        Self { info }
    }

    /// The configured device identity, as JSON.
    pub fn info(&self) -> Response {
        json_response(StatusCode::Ok, &self.info)
    }

    /// The current simulated sensor snapshot, as JSON.
    pub fn data(&self) -> Response {
        let snapshot = DataSnapshot {
            temperature: SIMULATED_TEMPERATURE,
            humidity: SIMULATED_HUMIDITY,
            status: "OK",
        };

        json_response(StatusCode::Ok, &snapshot)
    }

    /// Extracts a command token from the request body and echoes it back
    /// inside a success body, as if the device had executed it.
    pub fn command(&self, body: &[u8]) -> Response {
        match extract_command(body) {
            Ok(token) => {
                tracing::debug!(command = %token, "Simulated command execution");

                let body = serde_json::json!({
                    "status": "success",
                    "command": token,
                });
                Response::json(StatusCode::Ok, body.to_string().into_bytes())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected command payload");
                Response::bad_request(&e.to_string())
            }
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => Response::json(status, body),
        Err(e) => {
            tracing::error!(error = %e, "Response serialization failed");
            Response::internal_error()
        }
    }
}
