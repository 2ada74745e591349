use crate::device::DeviceFacade;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// Exact-match dispatch over (method, path).
///
/// Three pairs are mapped; anything else falls through to a JSON 404. No
/// prefix or wildcard matching, and no method-not-allowed distinction.
pub struct Router {
    facade: DeviceFacade,
}

impl Router {
    pub fn new(facade: DeviceFacade) -> Self {
        Self { facade }
    }

    pub fn dispatch(&self, request: &Request) -> Response {
        let response = match (&request.method, request.path.as_str()) {
            (Method::GET, "/info") => self.facade.info(),
            (Method::GET, "/data") => self.facade.data(),
            (Method::POST, "/cmd") => self.facade.command(&request.body),
            _ => Response::not_found(),
        };

        tracing::debug!(
            method = ?request.method,
            path = %request.path,
            status = response.status.as_u16(),
            "Dispatched request"
        );

        response
    }
}
