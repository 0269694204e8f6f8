//! HTTP transport: the client, the response envelope, and their errors.

pub mod errors;
pub mod http_client;
pub mod http_response;

pub use errors::{HttpError, RequestFailedError};
pub use http_client::{HttpClient, HttpMethod, REQUEST_TIMEOUT_SECS, SDK_VERSION};
pub use http_response::HttpResponse;
