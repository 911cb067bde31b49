//! Provider gateway: one `translate` call over two structurally different APIs.

mod error;
mod gateway;
pub mod gemini;
pub mod openrouter;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use crate::settings::ProviderId;
pub use error::{AttemptFailure, CatalogError, FailureReason, GatewayError, mask_key};
pub use gateway::{Gateway, Translation};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport, TransportError};
