//! Echo the request id assigned by `TracingLogger` back to the client.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage};
use tracing_actix_web::RequestId;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware function; must be wrapped inside `TracingLogger` so the id is
/// already in the request extensions.
pub async fn echo_request_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let request_id = req.extensions().get::<RequestId>().cloned();

    let mut res = next.call(req).await?;

    if let Some(id) = request_id {
        let value = HeaderValue::from_str(&id.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
        res.headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    Ok(res)
}
