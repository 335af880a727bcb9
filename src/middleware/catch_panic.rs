use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use futures::FutureExt;
use http_body::{Body as HttpBody, Frame, SizeHint};
use serde::Serialize;

/// Client-facing body for converted faults. The original fault message never
/// appears here.
#[derive(Debug, Serialize)]
pub struct FaultBody {
    #[serde(rename = "StatusCode")]
    pub status_code: u16,
    #[serde(rename = "Message")]
    pub message: &'static str,
}

pub const FAULT_MESSAGE: &str = "Internal Server Error. Please try again later.";

/// Catch-all failure handler wrapped around the entire router. Runs the rest
/// of the pipeline exactly once; a panic unwinding out of it is logged and
/// converted into a fixed JSON 500. Successful responses pass through
/// untouched, with their body guarded against panics raised after the headers
/// have gone out.
pub async fn catch_panic_middleware(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response.map(|inner| Body::new(GuardedBody { inner })),
        Err(payload) => {
            tracing::error!("Something went wrong: {}", panic_detail(payload.as_ref()));
            fault_response()
        }
    }
}

fn fault_response() -> Response {
    let body = FaultBody {
        status_code: 500,
        message: FAULT_MESSAGE,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Best-effort extraction of the panic message from its payload
fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Body wrapper for the success path. Once the headers are out the response
/// can no longer be rewritten, so a panic raised while streaming is logged
/// and the stream terminated instead.
struct GuardedBody {
    inner: Body,
}

impl HttpBody for GuardedBody {
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        match std::panic::catch_unwind(AssertUnwindSafe(|| Pin::new(&mut this.inner).poll_frame(cx))) {
            Ok(poll) => poll,
            Err(payload) => {
                tracing::error!("Something went wrong: {}", panic_detail(payload.as_ref()));
                Poll::Ready(None)
            }
        }
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        HttpBody::size_hint(&self.inner)
    }
}
