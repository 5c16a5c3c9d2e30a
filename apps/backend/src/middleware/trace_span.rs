//! Per-request tracing span.
//!
//! Opens a `request` span with `trace_id`, `method`, `path` and the API
//! area around the downstream future so every event logged by a handler
//! carries them. Game and play ids in the path are recorded when present.
//! Reads the trace id that `RequestTrace` put in the extensions, so it must
//! sit inside `RequestTrace`:
//!
//! App::new()
//!     .wrap(TraceSpan)          // innermost
//!     .wrap(StructuredLogger)
//!     .wrap(RequestTrace)       // outermost: runs first

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{field, info_span, Instrument};

use super::request_scope::RequestScope;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let scope = RequestScope::from_path(req.path());
        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path(),
            area = scope.area.as_str(),
            game_id = field::Empty,
            play_id = field::Empty
        );
        if let Some(game_id) = &scope.game_id {
            span.record("game_id", game_id.as_str());
        }
        if let Some(play_id) = &scope.play_id {
            span.record("play_id", play_id.as_str());
        }

        Box::pin(self.service.call(req).instrument(span))
    }
}
