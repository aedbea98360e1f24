//! Ordered composition of request decorators.
//!
//! `chain(h, vec![m1, m2])` behaves exactly like `m1(m2(h))`: `m1` sees the request first
//! and the response last. Whatever must run before business logic (the auth gate) goes first.
//!
//! The core types are generic over request/response so the ordering contract can be
//! exercised without HTTP. `HttpHandler`/`ChainService` plug a composed chain into axum.

use std::{
    convert::Infallible,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{extract::Request, handler::Handler, response::Response};
use tower::{Service, ServiceExt};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type BoxHandler<Req, Res> = Arc<dyn Fn(Req) -> BoxFuture<'static, Res> + Send + Sync>;

pub type Middleware<Req, Res> =
    Arc<dyn Fn(BoxHandler<Req, Res>) -> BoxHandler<Req, Res> + Send + Sync>;

pub type HttpHandler = BoxHandler<Request, Response>;
pub type HttpMiddleware = Middleware<Request, Response>;

pub fn handler_fn<Req, Res, F, Fut>(f: F) -> BoxHandler<Req, Res>
where
    Req: 'static,
    Res: 'static,
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Res> + Send + 'static,
{
    Arc::new(move |req: Req| -> BoxFuture<'static, Res> { Box::pin(f(req)) })
}

pub fn middleware_fn<Req, Res, F>(f: F) -> Middleware<Req, Res>
where
    Req: 'static,
    Res: 'static,
    F: Fn(BoxHandler<Req, Res>) -> BoxHandler<Req, Res> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Right fold over `middlewares`; an empty list returns `handler` itself.
pub fn chain<Req, Res>(
    handler: BoxHandler<Req, Res>,
    middlewares: Vec<Middleware<Req, Res>>,
) -> BoxHandler<Req, Res>
where
    Req: 'static,
    Res: 'static,
{
    middlewares
        .into_iter()
        .rev()
        .fold(handler, |next, middleware| middleware(next))
}

/// Turns an ordinary axum handler (extractors and all) into a chain terminal.
pub fn from_axum<H, T, S>(handler: H, state: S) -> HttpHandler
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    let svc = handler.with_state(state);
    Arc::new(move |req: Request| -> BoxFuture<'static, Response> {
        let svc = svc.clone();
        Box::pin(async move {
            match svc.oneshot(req).await {
                Ok(res) => res,
                Err(never) => match never {},
            }
        })
    })
}

/// Tower adapter so a composed chain can be mounted with `on_service`.
#[derive(Clone)]
pub struct ChainService {
    handler: HttpHandler,
}

impl ChainService {
    pub fn new(handler: HttpHandler) -> Self {
        Self { handler }
    }
}

impl Service<Request> for ChainService {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let fut = (self.handler)(req);
        Box::pin(async move { Ok(fut.await) })
    }
}
