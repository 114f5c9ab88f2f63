use super::handler::{Handler, SharedHandler};
use super::{BoxError, BoxFuture, Request, Response};
use crate::error::{DispatchError, RouterError};
use crate::params::Params;
use crate::router::Router;

use std::sync::Arc;
use std::task::{Context, Poll};

use http::{Method, StatusCode};
use hyper::service::Service;
use tracing::{debug, warn};

/// A `hyper` service answering requests from a shared [`Router`].
///
/// Unmatched requests get an empty `404 Not Found` (or the fallback handler),
/// inconsistent matches an empty `400 Bad Request`.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<Router<SharedHandler>>,
    fallback: Option<SharedHandler>,
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let found = self.router.find(req.method().as_str(), req.uri().path());

        match found {
            Ok((handler, params)) => {
                debug!(method = %req.method(), path = req.uri().path(), params = params.len(), "route matched");
                handler.call(req, params)
            }
            Err(DispatchError::NotFound) => {
                debug!(method = %req.method(), path = req.uri().path(), "no route matched");
                match self.fallback {
                    Some(ref h) => h.call(req, Params::default()),
                    None => empty(StatusCode::NOT_FOUND),
                }
            }
            Err(e) => {
                warn!(method = %req.method(), path = req.uri().path(), error = %e, "rejecting request");
                let status =
                    StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
                empty(status)
            }
        }
    }
}

impl RouterService {
    pub fn new(router: Router<SharedHandler>) -> Self {
        Self::from_shared(Arc::new(router))
    }

    pub fn from_shared(router: Arc<Router<SharedHandler>>) -> Self {
        Self {
            router,
            fallback: None,
        }
    }

    /// Answers unmatched requests with `h` instead of an empty 404.
    pub fn with_fallback(mut self, h: impl Handler + Send + Sync + 'static) -> Self {
        self.fallback = Some(Arc::new(h) as SharedHandler);
        self
    }

    /// The router behind this service. Routes added here are visible to
    /// requests dispatched afterwards.
    pub fn router(&self) -> &Arc<Router<SharedHandler>> {
        &self.router
    }
}

fn empty(status: StatusCode) -> BoxFuture<'static, Result<Response, BoxError>> {
    let mut res = Response::new(hyper::Body::empty());
    *res.status_mut() = status;
    Box::pin(async move { Ok(res) })
}

impl Router<SharedHandler> {
    pub fn route(
        &self,
        method: Method,
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> Result<&Self, RouterError> {
        self.add_route(method.as_str(), pattern, Arc::new(h) as SharedHandler)?;
        Ok(self)
    }

    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(
            &self,
            pattern: &str,
            h: impl Handler + Send + Sync + 'static,
        ) -> Result<&Self, RouterError> {
            self.route(Method::$method, pattern, h)
        }
    };
}

impl Router<SharedHandler> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
