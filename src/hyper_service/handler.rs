use super::{BoxError, BoxFuture, Request, Response};
use crate::params::Params;

use std::error::Error as StdError;
use std::future::Future;
use std::sync::Arc;

/// An async request handler receiving the bound path parameters.
pub trait Handler {
    fn call(&self, req: Request, params: Params) -> BoxFuture<'static, Result<Response, BoxError>>;
}

/// Handlers are stored behind an `Arc` so a dispatch can release the route
/// table before the handler runs.
pub type SharedHandler = Arc<dyn Handler + Send + Sync>;

impl<F, E, Fut> Handler for F
where
    F: Fn(Request, Params) -> Fut,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
{
    fn call(&self, req: Request, params: Params) -> BoxFuture<'static, Result<Response, BoxError>> {
        let fut = (self)(req, params);
        Box::pin(async move { fut.await.map_err(|e| Box::new(e) as BoxError) })
    }
}
