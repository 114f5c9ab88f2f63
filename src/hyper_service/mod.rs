#![forbid(unsafe_code)]

mod handler;
mod service;
mod service_macro;

pub use self::handler::{Handler, SharedHandler};
pub use self::service::RouterService;

pub use http::Method;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;
