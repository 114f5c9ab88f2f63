//! A method and path router with `:name` segment parameters.
//!
//! Patterns are compiled into anchored matchers and tried per method in
//! registration order; the first match wins.
//!
//! ```
//! use rest_router::{DispatchError, Router};
//!
//! let router: Router<&str> = Router::new();
//! router.add_route("GET", "/users/:id", "show").unwrap();
//!
//! let (handler, params) = router.find("GET", "/users/42").unwrap();
//! assert_eq!(handler, "show");
//! assert_eq!(params.get("id"), Some("42"));
//!
//! assert_eq!(router.find("GET", "/users/4-2").unwrap_err(), DispatchError::NotFound);
//! ```

#![deny(unsafe_code)]

mod error;
mod params;
mod pattern;
mod router;
mod router_macro;

pub use self::error::{DispatchError, RouterError};
pub use self::params::{IntoIter, Iter, Params};
pub use self::pattern::{Captures, Pattern};
pub use self::router::Router;

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{Handler, Method, RouterService, SharedHandler};
