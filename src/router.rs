use crate::error::{DispatchError, RouterError};
use crate::params::Params;
use crate::pattern::Pattern;

use std::collections::HashMap;

use parking_lot::RwLock;

/// Routes grouped by method, tried in registration order.
///
/// Registration takes a write lock and dispatch a read lock, so a `Router`
/// behind an `Arc` can keep receiving routes while it serves requests.
#[derive(Debug)]
pub struct Router<H> {
    table: RwLock<HashMap<Box<str>, Vec<Route<H>>>>,
}

#[derive(Debug)]
struct Route<H> {
    pattern: Pattern,
    handler: H,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `handler` for `method` and `pattern`.
    ///
    /// Passing `None` as the handler is rejected like an empty method or pattern.
    /// Nothing is added when an error is returned.
    pub fn add_route(
        &self,
        method: &str,
        pattern: &str,
        handler: impl Into<Option<H>>,
    ) -> Result<(), RouterError> {
        if method.is_empty() || pattern.is_empty() {
            return Err(RouterError::InvalidRegistration(
                "method and pattern can not be empty",
            ));
        }
        let handler = handler
            .into()
            .ok_or(RouterError::InvalidRegistration("handler can not be absent"))?;

        let pattern = Pattern::compile(pattern)?;

        self.table
            .write()
            .entry(method.into())
            .or_insert_with(Vec::new)
            .push(Route { pattern, handler });

        Ok(())
    }

    /// Resolves `method` and `path`, then calls `f` with the handler and the
    /// bound parameters. The first matching route wins.
    ///
    /// `f` runs under the read lock: it must not register routes on this router.
    pub fn dispatch<R>(
        &self,
        method: &str,
        path: &str,
        f: impl FnOnce(&H, Params) -> R,
    ) -> Result<R, DispatchError> {
        let table = self.table.read();
        let routes = table.get(method).ok_or(DispatchError::NotFound)?;

        let (route, caps) = routes
            .iter()
            .find_map(|r| r.pattern.captures(path).map(|c| (r, c)))
            .ok_or(DispatchError::NotFound)?;

        let names = route.pattern.param_names();
        if caps.len() != names.len() {
            return Err(DispatchError::BadMatch {
                pattern: route.pattern.as_str().into(),
                expected: names.len(),
                captured: caps.len(),
            });
        }

        let params = Params::new(path, names, &caps);
        Ok(f(&route.handler, params))
    }

    pub fn route_count(&self, method: &str) -> usize {
        self.table.read().get(method).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.table.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Methods with at least one route, sorted.
    pub fn methods(&self) -> Vec<String> {
        let mut methods: Vec<String> = self.table.read().keys().map(|m| m.to_string()).collect();
        methods.sort();
        methods
    }

    pub fn clear(&self) {
        self.table.write().clear();
    }
}

impl<H: Clone> Router<H> {
    /// Like [`dispatch`](Router::dispatch) but hands back a clone of the handler.
    pub fn find(&self, method: &str, path: &str) -> Result<(H, Params), DispatchError> {
        self.dispatch(method, path, |h, params| (h.clone(), params))
    }
}
