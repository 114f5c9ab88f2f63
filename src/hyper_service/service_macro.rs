/// Builds a `Router<SharedHandler>` from `METHOD "pattern" => handler` entries.
///
/// With a trailing `; _ => fallback` it builds a [`RouterService`](crate::RouterService)
/// answering unmatched requests with `fallback`.
#[macro_export]
macro_rules! router_service {
    {$($method:ident $pattern:expr => $handler:expr),+ ; _ => $fallback:expr} => {
        $crate::router_service!{$($method $pattern => $handler),+}
            .map(|__router| __router.into_service().with_fallback($fallback))
    };

    {$($method:ident $pattern:expr => $handler:expr),+ $(,)?} => {
        (|| -> ::std::result::Result<
            $crate::Router<$crate::SharedHandler>,
            $crate::RouterError,
        > {
            let __router = $crate::Router::new();
            $(__router.route($crate::Method::$method, $pattern, $handler)?;)+
            Ok(__router)
        })()
    };
}
