/// Builds a [`Router`](crate::Router), registering the entries in the written order.
///
/// ```
/// use rest_router::router;
///
/// let router = router! {
///     GET "/u/:uid" => 1,
///     POST "/u" => 2
/// }
/// .unwrap();
///
/// assert_eq!(router.find("GET", "/u/asd").unwrap().0, 1);
/// ```
#[macro_export]
macro_rules! router {
    {$($method:ident $pattern:expr => $handler:expr),+ $(,)?} => {
        (|| -> ::std::result::Result<_, $crate::RouterError> {
            let __router = $crate::Router::new();
            $(__router.add_route(stringify!($method), $pattern, $handler)?;)+
            Ok(__router)
        })()
    };
}
