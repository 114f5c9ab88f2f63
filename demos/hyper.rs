use rest_router::{router_service, Params};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response};

async fn not_found(req: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    tracing::info!(method = %req.method(), path = req.uri().path(), "fallback");
    let res = Response::builder()
        .status(404)
        .body(Body::from("404 Not Found"))
        .unwrap();
    Ok(res)
}

async fn hello(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or_default();
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn lock(req: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let resource = params.get("resourceName").unwrap_or_default();
    let body = format!("{} lock on {}", req.method(), resource);
    Ok(Response::new(Body::from(body)))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let router = router_service! {
        GET "/hello/:name" => hello,
        PUT "/lockservice/:resourceName/locks" => lock,
        DELETE "/lockservice/:resourceName/locks" => lock;
        _ => not_found
    }
    .unwrap();

    let make = make_service_fn(move |_| {
        let router = router.clone();
        async move { Ok::<_, Never>(router) }
    });

    let addr = ([127, 0, 0, 1], 3000).into();
    let server = hyper::Server::bind(&addr).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("locks: curl -X PUT http://{}/lockservice/db1/locks", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    if let Err(e) = server.await {
        eprintln!("server error: {}", e);
    }
}
