use rest_router::{router, DispatchError, Router, RouterError};

use std::sync::Arc;
use std::thread;

#[test]
fn router_common() {
    let router = router! {
        GET "/user/:user_id/post/:post_id" => 1,
        GET "/user/:user_id/profile" => 2,
        GET "/user/:user_id/" => 3,
        GET "/explore" => 4,
        POST "/user/:user_id/post" => 5,
        GET "/" => 6
    }
    .unwrap();

    let cases: &[(_, _, _, &[(&str, &str)])] = &[
        (
            "GET",
            "/user/asd/post/123",
            1,
            &[("user_id", "asd"), ("post_id", "123")],
        ),
        ("GET", "/user/asd/profile", 2, &[("user_id", "asd")]),
        ("GET", "/user/asd/", 3, &[("user_id", "asd")]),
        ("GET", "/explore", 4, &[]),
        ("POST", "/user/Q1/post", 5, &[("user_id", "Q1")]),
        ("GET", "/", 6, &[]),
    ];

    for &(method, url, data, captures) in cases {
        let (h, params) = router.find(method, url).unwrap();
        assert_eq!(h, data);
        let v: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(&v, captures);
    }

    assert_eq!(router.len(), 6);
    assert_eq!(router.route_count("GET"), 5);
    assert_eq!(router.methods(), ["GET", "POST"]);
}

#[test]
fn router_single() {
    let router: Router<usize> = Router::new();
    router.add_route("GET", "/hello/:name", 1).unwrap();

    assert_eq!(router.find("GET", "/hello/world").unwrap().0, 1);
    assert_eq!(
        router.find("GET", "/hello/world/asd").unwrap_err(),
        DispatchError::NotFound
    );
    assert_eq!(
        router.find("GET", "/hello").unwrap_err(),
        DispatchError::NotFound
    );
    assert_eq!(
        router.find("GET", "/hello/").unwrap_err(),
        DispatchError::NotFound
    );
    assert_eq!(
        router.find("GET", "/hello/wor%20ld").unwrap_err(),
        DispatchError::NotFound
    );
}

#[test]
fn router_exact_length() {
    let router: Router<usize> = Router::new();
    router
        .add_route("PUT", "/lockservice/:resourceName/locks", 1)
        .unwrap();

    let (_, params) = router.find("PUT", "/lockservice/123456/locks").unwrap();
    assert_eq!(params.get("resourceName"), Some("123456"));

    assert!(router.find("PUT", "/lockservice/123456/locks/").is_err());
    assert!(router.find("PUT", "/lockservice/locks").is_err());
    assert!(router.find("PUT", "/v1/lockservice/123456/locks").is_err());
}

#[test]
fn router_first_registered_wins() {
    let router: Router<usize> = Router::new();
    router.add_route("GET", "/u/:id", 1).unwrap();
    router.add_route("GET", "/u/me", 2).unwrap();
    router.add_route("GET", "/u/:name", 3).unwrap();

    let (h, params) = router.find("GET", "/u/me").unwrap();
    assert_eq!(h, 1);
    assert_eq!(params.get("id"), Some("me"));

    let router: Router<usize> = Router::new();
    router.add_route("GET", "/u/me", 2).unwrap();
    router.add_route("GET", "/u/:id", 1).unwrap();

    assert_eq!(router.find("GET", "/u/me").unwrap().0, 2);
    assert_eq!(router.find("GET", "/u/you").unwrap().0, 1);
}

#[test]
fn router_dispatch_invokes_once() {
    let router: Router<fn(&str) -> String> = Router::new();
    router
        .add_route("GET", "/greet/:name", (|n: &str| format!("hello, {}", n)) as fn(&str) -> String)
        .unwrap();

    let ret = router.dispatch("GET", "/greet/world", |h, params| {
        h(params.get("name").unwrap())
    });
    assert_eq!(ret.unwrap(), "hello, world");

    let mut called = false;
    let ret = router.dispatch("GET", "/greet/", |_, _| called = true);
    assert_eq!(ret.unwrap_err(), DispatchError::NotFound);
    assert!(!called);
}

#[test]
fn router_not_found() {
    let router: Router<usize> = Router::new();
    assert_eq!(
        router.find("GET", "/").unwrap_err(),
        DispatchError::NotFound
    );

    router.add_route("GET", "/a", 1).unwrap();
    assert_eq!(
        router.find("POST", "/a").unwrap_err(),
        DispatchError::NotFound
    );
    assert_eq!(
        router.find("get", "/a").unwrap_err(),
        DispatchError::NotFound
    );
    assert_eq!(
        router.find("GET", "/b").unwrap_err(),
        DispatchError::NotFound
    );
    assert_eq!(DispatchError::NotFound.status_code(), 404);
}

#[test]
fn router_invalid_registration() {
    let router: Router<usize> = Router::new();

    let cases = vec![
        router.add_route("", "/x", 1),
        router.add_route("GET", "", 1),
        router.add_route("GET", "/x", None::<usize>),
    ];
    for ret in cases {
        match ret {
            Err(RouterError::InvalidRegistration(_)) => {}
            other => panic!("{:?}", other),
        }
    }
    assert!(router.is_empty());
    assert!(router.methods().is_empty());
}

#[test]
fn router_malformed_pattern() {
    let router: Router<usize> = Router::new();
    router.add_route("GET", "/users/:id", 1).unwrap();

    match router.add_route("GET", "/users/:/posts", 2) {
        Err(RouterError::MalformedPattern { pattern, .. }) => {
            assert_eq!(&*pattern, "/users/:/posts")
        }
        other => panic!("{:?}", other),
    }
    match router.add_route("DELETE", "/:", 3) {
        Err(RouterError::MalformedPattern { .. }) => {}
        other => panic!("{:?}", other),
    }

    assert_eq!(router.len(), 1);
    assert_eq!(router.methods(), ["GET"]);
}

#[test]
fn router_empty_segments() {
    let router: Router<usize> = Router::new();
    router.add_route("GET", "//x", 1).unwrap();

    assert_eq!(router.find("GET", "//x").unwrap().0, 1);
    assert!(router.find("GET", "/x").is_err());
}

#[test]
fn router_clear() {
    let router: Router<usize> = Router::new();
    router.add_route("GET", "/a", 1).unwrap();
    router.add_route("POST", "/a", 2).unwrap();
    router.clear();

    assert!(router.is_empty());
    assert!(router.find("GET", "/a").is_err());
}

#[test]
fn router_macro_error() {
    let ret = router! {
        GET "/ok" => 1,
        GET "/bad/:" => 2
    };
    assert!(matches!(ret, Err(RouterError::MalformedPattern { .. })));
}

#[test]
fn router_concurrent() {
    let router: Arc<Router<usize>> = Arc::new(Router::new());
    router.add_route("GET", "/base/:id", 0).unwrap();

    let writers: Vec<_> = (1..=4)
        .map(|w| {
            let router = router.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    let pattern = format!("/w{}/r{}/:id", w, i);
                    router.add_route("GET", &pattern, w * 100 + i).unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let router = router.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let (h, params) = router.find("GET", "/base/abc").unwrap();
                    assert_eq!(h, 0);
                    assert_eq!(params.get("id"), Some("abc"));

                    let path = format!("/w1/r{}/x", i % 50);
                    match router.find("GET", &path) {
                        Ok((h, params)) => {
                            assert_eq!(h, 100 + i % 50);
                            assert_eq!(params.get("id"), Some("x"));
                        }
                        Err(e) => assert_eq!(e, DispatchError::NotFound),
                    }
                }
            })
        })
        .collect();

    for t in writers.into_iter().chain(readers) {
        t.join().unwrap();
    }

    assert_eq!(router.route_count("GET"), 201);
    assert_eq!(router.find("GET", "/w4/r49/z").unwrap().0, 449);
}
