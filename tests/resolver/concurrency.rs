//! Integration tests for sharing a collection across threads

use std::sync::Arc;
use std::thread;

use argroute_resolver::{EndpointCollection, RouteRegistry, resolve};

fn shared_routes() -> Arc<EndpointCollection<String>> {
    let mut registry = RouteRegistry::new();
    registry.register("status", "status".to_string()).unwrap();
    registry.register("deploy {env} --force?", "deploy".to_string()).unwrap();
    registry.register("exec {cmd} -- {*args}", "exec".to_string()).unwrap();
    Arc::new(registry.into_collection())
}

#[test]
fn concurrent_resolution_matches_sequential() {
    let routes = shared_routes();
    let cases: Vec<(Vec<&'static str>, &'static str)> = vec![
        (vec!["status"], "status"),
        (vec!["deploy", "prod", "--force"], "deploy"),
        (vec!["exec", "ls", "--", "-la"], "exec"),
    ];

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let routes = Arc::clone(&routes);
            let cases = cases.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let (args, expected) = &cases[(t + i) % cases.len()];
                    let m = resolve(args, &*routes).unwrap();
                    assert_eq!(m.handler(), *expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
