//! Property tests for resolution
//!
//! Option order independence, idempotence, and the tie-break rule.

use proptest::prelude::*;

use argroute_resolver::{EndpointCollection, RouteRegistry, resolve};

fn collection() -> EndpointCollection<usize> {
    let mut registry = RouteRegistry::new();
    for (i, pattern) in [
        "status",
        "deploy {env}",
        "deploy {env} --force,-f? --tag,-t {tag} --region {region?}",
        "deploy {env} --dry-run",
    ]
    .iter()
    .enumerate()
    {
        registry.register(pattern, i).unwrap();
    }
    registry.into_collection()
}

/// Option groups that can appear in any order after the positionals.
fn option_groups() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    let groups = vec![
        vec!["--force"],
        vec!["--tag", "v1"],
        vec!["--region", "eu"],
    ];
    Just(groups).prop_shuffle()
}

proptest! {
    #[test]
    fn option_order_does_not_change_the_match(groups in option_groups(), before in 0usize..=2) {
        let routes = collection();
        // Options may also come before the positional value.
        let mut args = vec!["deploy"];
        let (head, tail) = groups.split_at(before.min(groups.len()));
        for group in head {
            args.extend(group.iter().copied());
        }
        args.push("prod");
        for group in tail {
            args.extend(group.iter().copied());
        }

        let m = resolve(&args, &routes).unwrap();
        prop_assert_eq!(*m.handler(), 2);
        prop_assert_eq!(m.value("env"), Some("prod"));
        prop_assert_eq!(m.value("tag"), Some("v1"));
        prop_assert_eq!(m.value("region"), Some("eu"));
        prop_assert_eq!(m.value("force"), Some("true"));
    }

    #[test]
    fn resolution_is_idempotent(args in prop::collection::vec(
        prop::sample::select(vec!["deploy", "status", "prod", "--force", "-t", "v1", "--dry-run", "--", "x"]),
        0..7,
    )) {
        let routes = collection();
        let first = resolve(&args, &routes);
        let second = resolve(&args, &routes);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.endpoint.order, b.endpoint.order);
                prop_assert_eq!(a.values, b.values);
                prop_assert_eq!(a.bindings, b.bindings);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "results differ for {:?}", args),
        }
    }

    #[test]
    fn equal_scores_resolve_to_first_registered(names in prop::collection::hash_set("[a-z]{1,6}", 2..6)) {
        // Routes with identical shapes differ only by parameter name.
        let names: Vec<String> = names.into_iter().collect();
        let mut registry = RouteRegistry::new();
        for (i, name) in names.iter().enumerate() {
            registry.register(&format!("{{{name}}}"), i).unwrap();
        }
        let routes = registry.into_collection();
        let m = resolve(&["value"], &routes).unwrap();
        prop_assert_eq!(*m.handler(), 0);
        prop_assert_eq!(m.value(&names[0]), Some("value"));
    }
}

#[test]
fn tie_break_is_independent_of_sort_stability() {
    let mut registry = RouteRegistry::new();
    registry.register("{a}", "first").unwrap();
    registry.register("status", "literal").unwrap();
    registry.register("{b}", "second").unwrap();
    let routes = registry.into_collection();
    let orders: Vec<_> = routes.iter().map(|e| e.order).collect();
    assert_eq!(orders, vec![1, 0, 2]);
    assert_eq!(resolve(&["x"], &routes).unwrap().handler(), &"first");
}
