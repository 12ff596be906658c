//! Property-based tests for routing guarantees

use proptest::prelude::*;
use std::sync::Arc;
use tfctl::catalog::Catalog;
use tfctl::router::ArgumentRouter;

fn router() -> ArgumentRouter {
    ArgumentRouter::new(Arc::new(Catalog::default().registry()))
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,8}",
        Just("teams".to_string()),
        Just("runs".to_string()),
        Just("state".to_string()),
        Just("outputs".to_string()),
        Just("apply".to_string()),
        Just("create".to_string()),
        Just("list".to_string()),
        Just("-h".to_string()),
        Just("-json".to_string()),
        Just("workspace".to_string()),
    ]
}

proptest! {
    #[test]
    fn translate_is_deterministic(args in prop::collection::vec(token(), 0..6)) {
        let router = router();
        prop_assert_eq!(router.translate(&args), router.translate(&args));
    }

    #[test]
    fn translating_a_translation_is_a_noop(args in prop::collection::vec(token(), 0..6)) {
        let router = router();
        let once = router.translate(&args);
        prop_assert_eq!(router.translate(&once), once.clone());
    }

    #[test]
    fn rewrites_start_with_a_registered_root(args in prop::collection::vec(token(), 1..6)) {
        let router = router();
        let registry = Catalog::default().registry();
        let routed = router.translate(&args);
        if routed != args {
            prop_assert!(registry.has_root(&routed[0]), "{:?} -> {:?}", args, routed);
        }
    }

    #[test]
    fn flag_first_vectors_pass_through(rest in prop::collection::vec(token(), 0..5)) {
        let mut args = vec!["-version".to_string()];
        args.extend(rest);
        prop_assert_eq!(router().translate(&args), args.clone());
    }

    #[test]
    fn tokens_are_never_reordered(flags in prop::collection::vec("-[a-z]{1,5}=[a-z0-9]{1,5}", 0..4)) {
        let mut args = vec!["acme".to_string(), "prod".to_string(), "runs".to_string()];
        args.extend(flags.iter().cloned());
        let routed = router().translate(&args);
        prop_assert_eq!(&routed[routed.len() - flags.len()..], flags.as_slice());
    }
}

fn positional() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,8}",
        Just("teams".to_string()),
        Just("runs".to_string()),
        Just("state".to_string()),
        Just("apply".to_string()),
    ]
}

proptest! {
    #[test]
    fn help_marker_position_among_positionals_is_irrelevant(
        path in prop::collection::vec(positional(), 0..4),
        index in any::<prop::sample::Index>(),
    ) {
        let router = router();
        let mut trailing = vec!["acme".to_string()];
        trailing.extend(path.iter().cloned());
        let mut lifted = trailing.clone();
        trailing.push("-h".to_string());
        lifted.insert(1 + index.index(path.len() + 1), "-h".to_string());
        prop_assert_eq!(router.route(&lifted), router.route(&trailing));
    }
}
