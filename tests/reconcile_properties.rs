use anyext::{
    ExtError, ExtensionRegistry, MemoryConfigStore, Plugin, RecordingRegistrar,
    RegistrationError, SettingsSurface,
};

fn registry() -> ExtensionRegistry<RecordingRegistrar> {
    ExtensionRegistry::new(RecordingRegistrar::new())
}

fn registered(registry: &ExtensionRegistry<RecordingRegistrar>) -> Vec<String> {
    registry.registered().iter().map(str::to_string).collect()
}

#[tokio::test]
async fn repeated_reconcile_is_a_no_op() {
    for raw in ["", "md", "a,b,c", " x , ,y,y ,", "MD,md,.md"] {
        let mut registry = registry();
        registry.reconcile(raw).await.unwrap();
        let before = registered(&registry);
        let calls = registry.registrar().call_count();

        assert!(registry.reconcile(raw).await.unwrap().is_empty());
        assert_eq!(registered(&registry), before);
        assert_eq!(registry.registrar().call_count(), calls);
    }
}

#[tokio::test]
async fn superset_reconcile_matches_direct_reconcile() {
    let cases = [("a", "a,b"), ("", "x,y"), ("b,a", "c,b,a,d"), ("m", "m")];

    for (first, second) in cases {
        let mut stepped = registry();
        stepped.reconcile(first).await.unwrap();
        stepped.reconcile(second).await.unwrap();

        let mut direct = registry();
        direct.reconcile(second).await.unwrap();

        assert_eq!(registered(&stepped), registered(&direct));
    }
}

#[tokio::test]
async fn dropping_a_token_never_shrinks_registration() {
    let mut registry = registry();
    registry.reconcile("a,b").await.unwrap();
    registry.reconcile("a").await.unwrap();

    assert_eq!(registered(&registry), vec!["a", "b"]);
}

#[tokio::test]
async fn each_extension_reaches_the_host_once() {
    let mut registry = registry();
    for raw in ["a", "a,b", "b", "c, a", "", "a,b,c,d", " d ,e,, "] {
        // RecordingRegistrar rejects repeats, so any double registration fails here
        registry.reconcile(raw).await.unwrap();
    }

    let mut handed_over: Vec<String> = registry
        .registrar()
        .batches()
        .iter()
        .flat_map(|batch| batch.extensions.clone())
        .collect();
    handed_over.sort();
    assert_eq!(handed_over, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn failed_host_call_leaves_state_untouched() {
    let mut registry = registry();
    registry.reconcile("md").await.unwrap();
    registry.registrar_mut().fail_next("renderer not ready");

    let err = registry.reconcile("md,x,y").await.unwrap_err();
    assert!(matches!(
        err,
        ExtError::Registration(RegistrationError::Rejected { .. })
    ));
    assert_eq!(registered(&registry), vec!["md"]);
    assert_eq!(registry.registrar().call_count(), 1);
}

#[tokio::test]
async fn settings_round_trip_through_restart() {
    let store = MemoryConfigStore::new();
    let mut plugin = Plugin::new(store, registry());
    plugin.on_load().await.unwrap();

    let mut surface = SettingsSurface::new(plugin);
    surface.edit(" rmd, mdx ,");
    surface.save().await.unwrap();

    // Simulated restart: same persisted data, fresh process state
    let plugin = surface.into_plugin();
    let raw = plugin.store().raw().await;
    assert_eq!(raw.as_deref(), Some(" rmd, mdx ,"));

    let mut restarted = Plugin::new(MemoryConfigStore::with_raw(raw.unwrap()), registry());
    assert_eq!(restarted.on_load().await.unwrap(), vec!["mdx", "rmd"]);
    assert_eq!(restarted.registry().registered_pretty(), "mdx, rmd");
    assert_eq!(restarted.settings().extensions_comma_delimited, " rmd, mdx ,");
}
