use infinitude::Infinitude;

/// Run with: cargo test --test integration -- --ignored
/// Requires a reachable Infinitude gateway, e.g.:
///   docker run -p 3000:3000 nebulous/infinitude
/// Set INFINITUDE_HOST to point somewhere other than 127.0.0.1.
#[tokio::test]
#[ignore]
async fn connect_update_live_gateway() {
    tracing_subscriber::fmt::init();

    let host = std::env::var("INFINITUDE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let mut client = Infinitude::builder(host).build();
    client.connect().await.expect("connect failed");

    let system = client.system();
    println!(
        "system: {:?} {:?} serial {:?} firmware {:?}",
        system.brand(),
        system.model(),
        system.serial(),
        system.firmware()
    );
    assert!(
        !client.zones().is_empty(),
        "should discover at least one zone"
    );

    client.update().await.expect("update failed");
    for zone in client.zones() {
        println!(
            "zone {} ({:?}): {:?}, activity {:?}, scheduled {:?}, next {:?} at {:?}",
            zone.id(),
            zone.name(),
            zone.temperature_current(),
            zone.activity_current(),
            zone.activity_scheduled(),
            zone.activity_next(),
            zone.activity_next_start()
        );
    }
}
