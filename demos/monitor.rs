use std::env;
use std::time::Duration;

use infinitude::Infinitude;

#[tokio::main]
async fn main() -> infinitude::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let host = args.get(1).expect("usage: monitor <host> [port]").clone();
    let port: u16 = args.get(2).and_then(|p| p.parse().ok()).unwrap_or(3000);

    let mut client = Infinitude::builder(&host).port(port).build();
    println!("Connecting to {host}:{port}...");
    client.connect().await?;

    {
        let system = client.system();
        println!(
            "Connected: {} {} (serial {}, firmware {})",
            system.brand().unwrap_or("?"),
            system.model().unwrap_or("?"),
            system.serial().unwrap_or("?"),
            system.firmware().unwrap_or("?"),
        );
    }

    loop {
        {
            let system = client.system();
            println!(
                "mode: {:?} | outdoor: {:?} | gateway time: {}",
                system.hvac_mode(),
                system.temperature_outside(),
                system.local_time(),
            );
            for zone in client.zones() {
                println!(
                    "[{}] {:?} | activity: {:?} | scheduled: {:?} | next: {:?} at {:?} | fan: {:?} | hold: {:?}",
                    zone.name().unwrap_or("?"),
                    zone.temperature_current(),
                    zone.activity_current(),
                    zone.activity_scheduled(),
                    zone.activity_next(),
                    zone.activity_next_start(),
                    zone.fan_mode(),
                    zone.hold_mode(),
                );
            }
        }

        tokio::time::sleep(Duration::from_secs(15)).await;
        if let Err(e) = client.update().await {
            eprintln!("Update error: {e}");
        }
    }
}
