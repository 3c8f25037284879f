use chrono::Local;
use spindle::{load_toml_config, TimerBuilder};
use std::time::Duration;

#[spindle::main]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("spindle_runtime=debug"))
        .init();

    // Override with e.g. APP_APP_HEARTBEAT=250ms
    let config = load_toml_config("config/application.toml")?;

    let heartbeat = TimerBuilder::from_config(&config, "timers.heartbeat")?.spawn(|| {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        println!("[{}] heartbeat", now);
    })?;

    let reminder = TimerBuilder::from_config(&config, "timers.reminder")?.spawn(|| {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        println!("[{}] reminder (one-shot)", now);
    })?;

    println!(
        "heartbeat every {:?}, reminder after {:?}",
        heartbeat.interval(),
        reminder.interval()
    );

    reminder.wait();
    std::thread::sleep(Duration::from_secs(3));

    // Dropping cancels the heartbeat and joins its worker
    drop(heartbeat);
    println!("stopped");
    Ok(())
}
