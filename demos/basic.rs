use chrono::Local;
use spindle::{is_main_thread, IntervalTimer, TimerHandle};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn now() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

#[spindle::main]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spindle_runtime=debug")),
        )
        .with_thread_names(true)
        .init();

    println!("[{}] main thread registered: {}", now(), is_main_thread());

    // One-shot: fires once after 500ms
    let once = IntervalTimer::new(Duration::from_millis(500), false, || {
        println!("[{}] one-shot fired (main thread? {})", now(), is_main_thread());
    })?;
    once.wait();

    // Repeating: every 200ms, cancels itself on the 5th tick
    let ticks = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&ticks);
    let ticker = IntervalTimer::builder(Duration::from_millis(200))
        .repeats(true)
        .name("ticker")
        .spawn_with_handle(move |handle: &TimerHandle| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            println!("[{}] tick #{}", now(), n);
            if n == 5 {
                handle.cancel();
            }
        })?;
    ticker.wait();

    // Repeating, then asked to fire once more and stop
    let beat = IntervalTimer::new(Duration::from_millis(300), true, || {
        println!("[{}] heartbeat", now());
    })?;
    std::thread::sleep(Duration::from_millis(1000));
    println!("[{}] unset_repeats: one more heartbeat, then stop", now());
    beat.unset_repeats();
    beat.wait();

    // A one-hour timer dropped right away does not hold up shutdown
    let idle = IntervalTimer::new(Duration::from_secs(3600), true, || unreachable!())?;
    drop(idle);

    println!("[{}] done after {} ticks", now(), ticks.load(Ordering::SeqCst));
    Ok(())
}
