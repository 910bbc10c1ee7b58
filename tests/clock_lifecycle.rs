//! End-to-end lifecycle tests: sampler → display state → readers.

use chrono::{DateTime, FixedOffset, TimeZone};
use kinetic_clock::{
    Clock, DisplayState, FixedClock, FixedTimeZone, SharedDisplay, SnapshotFormatter,
    TimeSampler, DEFAULT_TICK_PERIOD,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn instant(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(-5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 7, h, m, s)
        .single()
        .unwrap()
}

/// Clock that moves with tokio's paused time
struct SteppingClock {
    origin: DateTime<FixedOffset>,
    started: tokio::time::Instant,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.origin + chrono::Duration::from_std(self.started.elapsed()).unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn test_readers_never_see_placeholders_after_mount() {
    let formatter = SnapshotFormatter::new(
        Arc::new(SteppingClock {
            origin: instant(23, 59, 57),
            started: tokio::time::Instant::now(),
        }),
        Arc::new(FixedTimeZone::new("America/New_York")),
    );
    let sampler = TimeSampler::with_default_period(formatter);
    let display = SharedDisplay::new();

    // A reader that records every state it observes
    let observed: Arc<Mutex<Vec<DisplayState>>> = Arc::new(Mutex::new(Vec::new()));
    let mut rx = display.subscribe();
    observed.lock().unwrap().push(rx.borrow_and_update().clone());
    let sink = Arc::clone(&observed);
    let reader = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            sink.lock().unwrap().push(rx.borrow_and_update().clone());
        }
    });

    let writer = display.clone();
    let mut handle = sampler.start(move |snapshot| writer.publish(snapshot));
    tokio::time::sleep(Duration::from_millis(4500)).await;
    handle.cancel();
    drop(display);
    reader.await.unwrap();

    let states = observed.lock().unwrap().clone();
    assert!(!states[0].is_mounted());
    assert_eq!(states[0].snapshot().hours(), "--");
    assert_eq!(states[0].snapshot().date_line(), "Loading…");

    let mounted = &states[1..];
    assert_eq!(mounted.len(), 5);
    assert!(mounted.iter().all(|s| s.is_mounted()));
    assert!(mounted.iter().all(|s| s.snapshot().hours() != "--"));

    let faces: Vec<String> = mounted.iter().map(|s| s.snapshot().clock_face(':')).collect();
    assert_eq!(
        faces,
        vec!["23:59:57", "23:59:58", "23:59:59", "00:00:00", "00:00:01"]
    );

    // Day rolls over together with the time, never split across reads
    assert_eq!(mounted[2].snapshot().date_line(), "Thursday, March 7, 2024");
    assert_eq!(mounted[3].snapshot().date_line(), "Friday, March 8, 2024");
    assert_eq!(mounted[3].snapshot().time_zone(), "America/New_York");
}

#[tokio::test(start_paused = true)]
async fn test_start_then_cancel_delivers_one_tick() {
    let clock = FixedClock::new(instant(6, 5, 9));
    let formatter = SnapshotFormatter::new(
        Arc::new(clock),
        Arc::new(FixedTimeZone::unresolved()),
    );
    let sampler = TimeSampler::new(formatter, DEFAULT_TICK_PERIOD);
    let display = SharedDisplay::new();

    let writer = display.clone();
    let mut handle = sampler.start(move |snapshot| writer.publish(snapshot));
    handle.cancel();
    handle.cancel();

    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(handle.tick_count(), 1);
    let state = display.current();
    assert!(state.is_mounted());
    assert_eq!(state.snapshot().clock_face(':'), "06:05:09");
    assert_eq!(state.snapshot().time_zone(), "");
}
