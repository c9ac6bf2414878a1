#![cfg(feature = "function")]
//! Scenario tests for the function decorators.

use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use underbar::error::PoisonedError;
use underbar::function::{Memoize, Once, Throttle, delay, memoize, once, throttle};

/// Routes decorator events to the test output; `RUST_LOG=underbar=trace`
/// shows every cache hit and dropped call.
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

// =============================================================================
// once
// =============================================================================

#[rstest]
fn test_once_called_three_times_invokes_once() {
    init_tracing();
    let invocations = Cell::new(0);
    let create = once(|name: &str| {
        invocations.set(invocations.get() + 1);
        format!("instance:{name}")
    });

    assert_eq!(create("first"), "instance:first");
    assert_eq!(create("second"), "instance:first");
    assert_eq!(create("third"), "instance:first");
    assert_eq!(invocations.get(), 1);
}

#[rstest]
fn test_once_try_call_after_panic_reports_poison() {
    let wrapper: Once<u8, u8, _> = Once::new(|value: u8| {
        assert!(value > 0, "zero rejected");
        value
    });
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| wrapper.call(0)));
    assert!(outcome.is_err());
    assert_eq!(wrapper.try_call(1), Err(PoisonedError { decorator: "once" }));
}

// =============================================================================
// memoize
// =============================================================================

#[rstest]
fn test_memoize_serves_repeats_from_cache() {
    let calls = Cell::new(0);
    let slow_square = memoize(|value: u32| {
        calls.set(calls.get() + 1);
        value * value
    });

    let results: Vec<u32> = [3, 4, 3, 4, 3].into_iter().map(&slow_square).collect();
    assert_eq!(results, vec![9, 16, 9, 16, 9]);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_memoize_wrappers_do_not_share_caches() {
    let calls = Cell::new(0);
    let compute = |value: i32| {
        calls.set(calls.get() + 1);
        value
    };
    let first = Memoize::new(compute);
    let second = Memoize::new(compute);

    first.call(1);
    second.call(1);
    assert_eq!(calls.get(), 2);
    assert_eq!((first.cached_len(), second.cached_len()), (1, 1));
}

#[rstest]
fn test_memoize_panic_leaves_cache_untouched() {
    let wrapper = Memoize::new(|value: i32| {
        assert!(value >= 0, "negative");
        value
    });
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| wrapper.call(-1)));
    assert!(outcome.is_err());
    assert_eq!(wrapper.cached_len(), 0);
    assert_eq!(wrapper.call(2), 2);
}

// =============================================================================
// throttle
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_throttle_five_synchronous_calls_invoke_once() {
    init_tracing();
    let invocations = RefCell::new(Vec::new());
    let record = throttle(
        |value: i32| invocations.borrow_mut().push(value),
        Duration::from_millis(100),
    );

    for value in 1..=5 {
        record(value);
    }
    assert_eq!(*invocations.borrow(), vec![1]);

    tokio::time::sleep(Duration::from_millis(100)).await;
    record(6);
    assert_eq!(*invocations.borrow(), vec![1, 6]);
}

#[rstest]
fn test_throttle_wrappers_cool_independently() {
    let calls = Cell::new(0);
    let count = |(): ()| {
        calls.set(calls.get() + 1);
        calls.get()
    };
    let first = throttle(count, Duration::from_secs(60));
    let second = throttle(count, Duration::from_secs(60));

    assert_eq!(first(()), Some(1));
    assert_eq!(second(()), Some(2));
    assert_eq!(first(()), None);
    assert_eq!(second(()), None);
    assert_eq!(calls.get(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_never_makes_a_trailing_call() {
    let invocations = Cell::new(0);
    let wrapper = Throttle::new(
        |(): ()| invocations.set(invocations.get() + 1),
        Duration::from_millis(50),
    );

    wrapper.call(());
    wrapper.call(());
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(invocations.get(), 1);
    assert!(!wrapper.is_cooling());
}

// =============================================================================
// delay
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_delay_does_not_block_caller() {
    init_tracing();
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let deferred = Arc::clone(&order);

    delay(
        move |label: &'static str| {
            if let Ok(mut order) = deferred.lock() {
                order.push(label);
            }
        },
        Duration::from_millis(20),
        "deferred",
    );
    if let Ok(mut order) = order.lock() {
        order.push("caller");
    }

    tokio::time::sleep(Duration::from_millis(25)).await;
    tokio::task::yield_now().await;
    assert_eq!(*order.lock().unwrap(), vec!["caller", "deferred"]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_runs_every_scheduled_call() {
    let hits = Arc::new(AtomicUsize::new(0));
    for _ in 0..3 {
        let counter = Arc::clone(&hits);
        delay(
            move |(): ()| counter.fetch_add(1, Ordering::SeqCst),
            Duration::from_millis(10),
            (),
        );
    }

    tokio::time::sleep(Duration::from_millis(11)).await;
    tokio::task::yield_now().await;
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}
