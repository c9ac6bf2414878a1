//! Deferred invocation.

use std::time::Duration;

use super::runtime;

/// Schedules `function(argument)` to run no sooner than `wait` from now.
///
/// The caller is never blocked. The call is spawned onto the current tokio
/// runtime when there is one, otherwise onto the shared timer runtime (see
/// [`runtime::handle`]). There is no handle to cancel it, and its result is
/// discarded.
///
/// A panic inside `function` is confined to the spawned task.
///
/// # Examples
///
/// ```rust
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use underbar::function::delay;
///
/// let (sender, receiver) = mpsc::channel();
/// delay(move |message: &str| sender.send(message.len()), Duration::from_millis(5), "ping");
///
/// assert_eq!(receiver.recv().unwrap(), 4);
/// ```
pub fn delay<A, R, F>(function: F, wait: Duration, argument: A)
where
    A: Send + 'static,
    F: FnOnce(A) -> R + Send + 'static,
{
    tracing::debug!(wait_ms = wait.as_millis(), "delay: scheduling deferred call");
    drop(runtime::handle().spawn(async move {
        tokio::time::sleep(wait).await;
        tracing::debug!("delay: running deferred call");
        function(argument);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_delay_waits_before_calling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        delay(
            move |step: usize| counter.fetch_add(step, Ordering::SeqCst),
            Duration::from_millis(100),
            1,
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(60)).await;
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_runs_each_scheduled_call_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        for wait in [30_u64, 10, 20] {
            let counter = Arc::clone(&calls);
            delay(
                move |(): ()| counter.fetch_add(1, Ordering::SeqCst),
                Duration::from_millis(wait),
                (),
            );
        }

        tokio::time::sleep(Duration::from_millis(31)).await;
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_delay_outside_runtime_uses_shared_runtime() {
        let (sender, receiver) = std::sync::mpsc::channel();
        delay(move |value: i32| sender.send(value * 2), Duration::ZERO, 21);
        assert_eq!(
            receiver.recv_timeout(Duration::from_secs(5)).unwrap(),
            42
        );
    }
}
