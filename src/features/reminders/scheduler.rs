//! Reminder scheduling
//!
//! Each reminder is an independent spawned task: sleep for the delay, invoke
//! the delivery future exactly once, drop it. Delivery failures are logged
//! once and swallowed; there is no retry, no cancellation handle and no
//! persistence, so a process restart loses all pending reminders.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.4.0
//!
//! ## Changelog
//! - 1.1.0: Track in-flight count for observability
//! - 1.0.0: Initial implementation

use chrono::{Duration as ChronoDuration, NaiveDateTime, NaiveTime};
use log::{info, warn};
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::errors::DeliveryError;

/// A resolved reminder time: how long to wait and the absolute target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpec {
    pub delay: Duration,
    pub target: NaiveDateTime,
}

/// Why a time spec failed to parse. Nothing is scheduled when this is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSpecError {
    Empty,
    Malformed,
    OutOfRange,
}

impl fmt::Display for TimeSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSpecError::Empty => write!(f, "empty time input"),
            TimeSpecError::Malformed => write!(f, "time is neither minutes nor HH:MM"),
            TimeSpecError::OutOfRange => write!(f, "hour or minute out of range"),
        }
    }
}

impl Error for TimeSpecError {}

/// Resolve a user-supplied time into a delay from `now`.
///
/// Two forms are accepted:
/// - a bare non-negative integer, interpreted as minutes from now;
/// - `HH:MM`, today's wall clock, rolled to tomorrow when already passed
///   (the resolved delay is never negative).
pub fn parse_time_spec(input: &str, now: NaiveDateTime) -> Result<TimeSpec, TimeSpecError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TimeSpecError::Empty);
    }

    let target = if let Some((hours, minutes)) = input.split_once(':') {
        let hour: u32 = hours.parse().map_err(|_| TimeSpecError::Malformed)?;
        let minute: u32 = minutes.parse().map_err(|_| TimeSpecError::Malformed)?;
        let wall = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeSpecError::OutOfRange)?;

        let same_day = NaiveDateTime::new(now.date(), wall);
        if same_day <= now {
            same_day + ChronoDuration::days(1)
        } else {
            same_day
        }
    } else {
        let minutes: i64 = input.parse().map_err(|_| TimeSpecError::Malformed)?;
        if minutes < 0 {
            return Err(TimeSpecError::OutOfRange);
        }
        now + ChronoDuration::minutes(minutes)
    };

    let delay = (target - now).to_std().map_err(|_| TimeSpecError::OutOfRange)?;
    Ok(TimeSpec { delay, target })
}

/// Spawns one independent task per reminder.
///
/// Handlers only get a schedule-with-delay capability; the concurrency
/// primitive stays in here so the scheduler could later be swapped for a
/// durable one without touching any handler.
#[derive(Clone, Default)]
pub struct ReminderScheduler {
    in_flight: Arc<AtomicUsize>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        ReminderScheduler {
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Schedule `deliver` to run once after `delay`. Returns immediately.
    ///
    /// A failed delivery is logged exactly once and dropped; it is never
    /// retried and never surfaced to the user.
    pub fn schedule<F>(&self, delay: Duration, deliver: F)
    where
        F: Future<Output = Result<(), DeliveryError>> + Send + 'static,
    {
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = deliver.await {
                warn!("dropping failed reminder: {err}");
            }
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });

        info!("reminder scheduled in {}s", delay.as_secs());
    }

    /// Number of reminders that have not fired yet.
    pub fn pending(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::mpsc;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_bare_minutes() {
        let spec = parse_time_spec("25", at(10, 0)).unwrap();
        assert_eq!(spec.delay, Duration::from_secs(1500));
        assert_eq!(spec.target, at(10, 25));
        assert_eq!(spec.target.format("%H:%M").to_string(), "10:25");
    }

    #[test]
    fn test_wall_clock_later_today() {
        let spec = parse_time_spec("18:30", at(10, 0)).unwrap();
        assert_eq!(spec.target, at(18, 30));
        assert_eq!(spec.delay, Duration::from_secs(8 * 3600 + 30 * 60));
    }

    #[test]
    fn test_wall_clock_already_passed_rolls_to_tomorrow() {
        let spec = parse_time_spec("09:00", at(10, 0)).unwrap();
        assert_eq!(spec.delay, Duration::from_secs(23 * 3600));
        assert_eq!(
            spec.target,
            NaiveDate::from_ymd_opt(2025, 5, 11)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_exact_now_rolls_to_tomorrow() {
        // "never in the past" includes "not right now"
        let spec = parse_time_spec("10:00", at(10, 0)).unwrap();
        assert_eq!(spec.delay, Duration::from_secs(24 * 3600));
    }

    #[test]
    fn test_malformed_inputs_rejected() {
        assert_eq!(
            parse_time_spec("tomorrow", at(10, 0)),
            Err(TimeSpecError::Malformed)
        );
        assert_eq!(parse_time_spec("", at(10, 0)), Err(TimeSpecError::Empty));
        assert_eq!(
            parse_time_spec("1h30m", at(10, 0)),
            Err(TimeSpecError::Malformed)
        );
        assert_eq!(
            parse_time_spec("12:xx", at(10, 0)),
            Err(TimeSpecError::Malformed)
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            parse_time_spec("24:00", at(10, 0)),
            Err(TimeSpecError::OutOfRange)
        );
        assert_eq!(
            parse_time_spec("10:60", at(10, 0)),
            Err(TimeSpecError::OutOfRange)
        );
        assert_eq!(
            parse_time_spec("-5", at(10, 0)),
            Err(TimeSpecError::OutOfRange)
        );
    }

    #[tokio::test]
    async fn test_delivery_fires_exactly_once() {
        let scheduler = ReminderScheduler::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        scheduler.schedule(Duration::ZERO, async move {
            tx.send("fired").expect("receiver alive");
            Ok(())
        });

        assert_eq!(rx.recv().await, Some("fired"));
        // Sender dropped after the single send, so the channel closes.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_failed_delivery_is_swallowed() {
        let scheduler = ReminderScheduler::new();
        let attempts = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&attempts);
        scheduler.schedule(Duration::ZERO, async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(DeliveryError::from(anyhow::anyhow!("chat unreachable")))
        });

        while scheduler.pending() > 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        // One attempt, no retry
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_overlapping_reminders_are_independent() {
        let scheduler = ReminderScheduler::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        for i in 0..5 {
            let tx = tx.clone();
            scheduler.schedule(Duration::ZERO, async move {
                tx.send(i).expect("receiver alive");
                Ok(())
            });
        }
        drop(tx);

        let mut seen = Vec::new();
        while let Some(i) = rx.recv().await {
            seen.push(i);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
}
