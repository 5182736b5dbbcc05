//! Toast notifications with an explicit timed lifecycle
//!
//! A notification waits in a FIFO queue until a display slot is free, then
//! moves created -> shown -> hiding -> removed as `advance` observes time
//! passing. Both the show delay and the display time count from creation,
//! so with the defaults a toast shows at 100 ms, starts hiding at 3000 ms
//! and is gone at 3300 ms. Pushing a message identical to one still queued or visible is a
//! no-op that returns the existing id.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    config::NotificationConfig,
    models::{
        notification::NotificationView, Notification, NotificationLevel, NotificationPhase,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub show_delay: Duration,
    /// From creation until hiding starts
    pub display: Duration,
    pub hide: Duration,
}

impl From<&NotificationConfig> for NotificationTimings {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            show_delay: Duration::from_millis(config.show_delay_ms),
            display: Duration::from_millis(config.display_ms),
            hide: Duration::from_millis(config.hide_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Accepted(Uuid),
    Duplicate(Uuid),
}

impl PushOutcome {
    pub fn id(self) -> Uuid {
        match self {
            PushOutcome::Accepted(id) | PushOutcome::Duplicate(id) => id,
        }
    }
}

#[derive(Debug)]
pub struct NotificationCenter {
    timings: NotificationTimings,
    max_visible: usize,
    queue: VecDeque<Notification>,
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings, max_visible: usize) -> Self {
        Self {
            timings,
            max_visible: max_visible.max(1),
            queue: VecDeque::new(),
            active: Vec::new(),
        }
    }

    pub fn push(&mut self, message: &str, level: NotificationLevel, now: Instant) -> PushOutcome {
        if let Some(existing) = self
            .active
            .iter()
            .chain(self.queue.iter())
            .find(|n| n.duplicates(message, level))
        {
            return PushOutcome::Duplicate(existing.id);
        }

        let notification = Notification::new(message.to_string(), level, now);
        let id = notification.id;
        self.queue.push_back(notification);
        self.promote(now);
        PushOutcome::Accepted(id)
    }

    /// Apply every transition due at `now`; returns how many happened
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut transitions = 0;
        for notification in &mut self.active {
            transitions += step(notification, &self.timings, now);
        }
        self.active.retain(|n| n.phase != NotificationPhase::Removed);
        transitions + self.promote(now)
    }

    /// Move queued notifications into free display slots
    fn promote(&mut self, now: Instant) -> usize {
        let mut promoted = 0;
        while self.active.len() < self.max_visible {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            next.phase = NotificationPhase::Created;
            next.since = now;
            self.active.push(next);
            promoted += 1;
        }
        promoted
    }

    /// Notifications currently in the document, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn queued(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty() && self.queue.is_empty()
    }

    pub fn views(&self) -> Vec<NotificationView> {
        self.active
            .iter()
            .chain(self.queue.iter())
            .map(NotificationView::from)
            .collect()
    }
}

/// Walk one notification through every phase boundary already passed
fn step(notification: &mut Notification, timings: &NotificationTimings, now: Instant) -> usize {
    let mut transitions = 0;
    loop {
        let (wait, next) = match notification.phase {
            NotificationPhase::Created => (timings.show_delay, NotificationPhase::Shown),
            NotificationPhase::Shown => (
                timings.display.saturating_sub(timings.show_delay),
                NotificationPhase::Hiding,
            ),
            NotificationPhase::Hiding => (timings.hide, NotificationPhase::Removed),
            NotificationPhase::Queued | NotificationPhase::Removed => return transitions,
        };
        let due = notification.since + wait;
        if now < due {
            return transitions;
        }
        notification.phase = next;
        notification.since = due;
        transitions += 1;
    }
}

#[derive(Clone)]
pub struct NotificationService {
    center: Arc<Mutex<NotificationCenter>>,
}

impl NotificationService {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            center: Arc::new(Mutex::new(NotificationCenter::new(
                NotificationTimings::from(config),
                config.max_visible,
            ))),
        }
    }

    pub fn notify(&self, message: &str, level: NotificationLevel) -> PushOutcome {
        let outcome = self.lock().push(message, level, Instant::now());
        tracing::debug!(?outcome, level = level.as_str(), "Notification pushed");
        outcome
    }

    pub fn tick(&self) -> usize {
        self.lock().advance(Instant::now())
    }

    pub fn views(&self) -> Vec<NotificationView> {
        self.lock().views()
    }

    pub fn with_center<T>(&self, f: impl FnOnce(&NotificationCenter) -> T) -> T {
        f(&*self.lock())
    }

    /// Drive the lifecycle from a tokio interval
    pub fn spawn_ticker(&self, period: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let transitions = service.tick();
                if transitions > 0 {
                    tracing::trace!(transitions, "Notification lifecycle advanced");
                }
            }
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NotificationCenter> {
        self.center.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
