//! Percentage counter animation
//!
//! The counter climbs one percent per step from 0 toward the match
//! percentage, then snaps to the exact (possibly fractional) value. Each
//! run is a tokio task; starting a new run aborts the previous one so two
//! animations never write the same label.

use crate::view::format_percent;
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Labels shown at each step. Whole percents below `floor(percentage)`,
/// then the exact value as the last frame.
pub fn counter_frames(percentage: f64) -> impl Iterator<Item = String> {
    let whole = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0).floor() as u32
    } else {
        0
    };
    let last = format!("{}%", format_percent(percentage));
    (1..whole).map(|n| format!("{}%", n)).chain(std::iter::once(last))
}

#[derive(Debug)]
pub struct CounterAnimation {
    step: Duration,
    label: Arc<watch::Sender<String>>,
    task: Option<JoinHandle<()>>,
}

impl CounterAnimation {
    pub fn new(step: Duration) -> Self {
        let (sender, _) = watch::channel(String::new());
        Self {
            step,
            label: Arc::new(sender),
            task: None,
        }
    }

    /// Abort any running animation and count toward `percentage`.
    /// Must be called inside a tokio runtime.
    pub fn start(&mut self, percentage: f64) {
        self.cancel();
        self.label.send_replace("0%".to_string());

        let label = Arc::clone(&self.label);
        let step = self.step;
        debug!("Counter animation toward {}%", percentage);
        self.task = Some(tokio::spawn(async move {
            for frame in counter_frames(percentage) {
                tokio::time::sleep(step).await;
                label.send_replace(frame);
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the running animation, if any, to reach its last frame.
    pub async fn finish(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Text currently shown in `.percentage`.
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.label.subscribe()
    }
}

impl Drop for CounterAnimation {
    fn drop(&mut self) {
        self.cancel();
    }
}
