//! Trailing debounce for window resize events.

use std::time::{Duration, Instant};

use super::nav::NavMenu;

pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Viewports wider than this are desktop layouts with no mobile menu
pub const DESKTOP_BREAKPOINT: u32 = 768;

/// Each trigger cancels the pending call and reschedules it `wait` later.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self { wait, deadline: None }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once, at the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Closes the mobile menu once resizing settles on a desktop width.
#[derive(Debug, Clone)]
pub struct ResizeHandler {
    debouncer: Debouncer,
    width: u32,
}

impl Default for ResizeHandler {
    fn default() -> Self {
        Self { debouncer: Debouncer::new(RESIZE_DEBOUNCE), width: 0 }
    }
}

impl ResizeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resize(&mut self, width: u32, now: Instant) {
        self.width = width;
        self.debouncer.trigger(now);
    }

    /// Runs the debounced handler if due. Returns whether it ran.
    pub fn tick(&mut self, now: Instant, nav: &mut NavMenu) -> bool {
        if !self.debouncer.poll(now) {
            return false;
        }
        if self.width > DESKTOP_BREAKPOINT {
            nav.close();
        }
        true
    }
}
