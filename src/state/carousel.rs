//! Home page carousel state
//!
//! Wraparound slide index plus a single auto-advance deadline. Manual
//! navigation restarts the deadline; it never stacks, because the state
//! holds exactly one `Instant`.

use std::time::{Duration, Instant};

/// Default auto-advance interval (5 seconds)
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// One carousel slide
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub caption: String,
}

impl Slide {
    pub fn new(title: &str, caption: &str) -> Self {
        Self {
            title: title.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Carousel state. Constructing with an empty slide list is a programming
/// error, not a runtime state.
#[derive(Debug)]
pub struct CarouselState {
    slides: Vec<Slide>,
    current: usize,
    interval: Duration,
    next_advance: Instant,
}

impl CarouselState {
    pub fn new(slides: Vec<Slide>) -> Self {
        debug_assert!(!slides.is_empty(), "carousel requires at least one slide");
        Self {
            slides,
            current: 0,
            interval: AUTO_ADVANCE_INTERVAL,
            next_advance: Instant::now() + AUTO_ADVANCE_INTERVAL,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.next_advance = Instant::now() + interval;
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Clamp with wraparound: one step below zero lands on the last slide,
    /// one step past the end lands on the first.
    pub fn move_to(&mut self, index: isize) {
        let count = self.slides.len() as isize;
        self.current = if index < 0 {
            (count - 1) as usize
        } else if index >= count {
            0
        } else {
            index as usize
        };
    }

    /// Advance manually and restart the auto-advance deadline.
    pub fn next(&mut self, now: Instant) {
        self.move_to(self.current as isize + 1);
        self.restart(now);
    }

    /// Step back manually and restart the auto-advance deadline.
    pub fn prev(&mut self, now: Instant) {
        self.move_to(self.current as isize - 1);
        self.restart(now);
    }

    /// Jump to an indicator's slide and restart the auto-advance deadline.
    pub fn select(&mut self, index: usize, now: Instant) {
        self.move_to(index as isize);
        self.restart(now);
    }

    /// Advance one slide when the deadline has passed, re-arming it.
    pub fn tick(&mut self, now: Instant) {
        if now >= self.next_advance {
            self.move_to(self.current as isize + 1);
            self.restart(now);
        }
    }

    fn restart(&mut self, now: Instant) {
        self.next_advance = now + self.interval;
    }
}
