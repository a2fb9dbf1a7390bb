//! Animated impact counters for the home view

use std::time::{Duration, Instant};

/// How long a counter takes to reach its target
pub const COUNT_DURATION: Duration = Duration::from_millis(2000);

/// A single counter that eases from zero up to its target value.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: String,
    pub target: f64,
    pub suffix: String,
    started: Option<Instant>,
}

impl StatCounter {
    pub fn new(label: &str, target: f64, suffix: &str) -> Self {
        Self {
            label: label.to_string(),
            target,
            suffix: suffix.to_string(),
            started: None,
        }
    }

    /// Begin the count-up. Calling again restarts from zero.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    #[allow(dead_code)]
    pub fn is_done(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.duration_since(started) >= COUNT_DURATION)
    }

    /// Current displayed value. Zero before `start`, eased while counting,
    /// clamped at the target afterwards.
    pub fn value(&self, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let elapsed = now.duration_since(started);
        if elapsed >= COUNT_DURATION {
            return self.target;
        }
        let t = elapsed.as_secs_f32() / COUNT_DURATION.as_secs_f32();
        self.target * f64::from(simple_easing::cubic_out(t))
    }

    /// Rendered form, e.g. `1500+` or `25`.
    pub fn display(&self, now: Instant) -> String {
        format!("{}{}", self.value(now).round() as i64, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_before_started() {
        let counter = StatCounter::new("Lives Impacted", 1500.0, "+");
        assert_eq!(counter.value(Instant::now()), 0.0);
        assert!(!counter.is_started());
    }

    #[test]
    fn clamps_at_target_after_the_duration() {
        let mut counter = StatCounter::new("Lives Impacted", 1500.0, "+");
        let start = Instant::now();
        counter.start(start);
        let after = start + COUNT_DURATION + Duration::from_millis(500);
        assert_eq!(counter.value(after), 1500.0);
        assert!(counter.is_done(after));
    }

    #[test]
    fn eases_monotonically_towards_the_target() {
        let mut counter = StatCounter::new("Volunteers", 120.0, "");
        let start = Instant::now();
        counter.start(start);
        let quarter = counter.value(start + Duration::from_millis(500));
        let half = counter.value(start + Duration::from_millis(1000));
        assert!(quarter > 0.0);
        assert!(half > quarter);
        assert!(half < 120.0);
        // cubic-out front-loads the motion
        assert!(half > 60.0);
    }

    #[test]
    fn restart_rewinds_the_count() {
        let mut counter = StatCounter::new("Projects", 40.0, "");
        let start = Instant::now();
        counter.start(start);
        let later = start + COUNT_DURATION;
        assert_eq!(counter.value(later), 40.0);
        counter.start(later);
        assert_eq!(counter.value(later), 0.0);
    }

    #[test]
    fn display_rounds_and_appends_the_suffix() {
        let mut counter = StatCounter::new("Lives Impacted", 1500.0, "+");
        let start = Instant::now();
        counter.start(start);
        assert_eq!(counter.display(start + COUNT_DURATION), "1500+");
    }
}
