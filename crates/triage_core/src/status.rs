use std::time::{Duration, Instant};

/// Single transient message that expires after a fixed time or when replaced.
#[derive(Debug, Clone)]
pub struct StatusLine {
    ttl: Duration,
    message: Option<(String, Instant)>,
}

impl StatusLine {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, message: None }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::info!("{message}");
        self.message = Some((message, now));
    }

    /// The message, if it has not expired at `now`.
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|(_, at)| now.saturating_duration_since(*at) < self.ttl)
            .map(|(msg, _)| msg.as_str())
    }

    /// Time until the visible message expires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let (_, at) = self.message.as_ref()?;
        self.ttl
            .checked_sub(now.saturating_duration_since(*at))
            .filter(|d| !d.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expires_after_ttl() {
        let t0 = Instant::now();
        let mut status = StatusLine::new(Duration::from_secs(5));
        assert_eq!(status.current(t0), None);

        status.show("End of images", t0);
        assert_eq!(status.current(t0 + Duration::from_secs(4)), Some("End of images"));
        assert_eq!(
            status.remaining(t0 + Duration::from_secs(4)),
            Some(Duration::from_secs(1))
        );
        assert_eq!(status.current(t0 + Duration::from_secs(5)), None);
        assert_eq!(status.remaining(t0 + Duration::from_secs(6)), None);
    }

    #[test]
    fn new_message_replaces_and_restarts() {
        let t0 = Instant::now();
        let mut status = StatusLine::new(Duration::from_secs(5));
        status.show("first", t0);
        status.show("second", t0 + Duration::from_secs(3));
        assert_eq!(status.current(t0 + Duration::from_secs(7)), Some("second"));
    }
}
