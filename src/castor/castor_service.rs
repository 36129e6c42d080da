use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, TimeDelta, Utc};

use crate::castor::CastorConfig;

/// What the operator layer needs from the analytics service.
///
/// Implementations must be safe for concurrent reads: several queries may be
/// compiled at the same time against one service handle.
pub trait CastorService: Send + Sync {
    /// Non-blocking status query; no network round trip.
    fn is_alive(&self) -> bool;

    fn config(&self) -> &CastorConfig;
}

/// Service handle whose liveness follows worker heartbeats: it is alive while
/// the last heartbeat is younger than `heartbeat_window_secs`.
#[derive(Debug)]
pub struct HeartbeatCastorService {
    config: CastorConfig,
    last_heartbeat: RwLock<Option<DateTime<Utc>>>,
}

impl HeartbeatCastorService {
    pub fn new(config: CastorConfig) -> Self {
        Self { config, last_heartbeat: RwLock::new(None) }
    }

    pub fn heartbeat(&self) {
        self.heartbeat_at(Utc::now());
    }

    pub fn heartbeat_at(&self, at: DateTime<Utc>) {
        let mut last = self.last_heartbeat.write().unwrap_or_else(PoisonError::into_inner);
        // a late, out-of-order report must not move liveness backwards
        if !matches!(*last, Some(prev) if prev >= at) {
            *last = Some(at);
        }
    }

    pub fn last_heartbeat(&self) -> Option<DateTime<Utc>> {
        *self.last_heartbeat.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_alive_at(&self, now: DateTime<Utc>) -> bool {
        match self.last_heartbeat() {
            Some(last) => now.signed_duration_since(last) <= self.window(),
            None => false,
        }
    }

    fn window(&self) -> TimeDelta {
        i64::try_from(self.config.heartbeat_window_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}

impl CastorService for HeartbeatCastorService {
    fn is_alive(&self) -> bool {
        self.is_alive_at(Utc::now())
    }

    fn config(&self) -> &CastorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(window: u64) -> HeartbeatCastorService {
        let mut config = CastorConfig::enabled();
        config.heartbeat_window_secs = window;
        HeartbeatCastorService::new(config)
    }

    #[test]
    fn never_alive_without_heartbeat() {
        let s = service(30);
        assert!(s.last_heartbeat().is_none());
        assert!(!s.is_alive());
    }

    #[test]
    fn alive_inside_window_and_expires_after() {
        let s = service(30);
        let t0 = Utc::now();
        s.heartbeat_at(t0);

        assert!(s.is_alive_at(t0 + TimeDelta::seconds(10)));
        assert!(s.is_alive_at(t0 + TimeDelta::seconds(30)));
        assert!(!s.is_alive_at(t0 + TimeDelta::seconds(31)));
    }

    #[test]
    fn heartbeat_marks_alive_now() {
        let s = service(30);
        s.heartbeat();
        assert!(s.is_alive());
    }

    #[test]
    fn stale_heartbeat_does_not_rewind() {
        let s = service(30);
        let t0 = Utc::now();
        s.heartbeat_at(t0);
        s.heartbeat_at(t0 - TimeDelta::seconds(60));
        assert_eq!(s.last_heartbeat(), Some(t0));
    }
}
