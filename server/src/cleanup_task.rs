use std::time::Duration;

use engine::log;

use crate::session::SessionManager;

/// Periodically drops game sessions nobody has touched for the inactivity
/// timeout, so abandoned and finished games do not pile up in memory.
pub struct CleanupTask {
    session_manager: SessionManager,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(
        session_manager: SessionManager,
        check_interval: Duration,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            session_manager,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;
            let evicted = self
                .session_manager
                .evict_inactive(self.inactivity_timeout)
                .await;
            if evicted > 0 {
                log!("Cleaned up {} inactive game sessions", evicted);
            }
        }
    }
}
