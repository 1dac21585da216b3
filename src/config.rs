//! Game configuration.

use std::time::Duration;

/// Settings shared by every session a registry creates.
///
/// ```
/// use draw_poker::config::GameConfig;
/// use std::time::Duration;
///
/// let cfg = GameConfig::default()
///     .with_seed(7)
///     .with_session_ttl(Duration::from_secs(60));
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for session ids and deck shuffles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Idle time after which [`SessionRegistry::expire`](crate::session::SessionRegistry::expire)
    /// drops a session.
    pub session_ttl: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: None, session_ttl: Self::DEFAULT_SESSION_TTL }
    }
}

impl GameConfig {
    pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}
