use std::time::Duration;

use crate::playback::{BusyPolicy, PlaybackConfig, Player};

pub struct PlayerBuilder {
    step_delay: Option<Duration>,
    busy_policy: BusyPolicy,
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self {
            step_delay: None,
            busy_policy: BusyPolicy::default(),
        }
    }
    /// Speed in milliseconds per step.
    pub fn with_speed_ms(self, ms: u64) -> Self {
        self.with_step_delay(Duration::from_millis(ms))
    }
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = Some(delay);
        self
    }
    pub fn with_busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.busy_policy = policy;
        self
    }
    pub fn config(&self) -> PlaybackConfig {
        let defaults = PlaybackConfig::default();
        PlaybackConfig {
            step_delay: self.step_delay.unwrap_or(defaults.step_delay),
            busy_policy: self.busy_policy,
        }
    }
    pub fn build(self) -> Player {
        Player::new(self.config())
    }
}
