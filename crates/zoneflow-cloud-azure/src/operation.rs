//! Polling for long-running ARM operations
//!
//! ARM acknowledges zone and resource-group mutations before they finish.
//! The handles here poll the resource itself until it reaches a terminal
//! state, the way the SDK pollers do: create waits for
//! `properties.provisioningState == "Succeeded"`, delete waits for the
//! resource to disappear.

use crate::arm::ArmClient;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use zoneflow_cloud::{CloudError, Operation};

/// Backoff schedule for status polls
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Maximum number of polls before giving up
    pub max_attempts: u32,

    /// Delay after the first poll, in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound for a single delay, in milliseconds
    pub max_delay_ms: u64,

    /// Backoff multiplier
    pub multiplier: f64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            initial_delay_ms: 1000,
            max_delay_ms: 15000,
            multiplier: 2.0,
        }
    }
}

impl PollConfig {
    /// Delay after the given 0-based attempt, capped at `max_delay_ms`.
    pub fn delay_for_attempt(&self, attempt: u32) -> u64 {
        let delay = self.initial_delay_ms as f64 * self.multiplier.powi(attempt as i32);
        (delay as u64).min(self.max_delay_ms)
    }
}

/// Waits for a created resource to reach the Succeeded state
pub struct CreateOperation<T> {
    arm: ArmClient,
    url: String,
    description: &'static str,
    config: PollConfig,
    parse: fn(Value) -> Result<T>,
}

impl<T> CreateOperation<T> {
    pub(crate) fn new(
        arm: ArmClient,
        url: String,
        description: &'static str,
        config: PollConfig,
        parse: fn(Value) -> Result<T>,
    ) -> Self {
        Self {
            arm,
            url,
            description,
            config,
            parse,
        }
    }
}

#[async_trait]
impl<T: Send + 'static> Operation<T> for CreateOperation<T> {
    async fn wait_until_done(self: Box<Self>) -> zoneflow_cloud::Result<T> {
        for attempt in 0..self.config.max_attempts {
            // A 404 right after the acknowledgement means the resource is
            // not visible yet; keep polling.
            if let Some(body) = self
                .arm
                .get_opt::<Value>(&self.url)
                .await
                .map_err(CloudError::from)?
            {
                match provisioning_state(&body) {
                    Some(state) if succeeded(&state) => {
                        return (self.parse)(body).map_err(CloudError::from);
                    }
                    Some(state) if failed(&state) => {
                        return Err(CloudError::OperationFailed(format!(
                            "{} ended in state {}",
                            self.description, state
                        )));
                    }
                    state => {
                        tracing::debug!(
                            "{} not ready (state: {:?}, attempt {}/{})",
                            self.description,
                            state,
                            attempt + 1,
                            self.config.max_attempts
                        );
                    }
                }
            }

            if attempt + 1 < self.config.max_attempts {
                sleep(Duration::from_millis(self.config.delay_for_attempt(attempt))).await;
            }
        }

        Err(CloudError::Timeout(format!(
            "{} still running after {} polls",
            self.description, self.config.max_attempts
        )))
    }
}

/// Waits for a deleted resource to disappear
pub struct DeleteOperation {
    arm: ArmClient,
    url: String,
    description: &'static str,
    config: PollConfig,
}

impl DeleteOperation {
    pub(crate) fn new(
        arm: ArmClient,
        url: String,
        description: &'static str,
        config: PollConfig,
    ) -> Self {
        Self {
            arm,
            url,
            description,
            config,
        }
    }
}

#[async_trait]
impl Operation<()> for DeleteOperation {
    async fn wait_until_done(self: Box<Self>) -> zoneflow_cloud::Result<()> {
        for attempt in 0..self.config.max_attempts {
            match self
                .arm
                .get_opt::<Value>(&self.url)
                .await
                .map_err(CloudError::from)?
            {
                None => return Ok(()),
                Some(body) => {
                    let state = provisioning_state(&body);
                    if let Some(state) = &state {
                        if failed(state) {
                            return Err(CloudError::OperationFailed(format!(
                                "{} delete ended in state {}",
                                self.description, state
                            )));
                        }
                    }
                    tracing::debug!(
                        "{} still present (state: {:?}, attempt {}/{})",
                        self.description,
                        state,
                        attempt + 1,
                        self.config.max_attempts
                    );
                }
            }

            if attempt + 1 < self.config.max_attempts {
                sleep(Duration::from_millis(self.config.delay_for_attempt(attempt))).await;
            }
        }

        Err(CloudError::Timeout(format!(
            "{} still present after {} polls",
            self.description, self.config.max_attempts
        )))
    }
}

fn provisioning_state(body: &Value) -> Option<String> {
    body.get("properties")?
        .get("provisioningState")?
        .as_str()
        .map(str::to_owned)
}

fn succeeded(state: &str) -> bool {
    state.eq_ignore_ascii_case("succeeded")
}

fn failed(state: &str) -> bool {
    state.eq_ignore_ascii_case("failed") || state.eq_ignore_ascii_case("canceled")
}
