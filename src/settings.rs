use std::time::Duration;

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Tunable client parameters. Opaque to the factory: values are handed to
/// the SDK unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// Maximum number of attempts per request, initial call included.
    pub max_attempts: u32,
    /// TCP connect timeout. `None` leaves the SDK default in place.
    pub connect_timeout: Option<Duration>,
    /// End-to-end timeout for a single operation, retries included.
    pub operation_timeout: Option<Duration>,
    /// Endpoint override, eg. for localstack.
    pub endpoint_url: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            connect_timeout: None,
            operation_timeout: None,
            endpoint_url: None,
        }
    }
}

impl ClientSettings {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::standard().with_max_attempts(self.max_attempts)
    }

    pub fn timeout_config(&self) -> TimeoutConfig {
        let builder = TimeoutConfig::builder();

        let builder = match self.connect_timeout {
            Some(connect_timeout) => builder.connect_timeout(connect_timeout),
            None => builder,
        };

        let builder = match self.operation_timeout {
            Some(operation_timeout) => builder.operation_timeout(operation_timeout),
            None => builder,
        };

        builder.build()
    }
}
