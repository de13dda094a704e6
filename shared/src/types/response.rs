//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Individual component checks (storage backend, ...)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub components: HashMap<String, HealthStatus>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a healthy response with no component checks
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            components: HashMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Record a component check; the overall status degrades to the worst
    /// component status
    pub fn with_component(mut self, name: impl Into<String>, status: HealthStatus) -> Self {
        self.status = self.status.worst(status);
        self.components.insert(name.into(), status);
        self
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn rank(self) -> u8 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::Degraded => 1,
            HealthStatus::Unhealthy => 2,
        }
    }

    fn worst(self, other: HealthStatus) -> HealthStatus {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_degrades_to_worst_component() {
        let health = HealthResponse::healthy("estatehub-api", "0.1.0")
            .with_component("storage", HealthStatus::Degraded)
            .with_component("auth", HealthStatus::Healthy);

        assert_eq!(health.status, HealthStatus::Degraded);
        assert_eq!(health.components.len(), 2);
    }
}
