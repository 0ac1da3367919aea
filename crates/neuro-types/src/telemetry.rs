use serde::{Deserialize, Serialize};

/// One resource-usage sample of a running job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTelemetry {
    /// Unix timestamp, seconds with fraction
    pub timestamp: f64,
    pub cpu: f64,
    /// Megabytes
    pub memory: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_duty_cycle: Option<u32>,
    /// Megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_memory: Option<f64>,
}
