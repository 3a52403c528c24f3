// Alert domain model
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub priority: AlertPriority,
}

/// Alert priority. Anything the server sends that is not "High" is treated
/// as low priority, matching the two-color badge scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum AlertPriority {
    #[default]
    Low,
    High,
}

impl From<String> for AlertPriority {
    fn from(value: String) -> Self {
        if value == "High" {
            AlertPriority::High
        } else {
            AlertPriority::Low
        }
    }
}
