// Predictive maintenance domain model
use serde::Deserialize;

/// Snapshot from the predictive maintenance endpoint. Overwritten wholesale
/// on every poll; `vibration` is a 0..=1 fraction, `temperature` is already
/// a percentage. Neither is validated, the server owns the ranges.
#[derive(Debug, Clone, Deserialize)]
pub struct MaintenancePrediction {
    pub prediction: String,
    pub status_color: String,
    pub action: String,
    pub vibration: f64,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snapshot() {
        let data: MaintenancePrediction = serde_json::from_str(
            r##"{
                "prediction": "Bearing wear likely within 48h",
                "status_color": "#ffcc00",
                "action": "Schedule inspection",
                "vibration": 0.42,
                "temperature": 77.0
            }"##,
        )
        .unwrap();
        assert_eq!(data.status_color, "#ffcc00");
        assert_eq!(data.vibration, 0.42);
    }
}
