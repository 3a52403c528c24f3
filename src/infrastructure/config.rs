use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub polling: PollingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub base_url: String,
    #[serde(default = "default_push_path")]
    pub push_path: String,
}

/// Refresh intervals in milliseconds. Defaults match the host page the
/// widget layer was built for.
#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    #[serde(default = "default_alerts_ms")]
    pub alerts_ms: u64,
    #[serde(default = "default_maintenance_ms")]
    pub maintenance_ms: u64,
    #[serde(default = "default_orders_ms")]
    pub orders_ms: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            alerts_ms: default_alerts_ms(),
            maintenance_ms: default_maintenance_ms(),
            orders_ms: default_orders_ms(),
        }
    }
}

fn default_push_path() -> String {
    "/push/ai_ack".to_string()
}

fn default_alerts_ms() -> u64 {
    5000
}

fn default_maintenance_ms() -> u64 {
    3000
}

fn default_orders_ms() -> u64 {
    5000
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_intervals_default_when_omitted() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nbase_url = \"http://127.0.0.1:8080\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: DashboardConfig = settings.try_deserialize().unwrap();

        assert_eq!(cfg.polling.alerts_ms, 5000);
        assert_eq!(cfg.polling.maintenance_ms, 3000);
        assert_eq!(cfg.polling.orders_ms, 5000);
        assert_eq!(cfg.server.push_path, "/push/ai_ack");
    }

    #[test]
    fn test_intervals_override() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nbase_url = \"http://10.0.0.5:9000\"\npush_path = \"/events\"\n\n[polling]\nalerts_ms = 1000\nmaintenance_ms = 500\norders_ms = 2000\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: DashboardConfig = settings.try_deserialize().unwrap();

        assert_eq!(cfg.polling.maintenance_ms, 500);
        assert_eq!(cfg.server.push_path, "/events");
    }
}
