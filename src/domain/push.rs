// Push channel domain model
use serde::Deserialize;

/// Marker substring that classifies a push message as a material request
/// needing operator acknowledgement.
pub const MATERIAL_REQUEST_MARKER: &str = "REQUEST_MATERIAL";

/// Acknowledgement message pushed by the server. Transient: classified,
/// displayed, never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct PushMessage {
    pub cmd: String,
    #[serde(default)]
    pub response: String,
}

impl PushMessage {
    pub fn is_material_request(&self) -> bool {
        self.cmd.contains(MATERIAL_REQUEST_MARKER)
    }

    /// Text to surface on the alert panel: the response if the server sent
    /// one, otherwise the raw command.
    pub fn display_text(&self) -> &str {
        if self.response.is_empty() {
            &self.cmd
        } else {
            &self.response
        }
    }
}
