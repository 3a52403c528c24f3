// Page surface - the contract with the host page markup
use tracing::info;

/// Element ids the widget layer writes to. These are an implicit contract
/// with the host page; not every page carries every element.
pub mod element {
    pub const NOTIF_COUNT: &str = "notifCount";
    pub const ALERT_LIST: &str = "alertList";
    pub const NOTIF_DROPDOWN: &str = "notifDropdown";
    pub const AI_PREDICTION: &str = "aiPrediction";
    pub const AI_ACTION: &str = "aiAction";
    pub const VIB_BAR: &str = "vibBar";
    pub const TEMP_BAR: &str = "tempBar";
    pub const OPERATOR_TASKS: &str = "operatorTasks";
    pub const NAVBAR: &str = "navbar";
    pub const AI_LOG: &str = "aiLog";
    pub const MANAGER_ALERT: &str = "managerAlert";
    pub const ALERT_CONTENT: &str = "alertContent";
}

/// A single widget mutation. Renderers produce lists of these; a
/// `PageSurface` applies them to the live page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetUpdate {
    Text { target: &'static str, text: String },
    Html { target: &'static str, html: String },
    AppendHtml { target: &'static str, html: String },
    Style { target: &'static str, property: &'static str, value: String },
    Visible { target: &'static str, visible: bool },
    ClassOn { target: &'static str, class: &'static str },
    ClassOff { target: &'static str, class: &'static str },
    ClassToggle { target: &'static str, class: &'static str },
    Dialog { message: String },
    PlaySound { clip: &'static str },
    Reload,
}

/// Sink for widget mutations. Implementations must tolerate targets that do
/// not exist on the current page by ignoring the mutation.
pub trait PageSurface: Send + Sync {
    fn apply(&self, update: &WidgetUpdate);

    fn apply_all(&self, updates: &[WidgetUpdate]) {
        for update in updates {
            self.apply(update);
        }
    }
}

/// Headless surface that logs every mutation. Used by the binary when no
/// live page is attached.
#[derive(Debug, Default)]
pub struct TracingSurface;

impl PageSurface for TracingSurface {
    fn apply(&self, update: &WidgetUpdate) {
        match update {
            WidgetUpdate::Text { target, text } => info!(target_el = target, %text, "set text"),
            WidgetUpdate::Html { target, html } => info!(target_el = target, %html, "set html"),
            WidgetUpdate::AppendHtml { target, html } => {
                info!(target_el = target, %html, "append html")
            }
            WidgetUpdate::Style { target, property, value } => {
                info!(target_el = target, property, %value, "set style")
            }
            WidgetUpdate::Visible { target, visible } => {
                info!(target_el = target, visible, "set visibility")
            }
            WidgetUpdate::ClassOn { target, class } => info!(target_el = target, class, "add class"),
            WidgetUpdate::ClassOff { target, class } => {
                info!(target_el = target, class, "remove class")
            }
            WidgetUpdate::ClassToggle { target, class } => {
                info!(target_el = target, class, "toggle class")
            }
            WidgetUpdate::Dialog { message } => info!(%message, "dialog"),
            WidgetUpdate::PlaySound { clip } => info!(clip, "play sound"),
            WidgetUpdate::Reload => info!("page reload requested"),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records applied mutations for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        applied: Mutex<Vec<WidgetUpdate>>,
    }

    impl RecordingSurface {
        pub fn applied(&self) -> Vec<WidgetUpdate> {
            self.applied.lock().unwrap().clone()
        }
    }

    impl PageSurface for RecordingSurface {
        fn apply(&self, update: &WidgetUpdate) {
            self.applied.lock().unwrap().push(update.clone());
        }
    }
}
