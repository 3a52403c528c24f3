// Push listener - server-pushed acknowledgements and the material alert panel
use crate::domain::push::PushMessage;
use crate::presentation::page::{element, PageSurface, WidgetUpdate};
use futures::{Stream, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

const NOTIFICATION_SOUND: &str = "https://actions.google.com/sounds/v1/alarms/beep_short.ogg";

/// Consumes the push channel. Every message lands in the running log;
/// material requests additionally surface the blocking alert panel. The
/// panel has no queue: a later request overwrites the displayed content.
///
/// Channel lifecycle (connect, reconnect) belongs to the channel
/// implementation, not this listener.
pub struct PushListener {
    surface: Arc<dyn PageSurface>,
    panel_visible: AtomicBool,
}

impl PushListener {
    pub fn new(surface: Arc<dyn PageSurface>) -> Self {
        Self {
            surface,
            panel_visible: AtomicBool::new(false),
        }
    }

    pub async fn run<S>(&self, mut messages: S)
    where
        S: Stream<Item = PushMessage> + Unpin,
    {
        while let Some(msg) = messages.next().await {
            self.handle(&msg);
        }
        info!("push channel closed");
    }

    pub fn handle(&self, msg: &PushMessage) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.surface.apply(&WidgetUpdate::AppendHtml {
            target: element::AI_LOG,
            html: format!("<div>[{}] > {}</div>", stamp, msg.display_text()),
        });

        if msg.is_material_request() {
            self.surface.apply_all(&[
                WidgetUpdate::Text {
                    target: element::ALERT_CONTENT,
                    text: msg.display_text().to_string(),
                },
                WidgetUpdate::Visible {
                    target: element::MANAGER_ALERT,
                    visible: true,
                },
                WidgetUpdate::PlaySound {
                    clip: NOTIFICATION_SOUND,
                },
            ]);
            self.panel_visible.store(true, Ordering::SeqCst);
        }
    }

    /// Hide the panel. Local-only: the server is never told about the
    /// acknowledgement.
    pub fn acknowledge(&self) {
        self.surface.apply(&WidgetUpdate::Visible {
            target: element::MANAGER_ALERT,
            visible: false,
        });
        self.panel_visible.store(false, Ordering::SeqCst);
        info!("material request acknowledged and logged");
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::page::testing::RecordingSurface;

    fn message(cmd: &str, response: &str) -> PushMessage {
        PushMessage {
            cmd: cmd.to_string(),
            response: response.to_string(),
        }
    }

    fn listener() -> (Arc<RecordingSurface>, PushListener) {
        let surface = Arc::new(RecordingSurface::default());
        let listener = PushListener::new(surface.clone());
        (surface, listener)
    }

    #[test]
    fn test_material_request_reveals_panel_with_response() {
        let (surface, listener) = listener();
        listener.handle(&message("REQUEST_MATERIAL:steel", "Manager needs 40t of steel"));

        assert!(listener.panel_visible());
        let applied = surface.applied();
        assert!(applied.contains(&WidgetUpdate::Text {
            target: element::ALERT_CONTENT,
            text: "Manager needs 40t of steel".to_string(),
        }));
        assert!(applied.contains(&WidgetUpdate::Visible {
            target: element::MANAGER_ALERT,
            visible: true,
        }));
        assert!(applied.iter().any(|u| matches!(u, WidgetUpdate::PlaySound { .. })));
    }

    #[test]
    fn test_material_request_falls_back_to_raw_cmd() {
        let (surface, listener) = listener();
        listener.handle(&message("REQUEST_MATERIAL:steel", ""));

        assert!(surface.applied().contains(&WidgetUpdate::Text {
            target: element::ALERT_CONTENT,
            text: "REQUEST_MATERIAL:steel".to_string(),
        }));
    }

    #[test]
    fn test_generic_message_only_appends_to_log() {
        let (surface, listener) = listener();
        listener.handle(&message("increase speed", "Executed: increase speed"));

        assert!(!listener.panel_visible());
        let applied = surface.applied();
        assert_eq!(applied.len(), 1);
        match &applied[0] {
            WidgetUpdate::AppendHtml { target, html } => {
                assert_eq!(*target, element::AI_LOG);
                assert!(html.contains("> Executed: increase speed"));
            }
            other => panic!("expected log append, got {:?}", other),
        }
    }

    #[test]
    fn test_second_request_overwrites_panel_content() {
        let (surface, listener) = listener();
        listener.handle(&message("REQUEST_MATERIAL:steel", "steel"));
        listener.handle(&message("REQUEST_MATERIAL:copper", "copper"));

        assert!(listener.panel_visible());
        let contents: Vec<_> = surface
            .applied()
            .into_iter()
            .filter_map(|u| match u {
                WidgetUpdate::Text { target, text } if target == element::ALERT_CONTENT => {
                    Some(text)
                }
                _ => None,
            })
            .collect();
        assert_eq!(contents, vec!["steel".to_string(), "copper".to_string()]);
    }

    #[test]
    fn test_acknowledge_hides_panel_locally() {
        let (surface, listener) = listener();
        listener.handle(&message("REQUEST_MATERIAL:steel", "steel"));
        listener.acknowledge();

        assert!(!listener.panel_visible());
        assert_eq!(
            surface.applied().last(),
            Some(&WidgetUpdate::Visible {
                target: element::MANAGER_ALERT,
                visible: false,
            })
        );
    }

    #[tokio::test]
    async fn test_run_drains_the_stream() {
        let (surface, listener) = listener();
        let messages = futures::stream::iter(vec![
            message("status", "Executed: status"),
            message("REQUEST_MATERIAL:steel", ""),
        ]);

        listener.run(messages).await;

        assert!(listener.panel_visible());
        assert_eq!(
            surface
                .applied()
                .iter()
                .filter(|u| matches!(u, WidgetUpdate::AppendHtml { .. }))
                .count(),
            2
        );
    }
}
