// Renderers - pure mapping from fetched payloads to widget mutations
use crate::domain::alert::{Alert, AlertPriority};
use crate::domain::maintenance::MaintenancePrediction;
use crate::domain::order::OrderTask;
use crate::presentation::page::{element, WidgetUpdate};

const HIGH_PRIORITY_COLOR: &str = "#ff6b6b";
const LOW_PRIORITY_COLOR: &str = "orange";
const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Badge count plus the dropdown list. Badge is visible only while at least
/// one alert is active.
pub fn render_alerts(alerts: &[Alert]) -> Vec<WidgetUpdate> {
    let list_html = if alerts.is_empty() {
        "<div style=\"padding:10px;\">No active alerts</div>".to_string()
    } else {
        alerts.iter().map(alert_entry_html).collect()
    };

    vec![
        WidgetUpdate::Text {
            target: element::NOTIF_COUNT,
            text: alerts.len().to_string(),
        },
        WidgetUpdate::Visible {
            target: element::NOTIF_COUNT,
            visible: !alerts.is_empty(),
        },
        WidgetUpdate::Html {
            target: element::ALERT_LIST,
            html: list_html,
        },
    ]
}

fn alert_entry_html(alert: &Alert) -> String {
    let color = match alert.priority {
        AlertPriority::High => HIGH_PRIORITY_COLOR,
        AlertPriority::Low => LOW_PRIORITY_COLOR,
    };
    format!(
        "<div style=\"padding: 10px; border-bottom: 1px solid rgba(255,255,255,0.1);\">\
         <strong style=\"color: {}\">{}</strong><br>\
         <span style=\"font-size: 12px; color: #ccc;\">{}</span></div>",
        color, alert.kind, alert.message
    )
}

/// Prediction text, server-supplied status color applied verbatim, and the
/// two proportional bars. Vibration arrives as a 0..=1 fraction, temperature
/// as a percentage already.
pub fn render_maintenance(data: &MaintenancePrediction) -> Vec<WidgetUpdate> {
    vec![
        WidgetUpdate::Text {
            target: element::AI_PREDICTION,
            text: data.prediction.clone(),
        },
        WidgetUpdate::Style {
            target: element::AI_PREDICTION,
            property: "color",
            value: data.status_color.clone(),
        },
        WidgetUpdate::Text {
            target: element::AI_ACTION,
            text: data.action.clone(),
        },
        WidgetUpdate::Style {
            target: element::VIB_BAR,
            property: "width",
            value: percent_width(data.vibration * 100.0),
        },
        WidgetUpdate::Style {
            target: element::TEMP_BAR,
            property: "width",
            value: percent_width(data.temperature),
        },
    ]
}

/// Rounded to whole percent so float noise (0.42 * 100) never leaks into
/// the style value.
fn percent_width(value: f64) -> String {
    format!("{}%", value.round())
}

/// Operator task table body. Each row carries its task id on the action
/// control so the click handler can dispatch the workflow advance.
pub fn render_orders(orders: &[OrderTask]) -> Vec<WidgetUpdate> {
    let body = if orders.is_empty() {
        "<tr><td colspan=\"4\">No active tasks</td></tr>".to_string()
    } else {
        orders.iter().map(order_row_html).collect()
    };

    vec![WidgetUpdate::Html {
        target: element::OPERATOR_TASKS,
        html: body,
    }]
}

fn order_row_html(task: &OrderTask) -> String {
    format!(
        "<tr><td>{id}</td><td>{product}</td>\
         <td><span class=\"badge badge-ok\">{status}</span></td>\
         <td><button class=\"primary-btn btn-sm\" data-order-id=\"{id}\">Next Stage</button></td></tr>",
        id = task.id,
        product = task.product,
        status = task.status,
    )
}

/// Navbar scroll effect: compact styling once the page is scrolled past the
/// threshold.
pub fn navbar_scroll(scroll_y: f64) -> WidgetUpdate {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD {
        WidgetUpdate::ClassOn {
            target: element::NAVBAR,
            class: "scrolled",
        }
    } else {
        WidgetUpdate::ClassOff {
            target: element::NAVBAR,
            class: "scrolled",
        }
    }
}

pub fn toggle_notifications() -> WidgetUpdate {
    WidgetUpdate::ClassToggle {
        target: element::NOTIF_DROPDOWN,
        class: "show",
    }
}
