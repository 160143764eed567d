//! Alert banners for transient feedback.

use leptos::*;
use std::time::Duration;

const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Error,
}

impl AlertLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: usize,
    pub level: AlertLevel,
    pub message: String,
}

/// Handle for pushing alerts from anywhere in the app; provided via
/// context by the composition root.
#[derive(Clone, Copy)]
pub struct AlertSink {
    alerts: RwSignal<Vec<Alert>>,
    next_id: RwSignal<usize>,
}

impl AlertSink {
    pub fn new() -> Self {
        Self {
            alerts: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn push(&self, level: AlertLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.alerts.update(|alerts| {
            alerts.push(Alert {
                id,
                level,
                message: message.into(),
            })
        });

        let alerts = self.alerts;
        set_timeout(
            move || alerts.update(|list| list.retain(|alert| alert.id != id)),
            AUTO_DISMISS,
        );
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(AlertLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(AlertLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(AlertLevel::Error, message);
    }

    pub fn dismiss(&self, id: usize) {
        self.alerts.update(|list| list.retain(|alert| alert.id != id));
    }

    fn alerts(&self) -> RwSignal<Vec<Alert>> {
        self.alerts
    }
}

impl Default for AlertSink {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AlertStack() -> impl IntoView {
    let sink = expect_context::<AlertSink>();
    let alerts = sink.alerts();

    view! {
        <div id="alerts-container" class="fixed top-4 right-4 z-50 flex flex-col gap-2">
            <For
                each=move || alerts.get()
                key=|alert| alert.id
                children=move |alert: Alert| {
                    let id = alert.id;
                    view! {
                        <div class=alert.level.class()>
                            <span>{alert.message.clone()}</span>
                            <button class="btn btn-sm" on:click=move |_| sink.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
