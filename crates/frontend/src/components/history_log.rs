use dioxus::prelude::*;
use quiz_shared::models::{HistoryEntry, Severity};

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Neutral => "log-line",
        Severity::Positive => "log-line good",
        Severity::Negative => "log-line bad",
    }
}

#[component]
pub fn HistoryLog(entries: Vec<HistoryEntry>) -> Element {
    rsx! {
        div { class: "panel",
            h3 { "Log" }
            div { class: "log",
                for entry in entries {
                    div { class: severity_class(entry.severity), "{entry.text}" }
                }
            }
        }
    }
}
