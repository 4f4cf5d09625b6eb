use dioxus::prelude::*;
use quiz_shared::models::{Point, Rect};
use quiz_shared::session::{QuizSession, RenderEffect, Verdict};
use tracing::{debug, info};

use crate::components::history_log::HistoryLog;
use crate::components::map_view::MapView;
use crate::components::score_panel::ScorePanel;

/// Apply a session render effect to the highlight overlay signal.
fn apply_effect(mut highlight: Signal<Option<(Rect, Verdict)>>, effect: RenderEffect) {
    match effect {
        RenderEffect::Highlight { bounds, verdict } => {
            highlight.set(Some((bounds, verdict)));
        }
        RenderEffect::ClearHighlight => {
            highlight.set(None);
        }
    }
}

#[component]
pub fn Quiz() -> Element {
    // The single process-wide session; all mutation happens synchronously
    // inside one event handler at a time.
    let mut session = use_signal(QuizSession::campus);
    let mut calibration_mode = use_signal(|| false);
    let highlight = use_signal(|| None::<(Rect, Verdict)>);

    let on_double_click = move |point: Point| {
        if *calibration_mode.read() {
            debug!(x = point.x, y = point.y, "calibration click");
            session.write().calibration_click(point);
            return;
        }
        if let Some(effect) = session.write().submit_answer(point) {
            apply_effect(highlight, effect);
        }
    };

    let snapshot = session.read();
    let prompt = snapshot.prompt_text();
    let score = snapshot.score_text();
    let summary = snapshot.summary_text();
    let entries = snapshot.history().to_vec();
    drop(snapshot);

    let calibrating = *calibration_mode.read();

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Campus Map Quiz" }
                div { class: "controls",
                    button {
                        onclick: move |_| {
                            info!("game reset");
                            let effect = session.write().reset();
                            apply_effect(highlight, effect);
                        },
                        "Start / Restart"
                    }
                    label { class: "calib-toggle",
                        input {
                            r#type: "checkbox",
                            checked: calibrating,
                            onchange: move |evt: Event<FormData>| {
                                calibration_mode.set(evt.checked());
                            },
                        }
                        "Calibration mode"
                    }
                }
            }

            div { class: "sidebar",
                ScorePanel { prompt, score, summary }
                HistoryLog { entries }
            }

            MapView {
                highlight,
                on_double_click,
            }
        }
    }
}
