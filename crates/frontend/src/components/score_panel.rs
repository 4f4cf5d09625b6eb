use dioxus::prelude::*;

/// Prompt, running score, and (after the last round) the final summary.
#[component]
pub fn ScorePanel(prompt: String, score: String, summary: Option<String>) -> Element {
    rsx! {
        div { class: "panel",
            h3 { "Round" }
            p { class: "prompt", "{prompt}" }
            p { class: "score", "{score}" }
            if let Some(summary) = summary {
                p { class: "final", "{summary}" }
            }
        }
    }
}
