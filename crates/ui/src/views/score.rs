use std::time::Duration;

use dioxus::prelude::*;

use crate::vm::CountUp;

/// Final score card with a cosmetic count-up toward the real percent.
///
/// The session is already `Completed` when this renders; the timer only
/// animates the displayed number and never writes back into session state.
#[component]
pub fn ScorePanel(percent: u8, on_restart: EventHandler<()>) -> Element {
    let mut count = use_signal(move || CountUp::new(percent));

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_millis(20)).await;
            if count.write().tick() {
                break;
            }
        }
    });

    let shown = count.read().shown();

    rsx! {
        main { class: "page score-page",
            section { class: "quiz-card score-panel",
                p { class: "score-kicker", "Keep Learning!" }
                p { class: "score-label", "Your final score is" }
                p { class: "score-value",
                    "{shown}"
                    span { class: "score-unit", "%" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Start Again"
                }
            }
        }
    }
}
