use dioxus::prelude::*;
use services::{QuizSession, SessionError, SessionPhase};

use crate::context::AppContext;
use crate::views::ScorePanel;
use crate::vm::map_quiz_card;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let bank = ctx.question_bank();
    let mut session = use_signal(move || QuizSession::new(bank));
    let wiring_error = use_signal(|| None::<SessionError>);

    // A session error means this view constructed an invalid request.
    // Surface it instead of rendering a quiz that silently drops input.
    if let Some(err) = wiring_error() {
        return rsx! {
            div { class: "fatal",
                h1 { "Something went wrong" }
                pre { "{err}" }
            }
        };
    }

    let snapshot = session.read().snapshot();

    if snapshot.phase == SessionPhase::Completed {
        return rsx! {
            ScorePanel {
                percent: snapshot.score_percent,
                on_restart: move |()| session.write().restart(),
            }
        };
    }

    let card = map_quiz_card(&snapshot);

    let segments = card.progress.iter().enumerate().map(|(index, reached)| {
        let class = if *reached {
            "progress-seg progress-seg--filled"
        } else {
            "progress-seg"
        };
        rsx! {
            div { key: "{index}", class: "{class}" }
        }
    });

    let option_buttons = card.options.iter().map(|option| {
        let index = option.index;
        let label = option.label.clone();
        let class = if option.is_selected {
            "option-btn option-btn--selected"
        } else {
            "option-btn"
        };
        let mut session = session;
        let mut wiring_error = wiring_error;
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    if let Err(err) = session.write().select_option(index) {
                        wiring_error.set(Some(err));
                    }
                },
                "{label}"
            }
        }
    });

    let mut wiring_error = wiring_error;

    rsx! {
        main { class: "page quiz-page",
            section { class: "quiz-card",
                header { class: "quiz-header",
                    h1 { class: "quiz-title", "Test Your Knowledge" }
                    p { class: "quiz-subtitle", "Answer all questions to see your results" }
                    div { class: "progress-row", {segments} }
                }

                div { class: "quiz-body",
                    p { class: "question-position", "{card.position_label}" }
                    h2 { class: "question-text", "{card.prompt}" }
                    div { class: "option-list", {option_buttons} }
                }

                footer { class: "quiz-footer",
                    button {
                        class: "btn-link",
                        r#type: "button",
                        onclick: move |_| {
                            session.write().restart();
                        },
                        "Restart quiz"
                    }
                    div { class: "nav-group",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: !card.can_retreat,
                            onclick: move |_| {
                                session.write().retreat();
                            },
                            "Previous"
                        }
                        if card.is_last {
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !card.can_submit,
                                onclick: move |_| {
                                    if let Err(err) = session.write().submit() {
                                        wiring_error.set(Some(err));
                                    }
                                },
                                "Submit"
                            }
                        } else {
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !card.can_advance,
                                onclick: move |_| {
                                    session.write().advance();
                                },
                                "Next"
                            }
                        }
                    }
                }
            }
        }
    }
}
