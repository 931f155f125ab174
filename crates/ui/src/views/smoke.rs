use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Question, QuestionBank, QuestionId};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

struct TestApp {
    question_bank: Arc<QuestionBank>,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }
}

fn smoke_bank() -> Arc<QuestionBank> {
    let questions = (1..=2)
        .map(|id| {
            Question::new(
                QuestionId::new(id),
                format!("Q{id}"),
                vec!["a".into(), "b".into()],
                0,
            )
            .unwrap()
        })
        .collect();
    Arc::new(QuestionBank::new(questions).unwrap())
}

#[component]
fn Harness() -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        question_bank: smoke_bank(),
    });
    use_context_provider(|| build_app_context(&app));
    rsx! {
        QuizView {}
    }
}

fn render_quiz_view() -> String {
    let mut dom = VirtualDom::new(Harness);
    dom.rebuild_in_place();
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(&dom)
}

#[test]
fn quiz_view_smoke_renders_restart_control() {
    let html = render_quiz_view();

    // Restarting must be reachable mid-quiz, not only from the score panel.
    assert!(
        html.contains("Restart quiz"),
        "missing restart control in {html}"
    );
    assert!(html.contains("Previous"), "missing nav controls in {html}");
}

#[test]
fn quiz_view_smoke_renders_numbered_prompt() {
    let html = render_quiz_view();

    assert!(html.contains("1. Q1"), "missing numbered prompt in {html}");
    assert!(
        html.contains("Question 1 of 2"),
        "missing position label in {html}"
    );
}
