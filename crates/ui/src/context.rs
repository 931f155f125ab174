use std::sync::Arc;

use quiz_core::model::QuestionBank;

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<QuestionBank>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
