mod quiz;
mod score;
#[cfg(test)]
mod smoke;

pub use quiz::QuizView;
pub use score::ScorePanel;
