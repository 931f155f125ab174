mod quiz_vm;
mod score_vm;

pub use quiz_vm::{OptionRowVm, QuizCardVm, map_quiz_card};
pub use score_vm::CountUp;
