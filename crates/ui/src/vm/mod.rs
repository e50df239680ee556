mod quiz_vm;

pub use quiz_vm::{
    EMPTY_NAME_WARNING, QuizIntent, QuizVm, current_type_line, keyword_line, progress_label,
    type_result_title,
};
