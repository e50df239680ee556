mod progress;
mod view;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::{RenderError, SessionError};
pub use progress::QuizProgress;
pub use view::{OptionView, PageView, render_page, step_title};
pub use workflow::{QuizEvent, QuizSession};
