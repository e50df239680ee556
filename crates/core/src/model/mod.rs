mod ids;
mod question;
mod recommendation;
mod session;
mod tally;

pub use ids::{CategoryCode, CategoryCodeError, OptionSlot};
pub use question::{Question, QuestionError, QuestionOption, QuestionSet, Track};
pub use recommendation::{Recommendation, RecommendationError, RecommendationTable};
pub use session::{Page, PageLayout, SessionState};
pub use tally::Tally;
