mod ids;
mod progress;
mod sentence;
mod user;

pub use ids::{ParseIdError, ProgressId};
pub use progress::ProgressRecord;
pub use sentence::{Sentence, SentenceError, SentenceStore};
pub use user::{UserName, UserNameError};
