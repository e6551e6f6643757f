mod breed;
mod preference;
mod question;
mod rating;
mod session;
mod summary;

pub use breed::{Breed, BreedBook, BreedBookError};
pub use preference::Preference;
pub use question::{Question, QuestionSet, QuestionSetError, TraitKey};
pub use rating::{Rating, RatingError};
pub use session::{AnswerOutcome, Screen, Session, SessionError, SessionProgress};
pub use summary::{Response, ResponseSummary, SummaryError};
