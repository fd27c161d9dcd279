pub mod error;
pub mod filter;
pub mod graphql;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use filter::{Difficulty, QuestionFilter, QuestionStatus};
pub use graphql::client::LeetCodeClient;
pub use session::Session;
pub use types::{Question, UserInfo};
