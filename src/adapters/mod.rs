pub mod github;
pub mod llm;
pub mod openai;

pub use github::{GitHubClient, GitHubError, ReviewCommentRequest};
pub use openai::OpenAIAdapter;
