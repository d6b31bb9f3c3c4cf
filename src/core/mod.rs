pub mod context;
pub mod git;
pub mod prompt;
pub mod publisher;
pub mod review;

pub use context::PrContext;
pub use git::DiffSource;
pub use prompt::ReviewPromptBuilder;
pub use publisher::{CommentPublisher, PostOutcome};
pub use review::{ParsedReview, Review};
