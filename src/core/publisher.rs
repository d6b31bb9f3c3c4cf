use crate::adapters::{GitHubClient, ReviewCommentRequest};
use crate::core::context::PrContext;
use crate::core::review::Review;
use anyhow::Result;
use tracing::warn;

const COMMENT_PREFIX: &str = "🤖 AI Review: ";

/// How the review ended up on the pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    /// Anchored to the flagged file and line.
    Inline,
    /// Plain pull-request comment, used when the inline anchor is rejected
    /// or the review carries no line number.
    IssueComment,
}

pub struct CommentPublisher<'a> {
    github: &'a GitHubClient,
    ctx: &'a PrContext,
}

impl<'a> CommentPublisher<'a> {
    pub fn new(github: &'a GitHubClient, ctx: &'a PrContext) -> Self {
        Self { github, ctx }
    }

    /// Posts the review, preferring an inline comment at the flagged line.
    /// The inline call gets exactly one fallback; a fallback failure
    /// propagates to the caller.
    pub async fn publish(&self, review: &Review) -> Result<PostOutcome> {
        let body = format!("{}{}", COMMENT_PREFIX, review.message);

        if let Some(line) = review.line {
            let comment = ReviewCommentRequest {
                body: body.clone(),
                commit_id: self.ctx.head_sha.clone(),
                path: review.file.clone(),
                line,
            };

            match self
                .github
                .create_review_comment(
                    &self.ctx.owner,
                    &self.ctx.repo,
                    self.ctx.pr_number,
                    &comment,
                )
                .await
            {
                Ok(()) => return Ok(PostOutcome::Inline),
                Err(err) => {
                    warn!("Inline comment failed, falling back: {}", err);
                }
            }
        } else {
            warn!("Review has no line number, posting as a plain comment");
        }

        self.github
            .create_issue_comment(&self.ctx.owner, &self.ctx.repo, self.ctx.pr_number, &body)
            .await?;

        Ok(PostOutcome::IssueComment)
    }
}
