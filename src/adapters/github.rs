use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Payload for `POST /repos/{owner}/{repo}/pulls/{number}/comments`.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewCommentRequest {
    pub body: String,
    pub commit_id: String,
    pub path: String,
    pub line: u64,
}

#[derive(Serialize)]
struct IssueCommentRequest<'a> {
    body: &'a str,
}

pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Result<Self, GitHubError> {
        Self::with_base_url(token, "https://api.github.com")
    }

    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .user_agent(concat!("diffcritic/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        comment: &ReviewCommentRequest,
    ) -> Result<(), GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/comments",
            self.base_url, owner, repo, pr_number
        );
        self.post(&url, comment).await
    }

    pub async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        body: &str,
    ) -> Result<(), GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.base_url, owner, repo, pr_number
        );
        self.post(&url, &IssueCommentRequest { body }).await
    }

    async fn post<T: Serialize + ?Sized>(&self, url: &str, payload: &T) -> Result<(), GitHubError> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api { status, body });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_review_comment_posts_anchor_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/acme/widgets/pulls/7/comments")
            .match_header("authorization", "Bearer test-token")
            .match_header("accept", "application/vnd.github+json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "body": "🤖 AI Review: x",
                "commit_id": "abc123",
                "path": "a.js",
                "line": 3
            })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = GitHubClient::with_base_url("test-token", server.url()).unwrap();
        client
            .create_review_comment(
                "acme",
                "widgets",
                7,
                &ReviewCommentRequest {
                    body: "🤖 AI Review: x".to_string(),
                    commit_id: "abc123".to_string(),
                    path: "a.js".to_string(),
                    line: 3,
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_issue_comment_posts_body_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/acme/widgets/issues/7/comments")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "body": "🤖 AI Review: x"
            })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = GitHubClient::with_base_url("test-token", server.url()).unwrap();
        client
            .create_issue_comment("acme", "widgets", 7, "🤖 AI Review: x")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_becomes_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/repos/acme/widgets/pulls/7/comments")
            .with_status(422)
            .with_body(r#"{"message": "line must be part of the diff"}"#)
            .create_async()
            .await;

        let client = GitHubClient::with_base_url("test-token", server.url()).unwrap();
        let err = client
            .create_review_comment(
                "acme",
                "widgets",
                7,
                &ReviewCommentRequest {
                    body: "x".to_string(),
                    commit_id: "abc123".to_string(),
                    path: "a.js".to_string(),
                    line: 9999,
                },
            )
            .await
            .unwrap_err();

        match err {
            GitHubError::Api { status, body } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert!(body.contains("line must be part of the diff"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
