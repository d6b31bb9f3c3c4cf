use anyhow::{Context, Result};

/// Identifies the pull request under review. Built once from the environment
/// and passed down explicitly so the flow can be exercised with fabricated
/// values in tests.
#[derive(Debug, Clone)]
pub struct PrContext {
    pub owner: String,
    pub repo: String,
    pub pr_number: u64,
    pub base_sha: String,
    pub head_sha: String,
}

impl PrContext {
    pub fn from_env() -> Result<Self> {
        let repo_slug = require_env("GITHUB_REPO")?;
        let pr_number = require_env("GITHUB_PR")?;
        let base_sha = require_env("GITHUB_BASE_SHA")?;
        let head_sha = require_env("GITHUB_SHA")?;

        Self::parse(&repo_slug, &pr_number, base_sha, head_sha)
    }

    fn parse(
        repo_slug: &str,
        pr_number: &str,
        base_sha: String,
        head_sha: String,
    ) -> Result<Self> {
        let (owner, repo) = repo_slug
            .split_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
            .with_context(|| format!("GITHUB_REPO must be 'owner/repo', got '{}'", repo_slug))?;

        let pr_number: u64 = pr_number
            .trim()
            .parse()
            .with_context(|| format!("GITHUB_PR must be a number, got '{}'", pr_number))?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            pr_number,
            base_sha,
            head_sha,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{} environment variable is not set", name))
}
