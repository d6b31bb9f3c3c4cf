mod adapters;
mod config;
mod core;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "diffcritic")]
#[command(about = "Reviews a pull-request diff with an LLM and posts one critique back", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, help = "Model name (overrides config file)")]
    model: Option<String>,

    #[arg(long)]
    temperature: Option<f32>,

    #[arg(long)]
    max_tokens: Option<usize>,

    #[arg(long, help = "Parse and print the review without posting to GitHub")]
    dry_run: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = config::Config::load().unwrap_or_default();
    config.apply_env();
    config.merge_with_cli(cli.model, cli.temperature, cli.max_tokens);

    run(config, cli.dry_run).await
}

async fn run(config: config::Config, dry_run: bool) -> Result<()> {
    let ctx = core::PrContext::from_env()?;

    info!(
        "Fetching diff {}..{} for {}/{}#{}",
        ctx.base_sha, ctx.head_sha, ctx.owner, ctx.repo, ctx.pr_number
    );
    let diff = core::DiffSource::new(".").diff_between(&ctx.base_sha, &ctx.head_sha)?;
    if diff.trim().is_empty() {
        println!("No changes between {} and {}", ctx.base_sha, ctx.head_sha);
        return Ok(());
    }

    info!("Requesting review from {}", config.model);
    let model_config = adapters::llm::ModelConfig {
        model_name: config.model.clone(),
        api_key: config.api_key.clone(),
        base_url: config.base_url.clone(),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    };
    let adapter = adapters::llm::create_adapter(&model_config)?;

    let (system_prompt, user_prompt) =
        core::ReviewPromptBuilder::build_review_prompt(&diff, config.max_diff_chars);
    let response = adapter
        .complete(adapters::llm::LLMRequest {
            system_prompt,
            user_prompt,
            temperature: None,
            max_tokens: None,
            json_response: true,
        })
        .await?;

    let review = match core::ParsedReview::from_completion(&response.content) {
        core::ParsedReview::Issue(review) => review,
        core::ParsedReview::NoIssue => {
            println!("No issues found");
            return Ok(());
        }
        core::ParsedReview::Malformed => {
            warn!("Failed to parse model response: {}", response.content);
            println!("No issues found");
            return Ok(());
        }
    };

    info!(
        "Model flagged {}:{} - {}",
        review.file,
        review
            .line
            .map_or_else(|| "?".to_string(), |l| l.to_string()),
        review.message
    );

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&review)?);
        return Ok(());
    }

    let token =
        std::env::var("GITHUB_TOKEN").context("GITHUB_TOKEN environment variable is not set")?;
    let github = adapters::GitHubClient::new(token)?;
    let publisher = core::CommentPublisher::new(&github, &ctx);

    match publisher.publish(&review).await? {
        core::PostOutcome::Inline => {
            println!(
                "Inline comment posted to {}/{}#{} at {}:{}",
                ctx.owner,
                ctx.repo,
                ctx.pr_number,
                review.file,
                review.line.unwrap_or_default()
            );
        }
        core::PostOutcome::IssueComment => {
            println!(
                "Comment posted to {}/{}#{}",
                ctx.owner, ctx.repo, ctx.pr_number
            );
        }
    }

    Ok(())
}
