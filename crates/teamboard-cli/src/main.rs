//! Teamboard CLI - main entry point.

mod cli;
mod config;
mod error;

use crate::cli::{Cli, Command, PostsCommand};
use crate::config::{ApiConfig, Config};
use crate::error::{AppError, AppResult};
use anyhow::Context;
use clap::Parser;
use registration::{validate_all, RegistrationForm, RegistrationService};
use serde_json::Value;
use std::sync::Arc;
use teamboard_api::{
    ApiChannel, AuthHeaderProvider, BearerToken, NoAuth, PostClient, PostDraft, UserClient,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    let channel = build_channel(&config.api)?;
    info!("Using teamboard API at {}", channel.base_url());

    let output = run(cli.command, channel).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn build_channel(api: &ApiConfig) -> AppResult<ApiChannel> {
    let auth: Arc<dyn AuthHeaderProvider> = match &api.token {
        Some(token) if !token.trim().is_empty() => Arc::new(BearerToken::new(token.clone())),
        _ => {
            warn!("No API token configured, requests will be unauthenticated");
            Arc::new(NoAuth)
        }
    };
    Ok(ApiChannel::new(&api.base_url, auth)?)
}

async fn run(command: Command, channel: ApiChannel) -> AppResult<Value> {
    match command {
        Command::Posts(posts) => run_posts(posts, PostClient::new(channel)).await,
        Command::Register {
            form,
            confirm_password,
        } => {
            let raw = tokio::fs::read_to_string(&form).await?;
            let form: RegistrationForm = serde_json::from_str(&raw)?;

            let validation = validate_all(&form, confirm_password.as_deref());
            if !validation.valid {
                println!("{}", serde_json::to_string_pretty(&validation)?);
                return Err(AppError::InvalidForm);
            }

            let service = RegistrationService::new(UserClient::new(channel));
            let response = service.submit(&form).await?;
            info!("Registration completed with status {}", response.status);
            Ok(serde_json::json!({
                "status": response.status,
                "body": response.body,
            }))
        }
    }
}

async fn run_posts(command: PostsCommand, client: PostClient) -> AppResult<Value> {
    match command {
        PostsCommand::List { company_id, limit } => {
            let posts = client.list_by_company(&company_id, limit).await?;
            Ok(serde_json::to_value(posts)?)
        }
        PostsCommand::Create {
            user_id,
            company_id,
            title,
            subject,
            description,
            images,
        } => {
            let draft = PostDraft {
                title,
                subject,
                description,
                images,
            };
            let response = client.create(&user_id, &company_id, &draft).await?;
            Ok(serde_json::json!({
                "status": response.status,
                "body": response.body,
            }))
        }
        PostsCommand::Rate { post_id, user_id } => Ok(client.rate_up(&post_id, &user_id).await?),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
