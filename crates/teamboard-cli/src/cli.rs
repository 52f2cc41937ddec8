//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use teamboard_api::DEFAULT_POST_LIMIT;

#[derive(Debug, Parser)]
#[command(name = "teamboard", version, about = "Teamboard posts and registration client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Work with company posts
    #[command(subcommand)]
    Posts(PostsCommand),

    /// Validate a registration form (JSON file) and submit it
    Register {
        /// Path to the form as camelCase JSON
        form: PathBuf,

        /// Password confirmation as typed a second time
        #[arg(long, env = "TEAMBOARD_CONFIRM_PASSWORD")]
        confirm_password: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum PostsCommand {
    /// List a company's posts
    List {
        company_id: String,

        #[arg(long, default_value_t = DEFAULT_POST_LIMIT)]
        limit: u32,
    },

    /// Create a post
    Create {
        user_id: String,
        company_id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Image URL, repeatable
        #[arg(long = "image")]
        images: Vec<String>,
    },

    /// Rate a post up on behalf of a user
    Rate { post_id: String, user_id: String },
}
