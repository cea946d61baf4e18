//! Command-line argument definitions using clap derive.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Terminal client for the Quill blog API
#[derive(Parser, Debug)]
#[command(name = "blog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the blog API
    #[arg(
        long,
        global = true,
        env = "BLOG_API_URL",
        default_value = "http://127.0.0.1:8080"
    )]
    pub api_url: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Defaults to `list`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every post
    List,

    /// Show a single post
    Show {
        /// Post id
        id: Uuid,
    },

    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: String,
    },

    /// Edit a post; fields left out keep their current value
    Edit {
        /// Post id
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: Uuid,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["blog"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_edit_accepts_partial_fields() {
        let id = Uuid::new_v4();
        let cli =
            Cli::try_parse_from(["blog", "edit", &id.to_string(), "--title", "New"]).unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Edit {
                id,
                title: Some("New".into()),
                content: None,
                category: None,
            })
        );
    }

    #[test]
    fn test_create_requires_every_field() {
        assert!(Cli::try_parse_from(["blog", "create", "--title", "Hello"]).is_err());
    }

    #[test]
    fn test_rejects_malformed_id() {
        assert!(Cli::try_parse_from(["blog", "show", "not-a-uuid"]).is_err());
    }

    #[test]
    fn test_api_url_flag() {
        let cli = Cli::try_parse_from(["blog", "--api-url", "http://blog:9000", "list"]).unwrap();
        assert_eq!(cli.api_url, "http://blog:9000");
    }
}
