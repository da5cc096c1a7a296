//! CLI command definitions.

pub mod courses;
pub mod health;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the catalog API.
#[derive(Debug, Parser)]
#[command(name = "catalog-client")]
#[command(about = "CLI client for the catalog API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Course management.
    Courses(courses::CoursesCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use courses::CoursesAction;

    #[test]
    fn test_parse_update_with_price_only() {
        let cli = Cli::try_parse_from([
            "catalog-client",
            "--format",
            "json",
            "courses",
            "update",
            "7d7f0b9e-3c1a-4c5e-9f1e-2b7a9c3d4e5f",
            "--price",
            "12.5",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Courses(cmd) => match cmd.action {
                CoursesAction::Update { name, price, .. } => {
                    assert_eq!(name, None);
                    assert_eq!(price, Some(12.5));
                }
                other => panic!("Expected update, got {other:?}"),
            },
            other => panic!("Expected courses command, got {other:?}"),
        }
    }

    #[test]
    fn test_create_requires_name_and_price() {
        let result = Cli::try_parse_from(["catalog-client", "courses", "create", "--name", "x"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_get_rejects_invalid_id() {
        let result = Cli::try_parse_from(["catalog-client", "courses", "get", "not-a-uuid"]);

        assert!(result.is_err());
    }
}
