//! Course CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Course management commands.
#[derive(Debug, Parser)]
pub struct CoursesCommand {
    #[command(subcommand)]
    pub action: CoursesAction,
}

/// Available course actions.
#[derive(Debug, Subcommand)]
pub enum CoursesAction {
    /// Create a new course.
    Create {
        /// Course name.
        #[arg(long)]
        name: String,
        /// Course price.
        #[arg(long)]
        price: f64,
    },
    /// Get course by ID.
    Get {
        /// Course ID.
        id: Uuid,
    },
    /// Update a course. Omitted fields keep their current value.
    Update {
        /// Course ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New price.
        #[arg(long)]
        price: Option<f64>,
    },
    /// Delete course by ID.
    Delete {
        /// Course ID.
        id: Uuid,
    },
}
