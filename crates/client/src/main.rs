//! catalog-client CLI entry point.

use catalog_client::cli::{Cli, Commands, OutputFormat};
use catalog_client::client::courses::{CreateCourseRequest, UpdateCourseRequest};
use catalog_client::client::CatalogClient;
use catalog_client::output::{format_output, pretty};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = CatalogClient::new(&cli.base_url);

    match cli.command {
        Commands::Courses(courses_cmd) => {
            use catalog_client::cli::courses::CoursesAction;
            match courses_cmd.action {
                CoursesAction::Create { name, price } => {
                    let course = client
                        .create_course(CreateCourseRequest { name, price })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&course, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_course(&course))
                        }
                    }
                }
                CoursesAction::Get { id } => {
                    let course = client.get_course(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&course, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_course(&course)),
                    }
                }
                CoursesAction::Update { id, name, price } => {
                    let course = client
                        .update_course(id, UpdateCourseRequest { name, price })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&course, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_course(&course))
                        }
                    }
                }
                CoursesAction::Delete { id } => {
                    client.delete_course(id).await?;
                    if !cli.quiet {
                        println!("Deleted course {}", id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use catalog_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.health_live().await?;
                    if !cli.quiet {
                        println!("OK");
                    }
                }
                HealthAction::Info => {
                    let info = client.health_info().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&info, cli.format)),
                        OutputFormat::Pretty => {
                            println!(
                                "Health: {}\n  Storage: {}\n  Cache: {}",
                                info.status, info.storage, info.cache
                            )
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
