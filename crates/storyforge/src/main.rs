//! Storyforge CLI binary.
//!
//! This binary provides command-line access to Storyforge's functionality:
//! - Run the HTTP API
//! - Generate quick stories, structured stories and scripts
//! - Suggest story ideas
//! - Manage the saved story library

use clap::Parser;
use storyforge::StoryforgeConfig;
use storyforge::StructuredStoryRequest;
use storyforge::observability::{ObservabilityConfig, init_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_library_command, prompts, quick_story, script, serve_api,
        structured_story,
    };

    // A missing .env is fine; the key may come from the real environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = StoryforgeConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    init_observability(&ObservabilityConfig::from_logging(
        &config.logging,
        cli.verbose,
    ))?;

    // Execute the requested command
    match cli.command {
        Commands::Serve { host, port } => {
            serve_api(config, host, port).await?;
        }

        Commands::Quick { prompt, format } => {
            quick_story(&config, prompt, format).await?;
        }

        Commands::Story {
            character,
            setting,
            twist,
            template,
            kids,
            save,
            format,
        } => {
            let request = StructuredStoryRequest {
                character,
                setting,
                twist,
                template,
                kids_mode: kids,
            };
            structured_story(&config, request, save, format).await?;
        }

        Commands::Script {
            premise,
            script_type,
            genre,
            output,
        } => {
            script(&config, premise, script_type, genre, output.as_deref()).await?;
        }

        Commands::Prompts { format } => {
            prompts(&config, format).await?;
        }

        Commands::Library(library_cmd) => {
            handle_library_command(&config, library_cmd).await?;
        }
    }

    Ok(())
}
