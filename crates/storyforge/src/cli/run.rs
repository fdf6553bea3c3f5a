//! Command handlers.

use super::commands::{LibraryCommands, OutputFormat};
use std::path::Path;
use std::sync::Arc;
use storyforge::{
    AppState, CompletionDriver, FileSystemStoryStore, InputClassifier, JsonError, OracleClient,
    PromptBuilder, QuickStoryRequest, SavedStory, ScriptRequest, ScriptType, StorageError,
    StorageErrorKind, StoryGenerator, StoryStore, StoryforgeConfig, StoryforgeResult,
    StructuredStoryRequest, SuggestionSource,
};
use tracing::{info, warn};

/// Builds the generation pipeline from configuration.
///
/// A missing API key is not an error here; generation calls report it and
/// prompt suggestions fall back to the curated pool.
pub fn build_generator(config: &StoryforgeConfig) -> StoryforgeResult<StoryGenerator> {
    let client = OracleClient::new(config.oracle.clone())?;
    if !client.has_credential() {
        warn!(
            env_var = %config.oracle.api_key_env,
            "No API key found; generation will fail until it is set"
        );
    }

    Ok(StoryGenerator::new(Arc::new(client))
        .with_classifier(InputClassifier::new(config.classifier.clone()))
        .with_builder(PromptBuilder::new(config.generation.genre_policy)))
}

/// Opens the saved-story library named by `[storage]`.
pub fn open_library(config: &StoryforgeConfig) -> StoryforgeResult<FileSystemStoryStore> {
    let path = config.storage.library_path()?;
    FileSystemStoryStore::new(path)
}

/// Runs the HTTP API until Ctrl-C.
pub async fn serve_api(
    mut config: StoryforgeConfig,
    host: Option<String>,
    port: Option<u16>,
) -> StoryforgeResult<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let generator = Arc::new(build_generator(&config)?);
    let store: Arc<dyn StoryStore> = Arc::new(open_library(&config)?);
    info!(model = %config.oracle.model, "Starting storyforge API");

    storyforge::serve(&config.server, AppState::new(generator, store)).await
}

/// Prints a quick story.
pub async fn quick_story(
    config: &StoryforgeConfig,
    prompt: String,
    format: OutputFormat,
) -> StoryforgeResult<()> {
    let generator = build_generator(config)?;
    let result = generator.quick_story(&QuickStoryRequest::new(prompt)).await?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&result)?),
        OutputFormat::Human => println!("{}", result.story),
    }
    Ok(())
}

/// Prints a structured story, optionally saving it to the library.
pub async fn structured_story(
    config: &StoryforgeConfig,
    request: StructuredStoryRequest,
    save: bool,
    format: OutputFormat,
) -> StoryforgeResult<()> {
    let generator = build_generator(config)?;
    let result = generator.structured_story(&request).await?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&result)?),
        OutputFormat::Human => println!("{}", result.to_plain_text()),
    }

    if save {
        let library = open_library(config)?;
        let story = SavedStory::from_generation(&request, &result);
        if library.save(story).await? {
            eprintln!("Saved \"{}\" to {}", result.title, library.path().display());
        } else {
            eprintln!("Replaced \"{}\" in {}", result.title, library.path().display());
        }
    }
    Ok(())
}

/// Prints or writes a screenplay.
pub async fn script(
    config: &StoryforgeConfig,
    premise: String,
    script_type: ScriptType,
    genre: String,
    output: Option<&Path>,
) -> StoryforgeResult<()> {
    let generator = build_generator(config)?;
    let request = ScriptRequest {
        premise,
        script_type,
        genre,
    };
    let result = generator.script(&request).await?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &result.script).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            eprintln!("Wrote {} script to {}", script_type, path.display());
        }
        None => println!("{}", result.script),
    }

    if result.truncated {
        eprintln!(
            "Note: the script reached the length limit ({}) and may be incomplete.",
            result.finish_reason
        );
    }
    Ok(())
}

/// Prints six story ideas.
pub async fn prompts(config: &StoryforgeConfig, format: OutputFormat) -> StoryforgeResult<()> {
    let generator = build_generator(config)?;
    let result = generator.prompt_suggestions().await;

    match format {
        OutputFormat::Json => println!("{}", to_json(&result.items)?),
        OutputFormat::Human => {
            for (index, item) in result.items.iter().enumerate() {
                println!("{}. {}", index + 1, item.title);
                println!("   {}", item.description);
            }
            if result.source == SuggestionSource::Fallback {
                eprintln!("(curated suggestions; the completion service was unavailable)");
            }
        }
    }
    Ok(())
}

/// Handle saved story library commands.
pub async fn handle_library_command(
    config: &StoryforgeConfig,
    cmd: LibraryCommands,
) -> StoryforgeResult<()> {
    let library = open_library(config)?;

    match cmd {
        LibraryCommands::List { format } => {
            let stories = library.list().await?;
            match format {
                OutputFormat::Json => println!("{}", to_json(&stories)?),
                OutputFormat::Human => {
                    println!("Saved stories in {}:", library.path().display());
                    println!("{:-<80}", "");
                    for story in &stories {
                        println!(
                            "{}  [{}]  {}",
                            story.saved_at.format("%Y-%m-%d %H:%M"),
                            story.template,
                            story.title
                        );
                    }
                    println!("{:-<80}", "");
                    println!("Total: {} stories", stories.len());
                }
            }
        }

        LibraryCommands::Show { title } => match library.get(&title).await? {
            Some(story) => println!("{}", story.result().to_plain_text()),
            None => eprintln!("No saved story titled \"{}\"", title),
        },

        LibraryCommands::Remove { title } => {
            if library.delete(&title).await? {
                println!("Removed \"{}\"", title);
            } else {
                eprintln!("No saved story titled \"{}\"", title);
            }
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> StoryforgeResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?)
}
