//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storyforge::ScriptType;

/// Storyforge - story and screenplay generation from short prompts
#[derive(Parser, Debug)]
#[command(name = "storyforge")]
#[command(about = "Story and screenplay generation from short prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered above ./storyforge.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Interface to bind, overriding [server].host
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding [server].port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write a free-text story from a one-line prompt
    Quick {
        /// What the story should be about
        prompt: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write a titled story from a character, setting, and twist
    Story {
        /// Main character
        #[arg(long)]
        character: String,

        /// Where the story takes place
        #[arg(long)]
        setting: String,

        /// Plot twist
        #[arg(long)]
        twist: String,

        /// Genre template (fantasy, horror, comedy, scifi, adventure, mystery)
        #[arg(long, default_value = "fantasy")]
        template: String,

        /// Keep the story suitable for young readers
        #[arg(long)]
        kids: bool,

        /// Save the result to the story library
        #[arg(long)]
        save: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write a screenplay
    Script {
        /// Premise of the script
        premise: String,

        /// Script type (short, scene, feature, tv)
        #[arg(long = "type", value_parser = parse_script_type)]
        script_type: ScriptType,

        /// Genre of the script
        #[arg(long)]
        genre: String,

        /// Write the script to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Suggest six story ideas
    Prompts {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Saved story library commands
    #[command(subcommand)]
    Library(LibraryCommands),
}

/// Saved story library subcommands
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// List saved stories, newest first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show a saved story
    Show {
        /// Title of the story
        title: String,
    },

    /// Remove a saved story
    Remove {
        /// Title of the story
        title: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

fn parse_script_type(value: &str) -> Result<ScriptType, String> {
    ScriptType::parse(value).map_err(|e| e.kind.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_flags() {
        let cli = Cli::try_parse_from([
            "storyforge",
            "script",
            "Two rivals share a lighthouse",
            "--type",
            "TV",
            "--genre",
            "drama",
        ])
        .unwrap();

        match cli.command {
            Commands::Script {
                premise,
                script_type,
                genre,
                output,
            } => {
                assert_eq!(premise, "Two rivals share a lighthouse");
                assert_eq!(script_type, ScriptType::Tv);
                assert_eq!(genre, "drama");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_script_type_rejected() {
        let result = Cli::try_parse_from([
            "storyforge",
            "script",
            "premise",
            "--type",
            "opera",
            "--genre",
            "drama",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_story_defaults() {
        let cli = Cli::try_parse_from([
            "storyforge",
            "story",
            "--character",
            "Pirate",
            "--setting",
            "Sunken city",
            "--twist",
            "The map is a lie",
        ])
        .unwrap();

        match cli.command {
            Commands::Story {
                template,
                kids,
                save,
                format,
                ..
            } => {
                assert_eq!(template, "fantasy");
                assert!(!kids);
                assert!(!save);
                assert_eq!(format, OutputFormat::Human);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "storyforge",
            "library",
            "list",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::Library(LibraryCommands::List { .. })
        ));
    }
}
