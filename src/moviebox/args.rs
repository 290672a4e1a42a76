use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moviebox", version)]
#[command(about = "Movie catalog kept as one JSON document per movie", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the movie documents
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all movies, newest first
    #[command(alias = "ls")]
    List,

    /// Add a movie
    #[command(alias = "a")]
    Add(AddArgs),

    /// Show one or more movies in full
    #[command(alias = "v")]
    View {
        /// Movie ids (file names work too)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change fields of a movie
    #[command(alias = "e")]
    Edit(EditArgs),

    /// Delete one or more movies
    #[command(alias = "rm")]
    Delete {
        /// Movie ids (file names work too)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Import movies from a JSON file (an array of movie objects)
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Export all movies into a single JSON file
    Export {
        /// Destination file (defaults to the configured export-file)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the document instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// List the stored JSON documents with their sizes
    Files,

    /// Print one stored JSON document as it is on disk
    Show {
        /// Movie id (file names work too)
        id: String,
    },

    /// Check a JSON file against the import schema without importing it
    Validate {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-dir, export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub director: String,

    #[arg(long)]
    pub year: i64,

    #[arg(long)]
    pub genre: String,

    /// Running time in minutes
    #[arg(long)]
    pub duration: i64,

    /// Rating from 0 to 10
    #[arg(long)]
    pub rating: f64,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub cast: String,

    /// Poster URL
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Movie id (file names work too)
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub director: Option<String>,

    #[arg(long)]
    pub year: Option<i64>,

    #[arg(long)]
    pub genre: Option<String>,

    /// Running time in minutes
    #[arg(long)]
    pub duration: Option<i64>,

    /// Rating from 0 to 10
    #[arg(long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub cast: Option<String>,

    /// Poster URL
    #[arg(long, conflicts_with = "clear_image")]
    pub image_url: Option<String>,

    /// Remove the poster URL
    #[arg(long)]
    pub clear_image: bool,
}
