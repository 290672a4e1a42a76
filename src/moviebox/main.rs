use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use moviebox::api::{ConfigAction, MovieChanges, MovieboxApi};
use moviebox::config::{MovieboxConfig, CONFIG_DIR_ENV};
use moviebox::error::{MovieboxError, Result};
use moviebox::model::MovieRecord;
use moviebox::store::fs::FileStore;
use moviebox::validation;
use std::path::PathBuf;
use tracing::{debug, warn};

mod args;
mod cli;
use args::{AddArgs, Cli, Commands, EditArgs};
use cli::print::{
    print_config, print_document_content, print_documents, print_full_movies, print_messages,
    print_movies,
};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli::logging::init_logging(cli.verbose) {
        eprintln!("Warning: could not set up logging: {}", e);
    }
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MovieboxApi<FileStore>,
    export_file: String,
}

fn run(cli: Cli) -> Result<()> {
    // Validation needs no store
    if let Some(Commands::Validate { file }) = &cli.command {
        return handle_validate(file);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Edit(args)) => handle_edit(&mut ctx, args),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { output, stdout }) => handle_export(&ctx, output, stdout),
        Some(Commands::Files) => handle_files(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Validate { .. }) => Ok(()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("com", "moviebox", "moviebox");

    let config_dir = match std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => proj_dirs
            .as_ref()
            .map(|d| d.config_dir().to_path_buf())
            .ok_or_else(|| MovieboxError::Store("Could not determine config dir".to_string()))?,
    };

    let config = MovieboxConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        MovieboxConfig::default()
    });

    let data_dir = match config.resolve_data_dir(cli.data_dir.clone()) {
        Some(dir) => dir,
        None => proj_dirs
            .as_ref()
            .map(|d| d.data_dir().join("movies"))
            .ok_or_else(|| MovieboxError::Store("Could not determine data dir".to_string()))?,
    };
    debug!(data_dir = %data_dir.display(), config_dir = %config_dir.display(), "resolved directories");

    let api = MovieboxApi::new(FileStore::new(data_dir), config_dir);
    Ok(AppContext {
        api,
        export_file: config.export_file,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_movies()?;
    print_movies(&result.listed_movies);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let mut record = MovieRecord::new(
        args.title,
        args.director,
        args.year,
        args.genre,
        args.duration,
        args.rating,
    );
    record.description = args.description;
    record.cast = args.cast;
    record.image_url = args.image_url;

    let result = ctx.api.add_movie(record)?;
    print_messages(&result.messages);
    for movie in &result.affected_movies {
        println!("{}", movie.id);
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_movies(&ids)?;
    print_full_movies(&result.listed_movies);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, args: EditArgs) -> Result<()> {
    let image_url = if args.clear_image {
        Some(None)
    } else {
        args.image_url.map(Some)
    };
    let changes = MovieChanges {
        title: args.title,
        director: args.director,
        year: args.year,
        genre: args.genre,
        duration: args.duration,
        rating: args.rating,
        description: args.description,
        cast: args.cast,
        image_url,
    };

    let result = ctx.api.edit_movie(&args.id, changes)?;
    print_messages(&result.messages);
    for movie in &result.affected_movies {
        println!("{}", movie.id);
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_movies(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&file)?;
    if !result.affected_movies.is_empty() {
        print_movies(&result.affected_movies);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>, stdout: bool) -> Result<()> {
    if stdout {
        println!("{}", ctx.api.export_document()?);
        return Ok(());
    }
    let dest = output.unwrap_or_else(|| PathBuf::from(&ctx.export_file));
    let result = ctx.api.export_movies(&dest)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_files(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.document_files()?;
    print_documents(&result.documents);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: String) -> Result<()> {
    let result = ctx.api.show_document(&id)?;
    print_document_content(&result.documents);
    print_messages(&result.messages);
    Ok(())
}

fn handle_validate(file: &std::path::Path) -> Result<()> {
    let (ok, message) = validation::validate_file(file);
    if !ok {
        eprintln!("Error: {}", message.red());
        std::process::exit(1);
    }
    println!("{}", message.green());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
