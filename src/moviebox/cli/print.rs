use chrono::Utc;
use colored::Colorize;
use moviebox::api::{CmdMessage, DocumentFile, MessageLevel};
use moviebox::config::{MovieboxConfig, KEYS};
use moviebox::model::StoredMovie;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const RATING_WIDTH: usize = 6;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per movie: title, year and director on the left, rating and age
/// on the right, id underneath.
pub fn print_movies(movies: &[StoredMovie]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }

    for movie in movies {
        let record = &movie.record;
        let left = format!("{} ({}), {}", record.title, record.year, record.director);
        let available = LINE_WIDTH.saturating_sub(RATING_WIDTH + TIME_WIDTH + 4);
        let left_display = truncate_to_width(&left, available);
        let padding = available.saturating_sub(left_display.width());

        println!(
            "  {}{}  {}{}",
            left_display.bold(),
            " ".repeat(padding),
            format!("{:>width$.1}", record.rating, width = RATING_WIDTH).yellow(),
            format_time_ago(movie).dimmed()
        );
        println!("    {}", movie.id.to_string().dimmed());
    }
}

pub fn print_full_movies(movies: &[StoredMovie]) {
    for (i, movie) in movies.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let record = &movie.record;
        println!("{} ({})", record.title.bold(), record.year);
        println!("--------------------------------");
        println!("{:<12}{}", "Director:", record.director);
        println!("{:<12}{}", "Genre:", record.genre);
        println!("{:<12}{} min", "Duration:", record.duration);
        println!("{:<12}{:.1}", "Rating:", record.rating);
        if !record.cast.is_empty() {
            println!("{:<12}{}", "Cast:", record.cast);
        }
        if let Some(url) = record.image_url.as_deref().filter(|_| record.has_poster()) {
            println!("{:<12}{}", "Poster:", url);
        }
        if let Some(created) = record.created_at.as_deref() {
            println!("{:<12}{}", "Added:", created);
        }
        println!("{:<12}{}", "Id:", movie.id.to_string().dimmed());
        if !record.description.is_empty() {
            println!();
            println!("{}", record.description);
        }
    }
}

pub fn print_documents(documents: &[DocumentFile]) {
    if documents.is_empty() {
        println!("No documents found.");
        return;
    }
    for doc in documents {
        println!(
            "{}.json {}",
            doc.id.to_string().bold(),
            format!("({} bytes)", doc.size).dimmed()
        );
    }
}

pub fn print_document_content(documents: &[DocumentFile]) {
    for doc in documents {
        println!("{}", doc.content);
    }
}

pub fn print_config(config: &MovieboxConfig) {
    for key in KEYS {
        let value = config.get(key).unwrap_or_default();
        let value = if value.is_empty() {
            "(default)".dimmed().to_string()
        } else {
            value
        };
        println!("{} = {}", key, value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(movie: &StoredMovie) -> String {
    let time_str = match movie.record.created_at_time() {
        Some(created) => {
            let duration = Utc::now().signed_duration_since(created);
            Formatter::new().convert(duration.to_std().unwrap_or_default())
        }
        None => "undated".to_string(),
    };
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
