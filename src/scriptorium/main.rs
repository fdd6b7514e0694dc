use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use scriptorium::api::{
    parse_creation_date, ArticleUpdate, BlogApi, BlogPaths, CmdMessage, ConfigAction,
    MessageLevel,
};
use scriptorium::config::BlogConfig;
use scriptorium::error::{BlogError, Result};
use scriptorium::model::{format_date, Article};
use scriptorium::store::fs::ArticleStore;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const ROOT_ENV: &str = "SCRIPTORIUM_ROOT";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("scriptorium={default_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

struct AppContext {
    api: BlogApi<ArticleStore>,
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { limit, all }) => handle_list(&ctx, limit, all),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::New {
            title,
            content,
            file,
        }) => handle_new(&ctx, title, content, file),
        Some(Commands::Edit {
            id,
            title,
            content,
            file,
            date,
        }) => handle_edit(&ctx, id, title, content, file, date),
        Some(Commands::Import { path, title }) => handle_import(&ctx, &path, title),
        Some(Commands::Doctor) => handle_doctor(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, false),
    }
}

fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }
    if let Some(root) = std::env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root));
    }
    ProjectDirs::from("org", "scriptorium", "scriptorium")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BlogError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = resolve_root(cli)?;
    debug!(root = %root.display(), "using blog root");

    let config = BlogConfig::load(&root)?;
    let (store, report) = ArticleStore::open(&root)?;
    for skipped in &report.skipped {
        eprintln!(
            "{}",
            format!("Warning: skipped article {}: {}", skipped.id, skipped.error).yellow()
        );
    }

    let api = BlogApi::new(store, BlogPaths::new(root), config);
    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, limit: Option<usize>, all: bool) -> Result<()> {
    let result = if all {
        ctx.api.list_articles(None)?
    } else if limit.is_some() {
        ctx.api.list_articles(limit)?
    } else {
        ctx.api.home()?
    };
    print_articles(&result.listed_articles, ctx.api.settings().preview_chars);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_articles(&ids)?;
    print_full_articles(&result.listed_articles);
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(
    ctx: &AppContext,
    title: String,
    content: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let content = match (content, file) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => read_file(&path)?,
        (None, None) => read_stdin()?,
    };
    let result = ctx.api.create_article(title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &AppContext,
    id: String,
    title: Option<String>,
    content: Option<String>,
    file: Option<PathBuf>,
    date: Option<String>,
) -> Result<()> {
    let mut update = ArticleUpdate::new(id);
    if let Some(title) = title {
        update = update.title(title);
    }
    match (content, file) {
        (Some(text), _) => update = update.content(text),
        (None, Some(path)) => update = update.content(read_file(&path)?),
        (None, None) => {}
    }
    if let Some(date) = date {
        update = update.creation_date(parse_creation_date(&date)?);
    }

    let result = ctx.api.update_article(&update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &AppContext, path: &Path, title: Option<String>) -> Result<()> {
    let result = ctx.api.import_article(path, title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in BlogConfig::keys() {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(BlogError::Io)
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(BlogError::Api(
            "No content given: pass it as an argument, with --file, or on stdin".into(),
        ));
    }
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf).map_err(BlogError::Io)?;
    Ok(buf)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_articles(articles: &[Article]) {
    for (i, article) in articles.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format_date(article.meta.creation_date).yellow(),
            article.meta.title.bold()
        );
        println!("{}", article.meta.id.dimmed());
        println!("--------------------------------");
        println!("{}", article.content_lossy());
    }
}

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 12;

fn print_articles(articles: &[Article], preview_chars: usize) {
    if articles.is_empty() {
        println!("No articles found.");
        return;
    }

    for article in articles {
        let date = format!("{:<width$}", format_date(article.meta.creation_date), width = DATE_WIDTH);
        let id = format!("  {}", article.meta.id);

        let preview: String = article
            .content_lossy()
            .chars()
            .take(preview_chars)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if preview.trim().is_empty() {
            article.meta.title.clone()
        } else {
            format!("{} {}", article.meta.title, preview.trim())
        };

        let available = LINE_WIDTH.saturating_sub(DATE_WIDTH + id.width());
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}",
            date.yellow(),
            title_display,
            " ".repeat(padding),
            id.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

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
