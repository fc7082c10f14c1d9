//! Terminal client: the presentation layer over [`webnote::session`].
//!
//! Every invocation is one session. One-shot commands open it, apply a
//! single intent and exit; `session` keeps it open for an interactive loop.

mod args;
mod interactive;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::io::BufRead;
use std::path::PathBuf;
use webnote::clipboard::SystemClipboard;
use webnote::config::WebnoteConfig;
use webnote::error::{NoteError, Result};
use webnote::export::DirExporter;
use webnote::keys::KeyChord;
use webnote::session::{EditorSession, Feedback, Notice};
use webnote::store::FileStore;

use print::{print_messages, print_page, print_pages};

/// Overrides the platform data directory.
const DATA_ENV: &str = "WEBNOTE_DATA";

struct AppContext {
    session: EditorSession<FileStore>,
    config: WebnoteConfig,
    undo_chord: KeyChord,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    webnote::logging::init(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { page }) => handle_show(&mut ctx, page.unwrap_or(0)),
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::Write { page, text }) => handle_write(&mut ctx, page, text),
        Some(Commands::Rename { page, name }) => handle_rename(&mut ctx, page, &name),
        Some(Commands::Delete { page, yes }) => handle_delete(&mut ctx, page, yes),
        Some(Commands::Clear { page }) => handle_clear(&mut ctx, page),
        Some(Commands::Copy { page }) => handle_copy(&mut ctx, page.unwrap_or(0)),
        Some(Commands::Export { page, dir }) => handle_export(&mut ctx, page.unwrap_or(0), dir),
        Some(Commands::Session) | None => interactive::run(&mut ctx),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "webnote", "webnote")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            NoteError::PersistenceUnavailable("could not determine a data directory".into())
        })
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;

    let config = WebnoteConfig::load(&data_dir).unwrap_or_else(|e| {
        warn(&format!("Ignoring config: {}", e));
        WebnoteConfig::default()
    });
    let undo_chord = config.undo_chord().unwrap_or_else(|e| {
        warn(&format!("{}, using ctrl+z", e));
        KeyChord::ctrl('z')
    });

    let store = FileStore::new(data_dir).with_key(&config.storage_key);
    tracing::debug!(location = %store.location().display(), "opening pages");
    let session = EditorSession::open(store);

    Ok(AppContext {
        session,
        config,
        undo_chord,
    })
}

fn warn(message: &str) {
    eprintln!("{}", format!("Warning: {}", message).yellow());
}

/// Print the notices; a refusal becomes the command's error.
fn finish(feedback: Feedback) -> Result<()> {
    match feedback.refusal {
        Some(err) => {
            let shown = Notice::from_error(&err);
            let others: Vec<_> = feedback
                .messages
                .into_iter()
                .filter(|m| *m != shown)
                .collect();
            print_messages(&others);
            Err(err)
        }
        None => {
            print_messages(&feedback.messages);
            Ok(())
        }
    }
}

fn select(ctx: &mut AppContext, page: usize) -> Result<()> {
    finish(ctx.session.select_page(page))
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_pages(&ctx.session.list_pages());
    Ok(())
}

fn handle_show(ctx: &mut AppContext, page: usize) -> Result<()> {
    select(ctx, page)?;
    print_page(page, ctx.session.active_page());
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    finish(ctx.session.create_page())
}

fn handle_write(ctx: &mut AppContext, page: usize, text: String) -> Result<()> {
    select(ctx, page)?;
    let mut feedback = ctx.session.set_text(text);
    if feedback.messages.is_empty() {
        let name = ctx.session.active_page().display_name(page);
        feedback.add_message(Notice::success(format!("Page saved: {}", name)));
    }
    finish(feedback)
}

fn handle_rename(ctx: &mut AppContext, page: usize, name: &str) -> Result<()> {
    select(ctx, page)?;
    finish(ctx.session.request_rename())?;
    finish(ctx.session.confirm_rename(name))
}

fn handle_delete(ctx: &mut AppContext, page: usize, yes: bool) -> Result<()> {
    select(ctx, page)?;
    finish(ctx.session.request_delete())?;

    let name = ctx.session.active_page().display_name(page);
    if yes || confirm(&format!("Delete \"{}\"? [y/N] ", name))? {
        finish(ctx.session.confirm_delete())
    } else {
        ctx.session.cancel_delete();
        print_messages(&[Notice::info("Delete cancelled")]);
        Ok(())
    }
}

fn handle_clear(ctx: &mut AppContext, page: usize) -> Result<()> {
    select(ctx, page)?;
    finish(ctx.session.clear())
}

fn handle_copy(ctx: &mut AppContext, page: usize) -> Result<()> {
    select(ctx, page)?;
    finish(ctx.session.copy(&mut SystemClipboard))
}

fn handle_export(ctx: &mut AppContext, page: usize, dir: Option<PathBuf>) -> Result<()> {
    select(ctx, page)?;
    let mut exporter = DirExporter::new(export_dir(ctx, dir)?);
    finish(ctx.session.download(&mut exporter))
}

fn export_dir(ctx: &AppContext, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir.or_else(|| ctx.config.export_dir.clone()) {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(NoteError::Io),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    print!("{}", prompt);
    std::io::stdout().flush().map_err(NoteError::Io)?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(NoteError::Io)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
