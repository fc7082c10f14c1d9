use super::print::{print_messages, print_page, print_pages};
use super::{export_dir, is_yes, AppContext};
use colored::Colorize;
use std::io::{BufRead, Write};
use webnote::clipboard::SystemClipboard;
use webnote::error::{NoteError, Result};
use webnote::export::DirExporter;
use webnote::keys::{KeyChord, KeySignal, LocalKeySource};
use webnote::session::{Feedback, ModalState, Notice};

const HELP: &str = "\
Lines not starting with ':' are appended to the current page.

  :list            list pages
  :show            print the current page
  :go N            switch to page N
  :new             create a page and switch to it
  :set TEXT        replace the current page's text
  :rename          rename the current page
  :delete          delete the current page
  :clear           empty the current page
  :undo            restore the last cleared text (or type the undo keys, e.g. ctrl+z)
  :copy            copy the current page to the clipboard
  :export          save the current page as a .txt file
  :quit            leave the session";

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Help,
    List,
    Show,
    Go(usize),
    New,
    Set(String),
    Append(String),
    Rename,
    Delete,
    Clear,
    Undo,
    Copy,
    Export,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str) -> Line {
    let Some(command) = line.strip_prefix(':') else {
        return Line::Append(line.to_string());
    };
    let (name, rest) = match command.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (command, ""),
    };

    match name {
        "help" | "h" | "?" => Line::Help,
        "list" | "ls" => Line::List,
        "show" => Line::Show,
        "go" | "select" => match rest.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Line::Go(n - 1),
            _ => Line::Unknown(line.to_string()),
        },
        "new" => Line::New,
        "set" => Line::Set(rest.to_string()),
        "rename" => Line::Rename,
        "delete" | "rm" => Line::Delete,
        "clear" => Line::Clear,
        "undo" => Line::Undo,
        "copy" => Line::Copy,
        "export" | "download" => Line::Export,
        "quit" | "q" | "exit" => Line::Quit,
        _ => Line::Unknown(line.to_string()),
    }
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    drive(ctx, std::io::stdin().lock())
}

/// Run the session over `input`. The undo keys are released however the
/// loop ends.
fn drive(ctx: &mut AppContext, input: impl BufRead) -> Result<()> {
    let mut keys = LocalKeySource::new();
    ctx.session.attach_keys(&mut keys);

    let result = read_lines(ctx, &mut keys, input);

    ctx.session.detach_keys(&mut keys);
    result
}

fn read_lines(ctx: &mut AppContext, keys: &mut LocalKeySource, input: impl BufRead) -> Result<()> {
    let attended = console::user_attended();
    if attended {
        println!("{}", "webnote session, :help for commands".dimmed());
    }

    let mut lines = input.lines();
    loop {
        if attended {
            prompt(ctx)?;
        }
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(NoteError::Io)?;

        let Some(feedback) = step(ctx, keys, &line)? else {
            return Ok(());
        };
        print_messages(&feedback.messages);
        print_messages(&ctx.session.pump_keys(keys).messages);
    }
}

/// Apply one input line. `None` ends the session.
fn step(ctx: &mut AppContext, keys: &mut LocalKeySource, line: &str) -> Result<Option<Feedback>> {
    let chord = line.trim().parse::<KeyChord>().ok();

    // The undo keys work in every state and leave an open modal open.
    if chord.as_ref() == Some(&ctx.undo_chord) {
        keys.emit(KeySignal::UndoRequested);
        return Ok(Some(Feedback::default()));
    }

    let session = &mut ctx.session;

    match session.modal() {
        ModalState::RenameModalOpen => {
            if line.trim() == ":cancel" {
                session.cancel_rename();
                return Ok(Some(notice(Notice::info("Rename cancelled"))));
            }
            return Ok(Some(session.confirm_rename(line)));
        }
        ModalState::DeleteModalOpen => {
            if is_yes(line) {
                return Ok(Some(session.confirm_delete()));
            }
            session.cancel_delete();
            return Ok(Some(notice(Notice::info("Delete cancelled"))));
        }
        ModalState::Idle => {}
    }

    if let Some(chord) = chord {
        return Ok(Some(notice(Notice::warning(format!(
            "{} is not bound (undo is {})",
            chord, ctx.undo_chord
        )))));
    }

    let feedback = match parse_line(line) {
        Line::Help => {
            println!("{}", HELP);
            Feedback::default()
        }
        Line::List => {
            print_pages(&session.list_pages());
            Feedback::default()
        }
        Line::Show => {
            print_page(session.active_index(), session.active_page());
            Feedback::default()
        }
        Line::Go(index) => {
            let feedback = session.select_page(index);
            if !feedback.is_refused() {
                print_page(session.active_index(), session.active_page());
            }
            feedback
        }
        Line::New => session.create_page(),
        Line::Set(text) => session.set_text(text),
        Line::Append(text) => {
            let current = &session.active_page().text;
            let combined = if current.is_empty() {
                text
            } else {
                format!("{}\n{}", current, text)
            };
            session.set_text(combined)
        }
        Line::Rename => session.request_rename(),
        Line::Delete => session.request_delete(),
        Line::Clear => session.clear(),
        Line::Undo => {
            keys.emit(KeySignal::UndoRequested);
            Feedback::default()
        }
        Line::Copy => session.copy(&mut SystemClipboard),
        Line::Export => {
            let mut exporter = DirExporter::new(export_dir(ctx, None)?);
            ctx.session.download(&mut exporter)
        }
        Line::Quit => return Ok(None),
        Line::Unknown(input) => notice(Notice::warning(format!(
            "Unknown command: {} (:help lists commands)",
            input
        ))),
    };
    Ok(Some(feedback))
}

fn notice(message: Notice) -> Feedback {
    let mut feedback = Feedback::default();
    feedback.add_message(message);
    feedback
}

fn prompt(ctx: &AppContext) -> Result<()> {
    let session = &ctx.session;
    let index = session.active_index();
    let text = match session.modal() {
        ModalState::RenameModalOpen => format!("New name [{}]: ", session.rename_draft()),
        ModalState::DeleteModalOpen => format!(
            "Delete \"{}\"? [y/N] ",
            session.active_page().display_name(index)
        ),
        ModalState::Idle => format!(
            "[{}] {}> ",
            index + 1,
            session.active_page().display_name(index)
        ),
    };
    print!("{}", text.cyan());
    std::io::stdout().flush().map_err(NoteError::Io)
}
