use clap::{Parser, Subcommand};

/// Returns the version string, with the git hash appended for source builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "webnote", bin_name = "webnote", version = get_version())]
#[command(about = "A multi-page note pad with one-step undo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List pages
    #[command(alias = "ls")]
    List,

    /// Print a page
    #[command(alias = "v")]
    Show {
        /// Page number (defaults to the first page)
        #[arg(value_parser = page_number)]
        page: Option<usize>,
    },

    /// Create a new empty page
    #[command(alias = "n")]
    New,

    /// Replace the text of a page
    Write {
        #[arg(value_parser = page_number)]
        page: usize,

        /// New text for the page
        text: String,
    },

    /// Rename a page (a blank name keeps the current one)
    Rename {
        #[arg(value_parser = page_number)]
        page: usize,

        name: String,
    },

    /// Delete a page
    #[command(alias = "rm")]
    Delete {
        #[arg(value_parser = page_number)]
        page: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Empty the text of a page
    Clear {
        #[arg(value_parser = page_number)]
        page: usize,
    },

    /// Copy a page's text to the clipboard
    Copy {
        #[arg(value_parser = page_number)]
        page: Option<usize>,
    },

    /// Save a page's text as a .txt file
    Export {
        #[arg(value_parser = page_number)]
        page: Option<usize>,

        /// Directory to write to (defaults to the configured export dir)
        #[arg(short, long)]
        dir: Option<std::path::PathBuf>,
    },

    /// Interactive editing session (the default)
    Session,
}

/// Parses a 1-based page number into a 0-based index.
fn page_number(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("'{}' is not a page number (1, 2, ...)", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_are_one_based() {
        assert_eq!(page_number("1"), Ok(0));
        assert_eq!(page_number("12"), Ok(11));
        assert!(page_number("0").is_err());
        assert!(page_number("p1").is_err());
    }

    #[test]
    fn parses_write_command() {
        let cli = Cli::try_parse_from(["webnote", "write", "2", "hello world"]).unwrap();
        match cli.command {
            Some(Commands::Write { page, text }) => {
                assert_eq!(page, 1);
                assert_eq!(text, "hello world");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["webnote", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
