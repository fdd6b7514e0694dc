use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scriptorium")]
#[command(about = "Manage the articles of a personal blog", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Blog root directory (articles live in <root>/articles).
    /// Defaults to $SCRIPTORIUM_ROOT, then the user data directory.
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List articles, newest first
    #[command(alias = "ls")]
    List {
        /// How many to show (defaults to the configured home-limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show every article
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Print one or more articles
    #[command(alias = "v")]
    View {
        /// Article ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Create a new article dated today
    #[command(alias = "n")]
    New {
        /// Title of the article
        title: String,

        /// Markdown content (read from stdin when neither this nor --file is given)
        #[arg(conflicts_with = "file")]
        content: Option<String>,

        /// Read the markdown content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Edit an existing article (creation date is kept unless --date is given)
    #[command(alias = "e")]
    Edit {
        /// Article id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New markdown content
        #[arg(short, long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the new markdown content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// New creation date (DD.MM.YYYY)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Create an article from a markdown file
    Import {
        /// Markdown file to import
        path: PathBuf,

        /// Title (defaults to the first "# " heading, then the file name)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Check meta.json and content files for inconsistencies
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (home-limit, preview-chars)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_with_date() {
        let cli = Cli::try_parse_from([
            "scriptorium",
            "edit",
            "abc",
            "--title",
            "New",
            "--date",
            "01.02.2024",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Edit {
                id, title, date, ..
            }) => {
                assert_eq!(id, "abc");
                assert_eq!(title.as_deref(), Some("New"));
                assert_eq!(date.as_deref(), Some("01.02.2024"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn content_and_file_conflict() {
        let parsed = Cli::try_parse_from(["scriptorium", "new", "T", "body", "--file", "x.md"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["scriptorium", "--root", "/tmp/blog"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/blog")));
    }
}
