use campusdesk::logging::LogFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "campusdesk", bin_name = "campusdesk", version)]
#[command(
    about = "Paginated, filterable record lists of the institute console",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Log format: pretty, compact or json
    #[arg(long, global = true, default_value = "pretty", help_heading = "Options")]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of a collection
    #[command(alias = "ls")]
    List {
        /// colleges, students, faculty, questions, tests, assign, subjects,
        /// qualifications, chapters, topics, faculty-subjects, faculty-colleges
        collection: String,

        /// key=value, or key=a,b for multi-select filters (repeatable)
        #[arg(short, long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Page to show (clamped to the available pages)
        #[arg(short, long)]
        page: Option<usize>,

        /// Rows per page
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Print the values a filter control offers
    Options {
        collection: String,

        /// Filter key
        key: String,

        /// Other selections, as for `list`
        #[arg(short, long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,
    },

    /// Apply JSON-lines steps to a seeded screen and print the result
    Replay {
        collection: String,

        /// Script file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Validate a registration form given as JSON
    Register {
        /// student, faculty or college
        form: String,

        /// JSON file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Show or set display configuration
    Config {
        /// items-per-page, page-size-options, empty-message or controls
        key: Option<String>,

        value: Option<String>,
    },
}
