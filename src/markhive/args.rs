use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markhive")]
#[command(about = "Render markdown notes into a searchable static HTML archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a notes directory into HTML plus a summary artifact
    #[command(alias = "b")]
    Build {
        /// Directory containing markdown notes
        notes_dir: PathBuf,

        /// Output directory for rendered HTML and summary.json
        #[arg(short, long, default_value = "output")]
        out_dir: PathBuf,
    },

    /// Search a summary artifact from the command line
    #[command(alias = "s")]
    Search {
        /// Search term ("*" or an empty string matches everything)
        term: String,

        /// Summary artifact to search
        #[arg(short, long, default_value = "output/summary.json")]
        summary: PathBuf,
    },

    /// Serve the rendered archive with a search endpoint
    Serve {
        /// Directory of rendered HTML documents
        #[arg(short = 'd', long, default_value = "output")]
        html_dir: PathBuf,

        /// Summary artifact (defaults to summary.json inside the html dir)
        #[arg(short, long)]
        summary: Option<PathBuf>,

        /// Bind address (overrides config.json)
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Bundle the rendered archive into a tar.gz
    Export {
        /// Directory of rendered HTML documents
        #[arg(short = 'd', long, default_value = "output")]
        out_dir: PathBuf,
    },
}
