mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "semdir")]
#[command(about = "Generate semester folder trees from a weekly class timetable")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the folder paths a timetable would generate
    Preview {
        /// Timetable file (falls back to the configured default)
        file: Option<PathBuf>,

        /// Semester start date (YYYY-MM-DD); week numbers count from here
        #[arg(long)]
        from: String,

        /// Last date to generate (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: String,

        /// Dates to skip, comma-separated YYYY-MM-DD
        #[arg(long)]
        holidays: Option<String>,

        /// Folder pattern ({SUBJECT} {WEEK} {WEEK2} {WEEKDAY_KO} {YYYY} {MM} {DD})
        #[arg(long)]
        pattern: Option<String>,

        /// Print occurrences as JSON instead of resolved paths
        #[arg(long)]
        json: bool,
    },
    /// Package every generated folder into a single .tar.gz archive
    Export {
        /// Timetable file (falls back to the configured default)
        file: Option<PathBuf>,

        /// Semester start date (YYYY-MM-DD); week numbers count from here
        #[arg(long)]
        from: String,

        /// Last date to generate (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: String,

        /// Dates to skip, comma-separated YYYY-MM-DD
        #[arg(long)]
        holidays: Option<String>,

        /// Folder pattern ({SUBJECT} {WEEK} {WEEK2} {WEEKDAY_KO} {YYYY} {MM} {DD})
        #[arg(long)]
        pattern: Option<String>,

        /// Where to write the archive
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Write a _meta.txt record inside each folder
        #[arg(long)]
        meta: bool,
    },
    /// Write a commented timetable template to start from
    Init {
        /// Where to write the template
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview {
            file,
            from,
            to,
            holidays,
            pattern,
            json,
        } => commands::preview::run(file, &from, &to, holidays, pattern, json),
        Commands::Export {
            file,
            from,
            to,
            holidays,
            pattern,
            out,
            meta,
        } => commands::export::run(file, &from, &to, holidays, pattern, out, meta).await,
        Commands::Init { path } => commands::init::run(&path),
    }
}
