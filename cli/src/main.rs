mod process;

use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use gitavyasa_backend::types::ConflictPolicy;

use crate::process::{process_all, process_one, ProcessOptions};

#[derive(Parser, Debug)]
#[command(name = "gitavyasa")]
#[command(author, version, about = "Structure Devanagari Gita commentaries into per-verse records", long_about = None)]
struct Cli {
    /// Optional path to a verse map TSV (chapter, verse_number,
    /// verse_full_text). Without it the canonical verse text is taken
    /// heuristically from the commentary itself.
    #[arg(long, global = true, value_name = "TSV_PATH", env = "GITAVYASA_VERSE_MAP")]
    verse_map: Option<PathBuf>,

    /// How to resolve two sections claiming the same chapter and verse.
    #[arg(long, global = true, value_name = "POLICY", default_value = "keep-first")]
    on_conflict: ConflictPolicy,

    /// Directory for the generated TSV/JSON files.
    #[arg(long, short, global = true, value_name = "DIRECTORY_PATH", default_value = "output")]
    output_dir: PathBuf,

    /// Also write each result as pretty-printed JSON.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process one pre-extracted commentary text file
    #[command(arg_required_else_help = true)]
    Process {
        /// Path to the UTF-8 commentary text file
        #[arg(value_name = "TEXT_PATH")]
        text_path: PathBuf,

        /// Name of the commentator to tag records with
        #[arg(long, value_name = "NAME")]
        acharya: String,
    },

    /// Process every .txt commentary in a directory, one acharya per file,
    /// named after the file stem
    #[command(arg_required_else_help = true)]
    ProcessAll {
        /// Directory containing <acharya>.txt files
        #[arg(value_name = "DIRECTORY_PATH")]
        texts_dir: PathBuf,
    },
}

fn main() {
    // Attempt to load .env. It may define GITAVYASA_VERSE_MAP or LOG_LEVEL;
    // clap picks up the former via `env = "GITAVYASA_VERSE_MAP"`.
    let _ = dotenv();

    let cli = Cli::parse();

    let opts = ProcessOptions {
        verse_map_path: cli.verse_map,
        conflict_policy: cli.on_conflict,
        output_dir: cli.output_dir,
        write_json: cli.json,
    };

    let command_result = match cli.command {
        Commands::Process { text_path, acharya } => {
            process_one(&text_path, &acharya, &opts)
        }
        Commands::ProcessAll { texts_dir } => {
            process_all(&texts_dir, &opts)
        }
    };

    match command_result {
        Ok(count) => {
            println!("Done, {} records total.", count);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(1);
        }
    }
}
