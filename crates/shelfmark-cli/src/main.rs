//! shelfmark — rename ebook files from their embedded metadata

use std::path::{Path, PathBuf};

use clap::Parser;
use shelfmark_cli::{process_library, RunOptions};

#[derive(Parser, Debug)]
#[command(
    name = "shelfmark",
    version,
    about = "Rename ebook files from their embedded metadata",
    long_about = "Rename ebook files from their embedded metadata.\n\
                  \n\
                  Walks the given directory tree and renames every supported file\n\
                  (.epub, .fb2, .pdf) to Title-Author form derived from the file's\n\
                  own metadata. Files that cannot be handled are listed at the end\n\
                  of the run; a bad file never aborts the run."
)]
struct Args {
    /// Library directory to process
    #[arg(value_name = "DIRECTORY")]
    library: PathBuf,

    /// Print suggested filenames without renaming anything
    #[arg(long)]
    suggest: bool,

    /// Directory name to skip (repeatable)
    #[arg(long = "ignore", value_name = "NAME")]
    ignored: Vec<String>,

    /// Verbose log output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    let options = RunOptions {
        ignored_folders: args.ignored,
        suggest_only: args.suggest,
    };
    let outcomes = process_library(&args.library, &options)?;

    let mut failed = Vec::new();
    for outcome in &outcomes {
        match &outcome.result {
            Ok(new_name) if args.suggest => {
                let parent = outcome.path.parent().unwrap_or_else(|| Path::new(""));
                println!("{}", args.library.join(parent).join(new_name).display());
            }
            Ok(_) => {}
            Err(message) => failed.push((&outcome.path, message)),
        }
    }

    if !failed.is_empty() {
        println!("\nCAN'T RENAME:");
        for (path, message) in failed {
            println!("{}: {message}", path.display());
        }
    }

    Ok(())
}
