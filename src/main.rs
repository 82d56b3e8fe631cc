use anyhow::Result;
use clap::{Parser, Subcommand};
use lore::areas::repository::Repository;
use lore::commands::log::LogOptions;

#[derive(Parser)]
#[command(
    name = "lore",
    version = "0.1.0",
    about = "Read git history straight from the object store",
    long_about = "lore reconstructs `git log` directly from a repository's \
    loose object store: it decompresses and verifies objects, resolves HEAD, \
    and walks first-parent history, without invoking git itself.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "log",
        about = "Show first-parent commit history from HEAD",
        long_about = "This command resolves HEAD and lists the commits reachable by \
        following only the first parent of each commit, newest first. \
        History reachable solely through other parents of a merge is not shown."
    )]
    Log {
        #[arg(long, help = "Print each commit on a single line")]
        oneline: bool,
        #[arg(long, help = "Show abbreviated commit ids")]
        abbrev_commit: bool,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of a loose object in the repository. \
        It requires the full hex id of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object id to print")]
        sha: String,
    },
}

fn main() {
    if let Err(error) = run() {
        // Same surface git shows for unusable repositories or objects.
        eprintln!("fatal: {error:#}");
        std::process::exit(128);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Log {
            oneline,
            abbrev_commit,
        } => {
            repository.log(&LogOptions {
                oneline: *oneline,
                abbrev_commit: *abbrev_commit,
            })?;
        }
        Commands::CatFile { sha } => {
            repository.cat_file(sha)?;
        }
    }

    Ok(())
}
