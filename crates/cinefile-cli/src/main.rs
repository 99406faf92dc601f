use clap::{ArgAction, Parser, Subcommand};
use commands::{check, config, discover, lookup, shell};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cinefile")]
#[command(about = "CineFile - consolidated movie lookup across metadata providers")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a movie and show its consolidated record
    #[command(long_about = "Look up a movie by exact title. The primary metadata provider decides \
        success or failure; the secondary provider enriches the record best-effort. Use the flags \
        to also fetch streaming availability, the official trailer, or similar titles.")]
    Lookup {
        /// Movie title
        title: String,

        /// Also check streaming availability
        #[arg(long, action = ArgAction::SetTrue)]
        streaming: bool,

        /// Also search for the official trailer
        #[arg(long, action = ArgAction::SetTrue)]
        trailer: bool,

        /// Also list similar titles
        #[arg(long, action = ArgAction::SetTrue)]
        similar: bool,

        /// Fetch every enrichment (conflicts with individual flags)
        #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["streaming", "trailer", "similar"])]
        all: bool,
    },
    /// Typeahead suggestions for a partial title
    Suggest {
        /// Partial query (at least two characters)
        query: String,
    },
    /// Movies trending this week
    Trending,
    /// Browse popular movies in a genre
    Genre {
        /// Genre name (run with --list to see the known names)
        name: Option<String>,

        /// List the known genre names
        #[arg(long, action = ArgAction::SetTrue)]
        list: bool,
    },
    /// Interactive session with search history and favorites
    #[command(long_about = "Start an interactive session. Lookups accumulate in a bounded \
        search history and favorites list that live exactly as long as the session; type \
        'help' at the prompt for the available commands.")]
    Shell,
    /// Validate the configured provider API keys
    #[command(long_about = "Send one probe request per configured provider and report whether \
        each API key works.")]
    Check,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks API keys)
    Show,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let out = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Lookup {
            title,
            streaming,
            trailer,
            similar,
            all,
        } => lookup::run_lookup(&title, streaming, trailer, similar, all, &out).await,
        Commands::Suggest { query } => discover::run_suggest(&query, &out).await,
        Commands::Trending => discover::run_trending(&out).await,
        Commands::Genre { name, list } => discover::run_genre(name.as_deref(), list, &out).await,
        Commands::Shell => shell::run_shell(&out).await,
        Commands::Check => check::run_check(&out).await,
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config::run_show(&out),
            ConfigCommands::Init { force } => config::run_init(force, &out),
        },
    }
}
