mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use repostore::logger::Logger;
use tracing_subscriber::EnvFilter;

use cli::calc::Operation;
use cli::repo::Person;

#[derive(Parser)]
#[command(name = "repostore")]
#[command(about = "Keep a repository, its owner and its commits in a JSON document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Basic arithmetic
    Calc {
        #[command(subcommand)]
        command: CalcCommands,
    },
    /// Repository document commands
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// User commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Timestamp conversion
    Time {
        #[command(subcommand)]
        command: TimeCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize repostore.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CalcCommands {
    /// Print A + B
    #[command(allow_negative_numbers = true)]
    Add { a: f64, b: f64 },
    /// Print A - B
    #[command(allow_negative_numbers = true)]
    Subtract { a: f64, b: f64 },
    /// Print A * B
    #[command(allow_negative_numbers = true)]
    Multiply { a: f64, b: f64 },
}

#[derive(Subcommand)]
enum RepoCommands {
    /// Create the repository document
    Init {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Repository name
        #[arg(long)]
        name: String,

        /// Repository URL
        #[arg(long)]
        url: String,

        /// Owner display name
        #[arg(long, requires = "owner_email")]
        owner_name: Option<String>,

        /// Owner email address
        #[arg(long, requires = "owner_name")]
        owner_email: Option<String>,
    },
    /// Append a commit
    Commit {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Commit message
        #[arg(short, long)]
        message: String,

        /// Author display name
        #[arg(long, requires = "author_email")]
        author_name: Option<String>,

        /// Author email address (reuses a known user with the same email)
        #[arg(long, requires = "author_name")]
        author_email: Option<String>,
    },
    /// Display the repository
    Show {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Check that an email address is valid
    Validate {
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum TimeCommands {
    /// Format epoch seconds as YYYY-MM-DD HH:MM:SS (local time)
    #[command(allow_negative_numbers = true)]
    Format { timestamp: f64 },
    /// Parse YYYY-MM-DD HH:MM:SS (local time) into epoch seconds
    Parse { date: String },
}

fn person(name: Option<String>, email: Option<String>) -> Option<Person> {
    match (name, email) {
        (Some(name), Some(email)) => Some(Person { name, email }),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Calc { command } => {
            match command {
                CalcCommands::Add { a, b } => cli::calc::run(Operation::Add, a, b),
                CalcCommands::Subtract { a, b } => cli::calc::run(Operation::Subtract, a, b),
                CalcCommands::Multiply { a, b } => cli::calc::run(Operation::Multiply, a, b),
            }
            Ok(())
        }
        Commands::Repo { command } => match command {
            RepoCommands::Init {
                config,
                name,
                url,
                owner_name,
                owner_email,
            } => cli::repo::init(config, name, url, person(owner_name, owner_email)),
            RepoCommands::Commit {
                config,
                message,
                author_name,
                author_email,
            } => cli::repo::commit(config, message, person(author_name, author_email)),
            RepoCommands::Show { config } => cli::repo::show(config),
        },
        Commands::User { command } => match command {
            UserCommands::Validate { email } => cli::user::validate(email),
        },
        Commands::Time { command } => match command {
            TimeCommands::Format { timestamp } => cli::time::format(timestamp),
            TimeCommands::Parse { date } => cli::time::parse(&date),
        },
    };

    if let Err(e) = result {
        Logger::error(&e.to_string());
        std::process::exit(1);
    }
}
