// Use modules from the library crate
use bower_finder_cli::commands::{self, files::FilesOptions};
use bower_finder_cli::{logging, OutputFormat};

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bower-finder",
    about = "List the files installed bower components need, dependencies first",
    version
)]
struct Cli {
    /// Project root containing bower.json and .bowerrc (defaults to the current directory)
    #[arg(long, short = 'r', global = true, value_name = "DIR")]
    root: Option<String>,

    /// Components directory, overriding .bowerrc and the bower_components default
    #[arg(long, short = 'd', global = true, value_name = "DIR")]
    components_dir: Option<String>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List entry-point files of components and their dependencies, in load order
    ///
    /// Names may be given as separate arguments or as one comma, semicolon
    /// or whitespace separated list. Without names, the dependencies declared
    /// in bower.json are resolved.
    ///
    /// Examples:
    ///   bower-finder files app
    ///   bower-finder files "bootstrap, moment" --ext js
    ///   bower-finder files --filter '\.min\.css$'
    Files {
        /// Component names (directory or package names)
        names: Vec<String>,

        /// Keep only files whose path matches this regular expression
        #[arg(long, value_name = "REGEX", conflicts_with = "ext")]
        filter: Option<String>,

        /// Keep only files with this extension
        #[arg(long, value_name = "EXT")]
        ext: Option<String>,
    },

    /// Show the transitive dependencies of a component with their version constraints
    Deps {
        /// Component name
        name: String,
    },

    /// List installed components by registry key
    List,

    /// Print the resolved components directory
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let finder = commands::open_finder(cli.root.as_deref(), cli.components_dir.as_deref());
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Files { names, filter, ext } => {
            let options = FilesOptions {
                names,
                pattern: filter,
                extension: ext,
            };
            commands::files::run(&finder, &options, cli.format, &mut stdout)
        }
        Command::Deps { name } => commands::deps::run(&finder, &name, cli.format, &mut stdout),
        Command::List => commands::list::run(&finder, cli.format, &mut stdout),
        Command::Path => commands::list::run_path(&finder, cli.format, &mut stdout),
    }
}
