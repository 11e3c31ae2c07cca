use std::io::Read;

use clap::Parser;
use tracing::Level;

use draft::kind::Registry;
use draft::{Options, Provider};

#[derive(Parser)]
#[command(name = "draft", about = "Render architecture descriptions (YAML) as Graphviz DOT")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    file: Option<std::path::PathBuf>,

    /// Lay the diagram out from bottom to top
    #[arg(long, short = 'b')]
    bottom_top: bool,

    /// Draw edges as axis-aligned line segments
    #[arg(long)]
    ortho: bool,

    /// Cloud provider theme (aws, gcp, azure)
    #[arg(long, short = 'p')]
    provider: Option<Provider>,

    /// Print the known component kinds and exit
    #[arg(long)]
    list_kinds: bool,

    /// Log debug information to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    if cli.list_kinds {
        for kind in Registry::default().kinds() {
            println!("{kind}");
        }
        return;
    }

    let input = match cli.file {
        Some(path) => std::fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("ERROR: failed to read {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("ERROR: failed to read stdin: {e}");
                std::process::exit(1);
            });
            buf
        }
    };

    let options = Options {
        bottom_top: cli.bottom_top,
        ortho: cli.ortho,
        provider: cli.provider,
    };

    match draft::render_with_options(&input, &options) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}
