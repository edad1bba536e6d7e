use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mdsite::Config;
use mdsite::site;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from Markdown files")]
struct Cli {
    /// Site config file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and render every Markdown page
    Build {
        /// Markdown source directory
        #[arg(long)]
        content: Option<PathBuf>,

        /// Static asset directory
        #[arg(long = "static")]
        static_dir: Option<PathBuf>,

        /// Page template
        #[arg(long)]
        template: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a single Markdown file to an HTML fragment
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build {
            content,
            static_dir,
            template,
            output,
        } => {
            let mut config = match Config::load_or_default(&cli.config) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            let paths = &mut config.paths;
            if let Some(content) = content {
                paths.content = content;
            }
            if let Some(static_dir) = static_dir {
                paths.static_dir = static_dir;
            }
            if let Some(template) = template {
                paths.template = template;
            }
            if let Some(output) = output {
                paths.output = output;
            }

            if let Err(e) = site::build(&config) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Render { input, output } => {
            let markdown = match fs::read_to_string(&input) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading {}: {}", input.display(), e);
                    std::process::exit(1);
                }
            };

            let html = match mdsite::markdown_to_html(&markdown) {
                Ok(html) => html,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            match output {
                Some(output) => {
                    if let Err(e) = fs::write(&output, html) {
                        eprintln!("Error writing {}: {}", output.display(), e);
                        std::process::exit(1);
                    }
                    log::info!("Created {}", output.display());
                }
                None => println!("{}", html),
            }
        }
    }
}
