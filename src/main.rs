use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use mailcraft_lib::config::BrandConfig;
use mailcraft_lib::envelope::{load_blocks, NaiveImporter};
use mailcraft_lib::render::RenderOptions;
use mailcraft_lib::{Document, MailcraftError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mailcraft")]
#[command(about = "Render block-based email documents to HTML or plain text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document file (.json, .yaml, .toml)
    Render {
        document: PathBuf,

        /// Brand settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Prepend the block envelope so the output can be loaded back
        #[arg(long)]
        embed: bool,

        /// Campaign id for the "View in browser" link
        #[arg(long)]
        campaign_id: Option<String>,

        /// Fill unset block properties before rendering
        #[arg(long)]
        normalize: bool,
    },
    /// Recover blocks from saved HTML and print them as JSON
    Extract { html: PathBuf },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> mailcraft_lib::Result<String> {
    match command {
        Command::Render {
            document,
            config,
            format,
            embed,
            campaign_id,
            normalize,
        } => {
            let brand = match config {
                Some(path) => BrandConfig::load(&path)?,
                None => BrandConfig::default(),
            };
            let mut doc = Document::load(&document)?;
            if normalize {
                doc = doc.normalized(&brand);
            }
            tracing::info!(path = %document.display(), blocks = doc.blocks.len(), "rendering document");
            Ok(match format {
                Format::Text => doc.render_text(&brand),
                Format::Html => {
                    let options = RenderOptions {
                        brand,
                        campaign_id,
                        inbox_header: false,
                    };
                    if embed {
                        doc.to_saved_html(&options)
                    } else {
                        doc.render_html(&options)
                    }
                }
            })
        }
        Command::Extract { html } => {
            let content = std::fs::read_to_string(&html).map_err(|source| MailcraftError::Io {
                path: html.clone(),
                source,
            })?;
            let blocks = load_blocks(&content, &NaiveImporter);
            serde_json::to_string_pretty(&blocks)
                .map_err(|source| MailcraftError::JsonParse { path: html, source })
        }
    }
}
