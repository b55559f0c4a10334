//! pdfmaker CLI - document model assembly tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use pdfmaker::{
    render, AssembleOptions, Document, DocumentAssembler, DocumentRequest, ImageData, JsonFormat,
    StyleSheet,
};

#[derive(Parser)]
#[command(name = "pdfmaker")]
#[command(version)]
#[command(about = "Assemble styled header/body/footer documents from JSON requests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a request into a JSON document model
    Assemble {
        /// Request JSON file
        #[arg(value_name = "REQUEST")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Header image file (replaces the request's header image)
        #[arg(long, value_name = "FILE")]
        header_image: Option<PathBuf>,

        /// Body image file, repeatable (replaces the request's body images)
        #[arg(long = "body-image", value_name = "FILE")]
        body_images: Vec<PathBuf>,

        /// Footer image file (replaces the request's footer image)
        #[arg(long, value_name = "FILE")]
        footer_image: Option<PathBuf>,

        /// Paragraph delimiter in markup
        #[arg(long, env = "PDFMAKER_DELIMITER", default_value = pdfmaker::LINE_BREAK_DELIMITER)]
        delimiter: String,
    },

    /// Print a plain text preview of the assembled regions
    Preview {
        /// Request JSON file
        #[arg(value_name = "REQUEST")]
        input: PathBuf,
    },

    /// List the predefined style names
    Styles,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Assemble {
            input,
            output,
            compact,
            header_image,
            body_images,
            footer_image,
            delimiter,
        }) => cmd_assemble(
            &input,
            output.as_deref(),
            compact,
            ImageOverrides {
                header: header_image,
                body: body_images,
                footer: footer_image,
            },
            delimiter,
        ),
        Some(Commands::Preview { input }) => cmd_preview(&input),
        Some(Commands::Styles) => {
            cmd_styles();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pdfmaker assemble <REQUEST> [-o OUTPUT]".yellow());
            println!("       pdfmaker --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Image files given on the command line.
struct ImageOverrides {
    header: Option<PathBuf>,
    body: Vec<PathBuf>,
    footer: Option<PathBuf>,
}

impl ImageOverrides {
    fn apply(self, request: &mut DocumentRequest) -> pdfmaker::Result<()> {
        if let Some(path) = self.header {
            request.header.image = Some(ImageData::from_path(path)?);
        }
        if !self.body.is_empty() {
            request.body.images = self
                .body
                .iter()
                .map(ImageData::from_path)
                .collect::<pdfmaker::Result<Vec<_>>>()?;
        }
        if let Some(path) = self.footer {
            request.footer.image = Some(ImageData::from_path(path)?);
        }
        Ok(())
    }
}

fn load_request(input: &Path) -> Result<DocumentRequest, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let request = serde_json::from_str(&json)?;
    log::debug!("Loaded request from {}", input.display());
    Ok(request)
}

fn assemble(
    request: &DocumentRequest,
    options: AssembleOptions,
) -> Result<Document, Box<dyn std::error::Error>> {
    let document = DocumentAssembler::default()
        .with_options(options)
        .assemble(request)?;
    Ok(document)
}

fn cmd_assemble(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    images: ImageOverrides,
    delimiter: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = load_request(input)?;
    images.apply(&mut request)?;

    let document = assemble(&request, AssembleOptions::new().with_delimiter(delimiter))?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&document, format)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!(
                "{} {} ({} bytes)",
                "Wrote".green().bold(),
                path.display(),
                json.len()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_preview(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let request = load_request(input)?;
    let document = assemble(&request, AssembleOptions::default())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title".bold(), document.metadata.title);
    println!("{}: {}", "Author".bold(), document.metadata.author);
    println!("{}: {}", "Subject".bold(), document.metadata.subject);
    println!();
    println!("{}", render::to_text(&document));

    Ok(())
}

fn cmd_styles() {
    println!("{}", "Predefined styles".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for name in StyleSheet::builtin().names() {
        println!("  {}", name);
    }
}

fn cmd_version() {
    println!("{} {}", "pdfmaker".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document model assembly tool");
    println!();
    println!("License: MIT");
}
