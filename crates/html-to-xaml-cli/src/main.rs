//! `html-to-xaml`: convert an HTML fragment to `RichTextBlock` XAML.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use html_to_xaml::{ConversionOptions, convert};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "html-to-xaml", version, about = "Convert HTML fragments to RichTextBlock XAML")]
struct Cli {
    /// Input HTML file (`-` or omitted reads stdin)
    input: Option<PathBuf>,

    /// Write XAML to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the assembled markup without re-indenting it
    #[arg(long)]
    raw: bool,

    /// Maximum width of embedded images
    #[arg(long, value_name = "N", default_value_t = 300)]
    image_max_width: u32,

    /// Maximum height of embedded images
    #[arg(long, value_name = "N", default_value_t = 200)]
    image_max_height: u32,

    /// Hyperlink foreground colour
    #[arg(long, value_name = "COLOR", default_value = html_to_xaml::options::DEFAULT_LINK_FOREGROUND)]
    link_foreground: String,

    /// Spaces per indentation level of formatted output
    #[arg(long, value_name = "N", default_value_t = 2)]
    indent: usize,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> ConversionOptions {
        ConversionOptions::default()
            .with_format_output(!self.raw)
            .with_image_bounds(self.image_max_width, self.image_max_height)
            .with_link_foreground(self.link_foreground.clone())
            .with_indent_width(self.indent)
    }

    fn read_input(&self) -> io::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
            _ => {
                let mut html = String::new();
                io::stdin().read_to_string(&mut html)?;
                Ok(html)
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> html_to_xaml::Result<()> {
    let html = cli.read_input()?;
    let xaml = convert(&html, Some(cli.options()))?;

    if let Some(path) = &cli.output {
        fs::write(path, &xaml)?;
    } else if !xaml.is_empty() {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{xaml}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
