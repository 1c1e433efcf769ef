//! protodoc: turn protocol XML definitions into HTML reference pages.
//!
//! Two modes:
//!
//! - **generate**: `protodoc wayland.xml` writes `doc/wayland.html`;
//!   `protodoc wayland.xml out.html` writes to an explicit path.
//! - **serve**: `protodoc` with no input regenerates `doc/index.html` and
//!   serves the `doc` directory on `localhost:8000`.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use protodoc::generate::{self, DEFAULT_OUT_DIR};
use protodoc::render::Templates;
use protodoc::server::{Server, DEFAULT_ADDR};
use protodoc::sink::FsSink;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "protodoc",
    about = "Generate HTML reference pages from protocol XML files and serve them"
)]
struct Cli {
    /// Protocol XML file to render. If omitted, the output directory is served.
    input: Option<PathBuf>,

    /// Output file. Defaults to <OUT_DIR>/<input name>.html
    output: Option<PathBuf>,

    /// Directory for generated pages (created if missing)
    #[arg(short = 'd', long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Directory holding protocol.html, index.html and an optional style.css
    #[arg(short = 't', long, default_value = "templates")]
    templates: PathBuf,

    /// Address to serve on
    #[arg(short = 'a', long, default_value = DEFAULT_ADDR)]
    addr: String,
}

fn main() -> Result<()> {
    let cli = parse_cli(normalize_help(std::env::args_os()));
    init_logging();

    match cli.input {
        Some(ref input) => generate_page(&cli, input),
        None => serve(&cli),
    }
}

/// Parse arguments; usage errors exit with status 1 like every other
/// failure, help and version output exit with 0.
fn parse_cli(args: Vec<OsString>) -> Cli {
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

/// Accept the bare `help` and single-dash `-help` spellings as `--help`.
fn normalize_help(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let is_help = arg.to_str().is_some_and(|a| a == "help" || a == "-help");
            if i == 1 && is_help {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}

/// Logs go to stderr; `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// generate mode: render one input file.
fn generate_page(cli: &Cli, input: &Path) -> Result<()> {
    let templates = Templates::load(&cli.templates)?;
    let output = generate::output_path(input, cli.output.as_deref(), &cli.out_dir);
    let mut sink = FsSink;

    if cli.output.is_none() {
        generate::ensure_out_dir(&cli.out_dir)?;
    }
    generate::generate(input, &output, &templates, &mut sink)?;
    if cli.output.is_none() {
        generate::install_stylesheet(&cli.templates, &cli.out_dir, &mut sink)?;
    }
    Ok(())
}

/// serve mode: refresh the index, then serve the output directory.
fn serve(cli: &Cli) -> Result<()> {
    let templates = Templates::load(&cli.templates)?;
    let mut sink = FsSink;

    generate::ensure_out_dir(&cli.out_dir)?;
    generate::install_stylesheet(&cli.templates, &cli.out_dir, &mut sink)?;
    let listed = generate::write_index(&cli.out_dir, &templates, &mut sink)?;
    log::info!("index of {} lists {} pages", cli.out_dir.display(), listed);

    Server::new(&cli.out_dir).serve(&cli.addr)?;
    Ok(())
}
