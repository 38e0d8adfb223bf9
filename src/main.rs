use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use syntect::parsing::SyntaxSet;

use codeshot::config::load_config;
use codeshot::highlight::{language_names, ThemeCatalog, AUTO};
use codeshot::output::write_png;
use codeshot::{LanguageHint, RenderConfig, Renderer};

/// Render a source file into a syntax-highlighted PNG
#[derive(Debug, Parser)]
#[command(name = "codeshot", version, about)]
struct Cli {
    /// Source file to render
    #[arg(required_unless_present_any = ["list_themes", "list_languages"])]
    file: Option<PathBuf>,

    /// Language name or extension, or `auto` to detect from the file
    #[arg(short, long, default_value = AUTO)]
    lang: String,

    /// Output PNG path (`-` for stdout) [default: ~/code_screenshot.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Theme name
    #[arg(short, long)]
    style: Option<String>,

    /// Font file (TTF/OTF); defaults to a system monospace font
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in points
    #[arg(long)]
    font_size: Option<f64>,

    /// Output resolution
    #[arg(long)]
    dpi: Option<f64>,

    /// Line height as a multiple of the font size
    #[arg(long)]
    line_spacing: Option<f64>,

    /// Margin around the code, in points
    #[arg(long)]
    margin: Option<f64>,

    /// Config file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// List available languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,

    /// Log everything
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration
    fn apply(&self, config: &mut RenderConfig) {
        if let Some(style) = &self.style {
            config.theme.clone_from(style);
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if let Some(dpi) = self.dpi {
            config.dpi = dpi;
        }
        if let Some(spacing) = self.line_spacing {
            config.line_spacing = spacing;
        }
        if let Some(margin) = self.margin {
            config.start_x = margin;
            config.start_y = margin;
        }
    }

    fn output_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(out) = &self.output {
            return Ok(out.clone());
        }
        let home = home::home_dir().context("Could not determine home directory; pass --output")?;
        Ok(home.join("code_screenshot.png"))
    }
}

fn print_lines(lines: &[String]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.list_themes {
        let mut themes = ThemeCatalog::load_defaults();
        if let Some(dir) = &config.theme_dir {
            themes.add_from_folder(dir)?;
        }
        return print_lines(&themes.names());
    }
    if cli.list_languages {
        return print_lines(&language_names(&SyntaxSet::load_defaults_newlines()));
    }

    let Some(file) = cli.file.as_deref() else {
        bail!("No input file given");
    };
    let contents = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let source = String::from_utf8_lossy(&contents);
    let output = cli.output_path()?;
    let language = LanguageHint::parse(&cli.lang, Some(file));

    let theme = config.theme.clone();
    let mut renderer = Renderer::new(config).context("Failed to initialize renderer")?;
    let canvas = renderer
        .render(&source, &language, &theme)
        .with_context(|| format!("Failed to render {}", file.display()))?;

    write_png(&canvas, &output).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
