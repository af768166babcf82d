//! Nameplate CLI
//!
//! Usage:
//!   nameplate [OPTIONS] [FILE]
//!
//! Reads a project file (JSON) and renders its labels to SVG. Without an
//! output directory the selected label is written to stdout; with one,
//! every selected label is exported under its derived artifact name.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nameplate::{
    auto_size, build_document, format_number, render_standalone_svg, resolve_settings,
    FontCatalog, HeuristicMeasurer, Label, LabelSettings, Project,
};

#[derive(Parser)]
#[command(name = "nameplate")]
#[command(about = "Render printable name-tag labels as SVG")]
struct Cli {
    /// Project file to read (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Font catalog file (TOML format)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Label to render: a display name or zero-based index (defaults to the
    /// first label; ignored with --out-dir, which exports every label)
    #[arg(short, long)]
    label: Option<String>,

    /// Export all labels as SVG files into this directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Treat the input as a bare label settings object instead of a project
    #[arg(long)]
    settings: bool,

    /// Print the auto-fit size instead of rendering
    #[arg(long)]
    size: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let catalog = match &cli.catalog {
        Some(path) => match FontCatalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading font catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FontCatalog::default(),
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.settings {
        run_bare_settings(&cli, &source, &catalog);
        return;
    }

    let project = match Project::from_json(&source, &catalog) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(dir) = &cli.out_dir {
        export_all(&project, dir);
        return;
    }

    let (index, label) = match select_label(&project, cli.label.as_deref()) {
        Some(found) => found,
        None => {
            eprintln!(
                "Error: no label matching '{}' (project has {} labels)",
                cli.label.as_deref().unwrap_or(""),
                project.labels.len()
            );
            std::process::exit(1);
        }
    };

    if cli.size {
        print_size(&label.settings);
        return;
    }

    match render_one(&label.settings) {
        Ok(svg) => println!("{}", svg),
        Err(e) => {
            eprintln!("Error rendering '{}': {}", label.display_name(index), e);
            std::process::exit(1);
        }
    }
}

fn run_bare_settings(cli: &Cli, source: &str, catalog: &FontCatalog) {
    let raw: serde_json::Value = match serde_json::from_str(source) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: invalid settings JSON: {}", e);
            std::process::exit(1);
        }
    };
    let settings = LabelSettings::sanitized(&raw, catalog);

    if cli.size {
        print_size(&settings);
        return;
    }

    match render_one(&settings) {
        Ok(svg) => println!("{}", svg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn render_one(settings: &LabelSettings) -> Result<String, nameplate::RenderError> {
    let measurer = HeuristicMeasurer::default();
    let resolved = resolve_settings(settings, &measurer);
    let doc = build_document(&resolved)?;
    Ok(render_standalone_svg(&doc))
}

fn print_size(settings: &LabelSettings) {
    let size = auto_size(settings, &HeuristicMeasurer::default());
    println!(
        "{} x {} mm",
        format_number(size.width_mm, 3),
        format_number(size.height_mm, 3)
    );
}

fn select_label<'a>(project: &'a Project, wanted: Option<&str>) -> Option<(usize, &'a Label)> {
    match wanted {
        None => project.labels.first().map(|label| (0, label)),
        Some(wanted) => {
            if let Ok(index) = wanted.parse::<usize>() {
                if let Some(label) = project.labels.get(index) {
                    return Some((index, label));
                }
            }
            project
                .labels
                .iter()
                .enumerate()
                .find(|(index, label)| label.display_name(*index) == wanted)
        }
    }
}

fn export_all(project: &Project, dir: &PathBuf) {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Error creating directory '{}': {}", dir.display(), e);
        std::process::exit(1);
    }

    let mut failures = 0;
    for (index, label) in project.labels.iter().enumerate() {
        match render_one(&label.settings) {
            Ok(svg) => {
                let path = dir.join(label.export_file_name(index));
                if let Err(e) = fs::write(&path, svg) {
                    eprintln!("Error writing '{}': {}", path.display(), e);
                    failures += 1;
                } else {
                    println!("{}", path.display());
                }
            }
            Err(e) => {
                eprintln!("Error rendering '{}': {}", label.display_name(index), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

fn print_intro() {
    println!(
        r#"Nameplate - render printable name-tag labels as SVG

USAGE:
    nameplate [OPTIONS] [FILE]
    cat project.json | nameplate

OPTIONS:
    -l, --label <NAME|INDEX>  Label to render (default: first)
    -o, --out-dir <DIR>       Export every label as an SVG file
    -c, --catalog <FILE>      Custom font catalog (TOML file)
    --settings                Input is a bare label settings object
    --size                    Print the auto-fit size instead of rendering
    -h, --help                Print help

QUICK START:
    nameplate shop.json > label.svg
    nameplate shop.json --out-dir exports/

A project file is JSON: {{ "version": 1, "project": {{ "name": "...",
"labels": [ {{ "id": "...", "name": "...", "settings": {{ ... }} }} ] }} }}"#
    );
}
