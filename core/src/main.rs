use clap::Parser;
use cortexview_core::cli::report::{PathSummary, ResolveReport, TextReport};
use cortexview_core::cli::{frame_config, parse_row, parse_views, Cli, Command, OutputFormat};
use cortexview_core::{camera, PreviewRenderer, SurfaceViewer};
use log::{error, info};
use std::fmt;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match run(cli.command, &cli.format) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Runs one command, returning whether it completed without diagnostics
fn run(command: Command, format: &OutputFormat) -> cortexview_core::Result<bool> {
    match command {
        Command::Resolve { hemisphere, views } => {
            let report = ResolveReport::build(hemisphere.hemisphere, &parse_views(&views));
            let clean = report.diagnostics.is_empty();
            output(&report, format);
            Ok(clean)
        }
        Command::Path {
            hemisphere,
            steps,
            all,
            views,
        } => {
            let path = camera::plan_path(hemisphere.hemisphere, &parse_views(&views), steps)?;
            let summary = PathSummary::new(hemisphere.hemisphere, &path, all);
            output(&summary, format);
            Ok(summary.diagnostics.is_empty())
        }
        Command::Export {
            hemisphere,
            surface,
            image_format,
            prefix,
            views,
        } => {
            let mut viewer = SurfaceViewer::new(
                hemisphere.hemisphere,
                PreviewRenderer::new(surface.width, surface.height),
            );
            let report = viewer.save_imageset(&prefix, parse_views(&views), image_format)?;
            output(&report, format);
            Ok(report.diagnostics.is_empty())
        }
        Command::Montage {
            hemisphere,
            surface,
            montage,
            layout,
            output: path,
            views,
        } => {
            let mut viewer = SurfaceViewer::new(
                hemisphere.hemisphere,
                PreviewRenderer::new(surface.width, surface.height),
            );
            let report = viewer.save_montage(&path, parse_views(&views), &montage.config(layout))?;
            output(&report, format);
            Ok(report.written && report.diagnostics.is_empty())
        }
        Command::Grid {
            hemisphere,
            surface,
            montage,
            rows,
            output: path,
        } => {
            let rows: Vec<_> = rows.iter().map(|row| parse_row(row)).collect();
            info!("Composing {}-row grid", rows.len());
            let mut viewer = SurfaceViewer::new(
                hemisphere.hemisphere,
                PreviewRenderer::new(surface.width, surface.height),
            );
            let report =
                viewer.save_grid_montage(&path, &rows, &montage.config(Default::default()))?;
            output(&report, format);
            Ok(report.written && report.diagnostics.is_empty())
        }
        Command::Frames {
            hemisphere,
            surface,
            steps,
            image_format,
            prefix,
            views,
        } => {
            let mut viewer = SurfaceViewer::new(
                hemisphere.hemisphere,
                PreviewRenderer::new(surface.width, surface.height),
            );
            let config = frame_config(steps, image_format);
            let report = viewer.save_rotation_frames(&prefix, &parse_views(&views), &config)?;
            output(&report, format);
            Ok(report.diagnostics.is_empty())
        }
    }
}

#[cfg(feature = "json")]
fn output<T>(report: &T, format: &OutputFormat)
where
    T: serde::Serialize,
    for<'a> TextReport<'a, T>: fmt::Display,
{
    match format {
        OutputFormat::Text => println!("{}", TextReport::new(report)),
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize to JSON: {}", e);
                eprintln!("Error: Failed to serialize to JSON: {}", e);
                process::exit(1);
            }
        },
    }
}

#[cfg(not(feature = "json"))]
fn output<T>(report: &T, format: &OutputFormat)
where
    for<'a> TextReport<'a, T>: fmt::Display,
{
    match format {
        OutputFormat::Text => println!("{}", TextReport::new(report)),
        OutputFormat::Json => {
            eprintln!("Error: JSON output requires the 'json' feature");
            eprintln!("Rebuild with: cargo build --features json");
            process::exit(1);
        }
    }
}
