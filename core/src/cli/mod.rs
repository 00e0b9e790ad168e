pub mod report;

use crate::types::{
    FrameConfig, Hemisphere, ImageFormat, MontageConfig, MontageLayout, ViewSpec, DEFAULT_STEPS,
    MONTAGE_TEMP_PREFIX,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for cortexview
#[derive(Parser, Debug)]
#[command(name = "cortexview")]
#[command(about = "Camera views, image sets and montages of cortical surfaces")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve view names (or abbreviations) to camera orientations
    Resolve {
        #[command(flatten)]
        hemisphere: HemisphereArg,

        /// View names or literal "azimuth,elevation" pairs
        #[arg(required = true, allow_hyphen_values = true)]
        views: Vec<String>,
    },

    /// Plan the camera path through a sequence of views
    Path {
        #[command(flatten)]
        hemisphere: HemisphereArg,

        /// Orientations per pair of views
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: usize,

        /// Print every orientation, not just the summary
        #[arg(long)]
        all: bool,

        #[arg(required = true, allow_hyphen_values = true)]
        views: Vec<String>,
    },

    /// Save one image per view as PREFIX_<view>.<ext>
    Export {
        #[command(flatten)]
        hemisphere: HemisphereArg,

        #[command(flatten)]
        surface: SurfaceArgs,

        /// Image file format
        #[arg(short = 'e', long, default_value = "png", value_parser = parse_image_format)]
        image_format: ImageFormat,

        #[arg(value_name = "PREFIX")]
        prefix: PathBuf,

        #[arg(required = true, allow_hyphen_values = true)]
        views: Vec<String>,
    },

    /// Save a single-row or single-column montage of views
    Montage {
        #[command(flatten)]
        hemisphere: HemisphereArg,

        #[command(flatten)]
        surface: SurfaceArgs,

        #[command(flatten)]
        montage: MontageArgs,

        /// Tiling direction
        #[arg(short, long, default_value = "h", value_parser = parse_layout)]
        layout: MontageLayout,

        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        #[arg(required = true, allow_hyphen_values = true)]
        views: Vec<String>,
    },

    /// Save a grid montage, one --row per row of comma-separated views
    Grid {
        #[command(flatten)]
        hemisphere: HemisphereArg,

        #[command(flatten)]
        surface: SurfaceArgs,

        #[command(flatten)]
        montage: MontageArgs,

        /// Views of one row, e.g. "lat,med" (repeatable)
        #[arg(short, long = "row", required = true)]
        rows: Vec<String>,

        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Save every frame of a rotation as PREFIX_<index>.<ext>
    Frames {
        #[command(flatten)]
        hemisphere: HemisphereArg,

        #[command(flatten)]
        surface: SurfaceArgs,

        /// Frames per pair of views
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: usize,

        /// Image file format
        #[arg(short = 'e', long, default_value = "png", value_parser = parse_image_format)]
        image_format: ImageFormat,

        #[arg(value_name = "PREFIX")]
        prefix: PathBuf,

        #[arg(required = true, allow_hyphen_values = true)]
        views: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct HemisphereArg {
    /// Hemisphere (lh, rh, left, right)
    #[arg(short = 'H', long, default_value = "lh", value_parser = parse_hemisphere)]
    pub hemisphere: Hemisphere,
}

/// Size of the preview rendering surface
#[derive(Args, Debug, Clone)]
pub struct SurfaceArgs {
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    #[arg(long, default_value_t = 400)]
    pub height: u32,
}

#[derive(Args, Debug, Clone)]
pub struct MontageArgs {
    /// Directory for temporary component images
    #[arg(long, default_value = ".")]
    pub work_dir: PathBuf,

    /// File name prefix of temporary component images
    #[arg(long, default_value = MONTAGE_TEMP_PREFIX)]
    pub temp_prefix: String,
}

impl MontageArgs {
    pub fn config(&self, layout: MontageLayout) -> MontageConfig {
        MontageConfig::default()
            .with_layout(layout)
            .with_work_dir(&self.work_dir)
            .with_temp_prefix(self.temp_prefix.clone())
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Parses command-line view arguments
pub fn parse_views(views: &[String]) -> Vec<ViewSpec> {
    views.iter().map(|v| ViewSpec::parse(v)).collect()
}

/// Parses one grid row, "lat,med" or "lat med"
///
/// Literal orientations are not accepted here since their own comma would
/// be ambiguous; grids use view names.
pub fn parse_row(row: &str) -> Vec<ViewSpec> {
    row.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(ViewSpec::named)
        .collect()
}

pub fn frame_config(steps: usize, format: ImageFormat) -> FrameConfig {
    FrameConfig::default().with_steps(steps).with_format(format)
}

fn parse_hemisphere(s: &str) -> Result<Hemisphere, String> {
    Hemisphere::parse(s).map_err(|e| e.to_string())
}

fn parse_layout(s: &str) -> Result<MontageLayout, String> {
    MontageLayout::parse(s).map_err(|e| e.to_string())
}

fn parse_image_format(s: &str) -> Result<ImageFormat, String> {
    ImageFormat::from_extension(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CameraOrientation;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_montage_command() {
        let cli = Cli::try_parse_from([
            "cortexview",
            "montage",
            "-H",
            "rh",
            "--layout",
            "vertical",
            "out.png",
            "lat",
            "-90,0",
        ])
        .unwrap();

        match cli.command {
            Command::Montage {
                hemisphere,
                layout,
                output,
                views,
                ..
            } => {
                assert_eq!(hemisphere.hemisphere, Hemisphere::Rh);
                assert_eq!(layout, MontageLayout::Vertical);
                assert_eq!(output, PathBuf::from("out.png"));
                assert_eq!(
                    parse_views(&views),
                    vec![
                        ViewSpec::named("lat"),
                        ViewSpec::Literal(CameraOrientation::new(-90.0, 0.0))
                    ]
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["cortexview", "resolve", "-H", "both", "lat"]).is_err());
        assert!(
            Cli::try_parse_from(["cortexview", "export", "-e", "gif", "out/lh", "lat"]).is_err()
        );
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(
            parse_row("lat, med  ven"),
            vec![ViewSpec::named("lat"), ViewSpec::named("med"), ViewSpec::named("ven")]
        );
        assert!(parse_row(" , ").is_empty());
    }

    #[test]
    fn test_montage_args_config() {
        let args = MontageArgs {
            work_dir: PathBuf::from("/tmp/work"),
            temp_prefix: "scratch".to_string(),
        };
        let config = args.config(MontageLayout::Vertical);
        assert_eq!(config.temp_path_prefix(), PathBuf::from("/tmp/work/scratch"));
        assert_eq!(config.layout, MontageLayout::Vertical);
    }
}
