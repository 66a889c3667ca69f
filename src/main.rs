//! uvcheck - renders the uv layout of a mesh, one image per UDIM tile.
//!
//! Usage: uvcheck [OPTIONS] [INPUT]
//!
//! Run `uvcheck --help` for available options.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use uvcheck::settings::{Settings, TileMode, UDIM_MARKER};
use uvcheck::style::{Color, Styles};

#[derive(Parser)]
#[command(name = "uvcheck")]
#[command(author, version, about = "UV layout checker", long_about = None)]
struct Cli {
    /// Input scene (Wavefront OBJ)
    #[arg(value_name = "INPUT", default_value = "./example.obj")]
    path: PathBuf,

    /// Output image path. In UDIM mode every occurrence of <UDIM> is
    /// replaced by the tile number [default: uv_<UDIM>.png, or output.png
    /// with --single]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Width and height of the images in pixels
    #[arg(short, long, default_value = "2048")]
    size: u32,

    /// Draw everything into a single image of the 0-1 uv square instead of
    /// one image per UDIM tile
    #[arg(long)]
    single: bool,

    /// Fill color of front facing polygons (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR")]
    front_color: Option<Color>,

    /// Fill color of back facing polygons (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR")]
    back_color: Option<Color>,

    /// Color of polygon edges (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR")]
    edge_color: Option<Color>,

    /// Width of polygon edges in pixels
    #[arg(long, default_value = "2")]
    edge_width: f32,

    /// Color of uv island borders (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR")]
    border_color: Option<Color>,

    /// Width of uv island borders in pixels
    #[arg(long, default_value = "4")]
    border_width: f32,

    /// Disable anti-aliasing
    #[arg(long)]
    no_antialias: bool,
}

impl Cli {
    fn into_settings(self) -> Settings {
        let mode = if self.single {
            TileMode::Single
        } else {
            TileMode::Udim
        };
        let defaults = Styles::default();
        let styles = Styles {
            internal_edges: defaults
                .internal_edges
                .with_color(self.edge_color.unwrap_or(defaults.internal_edges.color))
                .with_width(self.edge_width),
            border_edges: defaults
                .border_edges
                .with_color(self.border_color.unwrap_or(defaults.border_edges.color))
                .with_width(self.border_width),
            front_facing: defaults
                .front_facing
                .with_color(self.front_color.unwrap_or(defaults.front_facing.color)),
            back_facing: defaults
                .back_facing
                .with_color(self.back_color.unwrap_or(defaults.back_facing.color)),
        }
        .with_anti_alias(!self.no_antialias);
        Settings {
            input: self.path,
            output: self
                .output
                .unwrap_or_else(|| Settings::default_output(mode)),
            size: self.size,
            mode,
            styles,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = Cli::parse().into_settings();
    if settings.mode == TileMode::Single
        && settings.output.to_string_lossy().contains(UDIM_MARKER)
    {
        log::warn!(
            "Output path {} contains {} but --single writes one image to it verbatim",
            settings.output.display(),
            UDIM_MARKER
        );
    }

    let start = Instant::now();
    match uvcheck::render(&settings) {
        Ok(report) => {
            let stats = report.stats;
            log::info!(
                "Processed {} meshes ({} skipped), drew {} polygons and {} borders in {:.2?}",
                stats.meshes,
                stats.skipped_meshes,
                stats.polygons_drawn,
                stats.loops_drawn,
                start.elapsed()
            );
            if stats.polygons_dropped > 0 || stats.loops_dropped > 0 {
                log::info!(
                    "Dropped {} polygons and {} borders outside a single UDIM tile",
                    stats.polygons_dropped,
                    stats.loops_dropped
                );
            }
            log::info!("Wrote {} images", report.images.len());
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
