use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    style::Styles,
    udim::Udim,
};

/// Placeholder in the output path that is replaced by the tile number.
pub const UDIM_MARKER: &str = "<UDIM>";

/// How polygons are distributed over output images.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TileMode {
    /// One image per UDIM tile. Polygons and boundary loops that do not fit
    /// inside a single tile are dropped.
    #[default]
    Udim,
    /// A single image of the `[0, 1] x [0, 1]` uv square. Nothing is dropped,
    /// geometry outside the square falls off the image.
    Single,
}

/// Configuration of a run. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The scene to read.
    pub input: PathBuf,
    /// The output path, or path pattern containing [`UDIM_MARKER`].
    pub output: PathBuf,
    /// Width and height of the square images, in pixels.
    pub size: u32,
    pub mode: TileMode,
    pub styles: Styles,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: PathBuf::from("./example.obj"),
            output: Self::default_output(TileMode::Udim),
            size: 2048,
            mode: TileMode::Udim,
            styles: Styles::default(),
        }
    }
}

impl Settings {
    /// The default output path for the given mode.
    pub fn default_output(mode: TileMode) -> PathBuf {
        match mode {
            TileMode::Udim => PathBuf::from(format!("uv_{}.png", UDIM_MARKER)),
            TileMode::Single => PathBuf::from("output.png"),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidImageSize(self.size));
        }
        Ok(())
    }

    /// The path of the image for the given tile.
    ///
    /// Every occurrence of [`UDIM_MARKER`] is replaced by the tile number. If
    /// the pattern has no marker, the tile number is inserted before the file
    /// extension so that tiles never overwrite each other.
    pub fn output_path_for(&self, tile: Udim) -> PathBuf {
        expand_pattern(&self.output, tile)
    }
}

fn expand_pattern(pattern: &Path, tile: Udim) -> PathBuf {
    let text = pattern.to_string_lossy();
    if text.contains(UDIM_MARKER) {
        return PathBuf::from(text.replace(UDIM_MARKER, &tile.to_string()));
    }
    let stem = pattern
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match pattern.extension() {
        Some(ext) => format!("{}.{}.{}", stem, tile, ext.to_string_lossy()),
        None => format!("{}.{}", stem, tile),
    };
    pattern.with_file_name(name)
}
