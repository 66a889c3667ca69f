/*!
Routing of uv layouts onto per tile images.

A [`Checker`] consumes mesh primitives one at a time. Each primitive's faces
are drawn as filled polygons colored by winding, outlined with the internal
edge style, and the boundary loops of its uv islands are traced with the
border style. Every polygon and loop goes to the canvas of the UDIM tile that
contains it, and canvases are created the first time a tile is referenced.
Canvases are shared by all primitives, so meshes that occupy the same tile end
up on the same image.
*/

use std::{
    collections::{BTreeMap, btree_map::Entry},
    fmt::Display,
    path::PathBuf,
};

use glam::DVec2;
use log::{debug, info, warn};

use crate::{
    error::Result,
    layout::UvLayout,
    mesh::UvMesh,
    raster::{Canvas, Rasterizer, SkiaRasterizer, Viewport},
    scene::{MeshPrimitive, Scene},
    settings::{Settings, TileMode},
    udim::{Udim, tile_of_many},
};

/// An output image.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Target {
    /// The image of a single UDIM tile.
    Tile(Udim),
    /// The only image, when not splitting by tile.
    Whole,
}

impl Target {
    /// The uv coordinates of the lower left corner of the image.
    pub fn origin(&self) -> DVec2 {
        match self {
            Target::Tile(tile) => tile.origin(),
            Target::Whole => DVec2::ZERO,
        }
    }

    pub fn tile(&self) -> Option<Udim> {
        match self {
            Target::Tile(tile) => Some(*tile),
            Target::Whole => None,
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Tile(tile) => write!(f, "tile {}", tile),
            Target::Whole => write!(f, "whole layout"),
        }
    }
}

/// Counters collected over a run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Meshes that contributed their uv layout.
    pub meshes: usize,
    /// Meshes without texture coordinates, or with malformed ones.
    pub skipped_meshes: usize,
    pub polygons_drawn: usize,
    /// Polygons outside the supported uv range, or spanning several tiles.
    pub polygons_dropped: usize,
    pub loops_drawn: usize,
    /// Boundary loops outside the supported uv range, or spanning several
    /// tiles.
    pub loops_dropped: usize,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Written images, in ascending tile order.
    pub images: Vec<(Target, PathBuf)>,
    pub stats: Stats,
}

/**
 * Draws uv layouts onto lazily created per tile canvases.
 *
 * All state lives in the checker and is only touched by the thread driving
 * it. Canvases are kept ordered by tile, so images are always written in
 * ascending tile order.
 */
pub struct Checker<'a, R: Rasterizer> {
    settings: &'a Settings,
    raster: R,
    canvases: BTreeMap<Target, R::Canvas>,
    stats: Stats,
}

impl<'a, R: Rasterizer> Checker<'a, R> {
    pub fn new(settings: &'a Settings, raster: R) -> Result<Self> {
        settings.validate()?;
        Ok(Checker {
            settings,
            raster,
            canvases: BTreeMap::new(),
            stats: Stats::default(),
        })
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn num_canvases(&self) -> usize {
        self.canvases.len()
    }

    /// All canvases created so far, in ascending tile order.
    pub fn canvases(&self) -> impl Iterator<Item = (Target, &R::Canvas)> {
        self.canvases.iter().map(|(t, c)| (*t, c))
    }

    pub fn canvas(&self, target: Target) -> Option<&R::Canvas> {
        self.canvases.get(&target)
    }

    /// The image the coordinates are drawn on, if any.
    fn resolve<I>(&self, coords: I) -> Option<Target>
    where
        I: IntoIterator<Item = DVec2>,
    {
        match self.settings.mode {
            TileMode::Udim => tile_of_many(coords).map(Target::Tile),
            TileMode::Single => Some(Target::Whole),
        }
    }

    fn canvas_mut(&mut self, target: Target) -> Result<&mut R::Canvas> {
        match self.canvases.entry(target) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!("Creating canvas for {}", target);
                let canvas = self.raster.create_canvas(self.settings.size)?;
                Ok(entry.insert(canvas))
            }
        }
    }

    /// Draw the uv layout of one mesh.
    ///
    /// Only failing to create a canvas is an error. Polygons and boundary
    /// loops that do not belong to a single tile are dropped.
    pub fn add_mesh(&mut self, mesh: &UvMesh) -> Result<()> {
        let layout = UvLayout::build(mesh);
        let junctions = layout.boundary_graph().junctions().count();
        if junctions > 0 {
            warn!(
                "Boundary has {} vertices shared by more than two boundary edges; \
                 borders through them may not be traced in order",
                junctions
            );
        }
        let settings = self.settings;
        let styles = &settings.styles;
        for polygon in layout.polygons() {
            let Some(target) = self.resolve(polygon.points.iter().copied()) else {
                self.stats.polygons_dropped += 1;
                continue;
            };
            let view = Viewport::new(target.origin(), settings.size);
            let points = view.to_pixels(polygon.points.iter().copied());
            let canvas = self.canvas_mut(target)?;
            canvas.fill_polygon(&points, styles.facing(polygon.is_front_facing()));
            canvas.stroke_polyline(&points, true, &styles.internal_edges);
            self.stats.polygons_drawn += 1;
        }
        for path in layout.loops() {
            let uvs = layout.loop_points(path);
            let Some(target) = self.resolve(uvs.iter().copied()) else {
                self.stats.loops_dropped += 1;
                continue;
            };
            let view = Viewport::new(target.origin(), settings.size);
            let points = view.to_pixels(uvs);
            self.canvas_mut(target)?
                .stroke_polyline(&points, true, &styles.border_edges);
            self.stats.loops_drawn += 1;
        }
        debug!(
            "Mesh has {} polygons and {} boundary loops",
            layout.polygons().len(),
            layout.loops().len()
        );
        self.stats.meshes += 1;
        Ok(())
    }

    /// Draw a mesh primitive from a scene. Primitives without usable texture
    /// coordinates contribute nothing.
    pub fn add_primitive(&mut self, prim: &MeshPrimitive) -> Result<()> {
        match &prim.uvs {
            Some(Ok(mesh)) => {
                debug!("Processing mesh '{}'", prim.name);
                self.add_mesh(mesh)
            }
            Some(Err(e)) => {
                warn!("Skipping mesh '{}' with malformed uvs: {}", prim.name, e);
                self.stats.skipped_meshes += 1;
                Ok(())
            }
            None => {
                debug!("Skipping mesh '{}' without uvs", prim.name);
                self.stats.skipped_meshes += 1;
                Ok(())
            }
        }
    }

    /// Draw every mesh primitive of the scene, in order.
    pub fn add_scene(&mut self, scene: &Scene) -> Result<()> {
        for prim in &scene.meshes {
            self.add_primitive(prim)?;
        }
        Ok(())
    }

    /// The path the image of the target is written to.
    pub fn output_path(&self, target: Target) -> PathBuf {
        match target {
            Target::Tile(tile) => self.settings.output_path_for(tile),
            Target::Whole => self.settings.output.clone(),
        }
    }

    /// Write every canvas to its image file, in ascending tile order.
    pub fn finish(self) -> Result<Report> {
        if self.canvases.is_empty() {
            warn!("Nothing was drawn, no images written");
        }
        let mut images = Vec::with_capacity(self.canvases.len());
        for (target, canvas) in &self.canvases {
            let path = self.output_path(*target);
            self.raster.save(canvas, &path)?;
            info!("Wrote {} to {}", target, path.display());
            images.push((*target, path));
        }
        Ok(Report {
            images,
            stats: self.stats,
        })
    }
}

/// Read the scene named in the settings and write its uv layout images.
pub fn render(settings: &Settings) -> Result<Report> {
    settings.validate()?;
    info!("Loading scene from {}", settings.input.display());
    let scene = Scene::load_obj(&settings.input)?;
    info!("Loaded {} meshes", scene.num_meshes());
    let mut checker = Checker::new(settings, SkiaRasterizer)?;
    checker.add_scene(&scene)?;
    checker.finish()
}
