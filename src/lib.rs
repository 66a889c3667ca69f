/*!
A uv layout checker for polygon meshes.

The uv layout of every mesh in a scene is drawn into one diagnostic image per
[UDIM](udim) tile:

+ Every face is filled with a color that depends on its winding in uv space,
  so flipped faces stand out. See [`winding::is_front_facing`].

+ Every face is outlined with the internal edge style.

+ The silhouette of every uv island, including the boundaries of any holes,
  is traced with the border style. Boundary edges are the edges that belong
  to exactly one face ([`edge::EdgeCounts`]). They are gathered into a graph
  and split into loops ([`boundary::AdjacencyGraph`]).

Faces and boundary loops that do not fit inside a single tile are not drawn.

# Usage

```no_run
use uvcheck::settings::Settings;

let settings = Settings {
    input: "model.obj".into(),
    output: "uv_<UDIM>.png".into(),
    ..Default::default()
};
let report = uvcheck::render(&settings).unwrap();
for (target, path) in &report.images {
    println!("{}: {}", target, path.display());
}
```

The individual stages can also be used on their own:

```
use glam::dvec2;
use uvcheck::{layout::UvLayout, mesh::UvMesh};

// Two triangles sharing the edge between uv indices 1 and 2.
let mesh = UvMesh::new(
    vec![3, 3],
    vec![0, 1, 2, 2, 1, 3],
    vec![dvec2(0.1, 0.1), dvec2(0.9, 0.1), dvec2(0.1, 0.9), dvec2(0.9, 0.9)],
)
.unwrap();
let layout = UvLayout::build(&mesh);
assert_eq!(layout.polygons().len(), 2);
assert_eq!(layout.loops().len(), 1);
assert_eq!(layout.loops()[0].len(), 4);
```
*/

mod macros;

pub mod boundary;
pub mod checker;
pub mod edge;
pub mod error;
pub mod layout;
pub mod mesh;
pub mod raster;
pub mod scene;
pub mod settings;
pub mod style;
pub mod udim;
pub mod winding;

pub use checker::{Checker, Report, Stats, Target, render};
pub use error::{Error, Result};
pub use udim::Udim;
