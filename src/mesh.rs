use glam::DVec2;

use crate::error::{Error, Result};

/**
 * The uv layout of one mesh primitive, as three flat arrays.
 *
 * + `face_vertex_counts`: the number of vertices of each face.
 * + `uv_indices`: the uv index of every face vertex, face after face.
 * + `uv_positions`: the uv coordinates referenced by the indices.
 *
 * The arrays are validated on construction: the counts must add up to the
 * number of indices, every face must have at least one vertex, and every
 * index must refer to an existing position.
 */
#[derive(Debug, Clone, Default)]
pub struct UvMesh {
    face_vertex_counts: Vec<u32>,
    uv_indices: Vec<u32>,
    uv_positions: Vec<DVec2>,
}

impl UvMesh {
    pub fn new(
        face_vertex_counts: Vec<u32>,
        uv_indices: Vec<u32>,
        uv_positions: Vec<DVec2>,
    ) -> Result<Self> {
        let total = face_vertex_counts
            .iter()
            .try_fold(0usize, |total, &count| {
                total.checked_add(count as usize)
            })
            .ok_or(Error::MismatchedArrayLengths(uv_indices.len(), usize::MAX))?;
        if total != uv_indices.len() {
            return Err(Error::MismatchedArrayLengths(uv_indices.len(), total));
        }
        if let Some(face) = face_vertex_counts.iter().position(|&c| c == 0) {
            return Err(Error::InvalidFaceSize { face });
        }
        if let Some(&index) = uv_indices
            .iter()
            .find(|&&i| i as usize >= uv_positions.len())
        {
            return Err(Error::IndexOutOfBounds {
                index,
                len: uv_positions.len(),
            });
        }
        Ok(UvMesh {
            face_vertex_counts,
            uv_indices,
            uv_positions,
        })
    }

    /// Create a mesh where every face has the same number of vertices.
    pub fn uniform(
        arity: u32,
        uv_indices: Vec<u32>,
        uv_positions: Vec<DVec2>,
    ) -> Result<Self> {
        if arity == 0 {
            return Err(Error::InvalidFaceSize { face: 0 });
        }
        if uv_indices.len() % arity as usize != 0 {
            return Err(Error::MismatchedArrayLengths(
                uv_indices.len().next_multiple_of(arity as usize),
                uv_indices.len(),
            ));
        }
        let counts = vec![arity; uv_indices.len() / arity as usize];
        Self::new(counts, uv_indices, uv_positions)
    }

    pub fn num_faces(&self) -> usize {
        self.face_vertex_counts.len()
    }

    pub fn face_vertex_counts(&self) -> &[u32] {
        &self.face_vertex_counts
    }

    pub fn uv_indices(&self) -> &[u32] {
        &self.uv_indices
    }

    pub fn uv_positions(&self) -> &[DVec2] {
        &self.uv_positions
    }

    pub fn position(&self, index: u32) -> DVec2 {
        self.uv_positions[index as usize]
    }

    /// Iterate over the uv indices of each face.
    pub fn faces(&self) -> impl Iterator<Item = &[u32]> + use<'_> {
        let mut start = 0usize;
        self.face_vertex_counts.iter().map(move |&count| {
            let end = start + count as usize;
            let face = &self.uv_indices[start..end];
            start = end;
            face
        })
    }

    /// The uv positions of the given indices, in order.
    pub fn positions_of<'a>(
        &'a self,
        indices: &'a [u32],
    ) -> impl Iterator<Item = DVec2> + use<'a> {
        indices.iter().map(|&i| self.position(i))
    }
}
