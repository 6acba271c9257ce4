use std::collections::BTreeMap;

use voxport_geom::{Face, Quad, QuarterTurn, TextureName, Vec3};

// Destination for generated quads; generators never care how they are stored.
pub trait QuadSink {
    fn push_quad(&mut self, q: Quad);
}

impl QuadSink for Vec<Quad> {
    #[inline]
    fn push_quad(&mut self, q: Quad) {
        self.push(q);
    }
}

/// Quads grouped by texture name, ordered by name so exports are reproducible.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct QuadBuckets {
    buckets: BTreeMap<TextureName, Vec<Quad>>,
}

impl QuadSink for QuadBuckets {
    #[inline]
    fn push_quad(&mut self, q: Quad) {
        self.buckets.entry(q.texture.clone()).or_default().push(q);
    }
}

impl QuadBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every bucket of `other` after the quads already held.
    pub fn merge(&mut self, other: QuadBuckets) {
        for (tex, mut quads) in other.buckets {
            self.buckets.entry(tex).or_default().append(&mut quads);
        }
    }

    pub fn get(&self, texture: &str) -> Option<&[Quad]> {
        self.buckets.get(texture).map(Vec::as_slice)
    }

    pub fn textures(&self) -> impl Iterator<Item = &TextureName> {
        self.buckets.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TextureName, &[Quad])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Total quads across all buckets.
    pub fn quad_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Emits the faces of the box `[min, max]` for which `choose` returns a texture.
/// The quarter turn applies to the face's projected UVs.
pub(crate) fn emit_box_faces(
    out: &mut impl QuadSink,
    min: Vec3,
    max: Vec3,
    mut choose: impl FnMut(Face) -> Option<(TextureName, QuarterTurn)>,
) {
    for face in Face::ALL {
        if let Some((tex, turn)) = choose(face) {
            out.push_quad(Quad::box_face(face, min, max, tex).rotate_uv_quarter(turn));
        }
    }
}
