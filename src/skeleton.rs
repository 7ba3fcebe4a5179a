use crate::types::BranchId;
use glam::Vec2;

/// One straight branch segment of the tree skeleton.
///
/// Segments are immutable once generated. The parent-child relation is
/// stored as an explicit index rather than recovered by matching
/// endpoint coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
    /// Recursion depth in the generation tree; 0 for the trunk.
    pub depth: u8,
    /// Index of the parent segment, or `None` for the trunk.
    pub parent: Option<BranchId>,
}

/// The full branch skeleton: an ordered, root-first sequence of segments.
///
/// Index 0 is always the trunk. Children appear after their parent
/// (pre-order), so drawing the segments in index order draws the trunk
/// first.
#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    pub segments: Vec<BranchSegment>,
}

impl BranchSegment {
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Direction angle in radians, measured from the positive x axis.
    pub fn angle(&self) -> f32 {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }
}

impl Skeleton {
    /// Creates a skeleton containing only the trunk.
    pub fn new(trunk_base: Vec2, trunk_top: Vec2, thickness: f32) -> Self {
        Self {
            segments: vec![BranchSegment {
                start: trunk_base,
                end: trunk_top,
                thickness,
                depth: 0,
                parent: None,
            }],
        }
    }

    /// Appends a child segment growing out of `parent`'s endpoint.
    ///
    /// The child's `start` is taken from the parent's `end` and its
    /// `depth` is the parent's depth plus one.
    ///
    /// ### Panics
    /// Panics if `parent` is out of bounds.
    pub fn add_child(&mut self, parent: BranchId, end: Vec2, thickness: f32) -> BranchId {
        let id = self.segments.len();
        let p = &self.segments[parent];
        let seg = BranchSegment {
            start: p.end,
            end,
            thickness,
            depth: p.depth + 1,
            parent: Some(parent),
        };
        self.segments.push(seg);
        id
    }

    pub fn trunk(&self) -> &BranchSegment {
        &self.segments[0]
    }

    /// Iterates over every segment except the trunk.
    pub fn crown(&self) -> impl Iterator<Item = &BranchSegment> {
        self.segments.iter().skip(1)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
