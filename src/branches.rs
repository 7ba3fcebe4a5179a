//! Recursive fractal branch generation.
//!
//! [`generate_skeleton`] grows a tree skeleton from a single trunk
//! definition by repeatedly subdividing each branch into a few shorter,
//! thinner children. The recursion builds an intermediate [`Subtree`]
//! value per branch and the caller flattens the result pre-order into a
//! [`Skeleton`], so no shared collection is mutated mid-recursion.
//!
//! All randomness comes from the caller-supplied [`Rng`], which makes
//! the output reproducible with a seeded generator.

use crate::{config::GrowthConfig, skeleton::Skeleton, types::BranchId};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_4, PI};

/// Branching parameters for one recursion-depth tier.
///
/// Deeper tiers branch less, with shorter children.
struct Tier {
    min_count: usize,
    max_count: usize,
    length_range: (f32, f32),
    /// Half-width of the angular band around the parent direction.
    spread: f32,
}

/// Returns the [`Tier`] governing children generated at `depth`.
fn tier(depth: u8) -> Tier {
    if depth == 0 {
        // Trunk-level children: a fixed fan of four.
        Tier {
            min_count: 4,
            max_count: 4,
            length_range: (0.55, 0.65),
            spread: FRAC_PI_4,
        }
    } else if depth < 3 {
        Tier {
            min_count: 2,
            max_count: 3,
            length_range: (0.50, 0.65),
            spread: PI / 4.5,
        }
    } else {
        Tier {
            min_count: 1,
            max_count: 2,
            length_range: (0.40, 0.60),
            spread: FRAC_PI_4,
        }
    }
}

/// One generated branch plus its recursively generated children,
/// before flattening into a [`Skeleton`].
///
/// The branch's `start` is implicit: it is always the parent's `end`.
struct Subtree {
    end: Vec2,
    thickness: f32,
    children: Vec<Subtree>,
}

/// Generates the full branch skeleton for the given trunk definition.
///
/// The trunk segment comes straight from the config; every other
/// segment is produced by recursive subdivision:
///
/// 1. Pick a child count and angular band from the depth [`Tier`].
/// 2. If there is more than one child and the parent points upward
///    (screen coordinates, so `dir.y < 0`), fan the children evenly
///    across the band; otherwise give each a uniformly random angle
///    within it. Every child also gets ±0.05 rad of jitter.
/// 3. Scale length by a random tier factor and a slight decay with
///    depth; scale thickness by the same factor and a depth penalty,
///    floored at 1.0.
/// 4. Recurse until `max_depth` is reached or a branch drops below
///    `min_thickness`.
///
/// Segments are emitted pre-order: each branch is followed by its whole
/// subtree before the next sibling.
///
/// ### Parameters
/// - `cfg` - Trunk geometry and termination bounds.
/// - `rng` - Random source for angle and length jitter; seed it for
///   reproducible output.
///
/// ### Returns
/// A [`Skeleton`] whose segment 0 is the trunk.
pub fn generate_skeleton(cfg: &GrowthConfig, rng: &mut impl Rng) -> Skeleton {
    let mut skeleton = Skeleton::new(cfg.trunk_base, cfg.trunk_top, cfg.trunk_thickness);
    let children = branch_out(
        cfg.trunk_base,
        cfg.trunk_top,
        cfg.trunk_thickness,
        0,
        cfg,
        rng,
    );
    for child in children {
        flatten(child, 0, &mut skeleton);
    }
    skeleton
}

/// Appends `sub` and its descendants to the skeleton, pre-order.
fn flatten(sub: Subtree, parent: BranchId, out: &mut Skeleton) {
    let id = out.add_child(parent, sub.end, sub.thickness);
    for child in sub.children {
        flatten(child, id, out);
    }
}

/// Recursively generates the children of one branch.
///
/// Returns an empty list once the depth or thickness bound is hit.
fn branch_out(
    start: Vec2,
    end: Vec2,
    thickness: f32,
    depth: u8,
    cfg: &GrowthConfig,
    rng: &mut impl Rng,
) -> Vec<Subtree> {
    if depth >= cfg.max_depth || thickness < cfg.min_thickness {
        return Vec::new();
    }

    let dir = end - start;
    let length = dir.length();
    let main_angle = dir.y.atan2(dir.x);

    let t = tier(depth);
    let count = if t.min_count == t.max_count {
        t.min_count
    } else {
        rng.random_range(t.min_count..=t.max_count)
    };

    // Angle offsets within the band: an even fan for upward-pointing
    // parents, uniformly random otherwise.
    let offsets: Vec<f32> = if count > 1 && dir.y < 0.0 {
        let step = 2.0 * t.spread / (count - 1) as f32;
        (0..count).map(|i| -t.spread + i as f32 * step).collect()
    } else {
        (0..count)
            .map(|_| rng.random_range(-t.spread..=t.spread))
            .collect()
    };

    // Children shorten slightly with depth on top of the tier factor.
    let decay = 1.0 - depth as f32 / cfg.max_depth as f32 * 0.15;

    let mut children = Vec::with_capacity(count);
    for offset in offsets {
        let factor = rng.random_range(t.length_range.0..=t.length_range.1);
        let angle = main_angle + offset + rng.random_range(-0.05..=0.05);

        let child_len = length * factor * decay;
        let child_end = end + Vec2::new(angle.cos(), angle.sin()) * child_len;
        let child_thickness = (thickness * factor * (0.8 - depth as f32 * 0.02)).max(1.0);

        children.push(Subtree {
            end: child_end,
            thickness: child_thickness,
            children: branch_out(end, child_end, child_thickness, depth + 1, cfg, rng),
        });
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f32::consts::FRAC_PI_2;

    fn shallow_config() -> GrowthConfig {
        GrowthConfig {
            trunk_base: Vec2::new(400.0, 600.0),
            trunk_top: Vec2::new(400.0, 420.0),
            trunk_thickness: 25.0,
            max_depth: 1,
            min_thickness: 1.0,
        }
    }

    #[test]
    fn max_depth_zero_yields_only_the_trunk() {
        let cfg = GrowthConfig {
            max_depth: 0,
            ..shallow_config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let skeleton = generate_skeleton(&cfg, &mut rng);

        assert_eq!(skeleton.len(), 1);
        assert_eq!(skeleton.trunk().start, cfg.trunk_base);
        assert_eq!(skeleton.trunk().end, cfg.trunk_top);
        assert_eq!(skeleton.trunk().thickness, cfg.trunk_thickness);
    }

    #[test]
    fn depth_one_yields_trunk_plus_four_children() {
        let cfg = shallow_config();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let skeleton = generate_skeleton(&cfg, &mut rng);

        // 1 trunk + the fixed fan of 4 trunk-level children.
        assert_eq!(skeleton.len(), 5);
        for child in skeleton.crown() {
            assert_eq!(child.parent, Some(0));
            assert_eq!(child.depth, 1);
            assert_eq!(child.start, cfg.trunk_top);
            assert!(child.thickness <= cfg.trunk_thickness);
            assert!(child.thickness >= 1.0);
        }
    }

    #[test]
    fn trunk_children_fan_evenly_when_pointing_up() {
        let cfg = shallow_config();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let skeleton = generate_skeleton(&cfg, &mut rng);

        // Offsets relative to the upright trunk direction should sit on
        // an even fan across +-pi/4, give or take the +-0.05 jitter.
        let mut offsets: Vec<f32> = skeleton
            .crown()
            .map(|c| c.angle() - (-FRAC_PI_2))
            .collect();
        offsets.sort_by(f32::total_cmp);

        let step = 2.0 * FRAC_PI_4 / 3.0;
        for (i, offset) in offsets.iter().enumerate() {
            let expected = -FRAC_PI_4 + i as f32 * step;
            assert!(
                (offset - expected).abs() <= 0.06,
                "offset {offset} too far from fan position {expected}"
            );
        }
    }

    #[test]
    fn depth_and_thickness_bounds_hold_for_a_full_tree() {
        let cfg = GrowthConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let skeleton = generate_skeleton(&cfg, &mut rng);

        assert!(skeleton.len() > 1);
        for seg in &skeleton.segments {
            assert!(seg.depth <= cfg.max_depth);
            // Children are floored at 1.0, so nothing ends up below the
            // configured minimum.
            assert!(seg.thickness >= cfg.min_thickness - f32::EPSILON);
        }
    }

    #[test]
    fn parent_links_are_consistent() {
        let cfg = GrowthConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let skeleton = generate_skeleton(&cfg, &mut rng);

        assert_eq!(skeleton.segments[0].parent, None);
        for (id, seg) in skeleton.segments.iter().enumerate().skip(1) {
            let parent = seg.parent.expect("non-trunk segment must have a parent");
            // Pre-order: parents always precede their children.
            assert!(parent < id);
            assert_eq!(seg.start, skeleton.segments[parent].end);
            assert_eq!(seg.depth, skeleton.segments[parent].depth + 1);
        }
    }

    #[test]
    fn identical_seeds_produce_identical_skeletons() {
        let cfg = GrowthConfig::default();

        let a = generate_skeleton(&cfg, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate_skeleton(&cfg, &mut ChaCha8Rng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn thin_trunk_stops_recursion_immediately() {
        let cfg = GrowthConfig {
            trunk_thickness: 0.5,
            min_thickness: 1.0,
            max_depth: 5,
            ..shallow_config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        let skeleton = generate_skeleton(&cfg, &mut rng);

        // The trunk is below the minimum thickness, so it must not
        // branch at all.
        assert_eq!(skeleton.len(), 1);
    }
}
