//! Selection of visible leaves from the fixed anchor pool.
//!
//! The anchor pool produced by [`crate::leaves::place_leaves`] never
//! changes; seasonal leaf-count changes only select or deselect anchors
//! from it. [`Canopy`] tracks that selection as stable pool indices, so
//! an anchor that stays selected across a season change keeps its exact
//! position and no leaf ever flickers to a new spot.

use crate::leaves::LeafAnchor;
use crate::season::Season;
use rand::Rng;
use rand::seq::{SliceRandom, index};

/// The set of currently visible leaf anchors, by pool index.
#[derive(Debug)]
pub struct Canopy {
    /// Indices of visible anchors, in claim order.
    visible: Vec<usize>,
    /// Per-anchor visibility flag, parallel to the pool.
    in_use: Vec<bool>,
}

impl Canopy {
    /// Creates an empty canopy over a pool of `pool_len` anchors.
    pub fn new(pool_len: usize) -> Self {
        Self {
            visible: Vec::new(),
            in_use: vec![false; pool_len],
        }
    }

    /// Indices of the visible anchors, in claim order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn pool_len(&self) -> usize {
        self.in_use.len()
    }

    /// Deselects every anchor.
    pub fn clear(&mut self) {
        for flag in &mut self.in_use {
            *flag = false;
        }
        self.visible.clear();
    }

    /// Replaces the selection with a fresh per-season pick.
    ///
    /// Used when a season is entered with no carried-over foliage:
    ///
    /// - Spring and summer prefer the highest anchors (smallest `y` in
    ///   screen coordinates), filling the crown from the top.
    /// - Autumn and winter sample uniformly at random.
    ///
    /// `target` is clamped to the pool size.
    ///
    /// ### Parameters
    /// - `anchors` - The fixed anchor pool this canopy selects from.
    /// - `season` - Season whose selection pattern to apply.
    /// - `target` - Desired number of visible anchors.
    /// - `rng` - Random source for the uniform sampling seasons.
    pub fn fill(
        &mut self,
        anchors: &[LeafAnchor],
        season: Season,
        target: usize,
        rng: &mut impl Rng,
    ) {
        debug_assert_eq!(anchors.len(), self.in_use.len());
        self.clear();
        let target = target.min(anchors.len());

        match season {
            Season::Spring | Season::Summer => {
                let mut ids: Vec<usize> = (0..anchors.len()).collect();
                ids.sort_by(|&a, &b| anchors[a].position.y.total_cmp(&anchors[b].position.y));
                for id in ids.into_iter().take(target) {
                    self.claim(id);
                }
            }
            Season::Autumn | Season::Winter => {
                for id in index::sample(rng, anchors.len(), target) {
                    self.claim(id);
                }
            }
        }
    }

    /// Grows or sheds the selection toward `target`, keeping every
    /// surviving anchor in place.
    ///
    /// Growing claims random currently-unused indices. Shedding removes
    /// random anchors, except in autumn, where the bottom-most anchors
    /// (largest `y`) fall first so the crown empties from below.
    ///
    /// `target` is clamped to the pool size.
    ///
    /// ### Parameters
    /// - `anchors` - The fixed anchor pool this canopy selects from.
    /// - `season` - Season controlling the shedding pattern.
    /// - `target` - Desired number of visible anchors.
    /// - `rng` - Random source for claiming and random shedding.
    pub fn resize(
        &mut self,
        anchors: &[LeafAnchor],
        season: Season,
        target: usize,
        rng: &mut impl Rng,
    ) {
        debug_assert_eq!(anchors.len(), self.in_use.len());
        let target = target.min(anchors.len());

        if target > self.visible.len() {
            let free: Vec<usize> = (0..anchors.len()).filter(|&i| !self.in_use[i]).collect();
            let want = (target - self.visible.len()).min(free.len());
            for slot in index::sample(rng, free.len(), want) {
                self.claim(free[slot]);
            }
        } else if target < self.visible.len() {
            match season {
                // Survivors are the highest anchors.
                Season::Autumn => self
                    .visible
                    .sort_by(|&a, &b| anchors[a].position.y.total_cmp(&anchors[b].position.y)),
                _ => self.visible.shuffle(rng),
            }
            for &id in &self.visible[target..] {
                self.in_use[id] = false;
            }
            self.visible.truncate(target);
        }
    }

    fn claim(&mut self, id: usize) {
        debug_assert!(!self.in_use[id]);
        self.in_use[id] = true;
        self.visible.push(id);
    }
}
