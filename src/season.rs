//! Seasonal foliage profiles.
//!
//! Each season carries a fixed set of display parameters for the
//! canopy: how full it is relative to the leaf budget, the target leaf
//! color, the leaf size scale, and how quickly the color transition
//! runs when the season changes.

/// The four seasons, cycling Spring → Summer → Autumn → Winter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Display parameters for one season.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonProfile {
    /// Fraction of the leaf budget that should be visible.
    pub canopy_fraction: f32,
    /// Target leaf color as RGB.
    pub leaf_color: [u8; 3],
    /// Leaf size relative to the maximum.
    pub leaf_scale: f32,
    /// Speed of the color transition into this season.
    pub transition_speed: f32,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn profile(self) -> SeasonProfile {
        match self {
            // Young, light-green foliage still growing in.
            Season::Spring => SeasonProfile {
                canopy_fraction: 0.75,
                leaf_color: [120, 220, 100],
                leaf_scale: 0.7,
                transition_speed: 1.5,
            },
            // Full, dark-green canopy.
            Season::Summer => SeasonProfile {
                canopy_fraction: 1.0,
                leaf_color: [30, 130, 30],
                leaf_scale: 1.0,
                transition_speed: 1.0,
            },
            // Golden, half-shed canopy.
            Season::Autumn => SeasonProfile {
                canopy_fraction: 0.5,
                leaf_color: [220, 150, 30],
                leaf_scale: 0.8,
                transition_speed: 2.0,
            },
            // A few white, frost-covered leaves.
            Season::Winter => SeasonProfile {
                canopy_fraction: 0.1,
                leaf_color: [255, 255, 255],
                leaf_scale: 0.5,
                transition_speed: 0.7,
            },
        }
    }

    /// How many leaves of a `budget`-sized pool this season shows.
    pub fn leaf_target(self, budget: usize) -> usize {
        (budget as f32 * self.profile().canopy_fraction).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons_cycle_in_order() {
        assert_eq!(Season::Spring.next(), Season::Summer);
        assert_eq!(Season::Summer.next(), Season::Autumn);
        assert_eq!(Season::Autumn.next(), Season::Winter);
        assert_eq!(Season::Winter.next(), Season::Spring);
    }

    #[test]
    fn leaf_targets_follow_the_canopy_fraction() {
        assert_eq!(Season::Spring.leaf_target(600), 450);
        assert_eq!(Season::Summer.leaf_target(600), 600);
        assert_eq!(Season::Autumn.leaf_target(600), 300);
        assert_eq!(Season::Winter.leaf_target(600), 60);
    }

    #[test]
    fn summer_has_the_fullest_canopy() {
        let summer = Season::Summer.profile().canopy_fraction;
        for season in Season::ALL {
            assert!(season.profile().canopy_fraction <= summer);
        }
    }
}
