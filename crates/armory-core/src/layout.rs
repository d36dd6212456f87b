//! Terrain layout - one-shot seeded placement generation
//!
//! Ground blocks and trees are scattered once at session start and the
//! result is passed explicitly into scene construction. The same seed
//! and params always produce the same layout.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Placement counts and scatter ranges
#[derive(Debug, Clone)]
pub struct TerrainParams {
    pub ground_blocks: usize,
    pub trees: usize,
    /// Ground blocks land in x,z ∈ [-ground_extent, ground_extent)
    pub ground_extent: f32,
    /// Trees land in x,z ∈ [-tree_extent, tree_extent)
    pub tree_extent: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            ground_blocks: 50,
            trees: 10,
            ground_extent: 20.0,
            tree_extent: 15.0,
        }
    }
}

/// Fixed placements for the session
#[derive(Debug, Clone)]
pub struct TerrainLayout {
    pub ground_blocks: Vec<[f32; 3]>,
    pub trees: Vec<[f32; 3]>,
}

impl TerrainLayout {
    /// Generate placements from a seed
    pub fn generate(params: &TerrainParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ground_blocks = scatter(&mut rng, params.ground_blocks, params.ground_extent);
        let trees = scatter(&mut rng, params.trees, params.tree_extent);
        Self {
            ground_blocks,
            trees,
        }
    }
}

/// Scatter `count` positions on the ground plane, uniform in
/// x,z ∈ [-extent, extent)
fn scatter(rng: &mut StdRng, count: usize, extent: f32) -> Vec<[f32; 3]> {
    if extent <= 0.0 {
        return vec![[0.0, 0.0, 0.0]; count];
    }
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-extent..extent),
                0.0,
                rng.gen_range(-extent..extent),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_ranges() {
        let layout = TerrainLayout::generate(&TerrainParams::default(), 7);

        assert_eq!(layout.ground_blocks.len(), 50);
        assert_eq!(layout.trees.len(), 10);

        for [x, y, z] in &layout.ground_blocks {
            assert_eq!(*y, 0.0);
            assert!((-20.0..20.0).contains(x));
            assert!((-20.0..20.0).contains(z));
        }
        for [x, y, z] in &layout.trees {
            assert_eq!(*y, 0.0);
            assert!((-15.0..15.0).contains(x));
            assert!((-15.0..15.0).contains(z));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let params = TerrainParams::default();
        let a = TerrainLayout::generate(&params, 42);
        let b = TerrainLayout::generate(&params, 42);

        assert_eq!(a.ground_blocks, b.ground_blocks);
        assert_eq!(a.trees, b.trees);
    }

    #[test]
    fn test_different_seeds_differ() {
        let params = TerrainParams::default();
        let a = TerrainLayout::generate(&params, 1);
        let b = TerrainLayout::generate(&params, 2);

        assert_ne!(a.ground_blocks, b.ground_blocks);
    }

    #[test]
    fn test_zero_extent_collapses_to_origin() {
        let params = TerrainParams {
            ground_blocks: 3,
            trees: 1,
            ground_extent: 0.0,
            tree_extent: 0.0,
        };
        let layout = TerrainLayout::generate(&params, 9);

        assert_eq!(layout.ground_blocks, vec![[0.0, 0.0, 0.0]; 3]);
        assert_eq!(layout.trees, vec![[0.0, 0.0, 0.0]]);
    }
}
