use std::path::PathBuf;
use error::BakeError;

/// sizing and seeding for one bake
///
/// Passed into the orchestrator explicitly so tests can run small worlds
/// without touching the defaults below.
#[derive(Clone, Debug)]
pub struct BakeConfig {
    /// world edge length in tiles
    pub world_tiles: i32,
    /// chunk edge length in tiles
    pub chunk_tiles: i32,
    pub seed: i32,
    pub out_dir: PathBuf,
}

impl BakeConfig {
    /// the shipping overworld, ~32 minutes across at default walk speed
    pub fn overworld() -> Self {
        BakeConfig {
            world_tiles: 10800,
            chunk_tiles: 128,
            seed: 12345,
            out_dir: ["assets", "world", "overworld", "chunks"].iter().collect(),
        }
    }

    pub fn validate(&self) -> Result<(), BakeError> {
        if self.world_tiles <= 0 {
            return Err(BakeError::Config(format!("world_tiles must be positive, got {}", self.world_tiles)));
        }
        if self.chunk_tiles <= 0 {
            return Err(BakeError::Config(format!("chunk_tiles must be positive, got {}", self.chunk_tiles)));
        }
        Ok(())
    }

    /// chunk count per axis, rounding up so the last row/column may overhang
    pub fn chunks_per_axis(&self) -> i32 {
        (self.world_tiles + self.chunk_tiles - 1) / self.chunk_tiles
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn with_sizes(world: i32, chunk: i32) -> BakeConfig {
        BakeConfig {
            world_tiles: world,
            chunk_tiles: chunk,
            ..BakeConfig::overworld()
        }
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        assert!(with_sizes(0, 128).validate().is_err());
        assert!(with_sizes(-5, 128).validate().is_err());
        assert!(with_sizes(256, 0).validate().is_err());
        assert!(with_sizes(256, -1).validate().is_err());
        assert!(with_sizes(256, 128).validate().is_ok());
    }

    #[test]
    fn chunk_count_rounds_up() {
        assert_eq!(with_sizes(256, 128).chunks_per_axis(), 2);
        assert_eq!(with_sizes(300, 128).chunks_per_axis(), 3);
        assert_eq!(with_sizes(128, 128).chunks_per_axis(), 1);
        assert_eq!(with_sizes(1, 128).chunks_per_axis(), 1);
    }
}
