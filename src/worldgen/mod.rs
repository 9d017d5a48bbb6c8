use std::time::{Duration, Instant};
use rayon::prelude::*;
use atlas::TileTable;
use config::BakeConfig;
use error::BakeError;
use logging;
use store::ChunkStore;

pub use self::chunk::{ChunkPos, ChunkRecord};
pub use self::surface::SurfaceGen;

pub mod chunk;
pub mod noise;
pub mod rle;
pub mod surface;

pub struct BakeSummary {
    pub chunks_written: u64,
    pub elapsed: Duration,
}

/// bake every chunk of the configured world into the chunk store
///
/// Chunks only depend on global coordinates and the seed, so they are
/// generated in parallel. The first failed write aborts the run; chunks
/// already renamed into place stay valid.
pub fn bake(config: &BakeConfig, tiles: TileTable) -> Result<BakeSummary, BakeError> {
    config.validate()?;
    let start = Instant::now();
    let log = logging::root_logger();
    let store = ChunkStore::open(config.out_dir.clone()).map_err(BakeError::OutputDir)?;
    let surface = SurfaceGen::new(config.seed, tiles);
    let per_axis = config.chunks_per_axis();
    info!(log, "baking {0}x{0} chunks of {1}x{1} tiles", per_axis, config.chunk_tiles);

    let mut coords = Vec::with_capacity((per_axis * per_axis) as usize);
    for cy in 0..per_axis {
        for cx in 0..per_axis {
            coords.push(ChunkPos([cx, cy]));
        }
    }
    coords.par_iter().try_for_each(|&pos| -> Result<(), BakeError> {
        let record = bake_chunk(&surface, pos, config.chunk_tiles);
        store.write(pos, &record).map_err(|e| BakeError::ChunkWrite {
            pos: pos,
            source: e,
        })?;
        if pos[0] % 10 == 0 && pos[1] % 10 == 0 {
            info!(log, "wrote chunk {},{}", pos[0], pos[1]);
        }
        Ok(())
    })?;

    Ok(BakeSummary {
        chunks_written: per_axis as u64 * per_axis as u64,
        elapsed: start.elapsed(),
    })
}

/// materialize one chunk's row-major grid and encode it
///
/// w and h always equal the configured chunk size; the last row/column of
/// chunks may overhang the world edge.
pub fn bake_chunk(surface: &SurfaceGen, pos: ChunkPos, chunk_tiles: i32) -> ChunkRecord {
    let base_x = pos[0] * chunk_tiles;
    let base_y = pos[1] * chunk_tiles;
    let mut grid = Vec::with_capacity((chunk_tiles * chunk_tiles) as usize);
    for y in 0..chunk_tiles {
        for x in 0..chunk_tiles {
            grid.push(surface.tile_at(base_x + x, base_y + y));
        }
    }
    ChunkRecord::from_tiles(chunk_tiles as u32, chunk_tiles as u32, &grid)
}
