use num::Integer;
use atlas::{TileId, TileTable};
use worldgen::noise::HeightField;

const WATER_LEVEL: f64 = 0.40;
const SHORE_LEVEL: f64 = 0.435;

//roads repeat on a fixed 128 tile period regardless of the configured
//chunk size, crossing every default-sized chunk at its midline
const ROAD_PERIOD: i32 = 128;
const ROAD_CENTER: i32 = 64;
const ROAD_HALF_WIDTH: i32 = 2;

/// maps tile coordinates to atlas tile ids via the fractal heightfield
pub struct SurfaceGen {
    height: HeightField,
    tiles: TileTable,
}

impl SurfaceGen {
    pub fn new(seed: i32, tiles: TileTable) -> Self {
        SurfaceGen {
            height: HeightField::new(seed),
            tiles: tiles,
        }
    }

    pub fn tile_at(&self, tx: i32, ty: i32) -> TileId {
        self.classify(tx, ty, self.height.height_at(tx, ty))
    }

    /// first match wins: water, sand, road, grass
    pub fn classify(&self, tx: i32, ty: i32, height: f64) -> TileId {
        let parity = (tx.wrapping_add(ty) & 1) as usize;
        if height < WATER_LEVEL {
            return self.tiles.water(parity);
        }
        if height < SHORE_LEVEL {
            return self.tiles.sand(parity);
        }
        if on_road(tx) || on_road(ty) {
            return self.tiles.dirt(parity);
        }
        //visually tuned variation, not a fair distribution
        let variant = (tx.wrapping_mul(3).wrapping_add(ty.wrapping_mul(7)) & 2) as usize;
        self.tiles.grass(variant)
    }
}

fn on_road(coord: i32) -> bool {
    (coord.mod_floor(&ROAD_PERIOD) - ROAD_CENTER).abs() < ROAD_HALF_WIDTH
}
