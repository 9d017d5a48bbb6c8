use atlas::TileId;

/// a run is closed at this count even if the value continues
pub const MAX_RUN: u16 = 65_535;

/// run-length encode a row-major tile sequence
///
/// Runs are maximal: adjacent pairs never share a tile id unless the first
/// was capped at `MAX_RUN`. The input must not be empty.
pub fn encode(tiles: &[TileId]) -> Vec<(u16, TileId)> {
    assert!(!tiles.is_empty());
    let mut out = Vec::new();
    let mut prev = tiles[0];
    let mut count: u16 = 1;
    for &tile in &tiles[1..] {
        if tile == prev && count < MAX_RUN {
            count += 1;
        } else {
            out.push((count, prev));
            prev = tile;
            count = 1;
        }
    }
    out.push((count, prev));
    out
}

/// expand pairs in order; callers check the total length against w*h
pub fn decode(runs: &[(u16, TileId)]) -> Vec<TileId> {
    let mut out = Vec::new();
    for &(count, tile) in runs {
        for _ in 0..count {
            out.push(tile);
        }
    }
    out
}
