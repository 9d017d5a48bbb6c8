//tile ids index into the atlas grid maintained with the renderer assets

/// number of columns in the overworld atlas image
pub const ATLAS_COLS: u16 = 45;

#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// id of the atlas cell at (column, row)
    pub fn from_cell(col: u16, row: u16) -> Self {
        TileId(row * ATLAS_COLS + col)
    }
}

/// candidate tile ids per terrain category
///
/// Injected into the classifier so the id lists stay in one place and tests
/// can substitute a small fake atlas. The ids must match the atlas manifest
/// shipped with the renderer; that contract is not checked here.
pub struct TileTable {
    grass: Vec<TileId>,
    dirt: Vec<TileId>,
    sand: Vec<TileId>,
    water: Vec<TileId>,
}

impl TileTable {
    pub fn new(grass: Vec<TileId>, dirt: Vec<TileId>, sand: Vec<TileId>, water: Vec<TileId>) -> Self {
        assert!(grass.len() >= 3, "need at least 3 grass variants");
        assert!(dirt.len() >= 2 && sand.len() >= 2 && water.len() >= 2);
        TileTable {
            grass: grass,
            dirt: dirt,
            sand: sand,
            water: water,
        }
    }

    /// the id lists matching assets/world/overworld/tiles.json
    pub fn overworld() -> Self {
        TileTable::new(
            vec![TileId::from_cell(0, 0), TileId::from_cell(1, 0), TileId::from_cell(0, 1)],
            vec![TileId::from_cell(14, 0), TileId::from_cell(15, 0)],
            vec![TileId::from_cell(18, 0), TileId::from_cell(19, 0)],
            vec![TileId::from_cell(33, 22), TileId::from_cell(34, 22)],
        )
    }

    pub fn grass(&self, variant: usize) -> TileId {
        self.grass[variant]
    }
    pub fn dirt(&self, variant: usize) -> TileId {
        self.dirt[variant]
    }
    pub fn sand(&self, variant: usize) -> TileId {
        self.sand[variant]
    }
    pub fn water(&self, variant: usize) -> TileId {
        self.water[variant]
    }
}
