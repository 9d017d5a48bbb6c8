use std::ops::Deref;
use atlas::TileId;
use error::BakeError;
use worldgen::rle;

#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub struct ChunkPos(pub [i32; 2]);

impl ChunkPos {
    /// deterministic file name under the chunk storage root
    pub fn file_name(&self) -> String {
        format!("c_{}_{}.json", self.0[0], self.0[1])
    }
}

impl Deref for ChunkPos {
    type Target = [i32; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// one persisted chunk: dimensions plus the encoded row-major tile grid
///
/// Field order matches the consumer's expectation of {"w", "h", "rle"}.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub w: u32,
    pub h: u32,
    pub rle: Vec<(u16, TileId)>,
}

impl ChunkRecord {
    pub fn from_tiles(w: u32, h: u32, tiles: &[TileId]) -> Self {
        debug_assert_eq!(tiles.len(), (w * h) as usize);
        ChunkRecord {
            w: w,
            h: h,
            rle: rle::encode(tiles),
        }
    }

    /// consumer-side expansion back to the row-major grid
    pub fn expand(&self) -> Result<Vec<TileId>, BakeError> {
        let tiles = rle::decode(&self.rle);
        let expected = (self.w * self.h) as usize;
        if tiles.len() != expected {
            return Err(BakeError::TruncatedRecord {
                expected: expected,
                actual: tiles.len(),
            });
        }
        Ok(tiles)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(ChunkPos([0, 0]).file_name(), "c_0_0.json");
        assert_eq!(ChunkPos([12, 7]).file_name(), "c_12_7.json");
        assert_eq!(ChunkPos([-1, 3]).file_name(), "c_-1_3.json");
    }

    #[test]
    fn record_round_trip() {
        let tiles: Vec<TileId> = (0..16).map(|i| TileId(i / 5)).collect();
        let record = ChunkRecord::from_tiles(4, 4, &tiles);
        assert_eq!(record.expand().unwrap(), tiles);
    }

    #[test]
    fn expand_checks_length() {
        let record = ChunkRecord {
            w: 4,
            h: 4,
            rle: vec![(3, TileId(1))],
        };
        match record.expand() {
            Err(BakeError::TruncatedRecord { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 3);
            }
            other => panic!("expected truncation error, got {:?}", other),
        }
    }

    #[test]
    fn json_shape() {
        let record = ChunkRecord {
            w: 2,
            h: 1,
            rle: vec![(2, TileId(14))],
        };
        let json = ::serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"w":2,"h":1,"rle":[[2,14]]}"#);
        assert_eq!(::serde_json::from_str::<ChunkRecord>(&json).unwrap(), record);
    }
}
