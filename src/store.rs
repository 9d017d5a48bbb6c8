use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use serde_json;
use worldgen::chunk::{ChunkPos, ChunkRecord};

/// chunk file persistence under a fixed storage root
///
/// Files are written to `<name>.tmp` and renamed into place, so an
/// interrupted write never leaves a truncated chunk behind. Existing files
/// are overwritten unconditionally; the bake is idempotent.
pub struct ChunkStore {
    root: PathBuf,
}

impl ChunkStore {
    pub fn open(root: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(ChunkStore { root: root })
    }

    pub fn write(&self, pos: ChunkPos, record: &ChunkRecord) -> io::Result<()> {
        let path = self.root.join(pos.file_name());
        let tmp = self.root.join(format!("{}.tmp", pos.file_name()));
        let data = serde_json::to_vec(record)?;
        let mut file = File::create(&tmp)?;
        file.write_all(&data)?;
        file.sync_all()?;
        fs::rename(&tmp, &path)
    }

    pub fn read(&self, pos: ChunkPos) -> io::Result<ChunkRecord> {
        let file = File::open(self.root.join(pos.file_name()))?;
        serde_json::from_reader(file).map_err(io::Error::from)
    }
}
