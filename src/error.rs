use std::error::Error;
use std::fmt;
use std::io;
use worldgen::chunk::ChunkPos;

/// failures a bake can hit; the computation itself is total, so everything
/// here is either bad configuration or filesystem trouble
#[derive(Debug)]
pub enum BakeError {
    /// rejected before any generation starts
    Config(String),
    /// could not create the chunk output root
    OutputDir(io::Error),
    /// writing one chunk file failed; earlier chunks remain valid
    ChunkWrite { pos: ChunkPos, source: io::Error },
    /// an rle record did not expand to w*h tiles
    TruncatedRecord { expected: usize, actual: usize },
}

impl fmt::Display for BakeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BakeError::Config(ref msg) => write!(f, "invalid configuration: {}", msg),
            BakeError::OutputDir(ref e) => write!(f, "cannot create output directory: {}", e),
            BakeError::ChunkWrite { ref pos, ref source } => {
                write!(f, "cannot write chunk {},{}: {}", pos[0], pos[1], source)
            }
            BakeError::TruncatedRecord { expected, actual } => {
                write!(f, "rle record expands to {} tiles, expected {}", actual, expected)
            }
        }
    }
}

impl Error for BakeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            BakeError::OutputDir(ref e) => Some(e),
            BakeError::ChunkWrite { ref source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_the_chunk() {
        let err = BakeError::ChunkWrite {
            pos: ChunkPos([3, 7]),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3,7"));
        assert!(msg.contains("denied"));
    }
}
