use std::fs::File;
use std::path::{Path, PathBuf};

pub const LANDCOVER_FILE: &str = "landcover.tif";
pub const ELEVATION_FILE: &str = "elevation.tif";

/// Read-only handles on the optional terrain rasters, held for the server's lifetime.
#[derive(Debug)]
pub struct Rasters {
    pub landcover: File,
    pub elevation: File,
}

impl Rasters {
    /// Opens both rasters from `data_dir`. Returns `None` unless both open.
    pub fn probe(data_dir: &Path) -> Option<Rasters> {
        let landcover = open(data_dir.join(LANDCOVER_FILE))?;
        let elevation = open(data_dir.join(ELEVATION_FILE))?;
        Some(Rasters {
            landcover,
            elevation,
        })
    }

    /// Byte sizes of the landcover and elevation files.
    pub fn sizes(&self) -> std::io::Result<(u64, u64)> {
        Ok((self.landcover.metadata()?.len(), self.elevation.metadata()?.len()))
    }
}

fn open(path: PathBuf) -> Option<File> {
    match File::open(&path) {
        Ok(file) => Some(file),
        Err(e) => {
            log::info!("Raster {} unavailable: {}", path.display(), e);
            None
        }
    }
}
