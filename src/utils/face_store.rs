use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Per-intern folders of registration photos under a single root.
#[derive(Clone, Debug)]
pub struct FaceStore {
    root: PathBuf,
}

impl FaceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder for one intern. `None` when the identifier cannot be used as a
    /// single path component below the root.
    pub fn folder_for(&self, intern_id: &str) -> Option<PathBuf> {
        is_safe_component(intern_id).then(|| self.root.join(intern_id))
    }

    /// Writes `face_1.png`, `face_2.png`, ... and returns the written paths.
    /// Files left from an earlier registration with the same id are overwritten.
    pub fn save(&self, intern_id: &str, images: &[Vec<u8>]) -> io::Result<Vec<PathBuf>> {
        let folder = self.folder_for(intern_id).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "intern id is not a valid folder name")
        })?;
        fs::create_dir_all(&folder)?;

        images
            .iter()
            .enumerate()
            .map(|(i, bytes)| {
                let path = folder.join(format!("face_{}.png", i + 1));
                fs::write(&path, bytes)?;
                Ok(path)
            })
            .collect()
    }
}

pub fn is_safe_component(intern_id: &str) -> bool {
    !intern_id.is_empty()
        && intern_id != "."
        && intern_id != ".."
        && !intern_id.contains(['/', '\\', '\0'])
}
