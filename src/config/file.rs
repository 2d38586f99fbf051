//! Scene files: the whole ring setup as RON on disk, so a drawing can be
//! reloaded and re-rendered later. Note this persists *configuration*, not
//! animation state; a loaded scene always starts from tick zero.
use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;

use super::SceneConfig;

impl SceneConfig {
    pub fn to_ron_string(&self) -> String {
        ron::to_string(self).expect("Somehow we mangled our own scene datastructure?!")
    }

    /// Writes the scene to `path` (extension forced to `.ring.ron`), going
    /// through a temp file and a rename so a crash can't leave a torn file.
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let path = path.with_extension("ring.ron");
        let tmp_path = path.with_extension(format!("tmp-{}", rand::random::<usize>()));
        let writer = std::fs::File::create(tmp_path.clone())?;
        ron::Options::default().to_io_writer(writer, &self)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Loads and validates a scene file. A file that parses but describes
    /// impossible rings is still an error.
    pub fn from_file(path: &PathBuf) -> Result<SceneConfig> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        let scene: SceneConfig = ron::from_str(data.as_str())?;
        scene.validate()?;
        Ok(scene)
    }
}
