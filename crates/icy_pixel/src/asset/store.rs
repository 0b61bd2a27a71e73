use std::{
    collections::HashMap,
    fs::{File, create_dir_all},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use super::picture::PictureRecord;
use crate::{AssetKind, Font, Picture, PixelError, Result, Stamp};

/// Load/save contract for named fonts, stamps and pictures.
pub trait AssetStore {
    /// # Errors
    ///
    /// Fails if the font doesn't exist or can't be read.
    fn load_font(&self, name: &str) -> Result<Font>;
    /// # Errors
    ///
    /// Fails if the font can't be written.
    fn save_font(&mut self, name: &str, font: &Font) -> Result<()>;

    /// # Errors
    ///
    /// Fails if the stamp doesn't exist or can't be read.
    fn load_stamp(&self, name: &str) -> Result<Stamp>;
    /// # Errors
    ///
    /// Fails if the stamp can't be written.
    fn save_stamp(&mut self, name: &str, stamp: &Stamp) -> Result<()>;

    /// # Errors
    ///
    /// Fails if the picture doesn't exist or can't be read.
    fn load_picture(&self, name: &str) -> Result<Picture>;
    /// # Errors
    ///
    /// Fails if the picture can't be written.
    fn save_picture(&mut self, name: &str, picture: &Picture) -> Result<()>;
}

/// In process store keeping clones of everything saved.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    fonts: HashMap<String, Font>,
    stamps: HashMap<String, Stamp>,
    pictures: HashMap<String, Picture>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lookup<T: Clone>(map: &HashMap<String, T>, kind: AssetKind, name: &str) -> Result<T> {
    map.get(name).cloned().ok_or_else(|| PixelError::not_found(kind, name))
}

impl AssetStore for MemoryStore {
    fn load_font(&self, name: &str) -> Result<Font> {
        lookup(&self.fonts, AssetKind::Font, name)
    }

    fn save_font(&mut self, name: &str, font: &Font) -> Result<()> {
        self.fonts.insert(name.to_string(), font.clone());
        Ok(())
    }

    fn load_stamp(&self, name: &str) -> Result<Stamp> {
        lookup(&self.stamps, AssetKind::Stamp, name)
    }

    fn save_stamp(&mut self, name: &str, stamp: &Stamp) -> Result<()> {
        self.stamps.insert(name.to_string(), stamp.clone());
        Ok(())
    }

    fn load_picture(&self, name: &str) -> Result<Picture> {
        lookup(&self.pictures, AssetKind::Picture, name)
    }

    fn save_picture(&mut self, name: &str, picture: &Picture) -> Result<()> {
        self.pictures.insert(name.to_string(), picture.clone());
        Ok(())
    }
}

/// Stores every asset as a pretty printed JSON document `<name>.<kind>.json` below a root directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: AssetKind, name: &str) -> PathBuf {
        let ext = match kind {
            AssetKind::Font => "font",
            AssetKind::Stamp => "stamp",
            AssetKind::Picture => "picture",
        };
        self.root.join(format!("{name}.{ext}.json"))
    }

    fn load<T: DeserializeOwned>(&self, kind: AssetKind, name: &str) -> Result<T> {
        let path = self.path_for(kind, name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::error!("{kind} '{name}' not found at {}", path.display());
                return Err(PixelError::not_found(kind, name));
            }
            Err(err) => {
                log::error!("can't open {}: {err}", path.display());
                return Err(err.into());
            }
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|err| {
            log::error!("invalid {kind} file {}: {err}", path.display());
            err.into()
        })
    }

    fn save<T: Serialize>(&self, kind: AssetKind, name: &str, item: &T) -> Result<()> {
        let path = self.path_for(kind, name);
        let write = || -> Result<()> {
            create_dir_all(&self.root)?;
            let writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(writer, item)?;
            Ok(())
        };
        write().inspect_err(|err| log::error!("can't save {kind} to {}: {err}", path.display()))
    }
}

impl AssetStore for JsonStore {
    fn load_font(&self, name: &str) -> Result<Font> {
        self.load(AssetKind::Font, name)
    }

    fn save_font(&mut self, name: &str, font: &Font) -> Result<()> {
        self.save(AssetKind::Font, name, font)
    }

    fn load_stamp(&self, name: &str) -> Result<Stamp> {
        self.load(AssetKind::Stamp, name)
    }

    fn save_stamp(&mut self, name: &str, stamp: &Stamp) -> Result<()> {
        self.save(AssetKind::Stamp, name, stamp)
    }

    fn load_picture(&self, name: &str) -> Result<Picture> {
        let record: PictureRecord = self.load(AssetKind::Picture, name)?;
        Picture::try_from(record).inspect_err(|err| log::error!("invalid picture '{name}': {err}"))
    }

    fn save_picture(&mut self, name: &str, picture: &Picture) -> Result<()> {
        self.save(AssetKind::Picture, name, picture)
    }
}
