use crate::error::*;
use crate::vitmap::*;
use crate::encoding::*;
use crate::decoding::*;
use crate::animation::*;

use log::*;
use tempfile::{NamedTempFile};

use std::fs;
use std::io::{Write};
use std::path::{Path};

///
/// Writes a file by writing a temporary file alongside it and renaming it into place
///
/// If anything goes wrong, any existing file at the destination is left untouched.
///
fn write_atomically(path: &Path, data: &[u8]) -> Result<(), VitmapError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty()  => parent,
        _                                               => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(directory)?;
    temp_file.write_all(data)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|err| err.error)?;

    Ok(())
}

///
/// Saves a vitmap to a file
///
pub fn save_vitmap(path: impl AsRef<Path>, vitmap: &Vitmap) -> Result<(), VitmapError> {
    let path = path.as_ref();
    let data = encode_vitmap_file(vitmap);

    write_atomically(path, &data)
        .map_err(|err| { warn!("Could not save vitmap to {}: {}", path.display(), err); err })?;

    debug!("Saved vitmap with {} shapes to {} ({} bytes)", vitmap.len(), path.display(), data.len());
    Ok(())
}

///
/// Loads a vitmap from a file
///
pub fn load_vitmap(path: impl AsRef<Path>) -> Result<Vitmap, VitmapError> {
    let path    = path.as_ref();
    let vitmap  = fs::read(path)
        .map_err(VitmapError::from)
        .and_then(|data| decode_vitmap_file(&data))
        .map_err(|err| { warn!("Could not load vitmap from {}: {}", path.display(), err); err })?;

    debug!("Loaded vitmap with {} shapes from {}", vitmap.len(), path.display());
    Ok(vitmap)
}

///
/// Saves an animation to a file
///
pub fn save_animation(path: impl AsRef<Path>, animation: &VitmapAnimation) -> Result<(), VitmapError> {
    let path = path.as_ref();
    let data = encode_animation_file(animation);

    write_atomically(path, &data)
        .map_err(|err| { warn!("Could not save animation to {}: {}", path.display(), err); err })?;

    debug!("Saved animation with {} frames to {} ({} bytes)", animation.len(), path.display(), data.len());
    Ok(())
}

///
/// Loads an animation from a file
///
pub fn load_animation(path: impl AsRef<Path>) -> Result<VitmapAnimation, VitmapError> {
    let path        = path.as_ref();
    let animation   = fs::read(path)
        .map_err(VitmapError::from)
        .and_then(|data| decode_animation_file(&data))
        .map_err(|err| { warn!("Could not load animation from {}: {}", path.display(), err); err })?;

    debug!("Loaded animation with {} frames from {}", animation.len(), path.display());
    Ok(animation)
}
