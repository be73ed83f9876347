use flo_vitmap_editor::*;

use clap::{Parser};
use log::*;

use std::path::{PathBuf};

///
/// Editor for vitmaps: small vector images made of coloured polygons
///
#[derive(Parser, Debug)]
#[command(name = "vitmap_maker", version, about)]
struct Arguments {
    /// Vitmap file to open at startup (starts with an empty vitmap if not given)
    path: Option<PathBuf>,
}

fn main() -> Result<(), EditorError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arguments   = Arguments::parse();
    let mut session = match &arguments.path {
        Some(path)  => EditorSession::open(path),
        None        => EditorSession::new(),
    };

    if let Some(vitmap) = session.current_vitmap() {
        info!("Editing {} ({} shapes)", arguments.path.as_ref().map(|path| path.display().to_string()).unwrap_or_else(|| "a new vitmap".to_string()), vitmap.len());
        debug!("{}", vitmap);
    }

    // Rendering happens elsewhere: prepare the meshes a renderer would be given
    let meshes      = session.meshes()?;
    let triangles   = meshes.iter().map(|mesh| mesh.triangle_count()).sum::<usize>();
    info!("Tessellated {} shapes into {} triangles", meshes.len(), triangles);

    Ok(())
}
