//!
//! # flo_vitmap_editor
//!
//! The editing session behind the vitmap maker. An `EditorSession` holds the animation being edited along with
//! everything a user interface needs to remember between events (the current tool and colour, the shape being
//! drawn and the current selection) and turns user intentions ('add a point here', 'delete the selected shape',
//! 'move this shape up') into operations on the vitmap.
//!
//! The session doesn't draw anything itself: `EditorSession::meshes()` returns the triangle meshes for the current
//! frame, ready to be handed to a renderer.
//!
#![warn(bare_trait_objects)]

mod tool;
mod error;
mod session;

pub use self::tool::*;
pub use self::error::*;
pub use self::session::*;
