use std::sync::atomic::{AtomicU64, Ordering};

/// Source of handle IDs, shared by all containers (clones keep the IDs of the elements they copy)
static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(0);

///
/// Handle referencing a point within a shape
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PointHandle(pub u64);

///
/// Handle referencing a shape within a vitmap
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ShapeHandle(pub u64);

impl PointHandle {
    ///
    /// Allocates a handle that has never been used before
    ///
    pub (crate) fn allocate() -> PointHandle {
        PointHandle(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl ShapeHandle {
    ///
    /// Allocates a handle that has never been used before
    ///
    pub (crate) fn allocate() -> ShapeHandle {
        ShapeHandle(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}
