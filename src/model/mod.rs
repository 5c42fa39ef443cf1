pub mod detection;
pub mod doctor;
pub mod preview;
pub mod screen;
mod wire;

pub use detection::DetectionRecord;
pub use doctor::Doctor;
pub use preview::{ImagePreview, PreviewState};
pub use screen::{LayoutMode, Screen};

/// Anything the admin API can delete by identifier.
pub trait Entity {
    fn id(&self) -> &str;
}

/// The fields a list screen matches its search text against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}
