pub mod detection_history;
pub mod dialogs;
pub mod doctors;
pub mod table;

pub use detection_history::detection_history_panel;
pub use dialogs::{confirm_delete_detection, confirm_delete_doctor, image_preview};
pub use doctors::doctors_panel;
