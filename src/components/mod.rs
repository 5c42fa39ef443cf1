pub mod modal;
pub mod segmented_toggle;
pub mod toast;

pub use modal::modal;
pub use segmented_toggle::screen_toggle;
pub use toast::toast_stack;
