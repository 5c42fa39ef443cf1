pub mod formatting;

pub use formatting::{format_date, format_experience, initial};
