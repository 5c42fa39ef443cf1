pub mod slice;

pub use slice::Slice;

use crate::model::{DetectionRecord, Doctor};

#[derive(Debug, Default)]
pub struct Store {
    pub doctors: Slice<Doctor>,
    pub detections: Slice<DetectionRecord>,
}
