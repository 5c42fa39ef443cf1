use iced::Size;

use crate::model::{DetectionRecord, Doctor, Screen};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    Refresh,
    DoctorsLoaded(Result<Vec<Doctor>, String>),
    DetectionsLoaded(Result<Vec<DetectionRecord>, String>),
    DoctorSearchChanged(String),
    DetectionSearchChanged(String),
    RequestDeleteDoctor(Doctor),
    RequestDeleteDetection(DetectionRecord),
    ConfirmDelete,
    CancelDelete,
    DoctorDeleted {
        id: String,
        name: String,
        result: Result<(), String>,
    },
    DetectionDeleted {
        id: String,
        result: Result<(), String>,
    },
    OpenImage(String),
    ImageLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
    CloseImage,
    DismissNotification(u64),
    WindowResized(Size),
}
