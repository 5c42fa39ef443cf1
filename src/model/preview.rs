use iced::widget::image::Handle;

#[derive(Debug, Clone)]
pub struct ImagePreview {
    pub url: String,
    pub state: PreviewState,
}

#[derive(Debug, Clone)]
pub enum PreviewState {
    Loading,
    Ready(Handle),
    Failed(String),
}

impl ImagePreview {
    pub fn loading(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: PreviewState::Loading,
        }
    }
}
