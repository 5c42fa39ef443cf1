use crate::api::AdminClient;
use crate::components::{modal, screen_toggle, toast_stack};
use crate::config::AppConfig;
use crate::filter::filter_items;
use crate::message::Message;
use crate::model::{DetectionRecord, Doctor, ImagePreview, LayoutMode, PreviewState, Screen};
use crate::notifications::Notifications;
use crate::store::Store;
use crate::views::{
    confirm_delete_detection, confirm_delete_doctor, detection_history_panel, doctors_panel,
    image_preview,
};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, stack, text};
use iced::{application, window, Alignment, Element, Length, Size, Subscription, Task, Theme};

const APP_TITLE: &str = "Dermadmin";
const INITIAL_WINDOW: Size = Size::new(1280.0, 800.0);
const SIDEBAR_WIDTH: f32 = 220.0;
const CONFIRM_BACKDROP_ALPHA: f32 = 0.5;
const PREVIEW_BACKDROP_ALPHA: f32 = 0.75;

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = AppConfig::from_env();
    let client = AdminClient::new(&config).map_err(|err| {
        log::error!("Unable to build HTTP client: {err}");
        iced::Error::ExecutorCreationFailed(std::io::Error::other(err.to_string()))
    })?;
    log::info!("Using admin API at {}", client.base_url());

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(INITIAL_WINDOW)
        .run_with(move || App::new(config, client))
}

/// Search text and pending deletion target of one list screen.
#[derive(Debug)]
pub struct ListState<T> {
    pub search: String,
    pub pending_delete: Option<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            search: String::new(),
            pending_delete: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Overlay<'a> {
    ConfirmDoctor(&'a Doctor),
    ConfirmDetection(&'a DetectionRecord),
    ImagePreview(&'a ImagePreview),
}

impl Overlay<'_> {
    /// Confirmations only close through their buttons; the preview also
    /// closes on a click outside it.
    fn on_blur(&self) -> Option<Message> {
        match self {
            Overlay::ImagePreview(_) => Some(Message::CloseImage),
            Overlay::ConfirmDoctor(_) | Overlay::ConfirmDetection(_) => None,
        }
    }

    fn backdrop_alpha(&self) -> f32 {
        match self {
            Overlay::ImagePreview(_) => PREVIEW_BACKDROP_ALPHA,
            Overlay::ConfirmDoctor(_) | Overlay::ConfirmDetection(_) => CONFIRM_BACKDROP_ALPHA,
        }
    }
}

pub struct App {
    config: AppConfig,
    client: AdminClient,
    store: Store,
    screen: Screen,
    layout: LayoutMode,
    doctor_list: ListState<Doctor>,
    detection_list: ListState<DetectionRecord>,
    preview: Option<ImagePreview>,
    notifications: Notifications,
}

impl App {
    pub fn new(config: AppConfig, client: AdminClient) -> (Self, Task<Message>) {
        let mut app = Self {
            config,
            client,
            store: Store::default(),
            screen: Screen::default(),
            layout: LayoutMode::for_size(INITIAL_WINDOW),
            doctor_list: ListState::default(),
            detection_list: ListState::default(),
            preview: None,
            notifications: Notifications::default(),
        };
        let task = app.fetch(app.screen);
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                if self.screen == screen {
                    return Task::none();
                }
                self.screen = screen;
                self.fetch(screen)
            }
            Message::Refresh => self.fetch(self.screen),
            Message::DoctorsLoaded(result) => {
                let task = match &result {
                    Ok(doctors) => {
                        log::info!("Loaded {} doctors", doctors.len());
                        Task::none()
                    }
                    Err(err) => self.notify_error(format!("Failed to load doctors: {err}")),
                };
                self.store.doctors.finish_fetch(result);
                task
            }
            Message::DetectionsLoaded(result) => {
                let task = match &result {
                    Ok(records) => {
                        log::info!("Loaded {} detection records", records.len());
                        Task::none()
                    }
                    Err(err) => {
                        self.notify_error(format!("Failed to load detection history: {err}"))
                    }
                };
                self.store.detections.finish_fetch(result);
                task
            }
            Message::DoctorSearchChanged(search) => {
                self.doctor_list.search = search;
                Task::none()
            }
            Message::DetectionSearchChanged(search) => {
                self.detection_list.search = search;
                Task::none()
            }
            Message::RequestDeleteDoctor(doctor) => {
                self.doctor_list.pending_delete = Some(doctor);
                Task::none()
            }
            Message::RequestDeleteDetection(record) => {
                self.detection_list.pending_delete = Some(record);
                Task::none()
            }
            Message::ConfirmDelete => self.confirm_delete(),
            Message::CancelDelete => {
                self.doctor_list.pending_delete = None;
                self.detection_list.pending_delete = None;
                Task::none()
            }
            Message::DoctorDeleted { id, name, result } => match result {
                Ok(()) => {
                    self.store.doctors.remove(&id);
                    self.notify_success(format!("Doctor {name} deleted successfully"))
                }
                Err(err) => self.notify_error(format!("Failed to delete doctor: {err}")),
            },
            Message::DetectionDeleted { id, result } => match result {
                Ok(()) => {
                    self.store.detections.remove(&id);
                    self.notify_success("Detection record deleted successfully")
                }
                Err(err) => self.notify_error(format!("Failed to delete record: {err}")),
            },
            Message::OpenImage(url) => {
                self.preview = Some(ImagePreview::loading(url.clone()));
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .fetch_image(&url)
                            .await
                            .map_err(|err| err.to_string());
                        (url, result)
                    },
                    |(url, result)| Message::ImageLoaded { url, result },
                )
            }
            Message::ImageLoaded { url, result } => {
                match self.preview.as_mut() {
                    Some(preview) if preview.url == url => {
                        preview.state = match result {
                            Ok(bytes) => PreviewState::Ready(Handle::from_bytes(bytes)),
                            Err(err) => {
                                log::warn!("Unable to load image {url}: {err}");
                                PreviewState::Failed(err)
                            }
                        };
                    }
                    _ => log::debug!("Discarding image for closed preview: {url}"),
                }
                Task::none()
            }
            Message::CloseImage => {
                self.preview = None;
                Task::none()
            }
            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.layout = LayoutMode::for_size(size);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let panel = match self.screen {
            Screen::Doctors => doctors_panel(
                &self.store.doctors,
                self.visible_doctors(),
                &self.doctor_list.search,
                self.layout,
            ),
            Screen::DetectionHistory => detection_history_panel(
                &self.store.detections,
                self.visible_detections(),
                &self.detection_list.search,
                self.layout,
            ),
        };

        let loading = match self.screen {
            Screen::Doctors => self.store.doctors.is_loading(),
            Screen::DetectionHistory => self.store.detections.is_loading(),
        };
        let header = row![
            text(self.screen.title()).size(24),
            horizontal_space(),
            button("Refresh").on_press_maybe((!loading).then_some(Message::Refresh)),
        ]
        .align_y(Alignment::Center);

        let main = container(column![header, panel].spacing(20))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill);

        let sidebar = container(
            column![text("Admin Panel").size(20), screen_toggle(self.screen, self.layout)]
                .spacing(12),
        )
        .padding(16)
        .style(container::bordered_box);

        let body: Element<'_, Message> = if self.layout.is_compact() {
            column![main, sidebar.width(Length::Fill)].into()
        } else {
            row![
                sidebar
                    .width(Length::Fixed(SIDEBAR_WIDTH))
                    .height(Length::Fill),
                main
            ]
            .into()
        };

        let layered = self.overlays().into_iter().fold(body, |base, overlay| {
            let on_blur = overlay.on_blur();
            let alpha = overlay.backdrop_alpha();
            let content = match overlay {
                Overlay::ConfirmDoctor(doctor) => confirm_delete_doctor(doctor),
                Overlay::ConfirmDetection(record) => confirm_delete_detection(record),
                Overlay::ImagePreview(preview) => image_preview(preview),
            };
            modal(base, content, on_blur, alpha)
        });

        stack![layered, toast_stack(self.notifications.active())].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn visible_doctors(&self) -> Vec<&Doctor> {
        filter_items(self.store.doctors.items(), &self.doctor_list.search)
    }

    pub fn visible_detections(&self) -> Vec<&DetectionRecord> {
        filter_items(self.store.detections.items(), &self.detection_list.search)
    }

    /// Open modals, bottom to top.
    fn overlays(&self) -> Vec<Overlay<'_>> {
        let mut overlays = Vec::new();
        overlays.extend(self.doctor_list.pending_delete.as_ref().map(Overlay::ConfirmDoctor));
        overlays.extend(
            self.detection_list
                .pending_delete
                .as_ref()
                .map(Overlay::ConfirmDetection),
        );
        overlays.extend(self.preview.as_ref().map(Overlay::ImagePreview));
        overlays
    }

    fn fetch(&mut self, screen: Screen) -> Task<Message> {
        let client = self.client.clone();
        match screen {
            Screen::Doctors => {
                if !self.store.doctors.begin_fetch() {
                    log::debug!("Doctor list request already in flight");
                    return Task::none();
                }
                Task::perform(
                    async move { client.list_doctors().await.map_err(|err| err.to_string()) },
                    Message::DoctorsLoaded,
                )
            }
            Screen::DetectionHistory => {
                if !self.store.detections.begin_fetch() {
                    log::debug!("Detection history request already in flight");
                    return Task::none();
                }
                Task::perform(
                    async move {
                        client
                            .list_detections()
                            .await
                            .map_err(|err| err.to_string())
                    },
                    Message::DetectionsLoaded,
                )
            }
        }
    }

    fn confirm_delete(&mut self) -> Task<Message> {
        let client = self.client.clone();

        if let Some(doctor) = self.doctor_list.pending_delete.take() {
            log::info!("Deleting doctor {} ({})", doctor.name, doctor.id);
            let Doctor { id, name, .. } = doctor;
            return Task::perform(
                async move {
                    let result = client.delete_doctor(&id).await.map_err(|err| err.to_string());
                    (id, name, result)
                },
                |(id, name, result)| Message::DoctorDeleted { id, name, result },
            );
        }

        if let Some(record) = self.detection_list.pending_delete.take() {
            log::info!("Deleting detection record {}", record.id);
            let id = record.id;
            return Task::perform(
                async move {
                    let result = client
                        .delete_detection(&id)
                        .await
                        .map_err(|err| err.to_string());
                    (id, result)
                },
                |(id, result)| Message::DetectionDeleted { id, result },
            );
        }

        Task::none()
    }

    fn notify_success(&mut self, text: impl Into<String>) -> Task<Message> {
        let id = self.notifications.success(text);
        self.expire_notification(id)
    }

    fn notify_error(&mut self, text: impl Into<String>) -> Task<Message> {
        let id = self.notifications.error(text);
        self.expire_notification(id)
    }

    fn expire_notification(&self, id: u64) -> Task<Message> {
        let lifetime = self.config.notification_lifetime;
        Task::perform(
            async move {
                tokio::time::sleep(lifetime).await;
                id
            },
            Message::DismissNotification,
        )
    }
}
