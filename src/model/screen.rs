use iced::Size;

/// Narrower windows move the sidebar below the content.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Doctors,
    DetectionHistory,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Doctors, Screen::DetectionHistory];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Doctors => "Doctor Details",
            Screen::DetectionHistory => "Detection History",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Screen::Doctors => "Doctors",
            Screen::DetectionHistory => "Detection History",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    SidebarBeside,
    SidebarBelow,
}

impl LayoutMode {
    pub fn for_size(size: Size) -> Self {
        if size.width < COMPACT_BREAKPOINT {
            LayoutMode::SidebarBelow
        } else {
            LayoutMode::SidebarBeside
        }
    }

    pub fn is_compact(self) -> bool {
        self == LayoutMode::SidebarBelow
    }
}
