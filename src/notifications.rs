#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Notifications {
    next_id: u64,
    active: Vec<Notification>,
}

impl Notifications {
    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(Level::Success, text.into())
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(Level::Error, text.into())
    }

    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|notification| notification.id != id);
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    fn push(&mut self, level: Level, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        match level {
            Level::Success => log::info!("{text}"),
            Level::Error => log::error!("{text}"),
        }
        self.active.push(Notification { id, level, text });
        id
    }
}
