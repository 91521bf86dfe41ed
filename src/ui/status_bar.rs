use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone)]
pub struct StatusBar {
    username: String,
    poll_interval_minutes: u64,
    last_sync: DateTime<Local>,
}

impl StatusBar {
    pub fn new(username: impl Into<String>, poll_interval_minutes: u64, last_sync: DateTime<Local>) -> Self {
        Self {
            username: username.into(),
            poll_interval_minutes,
            last_sync,
        }
    }

    pub fn update(&mut self, last_sync: DateTime<Local>) {
        self.last_sync = last_sync;
    }

    pub fn last_sync(&self) -> DateTime<Local> {
        self.last_sync
    }

    pub fn text(&self) -> String {
        format!(
            "Signed in as {}. Polling at {} minute intervals. (Last synchronised at {})",
            self.username,
            self.poll_interval_minutes,
            self.last_sync.format(TIMESTAMP_FORMAT)
        )
    }
}
