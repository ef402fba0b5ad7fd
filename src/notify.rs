use chrono::{DateTime, Duration, Utc};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::sync::Mutex;
use tracing::warn;

pub const EMPTY_QUERY: &str = "Please enter a search query.";
pub const NO_RESULTS: &str = "No properties found matching your search.";
pub const SEARCH_FAILED: &str = "An error occurred while searching properties.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this property?";
pub const DELETE_SUCCEEDED: &str = "Property deleted successfully!";
pub const DELETE_REJECTED: &str = "Failed to delete property.";
pub const DELETE_FAILED: &str = "An error occurred. Please try again.";

/// How long a notice stays visible before it is dismissed
pub const DEFAULT_NOTICE_TTL_SECS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Transient, non-blocking message shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.raised_at >= ttl
    }
}

/// Side channel for user-visible notices
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to the terminal
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{} {}", "✓".green().bold(), notice.message),
            NoticeLevel::Info => println!("{} {}", "i".blue().bold(), notice.message),
            NoticeLevel::Error => eprintln!("{} {}", "✗".red().bold(), notice.message),
        }
    }
}

/// Keeps every notice it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Notices still visible at `now`
    pub fn active(&self, now: DateTime<Utc>, ttl: Duration) -> Vec<Notice> {
        self.notices()
            .into_iter()
            .filter(|n| !n.is_expired(now, ttl))
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

/// Blocking yes/no prompt shown before destructive actions
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive terminal prompt
#[derive(Debug, Default)]
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                // No terminal to ask on: treat as declined
                warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }
}

/// Answers every prompt the same way
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
