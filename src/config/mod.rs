pub mod settings;

pub use settings::{AppConfig, LichessSettings, MailCredentials, MailSettings, ReportSettings};
