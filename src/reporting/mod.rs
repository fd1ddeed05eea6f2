pub mod email;
pub mod grades;
pub mod progress;
pub mod yesterday;

pub use email::{compose_email, Email};
pub use grades::{historical_grade_report, OpeningGrade, OpeningGrades};
pub use progress::progress_report;
pub use yesterday::{yesterday_report, YesterdaySummary};
