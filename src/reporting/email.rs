use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub subject: String,
    pub text: String,
}

pub fn subject_for(date: NaiveDate) -> String {
    format!("Lichess update {}", date.format("%d-%m-%Y"))
}

/// Joins report sections with blank lines under a dated subject
pub fn compose_email(date: NaiveDate, sections: &[String]) -> Email {
    Email {
        subject: subject_for(date),
        text: sections.join("\n\n"),
    }
}
