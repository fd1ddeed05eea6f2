use crate::domain::User;
use crate::errors::{ReportError, ReportResult};

/// Rating line for the given speed category
pub fn progress_report(user: &User, speed: &str) -> ReportResult<String> {
    let perf = user.perf(speed).ok_or_else(|| {
        ReportError::data_source(
            format!("User {} has no {} rating", user.username, speed),
            "missing perf",
        )
    })?;
    Ok(format!("Current rating: {}({}).", perf.rating, perf.prog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::user;

    #[test]
    fn test_progress_report() {
        let report = progress_report(&user(1500, -12), "blitz").unwrap();
        assert_eq!(report, "Current rating: 1500(-12).");
    }

    #[test]
    fn test_positive_progress_has_no_sign() {
        let report = progress_report(&user(1623, 8), "blitz").unwrap();
        assert_eq!(report, "Current rating: 1623(8).");
    }

    #[test]
    fn test_missing_speed_fails() {
        assert!(progress_report(&user(1500, 0), "bullet").is_err());
    }
}
