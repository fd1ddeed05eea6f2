use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use colored::Colorize;
use log::info;

use crate::api::{GameQuery, LichessClient};
use crate::config::{AppConfig, MailCredentials};
use crate::domain::{Game, User};
use crate::errors::ReportResult;
use crate::mail::MailClient;
use crate::reporting::{
    compose_email, historical_grade_report, progress_report, yesterday_report, Email,
};

pub struct ReportService {
    config: AppConfig,
    lichess: LichessClient,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let lichess = LichessClient::new(&config.lichess)?;
        Ok(Self { config, lichess })
    }

    /// Build the report and email it
    pub async fn send(&self, credentials: MailCredentials) -> Result<()> {
        let mailer = MailClient::new(credentials, &self.config.mail)?;
        let email = self.build(&Local::now()).await?;
        mailer.send(&email).await?;

        info!("=== Report sent ===");
        println!("{}", "Email successful".green());
        Ok(())
    }

    /// Build the report and print it
    pub async fn preview(&self) -> Result<()> {
        let email = self.build(&Local::now()).await?;
        println!("{}\n\n{}", email.subject.bold(), email.text);
        Ok(())
    }

    async fn build<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<Email> {
        info!("=== Building report for {} ===", self.config.username);
        let (user, recent, historical) = self.fetch().await?;
        Ok(compose_report(&self.config, &user, &recent, &historical, now)?)
    }

    async fn fetch(&self) -> ReportResult<(User, Vec<Game>, Vec<Game>)> {
        let username = &self.config.username;
        let report = &self.config.report;

        let user = self.lichess.fetch_user(username).await?;

        let recent_query = GameQuery::new(report.recent_games)
            .perf_type(&report.speed)
            .with_analysis();
        let recent = self.lichess.fetch_user_games(username, &recent_query).await?;

        let historical_query = GameQuery::new(report.historical_games)
            .perf_type(&report.speed)
            .with_analysis();
        let historical = self.lichess.fetch_user_games(username, &historical_query).await?;

        Ok((user, recent, historical))
    }
}

/// Assemble progress, yesterday and opening grade sections into one email
pub fn compose_report<Tz: TimeZone>(
    config: &AppConfig,
    user: &User,
    recent: &[Game],
    historical: &[Game],
    now: &DateTime<Tz>,
) -> ReportResult<Email> {
    let username = &config.username;
    let sections = [
        progress_report(user, &config.report.speed)?,
        yesterday_report(recent, username, now),
        historical_grade_report(historical, username, config.report.min_played),
    ];
    Ok(compose_email(now.date_naive(), &sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{analysis_with, user, GameBuilder, ME};
    use crate::domain::Side;
    use chrono::{Duration, Utc};

    #[test]
    fn test_compose_report() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let yesterday = (now - Duration::days(1)).timestamp_millis();
        let mut config = AppConfig::new(ME.to_string());
        config.report.min_played = 2;

        let recent = vec![GameBuilder::new(Side::White)
            .created_at_ms(yesterday)
            .winner(Side::White)
            .opening("Queen's Gambit")
            .build()];
        let historical = vec![
            recent[0].clone(),
            GameBuilder::new(Side::White)
                .opening("Queen's Gambit")
                .analysis(analysis_with(40, &[(6, "Mistake")]))
                .build(),
        ];

        let email = compose_report(&config, &user(1500, -12), &recent, &historical, &now).unwrap();

        assert_eq!(email.subject, "Lichess update 10-03-2024");
        assert_eq!(
            email.text,
            "Current rating: 1500(-12).\n\n\
             Played 1 games yesterday, won 1, lost 0.\n\n\
             Openings played:\n\
             Queen's Gambit(W), no opening mistake\n\n\
             Opening grades:\n\
             Opening         Count  Grade\n\
             Queen's Gambit      2    7.0"
        );
    }

    #[test]
    fn test_compose_report_requires_speed_rating() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let mut config = AppConfig::new(ME.to_string());
        config.report.speed = "classical".to_string();

        assert!(compose_report(&config, &user(1500, 0), &[], &[], &now).is_err());
    }
}
