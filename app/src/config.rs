use chrono::{FixedOffset, NaiveDate, Utc};
use std::{ops::Deref, sync::Arc};

pub struct ConfigInner {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    /// Fixed offset from UTC used to derive the "local day" that daily
    /// rollups, streaks and challenges are keyed on.
    pub utc_offset: FixedOffset,
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    pub fn from_env() -> Config {
        let offset_minutes: i32 = std::env::var("UTC_OFFSET_MINUTES")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("UTC_OFFSET_MINUTES is not a number");

        let v = ConfigInner {
            db_url: std::env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file"),
            host: std::env::var("HOST").expect("HOST is not set in .env file"),
            port: std::env::var("PORT")
                .expect("PORT is not set in .env file")
                .parse()
                .expect("PORT is not a number"),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .expect("ALLOWED_ORIGIN is not set in .env file"),
            utc_offset: FixedOffset::east_opt(offset_minutes * 60)
                .expect("UTC_OFFSET_MINUTES out of range"),
        };

        Self(Arc::new(v))
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }

    /// Today in the configured local timezone.
    pub fn local_today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0.utc_offset).date_naive()
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
