use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct CalendarQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}
