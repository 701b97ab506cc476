use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Clock abstracts access to the current instant so a run sees one consistent "now"
/// and tests can pin it.
pub trait Clock {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the calendar date the budget should be booked against.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock. Budgets follow the user's wall calendar, so `today` is local.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Convenience constructor; returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::default()))
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedClock::from_ymd(2024, 2, 28).expect("valid date");
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(clock.now().date_naive().day(), 28);
    }

    #[test]
    fn fixed_clock_rejects_invalid_dates() {
        assert!(FixedClock::from_ymd(2023, 2, 30).is_none());
    }
}
