pub(crate) mod helper {
    #[cfg(not(test))]
    pub use super::get_utc_now;
    #[cfg(test)]
    pub use super::mock_chrono::get_utc_now;
}

#[cfg(test)]
pub(crate) mod mock_chrono {
    use chrono::{DateTime, Utc};
    use std::cell::Cell;

    thread_local! {
        static MOCK_NOW: Cell<i64> = const { Cell::new(0) };
    }

    /// Pin the mocked clock to a unix timestamp for the current test thread.
    pub fn set_utc_now(secs: i64) {
        MOCK_NOW.with(|now| now.set(secs));
    }

    pub fn get_utc_now() -> DateTime<Utc> {
        MOCK_NOW
            .with(|now| DateTime::<Utc>::from_timestamp(now.get(), 0))
            .expect("invalid timestamp")
    }
}

#[cfg(not(test))]
pub fn get_utc_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
