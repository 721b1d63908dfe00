use tic_tac_toe_core::{Notice, NoticeLength};

/// Seconds a toast stays up, matching the usual short/long toast lengths.
const SHORT_TOAST_SECS: f64 = 2.0;
const LONG_TOAST_SECS: f64 = 3.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: f64,
}

impl Toast {
    pub fn new(notice: Notice, now: f64) -> Self {
        let ttl = match notice.length() {
            NoticeLength::Short => SHORT_TOAST_SECS,
            NoticeLength::Long => LONG_TOAST_SECS,
        };
        Self {
            notice,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at
    }
}
