use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch.
///
/// All timestamps in the system use this newtype so that message ordering
/// and display formatting share one representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The current time.
    pub fn now() -> Self {
        Timestamp(Utc::now().timestamp())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Utc.timestamp_opt(self.0, 0).single() {
            Some(dt) => write!(f, "{}", format_datetime(&dt)),
            None => write!(f, "{}", self.0),
        }
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_positive() {
        assert!(Timestamp::now().0 > 0);
    }

    #[test]
    fn test_ordering_follows_epoch() {
        assert!(Timestamp(100) < Timestamp(200));
        assert_eq!(Timestamp(150), Timestamp(150));
    }

    #[test]
    fn test_display_formats_date() {
        let s = Timestamp(1700000000).to_string();
        assert!(s.starts_with("2023-11-14"));
    }

    #[test]
    fn test_display_out_of_range_falls_back_to_raw() {
        let s = Timestamp(i64::MAX).to_string();
        assert_eq!(s, i64::MAX.to_string());
    }

    #[test]
    fn test_serde_round_trip() {
        let ts = Timestamp(1700000000);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1700000000");
        let rt: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, rt);
    }
}
