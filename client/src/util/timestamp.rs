//! Result timestamp formatting.
//!
//! The label is always suffixed `GMT+8` whatever the viewer's actual offset;
//! the page is read by a single institution's audience.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Wall-clock fields in the browser's local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDateTime {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
    /// 0..=23
    pub hour: u32,
    pub minute: u32,
}

impl Default for LocalDateTime {
    fn default() -> Self {
        Self { year: 1970, month: 1, day: 1, hour: 0, minute: 0 }
    }
}

/// Format as `"October 16, 2026, 3:05 PM GMT+8"`.
#[must_use]
pub fn format_score_timestamp(at: LocalDateTime) -> String {
    let month = usize::try_from(at.month.saturating_sub(1))
        .ok()
        .and_then(|i| MONTHS.get(i))
        .copied()
        .unwrap_or("January");
    let (hour12, meridiem) = match at.hour {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!(
        "{month} {}, {}, {hour12}:{:02} {meridiem} GMT+8",
        at.day, at.year, at.minute
    )
}

/// Current local time. Outside the browser this is the Unix epoch.
#[must_use]
pub fn now_local() -> LocalDateTime {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        LocalDateTime {
            year: i32::try_from(now.get_full_year()).unwrap_or(1970),
            month: now.get_month() + 1,
            day: now.get_date(),
            hour: now.get_hours(),
            minute: now.get_minutes(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LocalDateTime::default()
    }
}
