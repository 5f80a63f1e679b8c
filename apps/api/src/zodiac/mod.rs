//! Zodiac signs and the birth-date → sign lookup.
//!
//! Every sign owns a (month, day) interval. Capricorn's interval wraps the year
//! boundary; all other intervals are plain. Lookup scans the table in order and
//! returns the first interval containing the date.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// A (month, day) pair. Ordering is calendar order within a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Returns `None` unless the pair exists in a leap year (so Feb 29 is accepted).
    pub fn checked(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }
}

/// Inclusive sign interval. `start > end` means the interval wraps past Dec 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRange {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl SignRange {
    pub fn contains(&self, md: MonthDay) -> bool {
        if self.start <= self.end {
            self.start <= md && md <= self.end
        } else {
            md >= self.start || md <= self.end
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

struct SignInfo {
    sign: ZodiacSign,
    id: &'static str,
    display_name: &'static str,
    symbol: &'static str,
    dates: &'static str,
    display_dates: &'static str,
    range: SignRange,
}

const fn range(start: (u32, u32), end: (u32, u32)) -> SignRange {
    SignRange {
        start: MonthDay::new(start.0, start.1),
        end: MonthDay::new(end.0, end.1),
    }
}

// Table order is the lookup order.
static SIGNS: [SignInfo; 12] = [
    SignInfo {
        sign: ZodiacSign::Aries,
        id: "Aries",
        display_name: "Овен",
        symbol: "♈",
        dates: "Mar 21 - Apr 19",
        display_dates: "21 мар - 19 апр",
        range: range((3, 21), (4, 19)),
    },
    SignInfo {
        sign: ZodiacSign::Taurus,
        id: "Taurus",
        display_name: "Телец",
        symbol: "♉",
        dates: "Apr 20 - May 20",
        display_dates: "20 апр - 20 мая",
        range: range((4, 20), (5, 20)),
    },
    SignInfo {
        sign: ZodiacSign::Gemini,
        id: "Gemini",
        display_name: "Близнецы",
        symbol: "♊",
        dates: "May 21 - Jun 20",
        display_dates: "21 мая - 20 июн",
        range: range((5, 21), (6, 20)),
    },
    SignInfo {
        sign: ZodiacSign::Cancer,
        id: "Cancer",
        display_name: "Рак",
        symbol: "♋",
        dates: "Jun 21 - Jul 22",
        display_dates: "21 июн - 22 июл",
        range: range((6, 21), (7, 22)),
    },
    SignInfo {
        sign: ZodiacSign::Leo,
        id: "Leo",
        display_name: "Лев",
        symbol: "♌",
        dates: "Jul 23 - Aug 22",
        display_dates: "23 июл - 22 авг",
        range: range((7, 23), (8, 22)),
    },
    SignInfo {
        sign: ZodiacSign::Virgo,
        id: "Virgo",
        display_name: "Дева",
        symbol: "♍",
        dates: "Aug 23 - Sep 22",
        display_dates: "23 авг - 22 сен",
        range: range((8, 23), (9, 22)),
    },
    SignInfo {
        sign: ZodiacSign::Libra,
        id: "Libra",
        display_name: "Весы",
        symbol: "♎",
        dates: "Sep 23 - Oct 22",
        display_dates: "23 сен - 22 окт",
        range: range((9, 23), (10, 22)),
    },
    SignInfo {
        sign: ZodiacSign::Scorpio,
        id: "Scorpio",
        display_name: "Скорпион",
        symbol: "♏",
        dates: "Oct 23 - Nov 21",
        display_dates: "23 окт - 21 ноя",
        range: range((10, 23), (11, 21)),
    },
    SignInfo {
        sign: ZodiacSign::Sagittarius,
        id: "Sagittarius",
        display_name: "Стрелец",
        symbol: "♐",
        dates: "Nov 22 - Dec 21",
        display_dates: "22 ноя - 21 дек",
        range: range((11, 22), (12, 21)),
    },
    SignInfo {
        sign: ZodiacSign::Capricorn,
        id: "Capricorn",
        display_name: "Козерог",
        symbol: "♑",
        dates: "Dec 22 - Jan 19",
        display_dates: "22 дек - 19 янв",
        range: range((12, 22), (1, 19)),
    },
    SignInfo {
        sign: ZodiacSign::Aquarius,
        id: "Aquarius",
        display_name: "Водолей",
        symbol: "♒",
        dates: "Jan 20 - Feb 18",
        display_dates: "20 янв - 18 фев",
        range: range((1, 20), (2, 18)),
    },
    SignInfo {
        sign: ZodiacSign::Pisces,
        id: "Pisces",
        display_name: "Рыбы",
        symbol: "♓",
        dates: "Feb 19 - Mar 20",
        display_dates: "19 фев - 20 мар",
        range: range((2, 19), (3, 20)),
    },
];

impl ZodiacSign {
    /// All signs in lookup order.
    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        SIGNS.iter().map(|s| s.sign)
    }

    fn info(self) -> &'static SignInfo {
        // The table is indexed by declaration order.
        &SIGNS[self as usize]
    }

    /// Canonical English identifier, e.g. `"Leo"`.
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Localized name used in prompts and UI, e.g. `"Лев"`.
    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn dates(self) -> &'static str {
        self.info().dates
    }

    pub fn display_dates(self) -> &'static str {
        self.info().display_dates
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zodiac sign '{0}'")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    /// Accepts the English identifier (any case) or the localized name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SIGNS
            .iter()
            .find(|info| {
                info.id.eq_ignore_ascii_case(needle)
                    || info.display_name.to_lowercase() == needle.to_lowercase()
            })
            .map(|info| info.sign)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// Resolves a (month, day) pair. `None` is the "unknown" sentinel and is only
/// produced for pairs that are not calendar days.
pub fn resolve_month_day(month: u32, day: u32) -> Option<ZodiacSign> {
    let md = MonthDay::checked(month, day)?;
    SIGNS
        .iter()
        .find(|info| info.range.contains(md))
        .map(|info| info.sign)
}

/// Resolves a calendar date to its sign. Only month and day are read.
pub fn resolve(date: impl Datelike) -> Option<ZodiacSign> {
    resolve_month_day(date.month(), date.day())
}
