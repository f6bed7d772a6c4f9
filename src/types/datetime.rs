/// Calendar date as stored in the commercial frame's "valid until" field.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

extern crate regex;
use self::regex::Regex;

macro_rules! parse {
    ($c:ident, $i:ident, $t:ty) => {{
        match $c.name(stringify!($i)) {
            None => 0,
            Some(m) => m.as_str().parse::<$t>().unwrap_or(0),
        }
    }};
}

impl Date {
    /// Parses the 8 digit `YYYYMMDD` form.
    ///
    /// Anything that is not made of digits only gives the zero date,
    /// shorter digit strings fill the fields from the left.
    pub fn from_yyyymmdd(string: &str) -> Date {
        lazy_static! {
            static ref RE: Regex = Regex::new(
                r"(?x)
                ^
                (?P<year>\d{1,4})
                (?P<month>\d{1,2})?
                (?P<day>\d+)?
                $
            "
            )
            .unwrap();
        }
        match RE.captures(string) {
            Some(captures) => Date {
                year: parse!(captures, year, u16),
                month: parse!(captures, month, u8),
                day: parse!(captures, day, u8),
            },
            None => Date::default(),
        }
    }

    pub fn to_yyyymmdd(&self) -> String {
        let year = format!("{:04}", self.year);
        let month = format!("{:02}", self.month);
        let day = format!("{:02}", self.day);
        format!("{}{}{}", &year[..4], &month[..2], &day[..2])
    }
}

use std::fmt;
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[test]
fn test() {
    assert_eq!(
        Date::from_yyyymmdd("20231231"),
        Date {
            year: 2023,
            month: 12,
            day: 31
        }
    );
    assert_eq!(
        Date::from_yyyymmdd("2023"),
        Date {
            year: 2023,
            ..Default::default()
        }
    );
    assert_eq!(Date::from_yyyymmdd("2023-12-31"), Date::default());
    assert_eq!(Date::from_yyyymmdd(""), Date::default());

    let d = Date {
        year: 1999,
        month: 1,
        day: 2,
    };
    assert_eq!(d.to_yyyymmdd(), "19990102");
    assert_eq!(Date::from_yyyymmdd(&d.to_yyyymmdd()), d);
    assert_eq!(d.to_string(), "1999-01-02");
}

#[cfg(feature = "chrono")]
mod chrono {
    extern crate chrono;
    use self::chrono::{Datelike, NaiveDate};
    use super::Date;

    impl From<NaiveDate> for Date {
        fn from(nd: NaiveDate) -> Date {
            Date {
                year: nd.year() as u16,
                month: nd.month() as u8,
                day: nd.day() as u8,
            }
        }
    }

    impl From<Date> for Option<NaiveDate> {
        fn from(d: Date) -> Option<NaiveDate> {
            NaiveDate::from_ymd_opt(d.year as i32, d.month as u32, d.day as u32)
        }
    }

    #[test]
    fn from_chrono() {
        let nd = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(
            Date::from(nd),
            Date {
                year: 2000,
                month: 2,
                day: 29
            }
        );
    }
    #[test]
    fn into_chrono() {
        let nd: Option<NaiveDate> = Date::from_yyyymmdd("20000229").into();
        assert_eq!(nd, NaiveDate::from_ymd_opt(2000, 2, 29));
        let invalid: Option<NaiveDate> = Date::default().into();
        assert_eq!(invalid, None);
    }
}
