#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, NaiveTime, TimeZone};
    use timetrace::libs::error::Error;
    use timetrace::libs::formatter::{format_duration, parse_duration, Formatter};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::minutes(504)), "8h 24min");
        assert_eq!(format_duration(&Duration::hours(3)), "3h 0min");
        assert_eq!(format_duration(&Duration::seconds(12)), "0h 0min 12sec");
        assert_eq!(format_duration(&Duration::seconds(61)), "0h 1min");
        assert_eq!(format_duration(&Duration::zero()), "0h 0min 0sec");
        assert_eq!(format_duration(&Duration::minutes(-5)), "0h 0min 0sec");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("15m").unwrap(), Duration::minutes(15));
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("-10m").unwrap(), Duration::minutes(-10));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::milliseconds(250));
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());

        for invalid in ["", "15", "m", "1x", "1h-5m", "+"] {
            assert!(matches!(parse_duration(invalid), Err(Error::InvalidDuration(_))), "{}", invalid);
        }
    }

    #[test]
    fn test_parse_duration_small_units() {
        assert_eq!(parse_duration("1500us").unwrap(), Duration::microseconds(1500));
        assert_eq!(parse_duration("2µs").unwrap(), Duration::microseconds(2));
        assert_eq!(parse_duration("300ns").unwrap(), Duration::nanoseconds(300));
        assert_eq!(parse_duration("1m30s500ms").unwrap(), Duration::milliseconds(90_500));
    }

    #[test]
    fn test_parse_duration_out_of_range() {
        assert_eq!(parse_duration("2562047h").unwrap(), Duration::hours(2_562_047));

        for invalid in ["2562048h", "9999999999h", "-9999999999h"] {
            assert!(matches!(parse_duration(invalid), Err(Error::InvalidDuration(_))), "{}", invalid);
        }
    }

    #[test]
    fn test_huge_delta_is_rejected_not_panicking() {
        use timetrace::libs::record::Record;

        let start = Local.with_ymd_and_hms(2021, 5, 1, 9, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2021, 5, 1, 10, 0, 0).unwrap();
        let mut record = Record::closed(start, end, None, false).unwrap();

        let err = parse_duration("9999999999h").and_then(|delta| record.shift_end(delta)).unwrap_err();
        assert!(matches!(err, Error::InvalidDuration(_)));
        assert_eq!(record.end.time(), Some(end));
    }

    #[test]
    fn test_record_keys() {
        let start = Local.with_ymd_and_hms(2021, 5, 1, 15, 4, 0).unwrap();

        let formatter = Formatter::new(false);
        assert_eq!(formatter.record_key(&start), "2021-05-01-15-04");
        assert_eq!(formatter.parse_record_key("2021-05-01-15-04").unwrap(), start);
        assert_eq!(formatter.record_key_layout(), "YYYY-MM-DD-HH-MM");

        let formatter = Formatter::new(true);
        assert_eq!(formatter.record_key(&start), "2021-05-01-03-04PM");
        assert_eq!(formatter.parse_record_key("2021-05-01-03-04pm").unwrap(), start);
        assert!(matches!(formatter.parse_record_key("2021-05-01-15-04"), Err(Error::InvalidRecordKey(_))));
    }

    #[test]
    fn test_parse_date_and_time() {
        let formatter = Formatter::default();
        let today = Local::now().date_naive();

        assert_eq!(formatter.parse_date("today").unwrap(), today);
        assert_eq!(formatter.parse_date("Yesterday").unwrap(), today.pred_opt().unwrap());
        assert_eq!(formatter.parse_date("2021-05-01").unwrap(), NaiveDate::from_ymd_opt(2021, 5, 1).unwrap());
        assert!(matches!(formatter.parse_date("01.05.2021"), Err(Error::InvalidDate(_))));

        assert_eq!(formatter.parse_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(formatter.parse_time("02:15pm").unwrap(), NaiveTime::from_hms_opt(14, 15, 0).unwrap());
        assert!(matches!(formatter.parse_time("25:00"), Err(Error::InvalidTime(_))));
    }

    #[test]
    fn test_display_strings() {
        let formatter = Formatter::new(false);
        let time = Local.with_ymd_and_hms(2021, 5, 1, 9, 5, 0).unwrap();
        assert_eq!(formatter.pretty_date_string(&time), "2021-05-01");
        assert_eq!(formatter.time_string(&time), "09:05");
    }
}
