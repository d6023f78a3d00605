use almanac_calendar::japanese::{era_for_date, ERA_TABLE};
use almanac_calendar::{
    CalendarDate, CalendarError, ChronoDate, Chronology, DayOfWeek, Era, IsoDate, JapaneseEra,
};

const JAPANESE: Chronology = Chronology::Japanese;

fn reference() -> CalendarDate {
    CalendarDate::japanese(JapaneseEra::Heisei, 21, 3, 3).unwrap()
}

#[test]
fn reference_date() {
    let date = reference();
    assert_eq!(date.to_iso(), IsoDate::new(2009, 3, 3).unwrap());
    assert_eq!(date.proleptic_year(), 2009);
    assert_eq!(date.day_of_year(), 62);
    assert_eq!(date.day_of_week(), DayOfWeek::Tuesday);
    assert!(!date.is_leap_year());
    assert_eq!(date.to_string(), "Heisei 21-03-03 (Japanese)");
}

#[test]
fn leap_rule_uses_proleptic_year() {
    // Showa 3 is 1928, a leap year, although 3 is not divisible by 4.
    assert!(CalendarDate::japanese(JapaneseEra::Showa, 3, 2, 29).is_ok());
    assert!(CalendarDate::japanese(JapaneseEra::Heisei, 20, 2, 29).is_ok());
    assert!(CalendarDate::japanese(JapaneseEra::Heisei, 24, 2, 29).is_ok());
    // Reiwa 4 is 2022.
    let err = CalendarDate::japanese(JapaneseEra::Reiwa, 4, 2, 29).unwrap_err();
    assert_eq!(
        err,
        CalendarError::FieldOutOfRange {
            rule: JAPANESE.day_of_month(),
            value: 29,
            min: 1,
            max: 28,
        }
    );
}

#[test]
fn era_boundaries_from_iso() {
    for start in ERA_TABLE.iter().filter(|s| s.era != JapaneseEra::BeforeSeireki) {
        let iso = IsoDate::new(start.year, start.month, start.day).unwrap();
        let first = CalendarDate::from_iso(JAPANESE, iso).unwrap();
        assert_eq!(first.era(), Era::from(start.era), "first day of {}", start.era);
        assert_eq!(first.year_of_era(), 1, "first day of {}", start.era);

        let previous = first.minus_days(1).unwrap();
        assert_ne!(previous.era(), first.era(), "day before {}", start.era);
        assert_eq!(previous.plus_days(1), Ok(first));
    }
}

#[test]
fn known_transitions() {
    let cases = [
        ((1989, 1, 7), "Showa 64-01-07 (Japanese)"),
        ((1989, 1, 8), "Heisei 1-01-08 (Japanese)"),
        ((2019, 4, 30), "Heisei 31-04-30 (Japanese)"),
        ((2019, 5, 1), "Reiwa 1-05-01 (Japanese)"),
        ((1865, 4, 6), "Seireki 1865-04-06 (Japanese)"),
        ((1, 1, 1), "Seireki 1-01-01 (Japanese)"),
        ((0, 12, 31), "BeforeSeireki 1-12-31 (Japanese)"),
        ((-9, 6, 1), "BeforeSeireki 10-06-01 (Japanese)"),
    ];
    for ((y, m, d), expected) in cases {
        let date = CalendarDate::from_iso(JAPANESE, IsoDate::new(y, m, d).unwrap()).unwrap();
        assert_eq!(date.to_string(), expected);
        assert_eq!(date.to_iso(), IsoDate::new(y, m, d).unwrap());
    }
}

#[test]
fn era_lookup_matches_conversion() {
    assert_eq!(era_for_date(1926, 12, 25), JapaneseEra::Showa);
    assert_eq!(era_for_date(1926, 12, 24), JapaneseEra::Taisho);
}

#[test]
fn era_values() {
    assert_eq!(reference().get(JAPANESE.era()), Ok(6));
    assert_eq!(JAPANESE.era().range(), 0..=7);
    assert_eq!(JAPANESE.era_from_code(7), Ok(JapaneseEra::Reiwa.into()));
    assert_eq!(JAPANESE.era_from_name("showa"), Some(JapaneseEra::Showa.into()));
}

#[test]
fn construction_limits() {
    let err = CalendarDate::japanese(JapaneseEra::Heisei, 10_000, 1, 1).unwrap_err();
    assert_eq!(err.rule(), Some(JAPANESE.year_of_era()));
    let err = CalendarDate::japanese(JapaneseEra::Heisei, 21, 13, 1).unwrap_err();
    assert_eq!(err.rule(), Some(JAPANESE.month_of_year()));
    let err = CalendarDate::japanese(JapaneseEra::Heisei, 21, 4, 31).unwrap_err();
    assert_eq!(err.rule(), Some(JAPANESE.day_of_month()));
}

#[test]
fn arithmetic_keeps_era() {
    let date = reference();
    assert_eq!(date.plus_years(10), CalendarDate::japanese(JapaneseEra::Heisei, 31, 3, 3));
    assert_eq!(date.minus_years(10), CalendarDate::japanese(JapaneseEra::Heisei, 11, 3, 3));
    assert_eq!(date.plus_months(5), CalendarDate::japanese(JapaneseEra::Heisei, 21, 8, 3));
    assert_eq!(date.minus_months(1), CalendarDate::japanese(JapaneseEra::Heisei, 21, 2, 3));
    assert_eq!(date.plus_weeks(2), CalendarDate::japanese(JapaneseEra::Heisei, 21, 3, 17));
    assert_eq!(date.plus_days(2), CalendarDate::japanese(JapaneseEra::Heisei, 21, 3, 5));
    assert!(matches!(
        date.plus_years(9_999),
        Err(CalendarError::FieldOutOfRange { .. })
    ));
    assert!(matches!(
        date.minus_years(20_000),
        Err(CalendarError::FieldOutOfRange { .. })
    ));
}

#[test]
fn compares_with_other_chronologies() {
    let hijrah = CalendarDate::hijrah(1430, 3, 5).unwrap();
    assert!(reference().is_after(&hijrah));
    assert!(reference().is_same_instant(&IsoDate::new(2009, 3, 3).unwrap()));
    assert_eq!(
        hijrah.convert_to(JAPANESE).map(|d| d.to_string()),
        Ok("Heisei 21-03-02 (Japanese)".to_string())
    );
}
