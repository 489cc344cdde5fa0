use chrono::NaiveDateTime;

use crate::core::bookstore::{BookstoreError, BookstoreResult};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn format_date(time: NaiveDateTime) -> String {
    format!("{}", time.format(DATE_FMT))
}

// e.g. 2022-09-24T04:40:35.726029
pub(crate) fn parse_date(raw: &str) -> BookstoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATE_FMT)
        .map_err(|err| BookstoreError::serialization(
            format!("failed to parse date {:?} {:?}", raw, err).as_str()))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::utils::date::{format_date, parse_date};

    #[tokio::test]
    async fn test_should_format_and_parse_date() {
        let now = Utc::now().naive_utc();
        let str_date = format_date(now);
        let parsed = parse_date(str_date.as_str()).unwrap();
        assert_eq!(now, parsed);
    }

    #[tokio::test]
    async fn test_should_fail_on_bad_date() {
        assert!(parse_date("not a date").is_err());
    }
}
