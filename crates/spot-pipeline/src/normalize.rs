//! Record normalization: loose upstream records to strict chart points
//!
//! Records missing a timestamp or the selected price field are dropped
//! silently; nothing here is an error for the batch.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime};
use spot_core::{ChartPoint, PriceRecord};

/// Parse, validate, scale, and sort raw records into chart points.
///
/// `include_tax` selects which price field a record must carry;
/// `multiplier` rescales the selected price (e.g. EUR/kWh to cents/kWh).
/// Output is sorted ascending by timestamp.
pub fn normalize(records: &[PriceRecord], include_tax: bool, multiplier: f64) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = records
        .iter()
        .filter_map(|record| to_point(record, include_tax, multiplier))
        .collect();

    points.sort_by_key(|point| point.timestamp);
    points
}

fn to_point(record: &PriceRecord, include_tax: bool, multiplier: f64) -> Option<ChartPoint> {
    let raw = record.timestamp.as_deref()?;
    let moment = parse_timestamp(raw)?;
    let price = record.selected_price(include_tax)?;

    Some(ChartPoint {
        label: moment.format("%H:%M").to_string(),
        full_label: full_label(&moment),
        value: price * multiplier,
        timestamp: moment.timestamp_millis(),
        day_key: moment.format("%Y-%m-%d").to_string(),
        utc_offset_secs: moment.offset().local_minus_utc(),
        tier: None,
        is_past: false,
    })
}

/// RFC 3339 first; naive timestamps are treated as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// Tooltip label: capitalized short weekday + day.month + 24-hour time
fn full_label(moment: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {}.{}. {}",
        moment.format("%a"),
        moment.day(),
        moment.month(),
        moment.format("%H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, price: f64) -> PriceRecord {
        PriceRecord {
            timestamp: Some(timestamp.into()),
            price_with_tax: Some(price),
            price_no_tax: Some(price * 0.8),
            rank: None,
        }
    }

    #[test]
    fn test_labels_and_day_key() {
        // 2024-02-01 is a Thursday
        let points = normalize(&[record("2024-02-01T13:00:00+02:00", 4.2)], true, 1.0);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "13:00");
        assert_eq!(points[0].full_label, "Thu 1.2. 13:00");
        assert_eq!(points[0].day_key, "2024-02-01");
        assert_eq!(points[0].utc_offset_secs, 7200);
    }

    #[test]
    fn test_multiplier_and_tax_selection() {
        let points = normalize(&[record("2024-02-01T13:00:00Z", 0.05)], false, 100.0);
        assert!((points[0].value - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_sorted_by_timestamp() {
        let points = normalize(
            &[
                record("2024-02-01T15:00:00Z", 1.0),
                record("2024-02-01T13:00:00Z", 2.0),
                record("2024-02-01T14:00:00Z", 3.0),
            ],
            true,
            1.0,
        );
        let stamps: Vec<i64> = points.iter().map(|p| p.timestamp).collect();
        let mut sorted = stamps.clone();
        sorted.sort_unstable();
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn test_invalid_records_dropped() {
        let missing_timestamp = PriceRecord {
            price_with_tax: Some(1.0),
            ..Default::default()
        };
        let bad_timestamp = record("not-a-date", 1.0);
        let missing_price = PriceRecord {
            timestamp: Some("2024-02-01T13:00:00Z".into()),
            ..Default::default()
        };

        let points = normalize(
            &[missing_timestamp, bad_timestamp, missing_price],
            true,
            1.0,
        );
        assert!(points.is_empty());
    }

    #[test]
    fn test_naive_timestamp_parsed_as_utc() {
        let points = normalize(&[record("2024-02-01T13:00:00", 1.0)], true, 1.0);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].utc_offset_secs, 0);
    }
}
