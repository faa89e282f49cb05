//! Integration Tests
//!
//! Exercises the wrappers the way a driver and a JSON layer use them
//! together: scan a column, bind it back, and (un)marshal whole documents.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqltypes::prelude::*;
use std::collections::HashMap;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

// ============================================================================
// Compact Decimal
// ============================================================================

mod decimal_tests {
    use super::*;

    #[test]
    fn test_basics() {
        let d1 = CompactDecimal::new(1, 0);
        let d2 = CompactDecimal::new(2, 0);
        let d3 = d2.add(d1);
        assert_eq!(d3.to_fixed_string(1), "3.0");

        let d1 = d1.mul(d3).mul(d3);
        assert_eq!(d1.to_fixed_string(1), "9.0");
    }

    #[test]
    fn test_fixed_formatting() {
        assert_eq!(CompactDecimal::new(0, 0).to_fixed_string(2), "0.00");
        assert_eq!(CompactDecimal::new(0, 0).to_fixed_string(0), "0");

        let v = CompactDecimal::new(545, -2);
        assert_eq!(v.to_fixed_string(0), "5");
        assert_eq!(v.to_fixed_string(1), "5.5");
        assert_eq!(v.to_fixed_string(2), "5.45");
        assert_eq!(v.to_fixed_string(3), "5.450");

        assert_eq!(CompactDecimal::new(545, 0).to_fixed_string(-1), "550");
    }

    #[test]
    fn test_binary_roundtrip() {
        let d = CompactDecimal::new(-987_654_321, -4);
        let bytes = d.to_bytes();
        assert_eq!(bytes.len(), sqltypes_decimal::ENCODED_LEN);
        assert_eq!(CompactDecimal::from_bytes(&bytes).unwrap().parts(), (-987_654_321, -4));
    }

    #[test]
    fn test_division() {
        let q = CompactDecimal::new(10, 0).div(CompactDecimal::new(4, 0)).unwrap();
        assert_eq!(q.int_part(), 2);
        assert!(CompactDecimal::new(10, 0)
            .div(CompactDecimal::new(0, 3))
            .unwrap_err()
            .is_division_by_zero());
    }

    #[test]
    fn test_locale_decimal() {
        init_tracing();
        assert_eq!(parse_locale_decimal("10.01"), parse_locale_decimal("10,01"));
        assert_eq!(
            parse_locale_decimal("123,010.01"),
            parse_locale_decimal("123.010,01")
        );
        assert!(parse_locale_decimal("n/a").is_zero());
    }
}

// ============================================================================
// Sentinel NULL semantics
// ============================================================================

mod sentinel_tests {
    use super::*;

    #[test]
    fn test_integer_variants() {
        assert_eq!(NullInt0(0).value().unwrap(), DriverValue::Null);
        assert_eq!(NullIntM1(0).value().unwrap(), DriverValue::Int(0));
        assert_eq!(NullIntM1(-1).value().unwrap(), DriverValue::Null);
        assert!(NullIntM1(-1).is_null());
    }

    #[test]
    fn test_scan_then_bind_roundtrip() {
        let mut row = (NullInt0::default(), NullString::default(), NullBool::default());
        row.0.scan(&DriverValue::Int(17)).unwrap();
        row.1.scan(&DriverValue::Bytes(b"hello".to_vec())).unwrap();
        row.2.scan(&DriverValue::Int(1)).unwrap();

        assert_eq!(row.0.value().unwrap(), DriverValue::Int(17));
        assert_eq!(row.1.value().unwrap(), DriverValue::from("hello"));
        assert_eq!(row.2.value().unwrap(), DriverValue::Int(1));
    }

    #[test]
    fn test_database_null_vs_json_null() {
        let mut s = NullString::from("value");
        s.unmarshal_text(b"null").unwrap();
        assert_eq!(s.as_str(), "value");
        s.scan(&DriverValue::Null).unwrap();
        assert_eq!(s.as_str(), "");

        let mut d = NullDecimal::from(CompactDecimal::new(5, 0));
        d.scan(&DriverValue::Null).unwrap();
        d.unmarshal_text(b"null").unwrap();
        assert_eq!(d.get().parts(), (5, 0));
    }

    #[test]
    fn test_option_is_two_state() {
        let mut v: Option<i64> = None;
        v.scan(&DriverValue::Int(0)).unwrap();
        assert_eq!(v.value().unwrap(), DriverValue::Int(0));
    }
}

// ============================================================================
// JSON documents
// ============================================================================

mod json_tests {
    use super::*;

    #[test]
    fn test_unmarshal_string_map() {
        let j = r#"{"a": null, "b": "with quotes", "c": 100}"#;
        let m: HashMap<String, NullString> = serde_json::from_str(j).unwrap();
        assert_eq!(m["a"], NullString::from(""));
        assert_eq!(m["b"], NullString::from("with quotes"));
        assert_eq!(m["c"], NullString::from("100"));
    }

    #[derive(Deserialize)]
    struct Dated {
        date: NullDate,
    }

    #[test]
    fn test_null_date() {
        let dd = NullDate::new("2018-03-09");
        assert_eq!(dd.year(), 2018);
        assert_eq!(dd.value().unwrap(), DriverValue::from("2018-03-09"));

        let parsed: Dated = serde_json::from_str(r#"{"date":"2019-07-22"}"#).unwrap();
        assert_eq!(parsed.date.day(), 22);
        assert_eq!(parsed.date.year(), 2019);

        let mut dd2 = dd.clone();
        dd2.scan(&DriverValue::Timestamp(
            Utc.with_ymd_and_hms(2010, 1, 10, 0, 0, 0).unwrap(),
        ))
        .unwrap();
        assert_eq!((dd2.year(), dd2.month(), dd2.day()), (2010, 1, 10));

        dd2.scan(&DriverValue::from("2013-09-25")).unwrap();
        assert_eq!((dd2.year(), dd2.month(), dd2.day()), (2013, 9, 25));
    }

    #[test]
    fn test_null_date_marshal() {
        let dd = NullDate::new("1987-03-09");
        let doc = serde_json::json!({ "date": dd, "a": "b", "c": 1000 });
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"a":"b","c":1000,"date":"1987-03-09"}"#
        );

        let zero = serde_json::to_string(&NullDate::default()).unwrap();
        assert_eq!(zero, r#""0000-00-00""#);
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        t: NullTime,
        v: String,
        n: DateTime<Utc>,
    }

    #[test]
    fn test_null_time_map_roundtrip() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let mut ts = HashMap::new();
        ts.insert(
            "a".to_string(),
            Entry {
                t: NullTime(now),
                v: "a".into(),
                n: now,
            },
        );
        ts.insert(
            "b".to_string(),
            Entry {
                t: NullTime::default(),
                v: "b".into(),
                n: now,
            },
        );

        let text = serde_json::to_string(&ts).unwrap();
        let back: HashMap<String, Entry> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, ts);
        assert!(back["b"].t.is_null());
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Invoice {
        number: NullIntM1,
        paid: NullBool,
        total: NullDecimal,
        note: NullString,
    }

    #[test]
    #[cfg(not(feature = "decimal-json-number"))]
    fn test_struct_roundtrip() {
        let inv = Invoice {
            number: NullIntM1(0),
            paid: NullBool(true),
            total: NullDecimal::from(CompactDecimal::new(1999, -2)),
            note: NullString::default(),
        };
        let text = serde_json::to_string(&inv).unwrap();
        assert_eq!(
            text,
            r#"{"number":0,"paid":true,"total":"19.99","note":""}"#
        );

        let back: Invoice = serde_json::from_str(&text).unwrap();
        assert_eq!(back.number, NullIntM1(0));
        assert!(back.paid.get());
        // re-encoding "19.99" truncates to (19, -2)
        assert_eq!(back.total.get().parts(), (19, -2));
    }

    #[test]
    fn test_partial_update_with_text_codec() {
        let mut note = NullString::from("draft");
        let mut number = NullIntM1(12);
        let doc: HashMap<String, serde_json::Value> =
            serde_json::from_str(r#"{"note": null, "number": 13}"#).unwrap();

        note.unmarshal_text(doc["note"].to_string().as_bytes()).unwrap();
        number.unmarshal_text(doc["number"].to_string().as_bytes()).unwrap();
        assert_eq!(note.as_str(), "draft");
        assert_eq!(number.get(), 13);
    }
}
