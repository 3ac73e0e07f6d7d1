use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::{ExpiringLicense, License};

/// Select licenses whose expiry date falls within `today..=today + days`.
///
/// Both bounds are inclusive: a license expiring today is returned with
/// `days_until_expiry` of 0, one expiring exactly `days` from now is the last
/// to be included. Input order is preserved. Licenses already expired are
/// dropped silently.
///
/// One malformed `expiryDate` aborts the whole run; there is no per-record
/// recovery, so a bad inventory never produces a partial notification.
pub fn expiring_within(
    licenses: &[License],
    today: NaiveDate,
    days: i64,
) -> Result<Vec<ExpiringLicense>> {
    let threshold = today + chrono::Duration::days(days);

    let mut expiring = Vec::new();

    for license in licenses {
        let expiry = NaiveDate::parse_from_str(&license.expiry_date, "%Y-%m-%d")
            .with_context(|| {
                format!(
                    "invalid expiry date {:?} for license {:?} (expected YYYY-MM-DD)",
                    license.expiry_date, license.product_name
                )
            })?;

        if today <= expiry && expiry <= threshold {
            expiring.push(ExpiringLicense {
                license: license.clone(),
                days_until_expiry: (expiry - today).num_days(),
            });
        }
    }

    Ok(expiring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(name: &str, expiry: &str) -> License {
        License {
            product_name: name.to_string(),
            vendor: "Acme".to_string(),
            department: None,
            expiry_date: expiry.to_string(),
            notes: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let today = date("2026-08-26");
        let licenses = vec![
            license("expires-today", "2026-08-26"),
            license("expires-at-threshold", "2026-09-25"),
            license("expires-past-threshold", "2026-09-26"),
            license("already-expired", "2026-08-25"),
        ];

        let expiring = expiring_within(&licenses, today, 30).unwrap();
        let names: Vec<&str> = expiring
            .iter()
            .map(|e| e.license.product_name.as_str())
            .collect();

        assert_eq!(names, vec!["expires-today", "expires-at-threshold"]);
        assert_eq!(expiring[0].days_until_expiry, 0);
        assert_eq!(expiring[1].days_until_expiry, 30);
    }

    #[test]
    fn test_days_until_expiry_exact() {
        let today = date("2026-08-26");
        let licenses = vec![license("acme", "2026-09-05")];

        let expiring = expiring_within(&licenses, today, 30).unwrap();
        assert_eq!(expiring[0].days_until_expiry, 10);
    }

    #[test]
    fn test_order_preserved() {
        let today = date("2026-08-26");
        let licenses = vec![
            license("later", "2026-09-20"),
            license("sooner", "2026-08-30"),
            license("middle", "2026-09-10"),
        ];

        let expiring = expiring_within(&licenses, today, 30).unwrap();
        let names: Vec<&str> = expiring
            .iter()
            .map(|e| e.license.product_name.as_str())
            .collect();

        // stable filter, no re-sorting by date
        assert_eq!(names, vec!["later", "sooner", "middle"]);
    }

    #[test]
    fn test_idempotent_for_fixed_today() {
        let today = date("2026-08-26");
        let licenses = vec![
            license("a", "2026-08-30"),
            license("b", "2027-01-01"),
        ];

        let first = expiring_within(&licenses, today, 30).unwrap();
        let second = expiring_within(&licenses, today, 30).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let expiring = expiring_within(&[], date("2026-08-26"), 30).unwrap();
        assert!(expiring.is_empty());
    }

    #[test]
    fn test_malformed_date_aborts() {
        let today = date("2026-08-26");
        let licenses = vec![
            license("good", "2026-08-30"),
            license("bad", "26/08/2026"),
        ];

        let err = expiring_within(&licenses, today, 30).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }
}
