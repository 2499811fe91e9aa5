//! Download a campground's campsites merged with one month of availability.

use camp_recgov::date_key::DateKey;
use camp_recgov::date_window::{next_month_start, today_utc};
use camp_recgov::recgov::fetch_campsites;
use camp_utils::dates::parse_month;
use log::info;
use std::time::Duration;

/// Month to work on: `month` as YYYY-MM, or the month after `today`.
pub fn resolve_month(month: Option<&str>, today: DateKey) -> anyhow::Result<DateKey> {
    match month {
        Some(month) => Ok(DateKey::from(parse_month(month)?)),
        None => Ok(next_month_start(today)),
    }
}

pub async fn run_fetch(campground_id: &str, month: Option<&str>, output: &str) -> anyhow::Result<()> {
    let month = resolve_month(month, today_utc())?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let campsites = fetch_campsites(&client, campground_id, month).await?;
    let json = serde_json::to_string_pretty(&campsites)?;

    if output == "-" {
        println!("{json}");
    } else {
        std::fs::write(output, json)?;
        info!("Wrote {} campsites to {}", campsites.len(), output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::resolve_month;
    use camp_recgov::date_key::DateKey;

    #[test]
    fn test_resolve_month() {
        let today = DateKey::from_ymd_opt(2024, 12, 20).unwrap();
        assert_eq!(
            resolve_month(None, today).unwrap(),
            DateKey::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(
            resolve_month(Some("2024-07"), today).unwrap(),
            DateKey::from_ymd_opt(2024, 7, 1).unwrap()
        );
        assert!(resolve_month(Some("July"), today).is_err());
    }
}
