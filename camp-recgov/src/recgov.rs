//! Fetching campsite details and month availability from recreation.gov.
//!
//! Both endpoints are public and unauthenticated. The two responses are
//! merged by campsite id before anything in this crate looks at them.

use crate::campsite::{AvailabilityResponse, Campsite, SearchResponse};
use crate::date_key::DateKey;
use crate::date_window::month_start;
use crate::error::{CampError, Result};
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Campsite search endpoint.
pub const SEARCH_URL: &str = "https://www.recreation.gov/api/search/campsites";

/// Campground availability endpoint; `/{campground_id}/month` is appended.
pub const AVAILABILITY_URL: &str = "https://www.recreation.gov/api/camps/availability/campground";

/// Campsites requested from the search endpoint per campground.
pub const SEARCH_PAGE_SIZE: u32 = 70;

/// `start_date` format the availability endpoint expects (midnight UTC, with milliseconds).
const START_DATE_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";

const MAX_TRIES: u32 = 3;

/// GET `url` and decode its JSON body, with retry and exponential backoff.
///
/// Transport failures and non-success statuses are retried; a body that
/// fails to decode is returned as an error straight away.
async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let mut sleep_millis: u64 = 1000;
    let mut attempt = 1;
    loop {
        let error = match client.get(url).query(query).send().await {
            Ok(response) if response.status().is_success() => {
                return Ok(response.json::<T>().await?);
            }
            Ok(response) => CampError::BadStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            },
            Err(e) => CampError::Http(e),
        };
        warn!("Attempt {}/{}: {}", attempt, MAX_TRIES, error);
        if attempt >= MAX_TRIES {
            warn!("All attempts failed for {}", url);
            return Err(error);
        }
        info!(
            "Sleeping for {} milliseconds before retry for {}",
            sleep_millis, url
        );
        tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
        sleep_millis *= 2;
        attempt += 1;
    }
}

/// Campsite details of a campground, without availability.
pub async fn get_campsite_details(client: &Client, campground_id: &str) -> Result<SearchResponse> {
    let query = [
        ("fq", format!("asset_id:{campground_id}")),
        ("size", SEARCH_PAGE_SIZE.to_string()),
    ];
    get_json(client, SEARCH_URL, &query).await
}

/// Availability of every campsite of a campground for the month containing `month`.
pub async fn get_month_availability(
    client: &Client,
    campground_id: &str,
    month: DateKey,
) -> Result<AvailabilityResponse> {
    let url = format!("{AVAILABILITY_URL}/{campground_id}/month");
    let start_date = month_start(month)
        .as_naive_date()
        .format(START_DATE_FORMAT)
        .to_string();
    get_json(client, &url, &[("start_date", start_date)]).await
}

/// Fetch details and availability concurrently and merge them by campsite id.
pub async fn fetch_campsites(
    client: &Client,
    campground_id: &str,
    month: DateKey,
) -> Result<Vec<Campsite>> {
    info!(
        "Fetching campground {} for the month of {}",
        campground_id,
        month_start(month)
    );
    let (details, availability) = tokio::try_join!(
        get_campsite_details(client, campground_id),
        get_month_availability(client, campground_id, month)
    )?;
    let campsites = details.merge(availability);
    info!(
        "Fetched {} campsites for campground {}",
        campsites.len(),
        campground_id
    );
    Ok(campsites)
}
