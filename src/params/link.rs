//! Shareable-link encoding of the monthly activity inputs
//!
//! Keys: `uhcd`, `consult`, `uhcd_plus`. Missing or malformed values, and
//! counts above `MAX_MONTHLY_COUNT`, fall back to the dashboard defaults
//! instead of failing.

use super::data::{
    MonthlyActivity, DEFAULT_MONTHLY_ADDITIONAL_STAYS, DEFAULT_MONTHLY_EXTERNAL_CONSULTATIONS,
    DEFAULT_MONTHLY_OBSERVATION_STAYS, MAX_MONTHLY_COUNT,
};
use log::warn;

pub const KEY_OBSERVATION_STAYS: &str = "uhcd";
pub const KEY_EXTERNAL_CONSULTATIONS: &str = "consult";
pub const KEY_ADDITIONAL_STAYS: &str = "uhcd_plus";

impl MonthlyActivity {
    /// Decode from a query string (leading `?` optional)
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut activity = MonthlyActivity::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                KEY_OBSERVATION_STAYS => {
                    activity.observation_stays =
                        parse_count(&key, &value, DEFAULT_MONTHLY_OBSERVATION_STAYS)
                }
                KEY_EXTERNAL_CONSULTATIONS => {
                    activity.external_consultations =
                        parse_count(&key, &value, DEFAULT_MONTHLY_EXTERNAL_CONSULTATIONS)
                }
                KEY_ADDITIONAL_STAYS => {
                    activity.additional_observation_stays =
                        parse_count(&key, &value, DEFAULT_MONTHLY_ADDITIONAL_STAYS)
                }
                _ => {}
            }
        }

        activity
    }

    /// Encode as a query string without the leading `?`
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(KEY_OBSERVATION_STAYS, &self.observation_stays.to_string())
            .append_pair(
                KEY_EXTERNAL_CONSULTATIONS,
                &self.external_consultations.to_string(),
            )
            .append_pair(
                KEY_ADDITIONAL_STAYS,
                &self.additional_observation_stays.to_string(),
            )
            .finish()
    }
}

fn parse_count(key: &str, value: &str, default: u64) -> u64 {
    match value.trim().parse::<u64>() {
        Ok(count) if count <= MAX_MONTHLY_COUNT => count,
        _ => {
            warn!("malformed link parameter {}={:?}, using {}", key, value, default);
            default
        }
    }
}
