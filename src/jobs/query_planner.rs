// src/jobs/query_planner.rs
use super::{is_all_cities, ProviderQuery};

const NATIONWIDE: &str = "India";
const PAGE: &str = "1";
const FETCH_FULL_TEXT: &str = "yes";
const NUM_RESULTS: &str = "100";

/// Build one provider query per hiring-intent phrase, in phrase order.
pub fn plan_queries<S: AsRef<str>>(city: &str, hiring_intents: &[S]) -> Vec<ProviderQuery> {
    let (scope, location) = if is_all_cities(city) {
        (NATIONWIDE.to_string(), NATIONWIDE.to_string())
    } else {
        let city = city.trim();
        (city.to_string(), format!("{}, {}", city, NATIONWIDE))
    };

    hiring_intents
        .iter()
        .map(|intent| ProviderQuery {
            search_terms: format!("{} {}", intent.as_ref(), scope),
            location: location.clone(),
            page: PAGE.to_string(),
            fetch_full_text: FETCH_FULL_TEXT.to_string(),
            num_results: NUM_RESULTS.to_string(),
        })
        .collect()
}
