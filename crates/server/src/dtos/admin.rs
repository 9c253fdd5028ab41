use chrono::{NaiveDate, NaiveTime};
use database::services::admin::{AdminListing, AdminQuery};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminQueryParams {
    /// Search terms matched against name and email
    pub q: Option<String>,
    /// Exact reservation date
    pub date: Option<NaiveDate>,
    /// Exact reservation time
    pub time: Option<NaiveTime>,
    /// Date drill-down: year
    pub year: Option<i32>,
    /// Date drill-down: month, requires `year`
    pub month: Option<u32>,
    /// Date drill-down: day, requires `year` and `month`; without `month`
    /// the listing is empty
    pub day: Option<u32>,
}

impl From<AdminQueryParams> for AdminQuery {
    fn from(params: AdminQueryParams) -> Self {
        Self {
            q: params.q,
            date: params.date,
            time: params.time,
            year: params.year,
            month: params.month,
            day: params.day,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminListResponse {
    pub columns: Vec<String>,
    pub count: usize,
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<Map<String, Value>>,
}

impl From<AdminListing> for AdminListResponse {
    fn from(listing: AdminListing) -> Self {
        Self {
            columns: listing.columns.into_iter().map(String::from).collect(),
            count: listing.rows.len(),
            results: listing.rows,
        }
    }
}
