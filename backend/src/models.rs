use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

/// One OHLCV observation from the `btc_prices` table. Field order matches
/// the exported column order; the serde names double as the JSON keys.
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::btc_prices)]
pub struct PriceRecord {
    pub timestamp: NaiveDateTime,
    pub asset_name: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
