use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordQueryDto {
    pub keyword: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DateRangeQueryDto {
    #[serde(rename = "fromDate")]
    pub from_date: String,
    #[serde(rename = "toDate")]
    pub to_date: String,
}
