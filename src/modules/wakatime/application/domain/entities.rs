use serde::Serialize;

/// Per-language share of the week, including the provider's
/// human-readable `text` form ("4 hrs 30 mins").
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSlice {
    pub name: String,
    pub total_seconds: f64,
    pub percent: f64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlice {
    pub name: String,
    pub total_seconds: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub total_seconds: f64,
    pub daily_average: f64,
    /// Provider-formatted total ("12 hrs 30 mins").
    pub human_readable_total: String,
    pub languages: Vec<LanguageSlice>,
    pub editors: Vec<TimeSlice>,
    pub projects: Vec<TimeSlice>,
    pub operating_systems: Vec<TimeSlice>,
}
