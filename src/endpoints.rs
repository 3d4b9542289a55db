//! The endpoint URIs.

/// The root route which redirects to the analysis page.
pub const ROOT: &str = "/";
/// The page with the seasonal and monthly rental charts.
pub const ANALYSIS_VIEW: &str = "/analysis";
/// The page with the average rentals for each hour of the day.
pub const HOURLY_VIEW: &str = "/hourly";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for the monthly casual and registered rental totals as JSON.
pub const MONTHLY_RENTALS_API: &str = "/api/monthly";
