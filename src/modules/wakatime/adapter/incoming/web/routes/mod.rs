mod get_all_time_stats;
mod get_weekly_stats;

pub use get_all_time_stats::get_wakatime_all_time_handler;
pub use get_weekly_stats::get_wakatime_stats_handler;
