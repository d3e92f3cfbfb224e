pub mod wakatime_stats;
