pub mod wakatime_gateway;
