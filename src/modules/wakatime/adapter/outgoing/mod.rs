pub mod wakatime_gateway_reqwest;
