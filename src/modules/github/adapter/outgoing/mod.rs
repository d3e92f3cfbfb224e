pub mod github_gateway_reqwest;
