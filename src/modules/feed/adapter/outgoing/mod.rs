pub mod feed_fetcher_reqwest;
