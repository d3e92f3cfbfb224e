pub mod feed_parser;
