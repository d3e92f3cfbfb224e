mod get_source_posts;
mod parse_feed;

pub use get_source_posts::get_source_posts_handler;
pub use parse_feed::{parse_feed_handler, ParseFeedRequest};
