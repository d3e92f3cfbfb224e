pub mod fetch_blog_posts;
