use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::feed::application::domain::entities::{Feed, FeedItem};

#[derive(Debug, Clone, Error)]
pub enum FeedParseError {
    #[error("Malformed feed: {0}")]
    Malformed(String),
}

/// Which element's text is currently being collected.
enum Field {
    Title,
    Link,
    PubDate,
    Creator,
    Author,
    Description,
    Category,
}

/// Parse an RSS 2.0 or Atom document. Item collection stops at
/// `max_items`; channel metadata is always read.
pub fn parse_feed(xml: &str, max_items: usize) -> Result<Feed, FeedParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut feed = Feed::default();
    let mut saw_root = false;
    let mut in_item = false;
    let mut in_author = false;
    let mut current_item: Option<FeedItem> = None;
    let mut field: Option<Field> = None;
    let mut text = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| FeedParseError::Malformed(e.to_string()))?;

        match event {
            Event::Start(start) => {
                match start.name().as_ref() {
                    b"channel" | b"feed" => saw_root = true,
                    b"item" | b"entry" => {
                        in_item = true;
                        current_item = Some(FeedItem::default());
                        field = None;
                    }
                    b"author" => {
                        in_author = true;
                        field = if in_item { Some(Field::Author) } else { None };
                    }
                    b"name" if in_author => field = Some(Field::Author),
                    b"title" => field = Some(Field::Title),
                    b"link" => {
                        // Atom links carry the URL as an attribute.
                        if let Some(href) = attr(&start, b"href")? {
                            assign_link(&mut feed, current_item.as_mut(), in_item, href);
                            field = None;
                        } else {
                            field = Some(Field::Link);
                        }
                    }
                    b"pubDate" | b"published" | b"updated" => field = Some(Field::PubDate),
                    b"dc:creator" => field = Some(Field::Creator),
                    b"description" | b"summary" => field = Some(Field::Description),
                    b"category" => field = Some(Field::Category),
                    _ => field = None,
                }
                text.clear();
            }

            Event::Empty(start) => match start.name().as_ref() {
                b"link" => {
                    if let Some(href) = attr(&start, b"href")? {
                        assign_link(&mut feed, current_item.as_mut(), in_item, href);
                    }
                }
                b"category" => {
                    if let Some(term) = attr(&start, b"term")? {
                        if let Some(item) = current_item.as_mut() {
                            item.categories.push(term);
                        }
                    }
                }
                _ => {}
            },

            Event::Text(t) => {
                let chunk = t
                    .unescape()
                    .map_err(|e| FeedParseError::Malformed(e.to_string()))?;
                text.push_str(&chunk);
            }

            Event::CData(t) => {
                text.push_str(&String::from_utf8_lossy(&t.into_inner()));
            }

            Event::End(end) => match end.name().as_ref() {
                b"item" | b"entry" => {
                    if let Some(item) = current_item.take() {
                        if feed.items.len() < max_items {
                            feed.items.push(item);
                        }
                    }
                    in_item = false;
                    field = None;
                }
                b"author" => {
                    in_author = false;
                    apply_field(&mut feed, current_item.as_mut(), in_item, &mut field, &text);
                }
                _ => {
                    apply_field(&mut feed, current_item.as_mut(), in_item, &mut field, &text);
                }
            },

            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(FeedParseError::Malformed(
            "no channel or feed element".to_string(),
        ));
    }

    Ok(feed)
}

fn attr(start: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, FeedParseError> {
    let attribute = start
        .try_get_attribute(name)
        .map_err(|e| FeedParseError::Malformed(e.to_string()))?;

    match attribute {
        Some(a) => {
            let value = a
                .unescape_value()
                .map_err(|e| FeedParseError::Malformed(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

fn assign_link(feed: &mut Feed, item: Option<&mut FeedItem>, in_item: bool, href: String) {
    if in_item {
        if let Some(item) = item {
            if item.link.is_none() {
                item.link = Some(href);
            }
        }
    } else if feed.link.is_none() {
        feed.link = Some(href);
    }
}

fn apply_field(
    feed: &mut Feed,
    item: Option<&mut FeedItem>,
    in_item: bool,
    field: &mut Option<Field>,
    text: &str,
) {
    let Some(current) = field.take() else {
        return;
    };
    if text.is_empty() {
        return;
    }
    let value = text.to_string();

    if in_item {
        let Some(item) = item else { return };
        match current {
            Field::Title => item.title = Some(value),
            Field::Link => item.link = Some(value),
            Field::PubDate => {
                if item.pub_date.is_none() {
                    item.pub_date = Some(value);
                }
            }
            // dc:creator wins over a plain author element.
            Field::Creator => item.author = Some(value),
            Field::Author => {
                if item.author.is_none() {
                    item.author = Some(value);
                }
            }
            Field::Description => item.content_snippet = Some(strip_html(&value)),
            Field::Category => item.categories.push(value),
        }
    } else {
        match current {
            Field::Title => feed.title = Some(value),
            Field::Link => feed.link = Some(value),
            Field::Description => feed.description = Some(strip_html(&value)),
            _ => {}
        }
    }
}

/// Plain-text snippet of an HTML fragment: tags dropped, basic
/// entities decoded, whitespace collapsed.
fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    let decoded = out
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
