//! RSS item extraction
//!
//! Event-driven walk over the feed XML. Only `<item><title>` and
//! `<item><link>` matter; everything else, including channel metadata and
//! unknown elements, is skipped.

use anyhow::{anyhow, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::NewsItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
}

/// Pull the first `limit` item title/link pairs out of an RSS document.
///
/// CDATA-wrapped text is handled; an item missing its title or link is
/// skipped rather than failing the whole digest.
pub fn parse_items(xml: &str, limit: usize) -> Result<Vec<NewsItem>> {
    let mut reader = Reader::from_str(xml);

    let mut items = Vec::new();
    let mut in_item = false;
    let mut field: Option<Field> = None;
    let mut title = String::new();
    let mut link = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = true;
                    title.clear();
                    link.clear();
                }
                b"title" if in_item => field = Some(Field::Title),
                b"link" if in_item => field = Some(Field::Link),
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if in_item {
                    if let Some(current) = field {
                        let text = t
                            .unescape()
                            .map_err(|e| anyhow!("bad text in feed: {e}"))?;
                        match current {
                            Field::Title => title.push_str(text.trim()),
                            Field::Link => link.push_str(text.trim()),
                        }
                    }
                }
            }
            Ok(Event::CData(t)) => {
                if in_item {
                    if let Some(current) = field {
                        let inner = t.into_inner();
                        let text = String::from_utf8_lossy(&inner);
                        match current {
                            Field::Title => title.push_str(text.trim()),
                            Field::Link => link.push_str(text.trim()),
                        }
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = false;
                    if !title.is_empty() && !link.is_empty() {
                        items.push(NewsItem {
                            title: std::mem::take(&mut title),
                            link: std::mem::take(&mut link),
                        });
                        if items.len() >= limit {
                            break;
                        }
                    }
                }
                b"title" | b"link" => field = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(anyhow!("malformed feed XML: {e}")),
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0">
  <channel>
    <title>Example Channel</title>
    <link>https://example.org</link>
    <item>
      <title>First story</title>
      <link>https://example.org/1</link>
      <description>ignored</description>
    </item>
    <item>
      <title><![CDATA[Second & third]]></title>
      <link>https://example.org/2</link>
    </item>
    <item>
      <title>No link here</title>
    </item>
    <item>
      <title>Escaped &amp; entities</title>
      <link>https://example.org/4</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parses_items_in_order() {
        let items = parse_items(FEED, 10).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "First story");
        assert_eq!(items[0].link, "https://example.org/1");
    }

    #[test]
    fn test_channel_title_not_mistaken_for_item() {
        let items = parse_items(FEED, 10).unwrap();
        assert!(items.iter().all(|i| i.title != "Example Channel"));
    }

    #[test]
    fn test_cdata_title() {
        let items = parse_items(FEED, 10).unwrap();
        assert_eq!(items[1].title, "Second & third");
    }

    #[test]
    fn test_entity_unescaped() {
        let items = parse_items(FEED, 10).unwrap();
        assert_eq!(items[2].title, "Escaped & entities");
    }

    #[test]
    fn test_item_without_link_is_skipped() {
        let items = parse_items(FEED, 10).unwrap();
        assert!(items.iter().all(|i| i.title != "No link here"));
    }

    #[test]
    fn test_limit_respected() {
        let items = parse_items(FEED, 2).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_feed_yields_no_items() {
        let items = parse_items("<rss><channel></channel></rss>", 5).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_garbage_is_an_error() {
        let result = parse_items("<rss><item><title>unclosed", 5);
        // Either an error or an empty result is acceptable for truncated
        // input; it must not panic or fabricate items.
        if let Ok(items) = result {
            assert!(items.is_empty());
        }
    }
}
