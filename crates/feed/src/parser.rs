use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::models::FeedEntry;
use crate::FeedError;

/// Parse an RSS 2.0, RSS 1.0 (RDF) or Atom document from raw XML bytes.
///
/// All three dialects describe entries with an `item`/`entry` element carrying
/// a `title` and a `link`; the link is element text in RSS and an `href`
/// attribute in Atom. Entries without a link are dropped. Document order is
/// preserved.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current: Option<EntryBuilder> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = local_name(&e);
                current_element = name.clone();

                if name == "item" || name == "entry" {
                    current = Some(EntryBuilder::default());
                }

                if name == "link" {
                    if let Some(ref mut entry) = current {
                        capture_link_href(&e, entry);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                let name = local_name(&e);

                // Atom links are usually self-closing: <link href="..." rel="alternate"/>
                if name == "link" {
                    if let Some(ref mut entry) = current {
                        capture_link_href(&e, entry);
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name =
                    String::from_utf8_lossy(e.name().local_name().as_ref()).to_string();

                if name == "item" || name == "entry" {
                    if let Some(builder) = current.take() {
                        if let Some(entry) = builder.build() {
                            entries.push(entry);
                        }
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current {
                    let text = e.unescape().unwrap_or_default().to_string();
                    capture_text(entry, &current_element, text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(ref mut entry) = current {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    capture_text(entry, &current_element, text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

#[derive(Default)]
struct EntryBuilder {
    title: Option<String>,
    link: Option<String>,
}

impl EntryBuilder {
    fn build(self) -> Option<FeedEntry> {
        Some(FeedEntry {
            title: self.title.unwrap_or_default(),
            link: self.link?,
        })
    }
}

/// Element name without its namespace prefix (RSS 1.0 wraps items in rdf:RDF)
fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().local_name().as_ref()).to_string()
}

fn capture_text(entry: &mut EntryBuilder, element: &str, text: String) {
    if text.is_empty() {
        return;
    }
    if element == "title" {
        entry.title = Some(text);
    } else if element == "link" && entry.link.is_none() {
        entry.link = Some(text);
    }
}

/// Capture an Atom-style link from the element's attributes.
///
/// Only the alternate link counts; `rel="self"`, `rel="enclosure"` and
/// friends point elsewhere.
fn capture_link_href(e: &BytesStart<'_>, entry: &mut EntryBuilder) {
    let mut href = None;
    let mut rel = None;

    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match key.as_str() {
            "href" => href = Some(value),
            "rel" => rel = Some(value),
            _ => {}
        }
    }

    let alternate = rel.as_deref().map_or(true, |r| r == "alternate");
    if alternate && entry.link.is_none() {
        if let Some(href) = href {
            entry.link = Some(href);
        }
    }
}
