use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub mod atom_renderer;
pub mod page_renderer;
pub mod rss_renderer;

/// Link to a post inside the rendered page: the base URL plus the post title
/// as a percent-encoded fragment.
pub fn post_anchor(base_url: &str, title: &str) -> String {
    format!("{}#{}", base_url, urlencoding::encode(title))
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_anchor() {
        let link = post_anchor("https://example.com/blog", "first");
        assert_eq!(link, "https://example.com/blog#first");
    }

    #[test]
    fn test_post_anchor_escapes_reserved_characters() {
        let title = "notes & plans #2";
        let link = post_anchor("https://example.com/blog", title);
        assert_eq!(link, "https://example.com/blog#notes%20%26%20plans%20%232");

        // Decoding the fragment recovers the original title
        let fragment = link.split_once('#').unwrap().1;
        assert_eq!(urlencoding::decode(fragment).unwrap(), title);
    }
}
