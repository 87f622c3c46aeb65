use std::io::Cursor;

use chrono::{NaiveDateTime, TimeZone, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::post::Post;
use crate::view::{post_anchor, push_text};

/* Example
<?xml version="1.0" encoding="UTF-8" ?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Picoblog</title>
  <id>https://example.com/blog</id>
  <updated>2024-01-02T05:06:07+00:00</updated>
  <link href="https://example.com/blog"/>
  <entry>
    <title>first</title>
    <id>https://example.com/blog#first</id>
    <updated>2024-01-02T05:06:07+00:00</updated>
    <link href="https://example.com/blog#first"/>
  </entry>
</feed>
*/

pub struct AtomFeed<'a> {
    pub feed_title: &'a str,
    pub feed_link: &'a str,
}

impl<'a> AtomFeed<'a> {
    pub fn render(&self, posts: &[Post]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        // <?xml version="1.0" encoding="UTF-8" ?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <feed xmlns="http://www.w3.org/2005/Atom">
        let mut feed = BytesStart::new("feed");
        feed.push_attribute(("xmlns", "http://www.w3.org/2005/Atom"));
        writer.write_event(Event::Start(feed))?;

        // <title>Picoblog</title>
        push_text(&mut writer, "title", self.feed_title)?;

        // <id>https://example.com/blog</id>
        push_text(&mut writer, "id", self.feed_link)?;

        // <updated> carries the newest post timestamp
        let updated = match posts.iter().map(|p| p.timestamp).max() {
            Some(timestamp) => timestamp,
            None => Utc::now().naive_utc(),
        };
        push_text(&mut writer, "updated", &to_rfc3339(&updated))?;

        // <link href="https://example.com/blog"/>
        let mut link = BytesStart::new("link");
        link.push_attribute(("href", self.feed_link));
        writer.write_event(Event::Empty(link))?;

        for post in posts {
            // <entry>
            writer.write_event(Event::Start(BytesStart::new("entry")))?;

            // <title>first</title>
            push_text(&mut writer, "title", post.title.as_str())?;

            // <id>https://example.com/blog#first</id>
            let anchor = post_anchor(self.feed_link, post.title.as_str());
            push_text(&mut writer, "id", anchor.as_str())?;

            // <updated>2024-01-02T05:06:07+00:00</updated>
            push_text(&mut writer, "updated", &to_rfc3339(&post.timestamp))?;

            // <link href="https://example.com/blog#first"/>
            let mut link = BytesStart::new("link");
            link.push_attribute(("href", anchor.as_str()));
            writer.write_event(Event::Empty(link))?;

            // </entry>
            writer.write_event(Event::End(BytesEnd::new("entry")))?;
        }

        // </feed>
        writer.write_event(Event::End(BytesEnd::new("feed")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn to_rfc3339(timestamp: &NaiveDateTime) -> String {
    Utc.from_utc_datetime(timestamp).to_rfc3339()
}
