use std::io::Cursor;

use chrono::{TimeZone, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::post::Post;
use crate::view::{post_anchor, push_text};

/* Example
<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0">

<channel>
  <title>Picoblog</title>
  <link>https://example.com/blog</link>
  <description></description>
  <item>
    <title>first</title>
    <link>https://example.com/blog#first</link>
    <pubDate>Tue, 2 Jan 2024 00:00:00 +0000</pubDate>
  </item>
</channel>

</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
}

impl<'a> RssChannel<'a> {
    pub fn render(&self, posts: &[Post]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        // <?xml version="1.0" encoding="UTF-8" ?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <rss version="2.0">
        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;

        // <channel>
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        // <title>Picoblog</title>
        push_text(&mut writer, "title", self.ch_title)?;

        // <link>https://example.com/blog</link>
        push_text(&mut writer, "link", self.ch_link)?;

        // <description> is mandatory in RSS 2.0, even when there is nothing to say
        push_text(&mut writer, "description", "")?;

        for post in posts {
            // <item>
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            // <title>first</title>
            push_text(&mut writer, "title", post.title.as_str())?;

            // <link>https://example.com/blog#first</link>
            let link = post_anchor(self.ch_link, post.title.as_str());
            push_text(&mut writer, "link", link.as_str())?;

            // <pubDate>Tue, 2 Jan 2024 00:00:00 +0000</pubDate>
            let dt = Utc.from_utc_datetime(&post.timestamp);
            push_text(&mut writer, "pubDate", &dt.to_rfc2822())?;

            // </item>
            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        // </channel>
        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        // </rss>
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}
