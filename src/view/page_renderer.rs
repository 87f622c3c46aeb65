use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::Post;
use crate::text_utils::format_display_date;

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<head>
<title>{{title}}</title>
<style>
body {
	margin: 0 auto;
	padding: 2em 0px;
	max-width: 800px;
	color: #888;
	font-family: -apple-system,system-ui,BlinkMacSystemFont,"Segoe UI",Roboto,"Helvetica Neue",Arial,sans-serif;
	font-size: 14px;
	line-height: 1.4em;
}
h1,h2,h3,h4   {color: #000;}
a {color: #000;}
a:visited {color: #888;}
</style>
</head>
<body>
<h4 style="padding-bottom: 2em">{{title}}</h4>
{{#posts}}
<hr style="margin: 2em 0" />
<div>
<div style="text-align: right">
<h3 id="{{title}}" style="margin-bottom: .5em">{{title}}</h3>
<b>Updated {{date}}</b>
</div>
{{{html}}}
</div>
{{/posts}}
</body>
"##;

#[derive(ramhorns::Content)]
struct BlogPage<'a> {
    title: &'a str,
    posts: Vec<PostItem>,
}

#[derive(ramhorns::Content)]
struct PostItem {
    title: String,
    date: String,
    html: String,
}

pub struct PageRenderer<'a> {
    pub template: Template<'a>,
}

impl PageRenderer<'_> {
    pub fn new() -> io::Result<PageRenderer<'static>> {
        let template = match Template::new(PAGE_TEMPLATE) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("error parsing page template: {}", e)));
            }
        };

        Ok(PageRenderer {
            template,
        })
    }

    /// Renders the whole blog as one page, posts in the given order.
    pub fn render(&self, blog_title: &str, posts: &[Post]) -> io::Result<String> {
        let mut items = vec![];
        for post in posts {
            items.push(PostItem {
                title: post.title.clone(),
                date: format_display_date(&post.timestamp),
                html: post.to_html()?,
            });
        }

        let rendered_page = self.template.render(&BlogPage {
            title: blog_title,
            posts: items,
        });

        Ok(rendered_page)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::{NaiveDate, NaiveDateTime};

    use crate::test_data::{FIRST_POST, SECOND_POST};

    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn render_page() {
        let posts = vec![
            Post::from_parts(Path::new("second.md"), SECOND_POST.to_string(), midnight(2024, 3, 1)),
            Post::from_parts(Path::new("first.md"), FIRST_POST.to_string(), midnight(2024, 1, 2)),
        ];

        let renderer = PageRenderer::new().unwrap();
        let page = renderer.render("My blog", &posts).unwrap();

        assert!(page.contains("<title>My blog</title>"));
        assert!(page.contains(r#"<h4 style="padding-bottom: 2em">My blog</h4>"#));

        // Sections appear in the given order, each anchored by its title
        let second = page.find(r#"<h3 id="second""#).unwrap();
        let first = page.find(r#"<h3 id="first""#).unwrap();
        assert!(second < first);

        // Markdown was converted, dates were formatted
        assert!(page.contains("<h1>Hi</h1>"));
        assert!(page.contains("<p>This is the <strong>first</strong> post.</p>"));
        assert!(page.contains("Updated March 1st, 2024"));
        assert!(page.contains("Updated January 2nd, 2024"));
    }

    #[test]
    fn render_page_without_posts() {
        let renderer = PageRenderer::new().unwrap();
        let page = renderer.render("Picoblog", &[]).unwrap();
        assert!(page.contains("<title>Picoblog</title>"));
        assert!(!page.contains("<h3"));
    }
}
