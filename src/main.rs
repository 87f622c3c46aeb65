use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;
use spdlog::error;

use picoblog::config::{OutputMode, RenderConfig};
use picoblog::logger::configure_logger;
use picoblog::post::{Post, PostReference};
use picoblog::post_list::{load_posts, read_manifest, sort_newest_first};
use picoblog::view::atom_renderer::AtomFeed;
use picoblog::view::page_renderer::PageRenderer;
use picoblog::view::rss_renderer::RssChannel;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renders a set of markdown posts as a single-page blog or a feed
///
/// Examples:
///   picoblog first.md second.md
///   picoblog --list file.txt
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Title for the blog
    #[arg(long, default_value_t = String::from("Picoblog"))]
    title: String,

    /// List of blog posts, sorted by display order
    #[arg(long)]
    list: Option<PathBuf>,

    /// Render in html, rss or atom mode. Feed modes also need the "url" flag
    #[arg(long, default_value_t = String::from("html"))]
    mode: String,

    /// URL of this blog, used for the links in the feed
    #[arg(long)]
    url: Option<String>,

    /// Post files, rendered newest first. Ignored when a list is given
    files: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = configure_logger() {
        eprintln!("error creating logger sinks: {}", e);
    }

    if args.files.first().map(String::as_str) == Some("version") {
        eprintln!("{}", VERSION);
        return Ok(());
    }

    let posts = collect_posts(args.list.as_deref(), &args.files)?;

    let config = RenderConfig {
        title: args.title,
        mode: args.mode,
        base_url: args.url,
    };

    render(&config, &posts, &mut std::io::stdout().lock())
}

/// Builds the ordered post list. Manifest order is authoritative; positional
/// arguments are sorted newest first. Zero references or zero loadable posts
/// abort the run.
fn collect_posts(list: Option<&Path>, files: &[String]) -> Result<Vec<Post>> {
    let references = match list {
        Some(list) => read_manifest(list)?,
        None => files
            .iter()
            .map(|name| PostReference {
                path: PathBuf::from(name),
                date: None,
            })
            .collect(),
    };

    if references.is_empty() {
        bail!("no post provided");
    }

    let mut posts = load_posts(&references);
    if posts.is_empty() {
        bail!("none of the posts could be loaded");
    }

    if list.is_none() {
        sort_newest_first(&mut posts);
    }

    Ok(posts)
}

fn render(config: &RenderConfig, posts: &[Post], out: &mut impl Write) -> Result<()> {
    match OutputMode::parse(&config.mode) {
        Some(OutputMode::Html) => {
            let page = PageRenderer::new().and_then(|renderer| renderer.render(&config.title, posts));
            match page {
                Ok(page) => out.write_all(page.as_bytes())?,
                Err(e) => error!("could not render page: {}", e),
            }
        }
        Some(OutputMode::Rss) => {
            let url = require_url(config, "rss")?;
            let channel = RssChannel {
                ch_title: &config.title,
                ch_link: url,
            };
            match channel.render(posts) {
                Ok(xml) => out.write_all(&xml)?,
                Err(e) => error!("could not render feed: {}", e),
            }
        }
        Some(OutputMode::Atom) => {
            let url = require_url(config, "atom")?;
            let feed = AtomFeed {
                feed_title: &config.title,
                feed_link: url,
            };
            match feed.render(posts) {
                Ok(xml) => out.write_all(&xml)?,
                Err(e) => error!("could not render feed: {}", e),
            }
        }
        None => error!("unsupported mode {:?}", config.mode),
    }

    Ok(())
}

fn require_url<'a>(config: &'a RenderConfig, mode: &str) -> Result<&'a str> {
    match config.base_url.as_deref() {
        Some(url) if !url.is_empty() => Ok(url),
        _ => bail!("the url flag must be set in {} mode", mode),
    }
}
