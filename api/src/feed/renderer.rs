//! Feed renderer
//!
//! Serializes release feeds to RSS 2.0, Atom 1.0 and JSON Feed.

use atom_syndication::{Content, Entry, Person, Text};
use rss::{Channel, Guid, Item};
use serde::Serialize;

use crate::app::{ReleaseFeed, ReleaseItem};
use crate::error::FeedError;

const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1";

/// Output format served by one route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Rss,
    Atom,
    JsonFeed,
}

impl FeedFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            FeedFormat::Rss => "application/rss+xml",
            FeedFormat::Atom => "application/atom+xml",
            FeedFormat::JsonFeed => "application/json",
        }
    }

    /// Only Atom entries carry the group id as author
    pub fn includes_author(self) -> bool {
        matches!(self, FeedFormat::Atom)
    }

    pub fn render(self, feed: &ReleaseFeed) -> Result<String, FeedError> {
        match self {
            FeedFormat::Rss => render_rss(feed),
            FeedFormat::Atom => render_atom(feed),
            FeedFormat::JsonFeed => render_json_feed(feed),
        }
    }
}

impl std::fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedFormat::Rss => write!(f, "rss"),
            FeedFormat::Atom => write!(f, "atom"),
            FeedFormat::JsonFeed => write!(f, "json"),
        }
    }
}

// ===== RSS =====

pub fn render_rss(feed: &ReleaseFeed) -> Result<String, FeedError> {
    let mut channel = Channel::default();
    channel.set_title(feed.title.as_str());
    channel.set_link(feed.link.as_str());
    channel.set_description(feed.description.as_str());
    channel.set_last_build_date(feed.updated.to_rfc2822());
    channel.set_items(feed.items.iter().map(rss_item).collect::<Vec<_>>());

    let buf = channel.write_to(Vec::new())?;
    Ok(String::from_utf8(buf)?)
}

fn rss_item(item: &ReleaseItem) -> Item {
    let mut guid = Guid::default();
    guid.set_value(item.id.as_str());
    guid.set_permalink(false);

    let mut rss_item = Item::default();
    rss_item.set_guid(guid);
    rss_item.set_title(item.title.clone());
    rss_item.set_link(item.link.clone());
    rss_item.set_description(item.description.clone());
    rss_item.set_pub_date(item.published.to_rfc2822());
    if let Some(author) = &item.author {
        rss_item.set_author(author.clone());
    }
    rss_item
}

// ===== Atom =====

pub fn render_atom(feed: &ReleaseFeed) -> Result<String, FeedError> {
    let mut link = atom_syndication::Link::default();
    link.set_href(feed.link.as_str());
    link.set_rel("self");

    let mut atom = atom_syndication::Feed::default();
    atom.set_id(feed.link.as_str());
    atom.set_title(Text::plain(feed.title.as_str()));
    atom.set_subtitle(Text::plain(feed.description.as_str()));
    atom.set_updated(feed.updated.fixed_offset());
    atom.set_links(vec![link]);
    atom.set_entries(feed.items.iter().map(atom_entry).collect::<Vec<_>>());

    let buf = atom.write_to(Vec::new())?;
    Ok(String::from_utf8(buf)?)
}

fn atom_entry(item: &ReleaseItem) -> Entry {
    let mut link = atom_syndication::Link::default();
    link.set_href(item.link.as_str());

    let mut content = Content::default();
    content.set_content_type("text".to_string());
    content.set_value(item.description.clone());

    let mut entry = Entry::default();
    entry.set_id(item.id.as_str());
    entry.set_title(Text::plain(item.title.as_str()));
    entry.set_links(vec![link]);
    entry.set_summary(Text::plain(item.description.as_str()));
    entry.set_content(content);
    entry.set_published(item.published.fixed_offset());
    entry.set_updated(item.published.fixed_offset());

    if let Some(author) = &item.author {
        let mut person = Person::default();
        person.set_name(author.as_str());
        entry.set_authors(vec![person]);
    }
    entry
}

// ===== JSON Feed =====

#[derive(Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    description: &'a str,
    items: Vec<JsonFeedItem<'a>>,
}

#[derive(Serialize)]
struct JsonFeedItem<'a> {
    id: &'a str,
    url: &'a str,
    title: &'a str,
    summary: &'a str,
    content_text: &'a str,
    date_published: String,
    date_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<JsonFeedAuthor<'a>>,
}

#[derive(Serialize)]
struct JsonFeedAuthor<'a> {
    name: &'a str,
}

impl<'a> From<&'a ReleaseItem> for JsonFeedItem<'a> {
    fn from(item: &'a ReleaseItem) -> Self {
        let date = item.published.to_rfc3339();
        Self {
            id: &item.id,
            url: &item.link,
            title: &item.title,
            summary: &item.description,
            content_text: &item.description,
            date_published: date.clone(),
            date_modified: date,
            author: item
                .author
                .as_deref()
                .map(|name| JsonFeedAuthor { name }),
        }
    }
}

pub fn render_json_feed(feed: &ReleaseFeed) -> Result<String, FeedError> {
    let json = JsonFeed {
        version: JSON_FEED_VERSION,
        title: &feed.title,
        home_page_url: &feed.link,
        description: &feed.description,
        items: feed.items.iter().map(JsonFeedItem::from).collect(),
    };

    Ok(serde_json::to_string_pretty(&json)?)
}
