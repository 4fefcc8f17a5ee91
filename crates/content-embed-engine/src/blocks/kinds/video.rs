use regex::Regex;
use std::sync::OnceLock;

use crate::blocks::BlockDefinition;
use crate::models::{BlockInput, DisplayNode, Properties, PropertyValue};

/// Embedded YouTube video, validated by extracting the video id from a link.
///
/// Reads the raw input because video ids are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoBlock {
    aliases: Vec<String>,
}

impl VideoBlock {
    pub const KIND: &'static str = "video";

    pub fn new() -> Self {
        Self {
            aliases: ["yt", "youtube", "youtu.be"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Canonical short link for a video id
    pub fn canonical_url(video_id: &str) -> String {
        format!("https://youtu.be/{video_id}")
    }

    /// Find the first YouTube link in `text`, returning the video id and the
    /// byte range of the whole link
    fn find_link(text: &str) -> Option<(&str, std::ops::Range<usize>)> {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        let link_regex = LINK_REGEX.get_or_init(|| {
            Regex::new(
                r"(?P<link>(?:https?://)?(?:www\.|m\.)?(?i:youtube\.com/(?:watch\?(?:\S*?&)?v=|embed/|shorts/)|youtu\.be/)(?P<id>[A-Za-z0-9_-]{11})(?:[?&#/]\S*)?)(?:\s|$)",
            )
            .expect("Invalid YouTube link regex")
        });

        // Ids are exactly 11 characters; a longer run is not a link to any video
        let captures = link_regex.captures(text)?;
        let link = captures.name("link")?;
        let id = captures.name("id")?;
        Some((id.as_str(), link.range()))
    }

    /// Words around the link, minus bare alias keywords
    fn caption(&self, raw: &str, link: std::ops::Range<usize>) -> Option<String> {
        let remainder = format!("{} {}", &raw[..link.start], &raw[link.end..]);
        let words: Vec<&str> = remainder
            .split_whitespace()
            .filter(|word| !self.aliases.iter().any(|alias| word.eq_ignore_ascii_case(alias)))
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }
}

impl Default for VideoBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for VideoBlock {
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn validate(&self, input: &BlockInput) -> Result<Properties, String> {
        let raw = input.raw();
        let (video_id, link) = Self::find_link(raw)
            .ok_or_else(|| format!("no YouTube link found in \"{}\"", raw.trim()))?;

        let mut properties = Properties::new();
        properties.insert("videoId".to_string(), PropertyValue::from(video_id));
        properties.insert(
            "url".to_string(),
            PropertyValue::Text(Self::canonical_url(video_id)),
        );
        if let Some(caption) = self.caption(raw, link) {
            properties.insert("caption".to_string(), PropertyValue::Text(caption));
        }
        Ok(properties)
    }

    fn fallback_children(&self, input: &BlockInput) -> Vec<DisplayNode> {
        match Self::find_link(input.raw()) {
            Some((video_id, _)) => vec![DisplayNode::text(format!(
                "Watch on YouTube: {}",
                Self::canonical_url(video_id)
            ))],
            None => vec![DisplayNode::text(input.raw().trim())],
        }
    }
}
