//! Transcript retrieval from YouTube watch pages.
//!
//! The watch page embeds the player response, which lists the caption tracks
//! available for the video. The chosen track is downloaded as timed-text XML.

use async_trait::async_trait;
use lazy_static::lazy_static;
use nl_core::{TranscriptError, TranscriptSegment, TranscriptSource};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::http::HttpClient;

const WATCH_URL: &str = "https://www.youtube.com/watch";

lazy_static! {
    static ref TEXT_ELEMENT: Regex =
        Regex::new(r#"(?s)<text\b([^>]*)>(.*?)</text>"#).unwrap();
    static ref ATTRIBUTE: Regex = Regex::new(r#"(\w+)="([^"]*)""#).unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "languageCode")]
    pub language_code: String,
    /// `asr` for automatically generated tracks.
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    fn is_english(&self) -> bool {
        self.language_code == "en" || self.language_code.starts_with("en-")
    }
}

#[derive(Debug, Clone)]
pub struct YoutubeTranscriptSource {
    http: HttpClient,
}

impl YoutubeTranscriptSource {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    async fn get_text(&self, url: &str, query: &[(String, String)]) -> Result<String, TranscriptError> {
        let response = self
            .http
            .get_with_query(url, query)
            .await
            .map_err(|e| TranscriptError::Other(e.to_string()))?;
        if !response.status().is_success() {
            return Err(TranscriptError::Other(format!(
                "HTTP {} from {}",
                response.status().as_u16(),
                url
            )));
        }
        response
            .text()
            .await
            .map_err(|e| TranscriptError::Other(e.to_string()))
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let query = vec![
            ("v".to_string(), video_id.to_string()),
            ("hl".to_string(), "en".to_string()),
        ];
        let page = self.get_text(WATCH_URL, &query).await?;
        let tracks = parse_caption_tracks(&page)?;
        let track = select_english_track(&tracks)?;
        debug!(
            "Using {} caption track {} for {}",
            if track.is_generated() { "generated" } else { "manual" },
            track.language_code,
            video_id
        );

        let url = track.base_url.replace("&fmt=srv3", "");
        let xml = self.get_text(&url, &[]).await?;
        Ok(parse_timed_text(&xml))
    }
}

/// Reads the caption track list out of a watch page.
pub fn parse_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let Some((_, after)) = page.split_once("\"captions\":") else {
        if !page.contains("\"playabilityStatus\":") {
            return Err(TranscriptError::VideoUnavailable);
        }
        return Err(TranscriptError::Disabled);
    };

    let json = after
        .split(",\"videoDetails")
        .next()
        .unwrap_or_default()
        .replace('\n', "");
    let captions: Value = serde_json::from_str(&json)
        .map_err(|e| TranscriptError::Other(format!("Failed to parse caption data: {}", e)))?;

    let tracks = captions
        .get("playerCaptionsTracklistRenderer")
        .and_then(|renderer| renderer.get("captionTracks"))
        .ok_or(TranscriptError::Disabled)?;

    serde_json::from_value(tracks.clone())
        .map_err(|e| TranscriptError::Other(format!("Failed to parse caption tracks: {}", e)))
}

/// Manually created English tracks are preferred over generated ones.
pub fn select_english_track(tracks: &[CaptionTrack]) -> Result<&CaptionTrack, TranscriptError> {
    tracks
        .iter()
        .filter(|t| t.is_english())
        .min_by_key(|t| (t.is_generated(), t.language_code != "en"))
        .ok_or(TranscriptError::NotFound)
}

/// Segments of a timed-text document, in document order. Empty segments are
/// dropped.
pub fn parse_timed_text(xml: &str) -> Vec<TranscriptSegment> {
    TEXT_ELEMENT
        .captures_iter(xml)
        .filter_map(|caps| {
            let attributes = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let raw = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

            let mut start = 0.0;
            let mut duration = 0.0;
            for attr in ATTRIBUTE.captures_iter(attributes) {
                let value = attr[2].parse::<f64>().unwrap_or(0.0);
                match &attr[1] {
                    "start" => start = value,
                    "dur" => duration = value,
                    _ => {}
                }
            }

            let text = TAG
                .replace_all(&decode_entities(&decode_entities(raw)), "")
                .trim()
                .to_string();
            if text.is_empty() {
                None
            } else {
                Some(TranscriptSegment { text, start, duration })
            }
        })
        .collect()
}

/// Decodes one level of character references. Timed text is entity-encoded
/// twice, so callers apply this twice.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(entity)
            };
            decoded.map(String::from).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        _ => return None,
    })
}
