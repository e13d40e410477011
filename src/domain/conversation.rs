// ============================================================
// Layer 3 — Conversation Types
// ============================================================
// The structure the video/text processor consumes. Field names
// and nesting are a fixed contract, so the serde attributes
// below define the exact JSON emitted:
//
//   {
//     "messages": [
//       {"role": "user", "content": [
//         {"type": "video", "video": "v.mp4", "video_start": 35.0,
//          "video_end": 55.0, "min_pixels": 28224,
//          "max_pixels": 50176, "max_frames": 64, "fps": 2.0},
//         {"type": "text", "text": "You are acting as the checker now. ..."}
//       ]},
//       {"role": "assistant", "content": "Yes."}
//     ],
//     "ss": 0.25,
//     "se": 0.75
//   }

use serde::{Deserialize, Serialize};

/// Who speaks a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Frame sampling settings attached to every video part.
/// Passed through to the processor untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub min_pixels: u32,
    pub max_pixels: u32,
    pub max_frames: u32,
    pub fps:        f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            min_pixels: 36 * 28 * 28,
            max_pixels: 64 * 28 * 28,
            max_frames: 64,
            fps:        2.0,
        }
    }
}

/// A clip of a video file between two timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPart {
    pub video:       String,
    pub video_start: f64,
    pub video_end:   f64,

    #[serde(flatten)]
    pub sampling: SamplingConfig,
}

/// One piece of a multi-part user turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Video(VideoPart),
    Text { text: String },
}

/// Turn content: a list of parts for the user, a bare string for
/// the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Parts(Vec<ContentPart>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role:    Role,
    pub content: MessageContent,
}

impl Message {
    pub fn user(parts: Vec<ContentPart>) -> Self {
        Self { role: Role::User, content: MessageContent::Parts(parts) }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: MessageContent::Text(text.into()) }
    }
}

/// A complete checker example.
///
/// `ss` and `se` locate the candidate span inside the cropped clip as
/// fractions of the clip length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub messages: Vec<Message>,
    pub ss:       f64,
    pub se:       f64,
}

impl TrainingExample {
    /// Text of the final assistant turn, if there is one
    pub fn answer(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match (&m.role, &m.content) {
            (Role::Assistant, MessageContent::Text(t)) => Some(t.as_str()),
            _ => None,
        })
    }
}
