//! Platform-independent half of voice input and read-aloud.
//!
//! Actual capture and synthesis live behind [`SpeechInput`] and
//! [`SpeechOutput`]; this module decides language, voice and how recognition
//! results are delivered.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LANGUAGE: &str = "zh-TW";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech {0} is not supported on this platform")]
    Unsupported(&'static str),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechOptions {
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

impl SpeechOptions {
    /// Empty language and non-positive rate or pitch fall back to defaults.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        Self {
            language: if self.language.is_empty() {
                defaults.language
            } else {
                self.language.clone()
            },
            rate: if self.rate > 0.0 { self.rate } else { defaults.rate },
            pitch: if self.pitch > 0.0 { self.pitch } else { defaults.pitch },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

/// First voice whose language tag mentions Chinese.
pub fn pick_voice(voices: &[Voice]) -> Option<&Voice> {
    voices
        .iter()
        .find(|v| v.lang.contains("zh") || v.lang.contains("cmn"))
}

/// What a synthesizer is asked to say.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub options: SpeechOptions,
    pub voice: Option<Voice>,
}

impl Utterance {
    pub fn new(text: impl Into<String>, options: &SpeechOptions, voices: &[Voice]) -> Self {
        Self {
            text: text.into(),
            options: options.normalized(),
            voice: pick_voice(voices).cloned(),
        }
    }
}

/// One entry of a recognition event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechResult {
    pub transcript: String,
    pub is_final: bool,
}

impl SpeechResult {
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }

    pub fn final_(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }
}

/// Walks `results[from..]`. Interim transcripts are handed over as they come;
/// final ones are joined and handed over once, after the interim ones.
pub fn deliver_results<F>(results: &[SpeechResult], from: usize, mut on_result: F)
where
    F: FnMut(&str),
{
    let mut finished = String::new();

    for result in results.iter().skip(from) {
        if result.is_final {
            finished.push_str(&result.transcript);
        } else {
            on_result(&result.transcript);
        }
    }

    if !finished.is_empty() {
        on_result(&finished);
    }
}

pub type ResultCallback = Box<dyn FnMut(String) + Send>;
pub type EndCallback = Box<dyn FnOnce() + Send>;

/// Continuous recognition with interim results.
pub trait SpeechInput: Send {
    /// `on_end` runs exactly once, on normal end or on error.
    fn start(&mut self, options: &SpeechOptions, on_result: ResultCallback, on_end: EndCallback);

    fn stop(&mut self);
}

pub trait SpeechOutput: Send {
    /// Cancels anything still being spoken, then speaks `utterance`.
    fn speak(&mut self, utterance: Utterance, on_end: Option<EndCallback>) -> Result<(), SpeechError>;

    fn cancel(&mut self);
}

/// Adapter for hosts without speech support.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unsupported;

impl SpeechInput for Unsupported {
    fn start(&mut self, _options: &SpeechOptions, _on_result: ResultCallback, on_end: EndCallback) {
        tracing::warn!("Speech recognition is not available");
        on_end();
    }

    fn stop(&mut self) {}
}

impl SpeechOutput for Unsupported {
    fn speak(&mut self, _utterance: Utterance, _on_end: Option<EndCallback>) -> Result<(), SpeechError> {
        tracing::warn!("Speech synthesis is not available");
        Err(SpeechError::Unsupported("synthesis"))
    }

    fn cancel(&mut self) {}
}
