pub mod responder;
pub mod speech;
pub mod transcript;

pub use responder::{ChatReply, Intent, classify, is_easy, respond};
pub use speech::{
    SpeechError, SpeechInput, SpeechOptions, SpeechOutput, SpeechResult, Unsupported, Utterance,
    Voice, deliver_results, pick_voice,
};
pub use transcript::{MAX_MESSAGES, Message, Sender, Transcript, WELCOME};
