pub mod audio;
pub mod tone;

pub use audio::AudioOutput;
pub use tone::Tone;
