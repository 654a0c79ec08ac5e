pub mod dubbing;
pub mod jobs;
pub mod shared;
pub mod sound_effects;
pub mod speech;
pub mod streaming;
pub mod voices;
