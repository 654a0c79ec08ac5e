pub mod dubbing_repository;
pub mod elevenlabs_dubbing_repository;
pub mod elevenlabs_sound_effect_repository;
pub mod elevenlabs_speech_repository;
pub mod elevenlabs_voice_repository;
pub mod sound_effect_repository;
pub mod speech_repository;
pub mod voice_repository;

pub use dubbing_repository::DubbingRepository;
pub use elevenlabs_dubbing_repository::ElevenLabsDubbingRepository;
pub use elevenlabs_sound_effect_repository::ElevenLabsSoundEffectRepository;
pub use elevenlabs_speech_repository::ElevenLabsSpeechRepository;
pub use elevenlabs_voice_repository::ElevenLabsVoiceRepository;
pub use sound_effect_repository::SoundEffectRepository;
pub use speech_repository::SpeechRepository;
pub use voice_repository::VoiceCatalogRepository;
