pub mod config;
pub mod elevenlabs;
pub mod http;
pub mod repositories;
