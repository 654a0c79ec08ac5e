pub mod upload;

pub use upload::AudioUpload;
