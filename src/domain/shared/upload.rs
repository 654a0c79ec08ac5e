/// An audio file received from the caller, ready to be forwarded to the
/// voice service as a multipart part.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

impl AudioUpload {
    pub fn new(data: Vec<u8>, file_name: Option<String>, content_type: Option<String>) -> Self {
        Self {
            data,
            file_name: file_name.unwrap_or_else(|| "audio.wav".to_string()),
            content_type: content_type.unwrap_or_else(|| "audio/wav".to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
