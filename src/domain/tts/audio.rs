pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";
pub const AUDIO_FILE_NAME: &str = "audio.mp3";

/// A complete MP3 stream held in memory. Produced once per conversion and handed
/// to playback or download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    data: Vec<u8>,
}

impl AudioBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// True when the buffer opens with an ID3 tag or an MPEG audio frame sync
    pub fn looks_like_mp3(&self) -> bool {
        match self.data.as_slice() {
            [b'I', b'D', b'3', ..] => true,
            [0xFF, second, ..] => second & 0xE0 == 0xE0,
            _ => false,
        }
    }
}
