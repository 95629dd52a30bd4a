//! Encoding errors
//!
//! Writer default-nya tidak memvalidasi apa pun; error hanya muncul dari
//! jalur yang memang checked (strict string, frame limit).

use thiserror::Error;

/// Error dari operasi encode yang checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// UTF-8 byte length tidak muat di prefix u16
    #[error("string is {len} bytes, length prefix holds at most 65535")]
    StringTooLong { len: usize },

    /// Body frame melebihi `WriterConfig::max_frame_len`
    #[error("frame body is {len} bytes, limit is {max}")]
    FrameTooLarge { len: usize, max: usize },
}
