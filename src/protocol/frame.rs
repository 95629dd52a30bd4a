//! Outbound Frame Encoder
//!
//! Layout satu frame:
//! ┌──────────────────────┬──────────────┬──────────────────────┐
//! │ body length (u32 BE) │ packet id u8 │ packet body          │
//! └──────────────────────┴──────────────┴──────────────────────┘
//!
//! Body length menghitung packet id + packet body. Frame ditulis
//! berurutan ke satu `ByteWriter` dan siap diserahkan ke transport.

use super::config::WriterConfig;
use super::error::EncodingError;
use super::packet::Packet;
use super::writer::ByteWriter;

/// Ukuran prefix length frame
pub const FRAME_LENGTH_SIZE: usize = 4;

/// Encoder yang meng-append frame ke buffer output
#[derive(Debug)]
pub struct FrameEncoder {
    out: ByteWriter,
    config: WriterConfig,
    frames: usize,
}

impl FrameEncoder {
    pub fn new() -> Self {
        Self::from_config(WriterConfig::default())
    }

    pub fn from_config(config: WriterConfig) -> Self {
        Self {
            out: ByteWriter::from_config(&config),
            config,
            frames: 0,
        }
    }

    /// Encode satu packet sebagai frame
    ///
    /// Returns slice ke frame yang baru ditulis. Jika gagal, output tidak
    /// berubah.
    pub fn encode<P: Packet>(&mut self, packet: &P) -> Result<&[u8], EncodingError> {
        // Body di-encode dulu ke scratch karena length harus ditulis duluan
        let mut body = ByteWriter::from_config(&self.config.with_initial_capacity(0));
        packet.write(&mut body);
        if let Some(err) = body.take_error() {
            return Err(err);
        }

        let len = 1 + body.len();
        let max = self.config.max_frame_len.min(u32::MAX as usize);
        if len > max {
            log::warn!(
                "dropping frame for packet {}: {} bytes over limit {}",
                u8::from(P::ID),
                len,
                max
            );
            return Err(EncodingError::FrameTooLarge { len, max });
        }

        let start = self.out.len();
        self.out.write_u32(len as u32);
        self.out.write_u8(P::ID.into());
        self.out.write_bytes(body.as_bytes());
        self.frames += 1;

        Ok(&self.out.as_bytes()[start..])
    }

    /// Semua frame yang sudah di-encode
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.out.as_bytes()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.out.into_vec()
    }

    /// Jumlah frame yang sudah ditulis
    #[inline(always)]
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}
