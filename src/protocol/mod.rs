//! Protocol Layer: Outbound Binary Encoding
//!
//! Prinsip desain:
//! - Big-endian, fixed-width: urutan byte deterministik di semua platform
//! - Append-only: offset hanya maju, buffer hanya tumbuh
//! - Borrow-checked view: bytes yang di-expose tidak bisa basi karena growth

mod config;
mod error;
mod frame;
mod packet;
mod writer;

pub use config::{WriterConfig, DEFAULT_CAPACITY, DEFAULT_MAX_FRAME_LEN};
pub use error::EncodingError;
pub use frame::{FrameEncoder, FRAME_LENGTH_SIZE};
pub use packet::{Handshake, Packet, PacketId};
pub use writer::{ByteWriter, MAX_STRING_LEN};
