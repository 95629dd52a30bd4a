//! MapSync Wire - outbound encoding untuk map-sync protocol
//!
//! Arsitektur:
//! - `ByteWriter`: growable buffer, big-endian integer, u16-prefixed string
//! - `Packet`: field schema tiap message, ditulis berurutan ke writer
//! - `FrameEncoder`: `[u32 length][id][body]` siap dikirim ke transport
//!
//! Socket I/O bukan bagian crate ini; transport cukup mengambil
//! `as_bytes()` atau `into_vec()`.

pub mod protocol;

pub use protocol::{ByteWriter, EncodingError, FrameEncoder, Handshake, Packet, PacketId, WriterConfig};
