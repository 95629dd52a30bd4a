//! Outbound packets
//!
//! Packet hanya tahu cara menulis field-nya ke `ByteWriter`, urut sesuai
//! schema. Framing ada di `frame.rs`.

use std::fmt;

use super::writer::ByteWriter;

/// Packet id di wire (1 byte)
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PacketId(pub u8);

impl PacketId {
    pub const HANDSHAKE: PacketId = PacketId(1);
}

impl From<PacketId> for u8 {
    #[inline(always)]
    fn from(id: PacketId) -> u8 {
        id.0
    }
}

/// Packet yang bisa di-encode ke wire
pub trait Packet {
    const ID: PacketId;

    /// Tulis body packet (tanpa id, tanpa length)
    fn write(&self, out: &mut ByteWriter);
}

/// Handshake dari client: versi mod, identitas player, dan server tujuan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    pub mod_version: String,
    pub username: String,
    pub game_address: String,
    pub world: String,
}

impl Handshake {
    pub fn new(
        mod_version: impl Into<String>,
        username: impl Into<String>,
        game_address: impl Into<String>,
        world: impl Into<String>,
    ) -> Self {
        Self {
            mod_version: mod_version.into(),
            username: username.into(),
            game_address: game_address.into(),
            world: world.into(),
        }
    }
}

impl Packet for Handshake {
    const ID: PacketId = PacketId::HANDSHAKE;

    fn write(&self, out: &mut ByteWriter) {
        out.write_string(&self.mod_version);
        out.write_string(&self.username);
        out.write_string(&self.game_address);
        out.write_string(&self.world);
    }
}

impl fmt::Display for Handshake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Handshake{{version='{}' username='{}' gameAddress='{}'}}",
            self.mod_version, self.username, self.game_address
        )
    }
}
