//! Growable Big-Endian Byte Writer
//!
//! Setiap write meng-append encoding big-endian di `write_pos` lalu
//! memajukan offset sebesar lebar encoding-nya. Buffer digandakan
//! (doubling) ketika write berikutnya tidak muat.
//!
//! Wire format:
//! - Integer: fixed-width, big-endian, two's complement untuk signed
//! - String: `[u16 byte length][UTF-8 bytes]`
//! - Raw bytes: verbatim, tanpa prefix

use std::fmt;
use std::io;

use super::config::{WriterConfig, DEFAULT_CAPACITY};
use super::error::EncodingError;

/// Panjang maksimum string yang muat di prefix u16
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// Append-only byte writer dengan buffer yang tumbuh otomatis
///
/// Offset tidak pernah mundur: tidak ada reset, tidak ada shrink.
/// Bytes di luar `[0, len)` tidak pernah di-expose.
pub struct ByteWriter {
    buffer: Box<[u8]>,
    write_pos: usize,
    strict_strings: bool,
    error: Option<EncodingError>,
}

impl ByteWriter {
    /// Membuat writer dengan kapasitas default (1024 bytes)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Membuat writer dengan kapasitas awal tertentu
    ///
    /// Kapasitas 0 diperlakukan sebagai "tidak ditentukan" dan memakai
    /// `DEFAULT_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(&WriterConfig::default().with_initial_capacity(capacity))
    }

    pub fn from_config(config: &WriterConfig) -> Self {
        Self {
            buffer: vec![0u8; config.effective_capacity()].into_boxed_slice(),
            write_pos: 0,
            strict_strings: config.strict_strings,
            error: None,
        }
    }

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) {
        self.put(&[value]);
    }

    #[inline(always)]
    pub fn write_i8(&mut self, value: i8) {
        self.put(&value.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) {
        self.put(&value.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_i16(&mut self, value: i16) {
        self.put(&value.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_u32(&mut self, value: u32) {
        self.put(&value.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_i32(&mut self, value: i32) {
        self.put(&value.to_be_bytes());
    }

    /// Copy bytes apa adanya, tanpa length prefix
    ///
    /// Framing adalah tanggung jawab caller.
    #[inline(always)]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.put(bytes);
    }

    /// Length-prefixed (u16 BE), UTF-8 encoded
    ///
    /// Prefix adalah *byte* length, bukan jumlah karakter. Dalam mode default
    /// string > 65535 bytes tetap ditulis penuh dan prefix-nya wrap modulo
    /// 2^16; ini limitation yang disengaja, bukan error. Dalam strict mode
    /// string seperti itu tidak ditulis sama sekali dan error-nya disimpan
    /// untuk `take_error`.
    pub fn write_string(&mut self, value: &str) {
        if self.strict_strings {
            if let Err(err) = self.try_write_string(value) {
                log::warn!("rejected string in strict mode: {}", err);
                if self.error.is_none() {
                    self.error = Some(err);
                }
            }
            return;
        }

        self.put_string(value.as_bytes());
    }

    /// Seperti `write_string`, tapi selalu checked
    ///
    /// Jika gagal, tidak ada byte yang ditulis.
    pub fn try_write_string(&mut self, value: &str) -> Result<(), EncodingError> {
        let bytes = value.as_bytes();
        if bytes.len() > MAX_STRING_LEN {
            return Err(EncodingError::StringTooLong { len: bytes.len() });
        }

        self.put_string(bytes);
        Ok(())
    }

    /// Ambil (dan clear) error pertama dari strict-mode `write_string`
    pub fn take_error(&mut self) -> Option<EncodingError> {
        self.error.take()
    }

    /// View ke bytes yang sudah ditulis (zero-copy)
    ///
    /// Borrow ini mengunci writer; write berikutnya butuh `&mut self`,
    /// jadi view tidak bisa basi karena growth.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }

    /// Snapshot independen dari bytes yang sudah ditulis
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Consume writer, kembalikan hanya logical content
    pub fn into_vec(self) -> Vec<u8> {
        let mut bytes = self.buffer.into_vec();
        bytes.truncate(self.write_pos);
        bytes
    }

    /// Write offset saat ini
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.write_pos
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.write_pos == 0
    }

    /// Kapasitas buffer yang teralokasi saat ini
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Available space in buffer sebelum growth berikutnya
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.buffer.len() - self.write_pos
    }

    #[inline(always)]
    fn put_string(&mut self, bytes: &[u8]) {
        self.ensure_space(2 + bytes.len());
        self.put_unchecked(&(bytes.len() as u16).to_be_bytes());
        self.put_unchecked(bytes);
    }

    #[inline(always)]
    fn put(&mut self, bytes: &[u8]) {
        self.ensure_space(bytes.len());
        self.put_unchecked(bytes);
    }

    /// Caller harus sudah memanggil `ensure_space`
    #[inline(always)]
    fn put_unchecked(&mut self, bytes: &[u8]) {
        let end = self.write_pos + bytes.len();
        self.buffer[self.write_pos..end].copy_from_slice(bytes);
        self.write_pos = end;
    }

    #[inline(always)]
    fn ensure_space(&mut self, additional: usize) {
        let required = match self.write_pos.checked_add(additional) {
            Some(required) => required,
            None => capacity_overflow(),
        };

        if required > self.buffer.len() {
            self.grow(required);
        }
    }

    /// Realokasi ke `max(capacity * 2, required)`
    ///
    /// Satu kali doubling cukup untuk write kecil; write tunggal yang lebih
    /// besar dari dua kali kapasitas langsung dialokasikan seukuran kebutuhan.
    #[cold]
    fn grow(&mut self, required: usize) {
        let old_capacity = self.buffer.len();
        let new_capacity = old_capacity.saturating_mul(2).max(required);

        let mut buffer = vec![0u8; new_capacity].into_boxed_slice();
        buffer[..self.write_pos].copy_from_slice(&self.buffer[..self.write_pos]);
        self.buffer = buffer;

        log::trace!(
            "byte writer grew from {} to {} bytes ({} written)",
            old_capacity,
            new_capacity,
            self.write_pos
        );
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("byte writer capacity overflow")
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ByteWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteWriter")
            .field("len", &self.write_pos)
            .field("capacity", &self.buffer.len())
            .field("strict_strings", &self.strict_strings)
            .finish()
    }
}

impl io::Write for ByteWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_bytes(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
