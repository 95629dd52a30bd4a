//! Writer configuration

/// Kapasitas awal jika tidak ditentukan (atau 0)
pub const DEFAULT_CAPACITY: usize = 1024;

/// Batas default body frame: 16MB
pub const DEFAULT_MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

/// Konfigurasi untuk `ByteWriter` dan `FrameEncoder`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Kapasitas buffer awal dalam bytes. 0 berarti `DEFAULT_CAPACITY`.
    pub initial_capacity: usize,
    /// Tolak string yang UTF-8 length-nya > 65535 di `write_string`
    pub strict_strings: bool,
    /// Ukuran maksimum body satu frame (packet id + payload)
    pub max_frame_len: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            strict_strings: false,
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
        }
    }
}

impl WriterConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_strict_strings(mut self, strict: bool) -> Self {
        self.strict_strings = strict;
        self
    }

    pub fn with_max_frame_len(mut self, max: usize) -> Self {
        self.max_frame_len = max;
        self
    }

    /// Kapasitas yang benar-benar dialokasikan
    #[inline(always)]
    pub(crate) fn effective_capacity(&self) -> usize {
        if self.initial_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.initial_capacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WriterConfig::default();
        assert_eq!(config.initial_capacity, 1024);
        assert!(!config.strict_strings);
        assert_eq!(config.max_frame_len, 16 * 1024 * 1024);
    }

    #[test]
    fn test_zero_capacity_falls_back() {
        let config = WriterConfig::default().with_initial_capacity(0);
        assert_eq!(config.effective_capacity(), DEFAULT_CAPACITY);

        let config = config.with_initial_capacity(4);
        assert_eq!(config.effective_capacity(), 4);
    }
}
