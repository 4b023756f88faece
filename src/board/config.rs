//! Board configuration.

/// Type identifier the drag payload is published under.
pub const DEFAULT_TRANSFER_TYPE_IDENTIFIER: &str = "com.project-manager";

/// Configuration shared by the board controller and transfer codecs.
///
/// # Examples
///
/// ```
/// use taskboard::board::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert!(!config.require_title);
///
/// let strict = BoardConfig::strict();
/// assert!(strict.require_title);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Type identifier accepted and produced for drag payloads.
    pub transfer_type_identifier: String,
    /// Largest encoded drag payload accepted, in bytes.
    pub max_transfer_payload_bytes: usize,
    /// Whether create and edit requests must carry a non-blank title.
    pub require_title: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            transfer_type_identifier: DEFAULT_TRANSFER_TYPE_IDENTIFIER.to_owned(),
            max_transfer_payload_bytes: 64 * 1024, // 64 KiB
            require_title: false,
        }
    }
}

impl BoardConfig {
    /// Creates a lenient configuration with no title requirement.
    ///
    /// Matches the behaviour of the board when no configuration is given.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Creates a strict configuration that requires titles and accepts
    /// only small payloads.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_transfer_payload_bytes: 8 * 1024, // 8 KiB
            require_title: true,
            ..Self::default()
        }
    }

    /// Overrides the transfer type identifier.
    #[must_use]
    pub fn with_transfer_type_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.transfer_type_identifier = identifier.into();
        self
    }
}
