use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents an unsupported carrier media. For example, a JPEG would not survive the payload
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a message whose bits (delimiter included) exceed the cover's channel slots
    #[error("Capacity Error: The message needs {required} bits but the cover image only offers {available}")]
    TextCapacity { required: usize, available: usize },

    /// Represents a cover image with fewer pixels than the secret image
    #[error("Cover Error: A cover of {cover_pixels} pixels cannot carry a secret of {secret_pixels} pixels")]
    CoverTooSmall {
        cover_pixels: usize,
        secret_pixels: usize,
    },

    /// Represents a slot domain shortfall, the rows below the dimension header cannot hold the secret
    #[error("Slot Error: {requested} embedding slots requested but only {available} are eligible")]
    InsufficientSlots { requested: usize, available: usize },

    /// Represents a character that does not fit the 8 bit per character framing
    #[error("Character {0:?} does not fit into 8 bits")]
    UnsupportedCharacter(char),

    /// Represents secret image dimensions beyond the 16 bit dimension header
    #[error("Secret image dimensions {0}x{1} exceed the 16 bit dimension header")]
    SecretTooLarge(u32, u32),

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or secret image")]
    MissingPayload,

    #[error("API Error: A message and a secret image cannot be hidden in one pass")]
    AmbiguousPayload,
}
