use std::fmt;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::{Level, LevelFilter};

// DECODING //

/// Width and height of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Result of one decode attempt. Owns the pixel data until dropped.
#[derive(Debug)]
pub enum ImageHandle {
    Loaded(DynamicImage),
    Invalid(String),
}

impl ImageHandle {
    pub fn is_valid(&self) -> bool {
        matches!(self, ImageHandle::Loaded(_))
    }

    /// Dimensions of the image, or `None` if the decode failed.
    pub fn dimensions(&self) -> Option<Dimensions> {
        match self {
            ImageHandle::Loaded(image) => Some(Dimensions {
                width: image.width(),
                height: image.height(),
            }),
            ImageHandle::Invalid(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            ImageHandle::Loaded(_) => None,
            ImageHandle::Invalid(reason) => Some(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecSettings {
    /// Most detailed level of diagnostics the codec emits.
    pub verbosity: LevelFilter,
}

impl Default for CodecSettings {
    fn default() -> Self {
        CodecSettings {
            verbosity: LevelFilter::Debug,
        }
    }
}

/// Turns a path into an `ImageHandle`.
///
/// Implementations must not panic or fail: a missing, unreadable or corrupt
/// file yields `ImageHandle::Invalid`.
pub trait Codec {
    fn decode(&self, path: &Path) -> ImageHandle;
}

/// `Codec` backed by the `image` crate. The format is sniffed from the
/// file content, not from its extension.
#[derive(Debug, Clone, Default)]
pub struct ImageCodec {
    settings: CodecSettings,
}

impl ImageCodec {
    pub fn new(settings: CodecSettings) -> Self {
        ImageCodec { settings }
    }

    pub fn settings(&self) -> CodecSettings {
        self.settings
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if level <= self.settings.verbosity {
            log::log!(target: "imgprobe::codec", level, "{}", args);
        }
    }

    fn invalid(&self, path: &Path, reason: String) -> ImageHandle {
        self.emit(
            Level::Debug,
            format_args!("could not decode {}: {}", path.display(), reason),
        );
        ImageHandle::Invalid(reason)
    }
}

impl Codec for ImageCodec {
    fn decode(&self, path: &Path) -> ImageHandle {
        self.emit(Level::Trace, format_args!("opening {}", path.display()));

        let reader = match ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
            Ok(reader) => reader,
            Err(e) => return self.invalid(path, e.to_string()),
        };

        match reader.format() {
            Some(format) => self.emit(Level::Debug, format_args!("format guessed: {:?}", format)),
            None => return self.invalid(path, "unrecognized image format".to_string()),
        }

        let image = match reader.decode() {
            Ok(image) => image,
            Err(e) => return self.invalid(path, e.to_string()),
        };

        if image.width() == 0 || image.height() == 0 {
            return self.invalid(path, "image has no pixel data".to_string());
        }

        self.emit(
            Level::Debug,
            format_args!(
                "decoded {}x{} {:?}",
                image.width(),
                image.height(),
                image.color()
            ),
        );
        ImageHandle::Loaded(image)
    }
}
