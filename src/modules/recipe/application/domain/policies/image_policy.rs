use image::ImageFormat;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejection {
    #[error("No image was submitted")]
    Empty,

    #[error("Image exceeds the {0} byte limit")]
    TooLarge(usize),

    #[error("Upload a valid image. The file you uploaded was either not an image or a corrupted image.")]
    NotAnImage,

    #[error("Image format {0} is not accepted")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone)]
pub struct ImagePolicy {
    pub max_file_size_bytes: usize,
    pub allowed_formats: &'static [ImageFormat],
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_formats: Self::DEFAULT_ALLOWED_FORMATS,
        }
    }
}

impl ImagePolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;
    pub const DEFAULT_ALLOWED_FORMATS: &'static [ImageFormat] = &[
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::WebP,
        ImageFormat::Gif,
    ];

    /// Reads `IMAGE_MAX_UPLOAD_BYTES`, keeping the default when unset or unparsable.
    pub fn from_env() -> Self {
        let max_file_size_bytes = std::env::var("IMAGE_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    /// Sniffs the format and fully decodes the payload. CPU bound; callers
    /// run it off the async executor.
    pub fn inspect(&self, bytes: &[u8]) -> Result<ImageFormat, ImageRejection> {
        if bytes.is_empty() {
            return Err(ImageRejection::Empty);
        }

        if bytes.len() > self.max_file_size_bytes {
            return Err(ImageRejection::TooLarge(self.max_file_size_bytes));
        }

        let format = image::guess_format(bytes).map_err(|_| ImageRejection::NotAnImage)?;

        if !self.allowed_formats.contains(&format) {
            return Err(ImageRejection::UnsupportedFormat(format!("{format:?}")));
        }

        image::load_from_memory_with_format(bytes, format)
            .map_err(|_| ImageRejection::NotAnImage)?;

        Ok(format)
    }

    /// Extension of the uploaded file name when it has a usable one,
    /// otherwise the canonical extension of the detected format.
    pub fn extension_for(file_name: Option<&str>, format: ImageFormat) -> String {
        let from_name = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| {
                !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric())
            });

        from_name.unwrap_or_else(|| {
            format
                .extensions_str()
                .first()
                .copied()
                .unwrap_or("img")
                .to_string()
        })
    }
}
