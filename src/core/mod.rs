// Normalizer exports
pub mod image;
pub mod text;

pub use self::image::{image_to_tensor, preprocess_image, ImageError, DEFAULT_TARGET_SIZE};
pub use self::text::{clean_text, extract_keywords};
