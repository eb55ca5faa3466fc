use candle_core::{Device, Tensor};
use image::imageops::FilterType;
use thiserror::Error;

/// Input size expected by the report image models
pub const DEFAULT_TARGET_SIZE: (u32, u32) = (224, 224);

/// Errors that can occur while normalizing an uploaded image
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Tensor error: {0}")]
    Tensor(#[from] candle_core::Error),
}

/// Decode uploaded image bytes and normalize them for model input
///
/// The image is converted to 3-channel RGB, resized to `target_size`
/// (bicubic) and scaled to [0, 1]. Returns an f32 tensor of shape
/// (height, width, 3).
pub fn preprocess_image(bytes: &[u8], target_size: (u32, u32)) -> Result<Tensor, ImageError> {
    let (width, height) = target_size;

    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded
        .resize_exact(width, height, FilterType::CatmullRom)
        .to_rgb8();

    let pixels: Vec<f32> = rgb
        .into_raw()
        .into_iter()
        .map(|value| value as f32 / 255.0)
        .collect();

    let tensor = Tensor::from_vec(pixels, (height as usize, width as usize, 3), &Device::Cpu)?;
    Ok(tensor)
}

/// Prepend a batch axis of size 1: (H, W, 3) -> (1, H, W, 3)
pub fn image_to_tensor(image: &Tensor) -> Result<Tensor, ImageError> {
    Ok(image.unsqueeze(0)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("png encode");
        bytes
    }

    #[test]
    fn test_preprocess_resizes_and_normalizes() {
        let bytes = png_bytes(500, 500);
        let tensor = preprocess_image(&bytes, DEFAULT_TARGET_SIZE).expect("preprocess");

        assert_eq!(tensor.dims(), &[224, 224, 3]);
        assert_eq!(tensor.dtype(), candle_core::DType::F32);

        let values = tensor.flatten_all().unwrap().to_vec1::<f32>().unwrap();
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_preprocess_rejects_invalid_bytes() {
        let result = preprocess_image(b"definitely not an image", DEFAULT_TARGET_SIZE);
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_image_to_tensor_adds_batch_axis() {
        let bytes = png_bytes(64, 64);
        let image = preprocess_image(&bytes, DEFAULT_TARGET_SIZE).expect("preprocess");
        let batched = image_to_tensor(&image).expect("batch");

        assert_eq!(batched.dims(), &[1, 224, 224, 3]);

        let before = image.flatten_all().unwrap().to_vec1::<f32>().unwrap();
        let after = batched.flatten_all().unwrap().to_vec1::<f32>().unwrap();
        assert_eq!(before, after);
    }
}
