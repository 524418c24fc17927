use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use burn::tensor::{backend::Backend, ElementConversion, Tensor};
use image::{GrayImage, ImageError, Luma};
use thiserror::Error;

use crate::data::NUM_CLASSES;

/// Error type for walkthrough artifacts.
#[derive(Error, Debug)]
pub enum ShowError {
    /// I/O operation error.
    #[error("I/O error: `{0}`")]
    Io(#[from] std::io::Error),

    /// Image encoding error.
    #[error("image error: `{0}`")]
    Image(#[from] ImageError),
}

/// Save a single-channel image tensor as a grayscale PNG.
///
/// Values are rescaled from the tensor's own range to `0..=255`, so both
/// `[0, 255]` and `[-1, 1]` images render the same. `scale` enlarges each
/// pixel to a `scale x scale` block.
///
/// # Shapes
///
/// - tensor: `[height, width]`
pub fn save_as_img<B: Backend>(
    tensor: &Tensor<B, 2>,
    scale: u32,
    path: impl AsRef<Path>,
) -> Result<(), ShowError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let [height, width] = tensor.dims();
    let pixels = to_gray_bytes(tensor);

    let mut img = GrayImage::new(width as u32 * scale, height as u32 * scale);
    for (y, row) in pixels.chunks(width).enumerate() {
        for (x, &pixel) in row.iter().enumerate() {
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(
                        x as u32 * scale + dx,
                        y as u32 * scale + dy,
                        Luma([pixel]),
                    );
                }
            }
        }
    }

    img.save(path)?;
    log::info!("saved digit to {}", path.display());

    Ok(())
}

/// Render a class probability distribution as one bar per digit, marking the
/// most probable class.
///
/// # Shapes
///
/// - probabilities: `[10]`
pub fn render_distribution(probabilities: &[f32]) -> String {
    debug_assert_eq!(probabilities.len(), NUM_CLASSES);

    let predicted = argmax(probabilities);
    let mut out = String::new();

    for (digit, &p) in probabilities.iter().enumerate() {
        let bar = "#".repeat((p * 40.0).round() as usize);
        let marker = if digit == predicted { " <-" } else { "" };
        writeln!(out, "{digit} | {p:>6.3} {bar}{marker}").expect("writing to a string");
    }

    out
}

fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Rescale tensor values from their own range to `0..=255`.
fn to_gray_bytes<B: Backend>(tensor: &Tensor<B, 2>) -> Vec<u8> {
    let min: f32 = tensor.clone().min().into_scalar().elem();
    let max: f32 = tensor.clone().max().into_scalar().elem();
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    tensor
        .clone()
        .sub_scalar(min)
        .div_scalar(range)
        .mul_scalar(255.0)
        .into_data()
        .iter::<f32>()
        .map(|value| value as u8)
        .collect()
}
