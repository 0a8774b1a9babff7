use crate::bitstream;
use crate::constants::USABLE_CHANNELS;
use crate::walker::channel_slots;
use clap::ValueEnum;
use image::DynamicImage;
use std::fmt;
use thiserror::Error;

/// 图形界面时代遗留的算法选择项；目前只有 LSB 被实现。
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Lsb,
    RandomizedLsb,
    Dct,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Lsb => "lsb",
            Algorithm::RandomizedLsb => "randomized-lsb",
            Algorithm::Dct => "dct",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StegoError {
    #[error("The message is empty, there is nothing to embed.")]
    EmptyMessage,
    #[error(
        "The message needs {required} bits but the image can only hold {available}. \
         Choose a shorter message or a larger image."
    )]
    Capacity { required: u64, available: u64 },
    #[error("The '{0}' algorithm is not implemented.")]
    UnsupportedAlgorithm(Algorithm),
}

/// 给定图像可嵌入的最大位数：宽 × 高 × 可用通道数 (红绿蓝)。
pub fn capacity_bits(image: &DynamicImage) -> u64 {
    u64::from(image.width())
        .saturating_mul(u64::from(image.height()))
        .saturating_mul(USABLE_CHANNELS)
}

pub fn embed(
    algorithm: Algorithm,
    image: &DynamicImage,
    message: &str,
) -> Result<DynamicImage, StegoError> {
    if algorithm != Algorithm::Lsb {
        return Err(StegoError::UnsupportedAlgorithm(algorithm));
    }
    embed_lsb(image, message)
}

pub fn extract(algorithm: Algorithm, image: &DynamicImage) -> Result<String, StegoError> {
    if algorithm != Algorithm::Lsb {
        return Err(StegoError::UnsupportedAlgorithm(algorithm));
    }
    Ok(extract_lsb(image))
}

/// 将消息写入图像副本可用通道的最低有效位，输入图像保持不变。
/// 容量与空消息检查都发生在复制之前，要么完整成功，要么毫无改动。
pub fn embed_lsb(image: &DynamicImage, message: &str) -> Result<DynamicImage, StegoError> {
    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }

    let required = bitstream::framed_len(message.len());
    let available = capacity_bits(image);
    if required > available {
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }

    let bits = bitstream::encode(message.as_bytes());

    // 带 alpha 的图像保持 RGBA，其余统一为 RGB；alpha 样本不会被遍历到。
    if image.color().has_alpha() {
        let mut doctored = image.to_rgba8();
        write_bits(&mut doctored, 4, bits);
        Ok(DynamicImage::ImageRgba8(doctored))
    } else {
        let mut doctored = image.to_rgb8();
        write_bits(&mut doctored, 3, bits);
        Ok(DynamicImage::ImageRgb8(doctored))
    }
}

/// 从图像可用通道的最低有效位中恢复消息。
/// 帧不完整或解出非法 UTF-8 都视为“没有隐藏消息”，返回空字符串。
pub fn extract_lsb(image: &DynamicImage) -> String {
    let available = capacity_bits(image);

    let (samples, samples_per_pixel) = if image.color().has_alpha() {
        (image.to_rgba8().into_raw(), 4)
    } else {
        (image.to_rgb8().into_raw(), 3)
    };

    let bits = channel_slots(samples_per_pixel, samples.len()).map(|slot| samples[slot] & 1);

    bitstream::decode(bits, available).unwrap_or_default()
}

fn write_bits(samples: &mut [u8], samples_per_pixel: usize, bits: impl Iterator<Item = u8>) {
    for (slot, bit) in channel_slots(samples_per_pixel, samples.len()).zip(bits) {
        samples[slot] = (samples[slot] & 0xFE) | (bit & 1);
    }
}
