//! # 像素通道遍历模块
//!
//! 定义嵌入与提取共同遵守的通道槽位遍历顺序。
//! 该顺序是两端互操作的契约：任何一端偏离都会导致往返失败。

use crate::constants::USABLE_CHANNELS;

/// 按行主序 (第 0 行从左到右，然后第 1 行……)、像素内按红、绿、蓝的顺序，
/// 产出展平样本缓冲区中每个可用通道的下标，alpha 通道被跳过。
///
/// `image::ImageBuffer` 的原始样本本身就是行主序交错存储的，
/// 因此顺序遍历下标并过滤掉 alpha 样本即满足该契约。
/// 返回的迭代器是惰性、有限且可重新构造的。
pub fn channel_slots(
    samples_per_pixel: usize,
    total_samples: usize,
) -> impl Iterator<Item = usize> {
    debug_assert!(samples_per_pixel == 3 || samples_per_pixel == 4);

    (0..total_samples).filter(move |slot| slot % samples_per_pixel < USABLE_CHANNELS as usize)
}
