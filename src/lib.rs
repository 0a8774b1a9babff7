//! # stego_text 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：位流编解码、像素通道遍历，
//! 以及嵌入 (embed) 和提取 (extract) 两个纯函数。

// 声明库包含的所有模块。

pub mod bitstream;
pub mod cli;
pub mod constants;
pub mod handler;
pub mod steganography;
pub mod walker;
