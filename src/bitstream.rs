//! # 位流编解码模块
//!
//! 负责消息字节与有序位序列之间的互相转换：
//! 32 位大端长度前缀在前，负载字节按最高有效位在前逐位展开。

use crate::constants::{BITS_PER_BYTE, LENGTH_PREFIX_BITS};
use thiserror::Error;

/// 解码位流时可能出现的帧格式错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("The declared payload length exceeds the available bit count.")]
    Truncated,
    #[error("The recovered payload is not valid UTF-8.")]
    InvalidEncoding,
}

/// 计算负载经过成帧后占用的总位数 (长度前缀 + 负载位)。
pub fn framed_len(payload_bytes: usize) -> u64 {
    LENGTH_PREFIX_BITS + BITS_PER_BYTE * payload_bytes as u64
}

/// 将负载编码为位序列：先是 32 位大端字节数，随后每个字节按 MSB 在前展开。
pub fn encode(payload: &[u8]) -> impl Iterator<Item = u8> + '_ {
    let declared = payload.len() as u32;

    (0..LENGTH_PREFIX_BITS)
        .rev()
        .map(move |shift| ((declared as u64 >> shift) & 1) as u8)
        .chain(
            payload
                .iter()
                .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1)),
        )
}

/// 从位序列恢复消息文本。
///
/// 先读取 32 位长度前缀得到声明的字节数 N；若 32 + 8N 超过
/// `available_bits`，说明该缓冲区不可能承载所声明的负载 (几乎总是意味着
/// 从未嵌入过有效消息)，返回 [`FormatError::Truncated`]。
/// 否则再读取 8N 位按 MSB 在前打包成字节，并校验 UTF-8。
/// 读取是惰性的：最多只消耗 32 + 8N 位。
pub fn decode(
    mut bits: impl Iterator<Item = u8>,
    available_bits: u64,
) -> Result<String, FormatError> {
    if available_bits < LENGTH_PREFIX_BITS {
        return Err(FormatError::Truncated);
    }

    let mut declared: u32 = 0;
    for _ in 0..LENGTH_PREFIX_BITS {
        let bit = bits.next().ok_or(FormatError::Truncated)?;
        declared = (declared << 1) | u32::from(bit & 1);
    }

    let payload_bits = BITS_PER_BYTE * u64::from(declared);
    if LENGTH_PREFIX_BITS + payload_bits > available_bits {
        return Err(FormatError::Truncated);
    }

    let mut payload = Vec::with_capacity(declared as usize);
    for _ in 0..declared {
        let mut byte: u8 = 0;
        for _ in 0..BITS_PER_BYTE {
            let bit = bits.next().ok_or(FormatError::Truncated)?;
            byte = (byte << 1) | (bit & 1);
        }
        payload.push(byte);
    }

    String::from_utf8(payload).map_err(|_| FormatError::InvalidEncoding)
}
