//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责图像文件的解码与编码、调用核心隐写算法以及向用户报告结果。

use crate::cli::{EmbedArgs, ExtractArgs};
use crate::constants::STEGO_FILE_PREFIX;
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Embed' 命令的执行逻辑。
///
/// 负责将输入图像解码为像素缓冲区、调用嵌入核心函数得到隐写后的新缓冲区，
/// 最后将结果编码写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、消息与算法选择的 `EmbedArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法将输入文件解码为图像。
/// * 目标文件已存在且未指定 `--force`。
/// * 消息为空、图像容量不足，或选择了未实现的算法。
/// * 无法写入到目标图像文件。
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    let image = image::open(&args.image).with_context(|| {
        format!(
            "Unable to decode image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let doctored = embed(args.algorithm, &image, &args.message).with_context(|| {
        format!(
            "Failed to embed the message into: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    doctored.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {} \nOnly lossless formats are supported.",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully embedded and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责将图像文件解码为像素缓冲区并调用提取核心函数。
/// 图像中没有有效消息不是错误：此时仅打印一条提示信息。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与算法选择的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法将输入文件解码为图像。
/// * 选择了未实现的算法。
/// * 指定了输出文件但无法写入，或文件已存在且未指定 `--force`。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let image = image::open(&args.image).with_context(|| {
        format!(
            "Unable to decode image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = extract(args.algorithm, &image).with_context(|| {
        format!(
            "Failed to extract a message from: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    if message.is_empty() {
        println!(
            "No hidden message was found in: {}",
            args.image.to_string_lossy().yellow().bold()
        );
        return Ok(());
    }

    match args.text {
        Some(path) => {
            anyhow::ensure!(
                args.force || !path.exists(),
                "Output file already exists: {} \nUse --force to overwrite it.",
                path.to_string_lossy().red().bold()
            );

            fs::write(&path, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The message has been successfully extracted and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => println!("{message}"),
    }

    Ok(())
}

/// 未指定 `--dest` 时生成默认输出路径：与输入图像同目录的 stego_<原文件名>.png。
/// 始终使用 PNG 扩展名，保证输出为无损格式。
fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    image.with_file_name(format!("{STEGO_FILE_PREFIX}{stem}.png"))
}
