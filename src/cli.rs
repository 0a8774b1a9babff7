//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::steganography::Algorithm;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取文本消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取文本消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中嵌入一条文本消息。
    Embed(EmbedArgs),

    /// 从经过隐写的图像中提取隐藏的文本消息。
    Extract(ExtractArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 作为载体的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要嵌入的文本消息。
    #[arg(short, long)]
    pub message: String,

    /// 嵌入完成后，保存结果图像的输出路径。
    /// 省略时默认保存为输入图像旁的 stego_<原文件名>.png。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 使用的隐写算法。randomized-lsb 与 dct 尚未实现，选择它们会被明确拒绝。
    #[arg(short, long, value_enum, default_value_t = Algorithm::Lsb)]
    pub algorithm: Algorithm,

    /// 目标文件已存在时允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 可能隐藏有文本消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取出的消息的保存路径。省略时消息直接打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 使用的隐写算法。randomized-lsb 与 dct 尚未实现，选择它们会被明确拒绝。
    #[arg(short, long, value_enum, default_value_t = Algorithm::Lsb)]
    pub algorithm: Algorithm,

    /// 目标文件已存在时允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}
