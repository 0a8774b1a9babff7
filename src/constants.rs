/// 长度前缀所占的位数。
/// 负载字节数以 32 位大端无符号整数的形式写在位流最前面，
/// 提取端据此得知需要继续读取多少位，而无需扫描终止符。
pub const LENGTH_PREFIX_BITS: u64 = 32;

/// 每个负载字节展开后的位数，按最高有效位在前的顺序写入。
pub const BITS_PER_BYTE: u64 = 8;

/// 每个像素中可用于隐写的通道数。
/// 只使用红、绿、蓝三个通道；alpha 通道 (若存在) 永远不被修改，
/// 以保证透明度语义与原图完全一致。
pub const USABLE_CHANNELS: u64 = 3;

/// 未指定输出路径时，嵌入结果图像文件名的前缀。
pub const STEGO_FILE_PREFIX: &str = "stego_";
