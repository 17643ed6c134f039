/// 通过魔术字节判断负载是否为支持的图片格式
///
/// 打卡照片来自浏览器相机（canvas 导出 JPEG）或本地文件选择，
/// 只认 JPEG / PNG / WebP / GIF。
///
/// # Returns
/// * `true` - 前几个字节符合任一已知图片签名
/// * `false` - 负载为空或不是已知图片
pub fn is_supported_image(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }

    // JPEG
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return true;
    }
    // PNG
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return true;
    }
    // WebP (RIFF....WEBP)
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return true;
    }
    // GIF
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return true;
    }

    false
}
