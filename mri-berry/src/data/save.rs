//! 切片图像的持久化存储.

use crate::VisWindow;
use image::ImageResult;
use ndarray::ArrayView2;
use std::path::Path;

/// 将 2D 切片视图按 `window` 归一化为 8-bit 灰度后保存到 `path` 路径.
///
/// 图像格式由扩展名决定 (一般为 PNG). 非有限强度值映射为黑色.
pub fn save_slice_vis<P: AsRef<Path>>(
    slice: ArrayView2<'_, f32>,
    window: VisWindow,
    path: P,
) -> ImageResult<()> {
    let (height, width) = slice.dim();
    let mut buf = image::GrayImage::new(width as u32, height as u32);
    for ((h, w), &v) in slice.indexed_iter() {
        let gray = window.eval(v).unwrap_or(u8::MIN);
        buf.put_pixel(w as u32, h as u32, image::Luma([gray]));
    }
    buf.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;
    use std::fs;

    #[test]
    fn test_save_and_reload_gray_png() {
        let dir = std::env::temp_dir().join(format!("mri-berry-save-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("slice.png");

        let slice = arr2(&[[0.0f32, 50.0], [100.0, f32::NAN]]);
        let window = VisWindow::new(0.0, 100.0).unwrap();
        save_slice_vis(slice.view(), window, &path).unwrap();

        let img = image::open(&path).unwrap().into_luma8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(1, 0).0, [127]);
        assert_eq!(img.get_pixel(0, 1).0, [255]);
        // NaN 映射为黑色.
        assert_eq!(img.get_pixel(1, 1).0, [0]);

        fs::remove_dir_all(&dir).ok();
    }
}
