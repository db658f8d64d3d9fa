//! MRI 体数据查看工具.
//!
//! 接受一个体数据文件路径 (nii / nii.gz / hdr+img), 打印 header 属性与
//! 描述性统计量, 并把三个解剖平面的中间切片以灰度 PNG 保存到源文件旁.

use mri_berry::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("logger 初始化失败");

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: mriview <volume.nii[.gz] | volume.hdr>");
        return ExitCode::from(2);
    };
    let path = PathBuf::from(path);

    let vol = MriVolume::open(&path)
        .unwrap_or_else(|e| panic!("打开体数据失败 ({}): {e}", path.display()));

    let stats = vol.stats();
    print_info(&path, &vol, &stats);

    let Some(window) = VisWindow::from_stats(&stats) else {
        // 常值体数据没有可视化意义, 只打印统计量.
        log::warn!("体数据动态范围为空, 跳过切片导出");
        return ExitCode::SUCCESS;
    };

    let base = strip_all_extensions(&path);
    for (plane, slice) in [
        ("axial", vol.mid_axial()),
        ("coronal", vol.mid_coronal()),
        ("sagittal", vol.mid_sagittal()),
    ] {
        let out = base.with_file_name(format!(
            "{}_{plane}.png",
            base.file_name().unwrap_or_default().to_string_lossy()
        ));
        save_slice_vis(slice, window, &out)
            .unwrap_or_else(|e| panic!("保存切片失败 ({}): {e}", out.display()));
        println!("Saved {plane} mid-slice to {}", out.display());
    }

    ExitCode::SUCCESS
}

fn print_info(path: &Path, vol: &MriVolume, stats: &VolumeStats) {
    let (z, h, w) = vol.shape();
    let [dz, dh, dw] = vol.pix_dim();

    println!("Volume: {}", path.display());
    utils::sep();
    println!("Shape (z, H, W): ({z}, {h}, {w})");
    println!("Voxel size (mm): ({dz:.3}, {dh:.3}, {dw:.3})");
    println!("Voxel volume (mm^3): {:.3}", vol.voxel());
    println!("Data range: [{:.2}, {:.2}]", stats.min, stats.max);
    println!("Mean value: {:.2}", stats.mean);
    println!("Standard deviation: {:.2}", stats.std);
    utils::sep();
}

/// 去掉文件名的全部扩展名 (`brain.nii.gz` -> `brain`).
fn strip_all_extensions(path: &Path) -> PathBuf {
    let mut p = path.to_owned();
    while p.extension().is_some() {
        p = p.with_extension("");
    }
    p
}
