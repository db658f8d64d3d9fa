use std::ops::Index;
use std::path::Path;

use ndarray::{Array3, ArrayView2, Axis, Ix3};
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};

use crate::Idx3d;

pub mod save;
pub mod window;

pub use save::save_slice_vis;
pub use window::VisWindow;

/// `NiftiHeader` 是栈上大对象, 移动该对象的开销很可观.
/// 因此我们将其分配到堆上.
type BoxedHeader = Box<NiftiHeader>;

/// 3D MRI 体数据, 包括 header 和体素强度. 强度值以 `f32` 保存.
///
/// 除 nii / nii.gz 外, 也支持 Analyze 风格的 hdr+img 文件对
/// (传入 `.hdr` 路径即可).
#[derive(Debug, Clone)]
pub struct MriVolume {
    header: BoxedHeader,
    data: Array3<f32>,
}

/// 将 (W, H, z) 转换成 (z, H, W). 以后均按照该模式访问.
#[inline]
fn get_shape_from_header(h: &NiftiHeader) -> Idx3d {
    // [W, H, z]. 体素个数数组.
    let [_, w, h, z, ..] = h.dim;
    (z as usize, h as usize, w as usize)
}

/// 体数据的描述性统计量.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VolumeStats {
    /// 最小强度值.
    pub min: f32,

    /// 最大强度值.
    pub max: f32,

    /// 强度均值.
    pub mean: f64,

    /// 强度标准差 (总体标准差, 除数为 N).
    pub std: f64,
}

impl MriVolume {
    /// 打开 3D MRI 体数据文件. `path` 为 nii / nii.gz / hdr 文件的本地路径.
    /// 如果打开成功, 则返回 `Ok(Self)`, 否则返回 `Err`.
    pub fn open<P: AsRef<Path>>(path: P) -> nifti::Result<Self> {
        let obj = ReaderOptions::new().read_file(path.as_ref())?;
        let header = Box::new(obj.header().clone());

        // [W, H, z] -> [z, H, W].
        let data = obj
            .into_volume()
            .into_ndarray()?
            .permuted_axes([2, 1, 0].as_slice());

        debug_assert!(data.is_standard_layout());

        // 该操作不会生成 `Err`, 可直接 unwrap.
        let data =
            Array3::<f32>::from_shape_vec(get_shape_from_header(&header), data.into_raw_vec())
                .unwrap();

        Ok(Self { header, data })
    }

    /// 从 header 和数据直接构建. 数据按 `(z, H, W)` 模式组织.
    ///
    /// 若 `data` 形状与 header 声明不符, 则程序 panic.
    pub fn from_parts(header: NiftiHeader, data: Array3<f32>) -> MriVolume {
        assert_eq!(
            data.dim(),
            get_shape_from_header(&header),
            "体数据形状与 header 声明不一致"
        );
        Self {
            header: Box::new(header),
            data,
        }
    }

    /// 获取 header 部分.
    #[inline]
    pub fn header(&self) -> &NiftiHeader {
        &self.header
    }

    /// 获取数据形状大小, 按 `(z, H, W)` 顺序.
    #[inline]
    pub fn shape(&self) -> Idx3d {
        get_shape_from_header(self.header())
    }

    /// 获取数据体素个数.
    #[inline]
    pub fn size(&self) -> usize {
        let (z, h, w) = self.shape();
        z * h * w
    }

    /// 获取单个体素分辨率. 该分辨率以毫米为单位, 分别代表空间 (相邻切片方向),
    /// 高 (自然图像的垂直方向), 宽 (自然图像的水平方向).
    #[inline]
    pub fn pix_dim(&self) -> [f64; 3] {
        let [_, w, h, z, ..] = self.header().pixdim;
        [z as f64, h as f64, w as f64]
    }

    /// 获取体素的实际体积值, 以立方毫米为单位.
    #[inline]
    pub fn voxel(&self) -> f64 {
        self.pix_dim().iter().product()
    }

    /// 单遍计算体数据的描述性统计量.
    ///
    /// 与 numpy 的行为一致: 不跳过非有限值, NaN 会传播到所有统计量.
    pub fn stats(&self) -> VolumeStats {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;

        for &v in self.data.iter() {
            min = min.min(v);
            max = max.max(v);
            let v = v as f64;
            sum += v;
            sum_sq += v * v;
        }

        let n = self.data.len() as f64;
        let mean = sum / n;
        // E[X^2] - E[X]^2. 浮点舍入可能产生微小负值, 截断到 0.
        let var = (sum_sq / n - mean * mean).max(0.0);

        VolumeStats {
            min,
            max,
            mean,
            std: var.sqrt(),
        }
    }

    /// 获取 axial (水平) 平面的中间切片视图.
    #[inline]
    pub fn mid_axial(&self) -> ArrayView2<'_, f32> {
        self.data.index_axis(Axis(0), self.data.len_of(Axis(0)) / 2)
    }

    /// 获取 coronal (冠状) 平面的中间切片视图.
    #[inline]
    pub fn mid_coronal(&self) -> ArrayView2<'_, f32> {
        self.data.index_axis(Axis(1), self.data.len_of(Axis(1)) / 2)
    }

    /// 获取 sagittal (矢状) 平面的中间切片视图.
    #[inline]
    pub fn mid_sagittal(&self) -> ArrayView2<'_, f32> {
        self.data.index_axis(Axis(2), self.data.len_of(Axis(2)) / 2)
    }

    /// 获得数据的一份不可变视图.
    #[inline]
    pub fn data(&self) -> ndarray::ArrayView<'_, f32, Ix3> {
        self.data.view()
    }
}

impl Index<Idx3d> for MriVolume {
    type Output = f32;

    #[inline]
    fn index(&self, index: Idx3d) -> &Self::Output {
        &self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn volume_from(data: Array3<f32>) -> MriVolume {
        let (z, h, w) = data.dim();
        let mut header = NiftiHeader::default();
        header.dim = [3, w as u16, h as u16, z as u16, 1, 1, 1, 1];
        header.pixdim = [1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0];
        MriVolume::from_parts(header, data)
    }

    #[test]
    fn test_stats_small_volume() {
        let v = volume_from(Array3::from_shape_vec((1, 2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap());
        let s = v.stats();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!((s.mean - 2.5).abs() < 1e-12);
        // 总体标准差: sqrt(1.25).
        assert!((s.std - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_shape_and_voxel() {
        let v = volume_from(Array3::zeros((4, 3, 2)));
        assert_eq!(v.shape(), (4, 3, 2));
        assert_eq!(v.size(), 24);
        assert_eq!(v.data().len(), 24);
        assert_eq!(v[(3, 2, 1)], 0.0);
        assert_eq!(v.pix_dim(), [2.0, 1.0, 1.0]);
        assert!((v.voxel() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mid_slices() {
        let v = volume_from(Array3::zeros((5, 3, 2)));
        assert_eq!(v.mid_axial().dim(), (3, 2));
        assert_eq!(v.mid_coronal().dim(), (5, 2));
        assert_eq!(v.mid_sagittal().dim(), (5, 3));
    }
}
