//! 灰度可视化窗口.

use crate::VolumeStats;

/// 灰度可视化窗口, 由强度下限与上限定义.
///
/// MRI 强度不像 CT HU 那样有统一标度, 因此窗口一般由体数据的实际动态范围
/// ([`VisWindow::from_stats`]) 构造, 而不是使用固定窗位/窗宽.
///
/// 该窗口是只读的. 若要修改窗口参数, 你应该创建新的实例.
#[derive(Copy, Clone, Debug)]
pub struct VisWindow {
    lower: f32,
    upper: f32,
}

impl VisWindow {
    /// 构建可视化窗口.
    ///
    /// `lower` 和 `upper` 必须有限且 `lower < upper`, 否则返回 `None`.
    pub fn new(lower: f32, upper: f32) -> Option<VisWindow> {
        if lower.is_finite() && upper.is_finite() && lower < upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// 由体数据统计量构建覆盖全动态范围的窗口.
    ///
    /// 当数据为常值 (min == max) 或含非有限统计量时返回 `None`.
    #[inline]
    pub fn from_stats(stats: &VolumeStats) -> Option<VisWindow> {
        Self::new(stats.min, stats.max)
    }

    /// 窗下限.
    #[inline]
    pub fn lower_bound(&self) -> f32 {
        self.lower
    }

    /// 窗上限.
    #[inline]
    pub fn upper_bound(&self) -> f32 {
        self.upper
    }

    /// 窗宽.
    #[inline]
    pub fn width(&self) -> f32 {
        self.upper - self.lower
    }

    /// 求在当前窗口设置下, 强度值 `v` 对应的灰度图像素整数值 (0 <= value <= 255).
    ///
    /// 如果 `v` 无意义 (如 inf, NaN), 则返回 `None`.
    pub fn eval(&self, v: f32) -> Option<u8> {
        if !v.is_finite() {
            return None;
        }
        if v <= self.lower {
            Some(u8::MIN)
        } else if v >= self.upper {
            Some(u8::MAX)
        } else {
            // 255, not 256.
            Some((((v - self.lower) / self.width()) * 255.0) as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_init(lower: f32, upper: f32) -> bool {
        VisWindow::new(lower, upper).is_some()
    }

    #[test]
    fn test_vis_window_invalid_input() {
        assert!(!is_valid_init(0.0, 0.0));
        assert!(!is_valid_init(1.0, -1.0));
        assert!(!is_valid_init(f32::NAN, 1.0));
        assert!(!is_valid_init(0.0, f32::INFINITY));
    }

    #[test]
    fn test_vis_window_generic() {
        // [0, 100]
        let w = VisWindow::new(0.0, 100.0).unwrap();
        assert_eq!(w.eval(f32::NAN), None);
        assert_eq!(w.eval(f32::MIN), Some(0));
        assert_eq!(w.eval(f32::MAX), Some(255));

        assert_eq!(w.eval(-1.0), Some(0));
        assert_eq!(w.eval(0.0), Some(0));
        assert_eq!(w.eval(25.0), Some((255.0 * 0.25) as u8));
        assert_eq!(w.eval(100.0), Some(255));
        assert_eq!(w.eval(101.0), Some(255));
    }

    #[test]
    fn test_from_stats() {
        let stats = VolumeStats {
            min: -3.0,
            max: 5.0,
            mean: 0.0,
            std: 1.0,
        };
        let w = VisWindow::from_stats(&stats).unwrap();
        assert_eq!(w.lower_bound(), -3.0);
        assert_eq!(w.upper_bound(), 5.0);
        assert_eq!(w.width(), 8.0);

        let flat = VolumeStats {
            min: 2.0,
            max: 2.0,
            mean: 2.0,
            std: 0.0,
        };
        assert!(VisWindow::from_stats(&flat).is_none());
    }
}
