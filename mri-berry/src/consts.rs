//! 通用常量.

/// FreeSurfer 风格的解剖结构标签 ID.
///
/// SynthSeg 管线沿用 FreeSurfer 的标签编号: 非侧向结构 (脑室, 脑干, CSF 等)
/// 自成一组, 左/右半球结构一一配对 (如左侧大脑白质 2 对应右侧 41).
pub mod fs_label {
    use crate::Label;

    /// 背景标签.
    pub const BACKGROUND: Label = 0;

    /// 非侧向结构: 第三/第四脑室, 脑干, CSF, 左右侧脑室等.
    pub const NON_SIDED: [Label; 8] = [4, 5, 14, 15, 16, 24, 43, 44];

    /// 左半球结构: 白质, 皮层, 小脑, 丘脑, 基底节, 海马, 杏仁核等.
    pub const LEFT: [Label; 12] = [2, 3, 7, 8, 10, 11, 12, 13, 17, 18, 26, 28];

    /// 右半球结构. 与 [`LEFT`] 按下标一一对应.
    pub const RIGHT: [Label; 12] = [41, 42, 46, 47, 49, 50, 51, 52, 53, 54, 58, 60];

    /// 标签是否是背景?
    #[inline]
    pub const fn is_background(label: Label) -> bool {
        label == BACKGROUND
    }

    /// 标签是否属于非侧向结构?
    #[inline]
    pub fn is_non_sided(label: Label) -> bool {
        NON_SIDED.contains(&label)
    }

    /// 标签是否属于左半球结构?
    #[inline]
    pub fn is_left(label: Label) -> bool {
        LEFT.contains(&label)
    }

    /// 标签是否属于右半球结构?
    #[inline]
    pub fn is_right(label: Label) -> bool {
        RIGHT.contains(&label)
    }

    /// 标签是否有左右侧向之分?
    #[inline]
    pub fn is_sided(label: Label) -> bool {
        is_left(label) || is_right(label)
    }
}

#[cfg(test)]
mod tests {
    use super::fs_label::*;

    #[test]
    fn test_left_right_paired() {
        // 左右集合按下标配对, 长度必须一致.
        assert_eq!(LEFT.len(), RIGHT.len());
    }

    #[test]
    fn test_sets_disjoint() {
        for l in LEFT {
            assert!(!is_non_sided(l));
            assert!(!is_right(l));
            assert!(!is_background(l));
        }
        for r in RIGHT {
            assert!(!is_non_sided(r));
            assert!(!is_left(r));
            assert!(!is_background(r));
        }
        assert!(!is_sided(BACKGROUND));
        assert!(!is_non_sided(BACKGROUND));
    }
}
