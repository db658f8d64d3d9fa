//! 侧向性分类策略.

use crate::consts::fs_label;
use crate::Label;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// 记录归属的桶. 重组输出按此枚举的声明顺序分段排列.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Bucket {
    /// 背景. 每张表恰好一条.
    Background,

    /// 非侧向结构 (脑室, 脑干, CSF 等).
    NonSided,

    /// 左半球结构.
    Left,

    /// 右半球结构.
    Right,
}

/// 未匹配任何分类集合的标签的回退规则.
///
/// 当前管线把未匹配记录并入非侧向段尾部, 仅记录警告.
/// 将来若需要独立的 "未分类" 段, 在此扩展, 不必改动排列算法.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FallbackRule {
    /// 并入非侧向段尾部.
    NonSided,
}

/// 侧向性分类策略: 三个固定标签集合加一条回退规则.
///
/// 集合在策略内部以哈希集合存储, 以常数时间完成单标签分类.
/// 背景识别 (标签值 0) 不属于该策略, 由重组算法按下标单独处理.
#[derive(Clone, Debug)]
pub struct SidednessPolicy {
    non_sided: HashSet<Label>,
    left: HashSet<Label>,
    right: HashSet<Label>,
    fallback: FallbackRule,
}

/// FreeSurfer 标签编号下的默认策略.
static FREESURFER: Lazy<SidednessPolicy> = Lazy::new(|| {
    SidednessPolicy::new(
        fs_label::NON_SIDED,
        fs_label::LEFT,
        fs_label::RIGHT,
        FallbackRule::NonSided,
    )
});

impl SidednessPolicy {
    /// 由三个标签集合与回退规则构建策略.
    ///
    /// 若同一标签出现在多个集合中, 分类时按非侧向, 左, 右的优先级取首个匹配.
    pub fn new<I, J, K>(non_sided: I, left: J, right: K, fallback: FallbackRule) -> SidednessPolicy
    where
        I: IntoIterator<Item = Label>,
        J: IntoIterator<Item = Label>,
        K: IntoIterator<Item = Label>,
    {
        Self {
            non_sided: non_sided.into_iter().collect(),
            left: left.into_iter().collect(),
            right: right.into_iter().collect(),
            fallback,
        }
    }

    /// 获取 FreeSurfer 标签编号下的默认策略.
    #[inline]
    pub fn freesurfer() -> &'static SidednessPolicy {
        &FREESURFER
    }

    /// 对单个标签分类.
    ///
    /// 返回 `None` 表示标签不属于任何集合, 由调用方套用 [`Self::fallback`].
    /// 该方法不会返回 [`Bucket::Background`].
    pub fn classify(&self, label: Label) -> Option<Bucket> {
        if self.non_sided.contains(&label) {
            Some(Bucket::NonSided)
        } else if self.left.contains(&label) {
            Some(Bucket::Left)
        } else if self.right.contains(&label) {
            Some(Bucket::Right)
        } else {
            None
        }
    }

    /// 未匹配标签的回退规则.
    #[inline]
    pub fn fallback(&self) -> FallbackRule {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freesurfer_classify() {
        let p = SidednessPolicy::freesurfer();
        assert_eq!(p.classify(4), Some(Bucket::NonSided));
        assert_eq!(p.classify(16), Some(Bucket::NonSided));
        assert_eq!(p.classify(2), Some(Bucket::Left));
        assert_eq!(p.classify(28), Some(Bucket::Left));
        assert_eq!(p.classify(41), Some(Bucket::Right));
        assert_eq!(p.classify(60), Some(Bucket::Right));

        // 背景与未知标签都不在集合内.
        assert_eq!(p.classify(0), None);
        assert_eq!(p.classify(99), None);
        assert_eq!(p.fallback(), FallbackRule::NonSided);
    }

    #[test]
    fn test_overlap_priority() {
        // 同一标签出现在多个集合时, 非侧向优先.
        let p = SidednessPolicy::new([7], [7], [8], FallbackRule::NonSided);
        assert_eq!(p.classify(7), Some(Bucket::NonSided));
        assert_eq!(p.classify(8), Some(Bucket::Right));
    }
}
