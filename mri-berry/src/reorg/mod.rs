//! priors 表的解剖顺序重组.
//!
//! 将 priors 表重排为规范顺序: 背景, 非侧向结构, 左半球结构, 右半球结构.
//! 该顺序是下游标签左右翻转增广的前提 (左右段按相同结构顺序排列时,
//! 翻转只需交换两段).
//!
//! 重组是纯排列: 输出与输入等长, 记录多重集不变, 仅顺序改变.

mod policy;

pub use policy::{Bucket, FallbackRule, SidednessPolicy};

use crate::consts::fs_label;
use crate::{Label, PriorTable};

/// 重组的运行时错误.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ReorgError {
    /// 输入表为空. 规范顺序要求至少存在一条背景记录可放置.
    EmptyInput,
}

/// 重组摘要: 各桶的成员标签列表与背景记录的原始下标.
///
/// 仅用于诊断输出与验证, 不参与排列本身.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ReorgSummary {
    /// 被选为背景的记录在原表中的下标.
    pub background_index: usize,

    /// 非侧向段成员标签 (不含回退的未匹配标签), 按原相对顺序.
    pub non_sided: Vec<Label>,

    /// 未匹配任何集合, 按回退规则放置的标签, 按原相对顺序.
    pub unmatched: Vec<Label>,

    /// 左半球段成员标签, 按原相对顺序.
    pub left: Vec<Label>,

    /// 右半球段成员标签, 按原相对顺序.
    pub right: Vec<Label>,
}

/// 将 priors 表重排为规范解剖顺序, 返回新表与重组摘要.
///
/// 排列规则:
///
/// 1. 背景记录置于首位. 取第一条标签值为 0 的记录; 若不存在, 取第 0 条.
/// 2. 非侧向记录按原相对顺序紧随其后; 未匹配任何集合的记录按
///    [`SidednessPolicy::fallback`] 并入该段尾部, 并逐条记录警告.
/// 3. 左半球记录按原相对顺序.
/// 4. 右半球记录按原相对顺序.
///
/// 背景记录按 **下标** 从后续桶中排除, 而不是按值重新判定.
/// 即使畸形输入中存在多条同值记录, 每条记录也只会被放置一次.
///
/// 输入为空时返回 [`ReorgError::EmptyInput`].
pub fn reorganize(
    table: &PriorTable,
    policy: &SidednessPolicy,
) -> Result<(PriorTable, ReorgSummary), ReorgError> {
    if table.is_empty() {
        return Err(ReorgError::EmptyInput);
    }

    let labels = table.generation_labels();

    let background_index = labels
        .iter()
        .position(|&l| fs_label::is_background(l))
        .unwrap_or(0);

    let mut non_sided = Vec::new();
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut unmatched = Vec::new();

    for (i, &label) in labels.iter().enumerate() {
        if i == background_index {
            continue;
        }
        match policy.classify(label) {
            Some(Bucket::NonSided) => non_sided.push(i),
            Some(Bucket::Left) => left.push(i),
            Some(Bucket::Right) => right.push(i),
            Some(Bucket::Background) => {
                unreachable!("classify 不产生 Background")
            }
            None => {
                let r = table.record(i);
                log::warn!(
                    "未分类标签 {label} (class {}, name {:?}), 按 {:?} 规则回退",
                    r.generation_class,
                    r.class_name,
                    policy.fallback(),
                );
                unmatched.push(i);
            }
        }
    }

    let summary = ReorgSummary {
        background_index,
        non_sided: non_sided.iter().map(|&i| labels[i]).collect(),
        unmatched: unmatched.iter().map(|&i| labels[i]).collect(),
        left: left.iter().map(|&i| labels[i]).collect(),
        right: right.iter().map(|&i| labels[i]).collect(),
    };

    let mut perm = Vec::with_capacity(table.len());
    perm.push(background_index);
    perm.extend_from_slice(&non_sided);
    match policy.fallback() {
        FallbackRule::NonSided => perm.extend_from_slice(&unmatched),
    }
    perm.extend_from_slice(&left);
    perm.extend_from_slice(&right);

    // 每条非背景记录恰好进入一个桶, 排列必然不重不漏.
    debug_assert_eq!(perm.len(), table.len());

    Ok((table.permuted(&perm), summary))
}
