//! SynthSeg 风格 priors 标签表.
//!
//! 四个平行数组共享同一下标: 下标 `i` 处的四个元素描述同一个解剖结构.
//! 等长不变式在构造时强制检查, 此后所有变换 (如 [`PriorTable::permuted`])
//! 都对四列同步进行.

use crate::{ClassId, Label};
use itertools::izip;
use ndarray::Array1;

/// 形状错误: 四个平行数组长度不一致.
///
/// 各字段记录对应数组的实际长度, 便于定位出错的列.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLengthMismatch {
    /// `generation_labels` 列长度.
    pub generation_labels: usize,

    /// `generation_classes` 列长度.
    pub generation_classes: usize,

    /// `class_names` 列长度.
    pub class_names: usize,

    /// `output_labels` 列长度.
    pub output_labels: usize,
}

/// priors 标签表. 每条记录由生成标签, 组织类, 结构名与输出标签组成.
///
/// 该表是只读的. 重组等变换会产生新表, 而不修改原表.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorTable {
    generation_labels: Array1<Label>,
    generation_classes: Array1<ClassId>,
    class_names: Vec<String>,
    output_labels: Array1<Label>,
}

/// 单条 priors 记录的只读视图.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorRecord<'a> {
    /// 合成生成阶段使用的标签 ID.
    pub generation_label: Label,

    /// 组织类 ID. 多个标签可共享同一类 (共享同一强度分布).
    pub generation_class: ClassId,

    /// 结构的人类可读名称.
    pub class_name: &'a str,

    /// 最终输出分割中使用的标签 ID.
    pub output_label: Label,
}

impl PriorTable {
    /// 从四个平行数组构建 priors 表.
    ///
    /// 四个数组必须等长, 否则返回 `Err` 并附带各列实际长度.
    pub fn new(
        generation_labels: Array1<Label>,
        generation_classes: Array1<ClassId>,
        class_names: Vec<String>,
        output_labels: Array1<Label>,
    ) -> Result<PriorTable, ColumnLengthMismatch> {
        let n = generation_labels.len();
        if generation_classes.len() != n || class_names.len() != n || output_labels.len() != n {
            return Err(ColumnLengthMismatch {
                generation_labels: n,
                generation_classes: generation_classes.len(),
                class_names: class_names.len(),
                output_labels: output_labels.len(),
            });
        }
        Ok(Self {
            generation_labels,
            generation_classes,
            class_names,
            output_labels,
        })
    }

    /// 记录条数.
    #[inline]
    pub fn len(&self) -> usize {
        self.generation_labels.len()
    }

    /// 表是否为空?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generation_labels.is_empty()
    }

    /// 生成标签列.
    #[inline]
    pub fn generation_labels(&self) -> &Array1<Label> {
        &self.generation_labels
    }

    /// 组织类列.
    #[inline]
    pub fn generation_classes(&self) -> &Array1<ClassId> {
        &self.generation_classes
    }

    /// 结构名称列.
    #[inline]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// 输出标签列.
    #[inline]
    pub fn output_labels(&self) -> &Array1<Label> {
        &self.output_labels
    }

    /// 获取第 `index` 条记录.
    ///
    /// 当 `index` 越界时 panic.
    #[inline]
    pub fn record(&self, index: usize) -> PriorRecord<'_> {
        PriorRecord {
            generation_label: self.generation_labels[index],
            generation_class: self.generation_classes[index],
            class_name: self.class_names[index].as_str(),
            output_label: self.output_labels[index],
        }
    }

    /// 获取能按下标升序迭代所有记录的迭代器.
    pub fn records(&self) -> impl ExactSizeIterator<Item = PriorRecord<'_>> {
        izip!(
            self.generation_labels.iter(),
            self.generation_classes.iter(),
            self.class_names.iter(),
            self.output_labels.iter(),
        )
        .map(|(&generation_label, &generation_class, class_name, &output_label)| PriorRecord {
            generation_label,
            generation_class,
            class_name: class_name.as_str(),
            output_label,
        })
    }

    /// 按排列 `perm` 同步重排四列, 产生新表.
    ///
    /// `perm[i]` 给出新表第 `i` 条记录在原表中的下标.
    ///
    /// # 注意
    ///
    /// `perm` 必须与表等长且所有下标合法, 否则程序 panic.
    /// 该方法不检查 `perm` 是否真的构成排列; 调用方负责保证不重不漏.
    pub fn permuted(&self, perm: &[usize]) -> PriorTable {
        assert_eq!(
            perm.len(),
            self.len(),
            "排列长度 {} 与表长度 {} 不一致",
            perm.len(),
            self.len()
        );
        Self {
            generation_labels: perm.iter().map(|&i| self.generation_labels[i]).collect(),
            generation_classes: perm.iter().map(|&i| self.generation_classes[i]).collect(),
            class_names: perm.iter().map(|&i| self.class_names[i].clone()).collect(),
            output_labels: perm.iter().map(|&i| self.output_labels[i]).collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ndarray::arr1;

    /// 用占位的类/名称/输出列构建测试表. 名称为 `s{label}`,
    /// 类与输出直接复用标签值.
    pub(crate) fn table_from_labels(labels: &[Label]) -> PriorTable {
        PriorTable::new(
            arr1(labels),
            arr1(labels),
            labels.iter().map(|l| format!("s{l}")).collect(),
            arr1(labels),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_mismatch() {
        let err = PriorTable::new(
            arr1(&[0, 2]),
            arr1(&[0, 1]),
            vec!["bg".to_owned()],
            arr1(&[0, 2]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ColumnLengthMismatch {
                generation_labels: 2,
                generation_classes: 2,
                class_names: 1,
                output_labels: 2,
            }
        );
    }

    #[test]
    fn test_record_access() {
        let t = table_from_labels(&[0, 4, 2]);
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());

        let r = t.record(1);
        assert_eq!(r.generation_label, 4);
        assert_eq!(r.class_name, "s4");

        let collected: Vec<Label> = t.records().map(|r| r.generation_label).collect();
        assert_eq!(collected, vec![0, 4, 2]);
    }

    #[test]
    fn test_permuted_keeps_correspondence() {
        let t = table_from_labels(&[0, 4, 2]);
        let p = t.permuted(&[2, 0, 1]);
        assert_eq!(p.generation_labels(), &arr1(&[2, 0, 4]));
        assert_eq!(p.class_names(), &["s2", "s0", "s4"]);
        assert_eq!(p.output_labels(), &arr1(&[2, 0, 4]));
    }

    #[test]
    #[should_panic]
    fn test_permuted_wrong_len() {
        let t = table_from_labels(&[0, 4, 2]);
        let _ = t.permuted(&[0, 1]);
    }
}
