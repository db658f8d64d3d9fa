#![warn(missing_docs)]

//! 核心库. 提供 SynthSeg 风格 priors 标签表和合成 MRI 体数据的结构化信息和基础处理算法.
//!
//! 该 crate 目前仅提供 `safe` 接口.
//!
//! # 注意
//!
//! 1. priors 表由四个平行数组构成 (generation labels, generation classes,
//!    classes names, output labels), 共享同一下标. 本库的所有变换都保持该对应关系.
//! 2. 在非期望情况下 (如内部排列越界), 程序会直接 panic, 而不会导致内存错误.
//!    As what Rust promises.
//!
//! # 功能
//!
//! ### priors 标签表 ✅
//!
//! 平行数组的结构化封装, 构造时强制等长不变式.
//!
//! 实现位于 `mri-berry/src/priors.rs`.
//!
//! ### 解剖顺序重组 ✅
//!
//! 将 priors 表重排为规范解剖顺序: 背景, 非侧向结构, 左半球结构,
//! 右半球结构 (与左侧顺序对应). 该顺序是下游标签翻转增广的前提.
//!
//! 分类策略 (三个固定标签集合与未匹配回退规则) 与排列算法解耦,
//! 可独立替换与测试.
//!
//! 实现位于 `mri-berry/src/reorg`.
//!
//! ### priors 文件读写 ✅
//!
//! 数值列按 npy 格式读写, 名字列按逐行文本读写, 并提供
//! `{用户主目录}/priors` 目录约定.
//!
//! 实现位于 `mri-berry/src/dataset`.
//!
//! ### MRI 体数据加载与统计 ✅
//!
//! 打开 nii / nii.gz / hdr+img 格式体数据, 提供 header 属性,
//! 描述性统计量和三个解剖平面的中间切片视图.
//!
//! 实现位于 `mri-berry/src/data`.
//!
//! ### 灰度可视化窗口 ✅
//!
//! MRI 强度没有 CT HU 那样的统一标度, 因此窗口按体数据实际动态范围构造,
//! 将强度值映射到 8-bit 灰度, 用于切片 PNG 导出.
//!
//! 实现位于 `mri-berry/src/data/window.rs`.

/// 生成/输出标签 ID. 与 numpy 默认整数宽度保持一致.
pub type Label = i64;

/// 组织类 ID. 多个标签可归入同一类.
pub type ClassId = i64;

/// 三维索引, 同时也可一定程度上用作非负整数向量.
pub type Idx3d = (usize, usize, usize);

/// MRI 体数据基础结构.
mod data;

pub use data::{save_slice_vis, MriVolume, VisWindow, VolumeStats};

pub mod consts;

mod priors;

pub use priors::{ColumnLengthMismatch, PriorRecord, PriorTable};

pub mod dataset;
pub mod reorg;

pub mod prelude;
