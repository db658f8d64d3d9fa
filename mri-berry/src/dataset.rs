//! priors 数据集目录约定与读写.
//!
//! 一套 priors 由同一目录下的四个文件组成, 文件名主干固定:
//!
//! - `generation_labels.npy`, `generation_classes.npy`, `output_labels.npy` —
//!   flat int64 数组, npy 格式;
//! - `classes_names.txt` — 结构名称, UTF-8 文本, 每行一个.
//!
//! 原始管线把名称存为 numpy object 数组 (pickle). pickle 不是可移植的
//! 交换格式, 本库改用逐行文本约定.

use crate::{ColumnLengthMismatch, Label, PriorTable};
use ndarray::Array1;
use ndarray_npy::{read_npy, write_npy, ReadNpyError, WriteNpyError};
use std::fs;
use std::path::{Path, PathBuf};

/// 生成标签文件名主干.
pub const GENERATION_LABELS_STEM: &str = "generation_labels";

/// 组织类文件名主干.
pub const GENERATION_CLASSES_STEM: &str = "generation_classes";

/// 结构名称文件名主干.
pub const CLASSES_NAMES_STEM: &str = "classes_names";

/// 输出标签文件名主干.
pub const OUTPUT_LABELS_STEM: &str = "output_labels";

/// 重组输出文件的文件名后缀.
pub const REORGANIZED_SUFFIX: &str = "_reorganized";

/// 获取 `{用户主目录}/priors` 目录.
pub fn home_priors_dir() -> Option<PathBuf> {
    let mut ans = dirs::home_dir()?;
    ans.push("priors");
    Some(ans)
}

/// 获取 `{用户主目录}/priors` 目录下给定继续项组成的全路径.
pub fn home_priors_dir_with<P: AsRef<Path>, I: IntoIterator<Item = P>>(it: I) -> Option<PathBuf> {
    let mut ans = home_priors_dir()?;
    ans.extend(it);
    Some(ans)
}

/// 加载 priors 错误.
#[derive(Debug)]
pub enum LoadPriorsError {
    /// 读取 npy 文件错误 (含文件缺失). 第一个参数为出错文件的路径.
    ReadNpy(PathBuf, ReadNpyError),

    /// 读取名称文本文件错误 (含文件缺失). 第一个参数为出错文件的路径.
    Io(PathBuf, std::io::Error),

    /// 四列长度不一致.
    Shape(ColumnLengthMismatch),
}

/// 保存 priors 错误.
#[derive(Debug)]
pub enum SavePriorsError {
    /// 写入 npy 文件错误. 第一个参数为出错文件的路径.
    WriteNpy(PathBuf, WriteNpyError),

    /// 写入名称文本文件错误. 第一个参数为出错文件的路径.
    Io(PathBuf, std::io::Error),
}

fn read_column(dir: &Path, stem: &str) -> Result<Array1<Label>, LoadPriorsError> {
    let path = dir.join(format!("{stem}.npy"));
    read_npy(&path).map_err(|e| LoadPriorsError::ReadNpy(path, e))
}

/// 从目录 `dir` 加载一套 priors, 文件名主干后追加 `suffix` (无后缀传 `""`).
///
/// 任一文件缺失或解码失败都会立即返回 `Err`, 不产生部分表.
pub fn load_priors_with_suffix<P: AsRef<Path>>(
    dir: P,
    suffix: &str,
) -> Result<PriorTable, LoadPriorsError> {
    let dir = dir.as_ref();

    let generation_labels = read_column(dir, &format!("{GENERATION_LABELS_STEM}{suffix}"))?;
    let generation_classes = read_column(dir, &format!("{GENERATION_CLASSES_STEM}{suffix}"))?;
    let output_labels = read_column(dir, &format!("{OUTPUT_LABELS_STEM}{suffix}"))?;

    let names_path = dir.join(format!("{CLASSES_NAMES_STEM}{suffix}.txt"));
    let raw = fs::read_to_string(&names_path).map_err(|e| LoadPriorsError::Io(names_path, e))?;
    let class_names: Vec<String> = raw.lines().map(str::to_owned).collect();

    PriorTable::new(
        generation_labels,
        generation_classes,
        class_names,
        output_labels,
    )
    .map_err(LoadPriorsError::Shape)
}

/// 从目录 `dir` 加载一套无后缀的 priors.
#[inline]
pub fn load_priors<P: AsRef<Path>>(dir: P) -> Result<PriorTable, LoadPriorsError> {
    load_priors_with_suffix(dir, "")
}

fn write_column(
    dir: &Path,
    stem: &str,
    column: &Array1<Label>,
) -> Result<(), SavePriorsError> {
    let path = dir.join(format!("{stem}.npy"));
    write_npy(&path, column).map_err(|e| SavePriorsError::WriteNpy(path, e))
}

/// 将 priors 表写入目录 `dir`, 文件名主干后追加 `suffix`
/// (如 [`REORGANIZED_SUFFIX`]; 无后缀传 `""`).
///
/// # 注意
///
/// 名称按行存储, 因此名称内不允许出现换行符, 否则程序 panic.
pub fn save_priors_with_suffix<P: AsRef<Path>>(
    table: &PriorTable,
    dir: P,
    suffix: &str,
) -> Result<(), SavePriorsError> {
    let dir = dir.as_ref();

    write_column(
        dir,
        &format!("{GENERATION_LABELS_STEM}{suffix}"),
        table.generation_labels(),
    )?;
    write_column(
        dir,
        &format!("{GENERATION_CLASSES_STEM}{suffix}"),
        table.generation_classes(),
    )?;
    write_column(
        dir,
        &format!("{OUTPUT_LABELS_STEM}{suffix}"),
        table.output_labels(),
    )?;

    assert!(
        table.class_names().iter().all(|n| !n.contains('\n')),
        "结构名称不允许包含换行符"
    );
    let mut text = table.class_names().join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    let names_path = dir.join(format!("{CLASSES_NAMES_STEM}{suffix}.txt"));
    fs::write(&names_path, text).map_err(|e| SavePriorsError::Io(names_path, e))
}
