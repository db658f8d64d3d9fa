//! 对 `mri-berry::dataset` 的更一层封装. 提供更直接的 priors 目录解析.

use std::env;
use std::path::PathBuf;

/// 获取 priors 数组基本路径.
///
/// 1. 若环境变量 `$PRIORS_DIR` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/priors`.
pub fn priors_dir_from_env_or_home() -> PathBuf {
    if let Ok(d) = env::var("PRIORS_DIR") {
        PathBuf::from(d)
    } else {
        mri_berry::dataset::home_priors_dir().unwrap()
    }
}
