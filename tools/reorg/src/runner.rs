//! 程序运行函数.

use mri_berry::prelude::*;
use utils::loader;

/// 实际运行.
pub fn run() {
    let dir = loader::priors_dir_from_env_or_home();
    assert!(dir.is_dir(), "priors 目录不存在: {}", dir.display());

    println!("Loading priors from {} ...", dir.display());
    let table = dataset::load_priors(&dir)
        .unwrap_or_else(|e| panic!("加载 priors 失败: {e:?}"));
    println!("Loaded {} records", table.len());
    utils::sep();

    println!("Reorganizing ...");
    let (reorganized, summary) = reorg::reorganize(&table, SidednessPolicy::freesurfer())
        .unwrap_or_else(|e| panic!("重组失败: {e:?}"));
    print_summary(&summary);
    utils::sep();

    println!("Saving reorganized priors ...");
    dataset::save_priors_with_suffix(&reorganized, &dir, dataset::REORGANIZED_SUFFIX)
        .unwrap_or_else(|e| panic!("保存 priors 失败: {e:?}"));
    utils::sep();

    println!("New label organization:");
    for (i, r) in reorganized.records().enumerate() {
        println!(
            "Position {i}: Label {}, Class {}, Name {}, Output {}",
            r.generation_label, r.generation_class, r.class_name, r.output_label
        );
    }
}

fn print_summary(summary: &ReorgSummary) {
    println!("Background record: input index {}", summary.background_index);
    println!(
        "Non-sided structures ({}): {:?}",
        summary.non_sided.len(),
        summary.non_sided
    );
    if !summary.unmatched.is_empty() {
        println!(
            "Unmatched labels ({}), appended to non-sided: {:?}",
            summary.unmatched.len(),
            summary.unmatched
        );
    }
    println!("Left structures ({}): {:?}", summary.left.len(), summary.left);
    println!(
        "Right structures ({}): {:?}",
        summary.right.len(),
        summary.right
    );
}
