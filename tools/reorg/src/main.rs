//! priors 数组重组工具.
//!
//! 无参数. 从 `$PRIORS_DIR` (或 `$HOME/priors`) 加载四个 priors 文件,
//! 重排为规范解剖顺序后以 `_reorganized` 后缀写回同一目录, 并打印重组摘要.
//!
//! 任一前置条件失败 (文件缺失, 列长不一致, 空表) 都会在写出任何文件之前中止.

mod runner;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("logger 初始化失败");

    runner::run();
}
