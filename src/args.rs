// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;
use text_stats_domain::DEFAULT_TOP_N;

#[derive(Parser, Debug)]
#[command(name = "text_stats", version, about = "テキストの統計情報を表示する")]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 解析するテキストファイル（省略時または "-" で標準入力）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 単語出現頻度も表示する
    #[arg(long, help_heading = "出力")]
    pub freq: bool,

    /// 出現頻度の上位何件を表示するか
    #[arg(long, default_value_t = DEFAULT_TOP_N, value_parser = parsers::parse_top_n, help_heading = "出力")]
    pub top: usize,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// ログを詳細にする (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
