// src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// レポートの出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人間向けのテキスト
    #[default]
    Text,
    Json,
    Yaml,
    /// Markdown テーブル
    Md,
}
