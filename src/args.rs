// src/args.rs
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "count_loops",
    version,
    about = "C ソースのループ構文 (while / do-while / for) 集計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub preprocess: PreprocessOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub log: LogOptions,

    /// 走査するルートディレクトリ
    #[arg(value_hint = ValueHint::DirPath, default_value = ".", help_heading = "走査/入力")]
    pub root: PathBuf,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct PreprocessOptions {
    /// インクルード検索パス（複数可）
    #[arg(short = 'I', long = "include-dir", value_hint = ValueHint::DirPath, help_heading = "プリプロセス")]
    pub include_dirs: Vec<PathBuf>,

    /// マクロ定義 NAME[=VALUE]（複数可）
    #[arg(short = 'D', long = "define", value_parser = parsers::parse_define, help_heading = "プリプロセス")]
    pub defines: Vec<String>,

    /// プリプロセッサの実行ファイル
    #[arg(long, value_hint = ValueHint::ExecutablePath, help_heading = "プリプロセス")]
    pub cpp: Option<PathBuf>,

    /// プリプロセッサへそのまま渡す追加引数（複数可）
    #[arg(long = "cpp-arg", allow_hyphen_values = true, help_heading = "プリプロセス")]
    pub cpp_args: Vec<String>,

    /// プリプロセスせずにそのまま解析する
    #[arg(long, help_heading = "プリプロセス")]
    pub no_cpp: bool,

    /// GNU 拡張構文の除去を無効化
    #[arg(long, help_heading = "プリプロセス")]
    pub no_sanitize: bool,

    /// 構文エラーを含むファイルも集計する
    #[arg(long, help_heading = "プリプロセス")]
    pub lenient: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// .gitignore / .ignore を尊重
    #[arg(long, help_heading = "走査/入力")]
    pub gitignore: bool,

    /// 除外するパスパターン（glob, 複数可）
    #[arg(long, help_heading = "走査/入力")]
    pub exclude: Vec<String>,

    /// 並列数（0 で全 CPU）
    #[arg(short = 'j', long, default_value_t = 1, value_parser = parsers::parse_jobs, help_heading = "走査/入力")]
    pub jobs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ファイル別件数と合計の JSON
    #[default]
    Json,
    /// ファイル別件数の CSV
    Csv,
    /// ディレクトリ別集計の CSV
    Dirs,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力形式
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json, help_heading = "出力")]
    pub format: OutputFormat,

    /// ディレクトリ別集計で使う階層の深さ（省略時は親ディレクトリ全体）
    #[arg(long, value_parser = parsers::parse_depth, help_heading = "出力")]
    pub dir_depth: Option<usize>,

    /// ファイル名をルートからの相対パスで出力
    #[arg(long, help_heading = "出力")]
    pub relative_names: bool,

    /// 1 行の JSON で出力
    #[arg(long, help_heading = "出力")]
    pub compact: bool,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct LogOptions {
    /// ログを詳細にする（-v, -vv, -vvv）
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// ログを抑制する（-q, -qq）
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count, help_heading = "ログ")]
    pub quiet: u8,
}
