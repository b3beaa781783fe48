use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artwork-browser")]
#[command(about = "作品コレクションをページ単位で閲覧し、ページをまたいで選択するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話式にページを閲覧・選択
    Browse {
        /// 最初に表示するページ
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// 1ページの件数（省略時は設定値）
        #[arg(long)]
        page_size: Option<u32>,

        /// 選択する合計件数（開始時に指定）
        #[arg(short, long)]
        target: Option<String>,

        /// 終了時に選択IDをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 1ページを取得して表示
    Page {
        /// ページ番号
        #[arg(default_value = "1")]
        page: u32,

        /// 1ページの件数（省略時は設定値）
        #[arg(long)]
        page_size: Option<u32>,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 1ページの件数を設定
        #[arg(long)]
        set_page_size: Option<u32>,

        /// デフォルト設定に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "t" => Ok(OutputFormat::Table),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
