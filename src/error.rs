use thiserror::Error;

/// ページ取得エラー
///
/// 取得に失敗しても選択状態と表示中のページは変更されない。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("ページ番号・ページサイズは1以上: page={page}, page_size={page_size}")]
    InvalidRequest { page: u32, page_size: u32 },

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("サーバーエラー ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("レスポンスの解析に失敗: {0}")]
    Decode(#[from] artwork_browser_common::Error),
}

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ページ取得エラー: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Selection(#[from] artwork_browser_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for BrowserError {
    fn from(e: dialoguer::Error) -> Self {
        BrowserError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
