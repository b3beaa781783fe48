//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 目標件数として解釈できない入力（0以下・非数値）
    #[error("Invalid target count: {0:?}")]
    InvalidTarget(String),

    /// ページ番号は1始まり
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
