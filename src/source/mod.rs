//! ページデータソース
//!
//! ページ番号とページサイズを受け取り、そのページの行と総件数を返す。
//! 呼び出しごとに状態を持たない。

mod artic;

pub use artic::ArticClient;

use crate::error::FetchError;
use artwork_browser_common::{Artwork, PageData};
use async_trait::async_trait;

#[async_trait]
pub trait PageSource: Send + Sync {
    /// 1始まりのページを取得
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<PageData<Artwork>, FetchError>;
}
