//! APIレスポンスパーサー
//!
//! artworks エンドポイントのJSONをページ取得結果に変換する

use crate::error::Result;
use crate::types::{Artwork, ArtworkResponse, PageData};

/// 取得対象フィールド（リクエストの `fields` パラメータ）
pub const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// artworks レスポンスをパース
///
/// 欠落した属性は `None` になる。総件数は `pagination.total` を使う。
///
/// # Examples
/// ```
/// use artwork_browser_common::parse_artwork_response;
///
/// let body = r#"{"data":[{"id":1,"title":"Nighthawks"}],
///               "pagination":{"total":40,"limit":12,"offset":0,"total_pages":4,"current_page":1}}"#;
/// let page = parse_artwork_response(body).unwrap();
/// assert_eq!(page.items.len(), 1);
/// assert_eq!(page.pagination.total, 40);
/// ```
pub fn parse_artwork_response(body: &str) -> Result<PageData<Artwork>> {
    let response: ArtworkResponse = serde_json::from_str(body)?;
    Ok(PageData::from(response))
}
