//! 作品データの型定義
//!
//! - Artwork: 画面に表示する1行（選択対象）
//! - ArtworkApiItem / ArtworkResponse: artworks エンドポイントのペイロード
//! - PageData: ページ取得結果（行 + 総件数）

use serde::{Deserialize, Serialize};

/// 選択対象の識別子
pub type ItemId = u64;

/// 安定したIDを持つ選択可能な行
pub trait Selectable {
    fn id(&self) -> ItemId;
}

/// 作品（表示用の属性はすべて欠落しうる）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ItemId,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl Selectable for Artwork {
    fn id(&self) -> ItemId {
        self.id
    }
}

/// APIから返る作品1件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtworkApiItem {
    pub id: ItemId,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl From<ArtworkApiItem> for Artwork {
    fn from(item: ArtworkApiItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            place_of_origin: item.place_of_origin,
            artist_display: item.artist_display,
            inscriptions: item.inscriptions,
            date_start: item.date_start,
            date_end: item.date_end,
        }
    }
}

/// APIのページ情報
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiPagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// APIのライセンス情報
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
    pub license_text: Option<String>,
    pub license_links: Option<Vec<String>>,
    pub version: Option<String>,
}

/// artworks エンドポイントのレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkResponse {
    pub data: Vec<ArtworkApiItem>,
    pub pagination: ApiPagination,
    #[serde(default)]
    pub info: Option<ApiInfo>,
}

/// ページの位置と総件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub total: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

/// 1ページ分の取得結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub pagination: PageSummary,
}

impl<T> PageData<T> {
    pub fn new(items: Vec<T>, pagination: PageSummary) -> Self {
        Self { items, pagination }
    }
}

impl From<ArtworkResponse> for PageData<Artwork> {
    fn from(response: ArtworkResponse) -> Self {
        let pagination = PageSummary {
            total: response.pagination.total,
            current_page: response.pagination.current_page,
            total_pages: response.pagination.total_pages,
        };
        let items = response.data.into_iter().map(Artwork::from).collect();
        Self { items, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_from_api_item() {
        let item = ArtworkApiItem {
            id: 27992,
            title: Some("A Sunday on La Grande Jatte".into()),
            date_start: Some(1884),
            ..Default::default()
        };
        let artwork = Artwork::from(item);
        assert_eq!(artwork.id(), 27992);
        assert_eq!(artwork.title.as_deref(), Some("A Sunday on La Grande Jatte"));
        assert_eq!(artwork.date_start, Some(1884));
        assert!(artwork.artist_display.is_none());
    }
}
