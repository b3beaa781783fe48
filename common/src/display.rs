//! 表示用フォールバック
//!
//! 欠落した属性をテーブル表示向けの文字列に置き換える

use crate::types::Artwork;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN: &str = "Unknown";

impl Artwork {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn display_artist(&self) -> &str {
        self.artist_display.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    pub fn display_origin(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_inscriptions(&self) -> &str {
        self.inscriptions.as_deref().unwrap_or("")
    }

    /// 制作年（開始・終了がそろえば範囲表示）
    pub fn display_date(&self) -> String {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) => format!("{} - {}", start, end),
            (Some(start), None) => start.to_string(),
            _ => UNKNOWN.to_string(),
        }
    }
}

/// ページャーの表示範囲
///
/// "Showing {first} to {last} of {total} entries"
pub fn page_report(page: u32, page_size: u32, item_count: usize, total: u64) -> String {
    if item_count == 0 {
        return format!("Showing 0 to 0 of {} entries", total);
    }
    let first = u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1;
    let last = first + item_count as u64 - 1;
    format!("Showing {} to {} of {} entries", first, last, total)
}
