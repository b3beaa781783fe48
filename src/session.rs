//! ブラウズセッション
//!
//! データソースとページビュー制御をまとめ、ページ移動と選択操作を提供する。
//! 取得に失敗した場合は選択状態も表示中ページもそのまま残る。

use crate::error::Result;
use crate::source::PageSource;
use artwork_browser_common::{
    parse_target, Artwork, ItemId, LoadOutcome, PageViewController, SelectionChange,
};
use tracing::{debug, warn};

pub struct BrowserSession<S> {
    source: S,
    view: PageViewController<Artwork>,
}

impl<S: PageSource> BrowserSession<S> {
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            view: PageViewController::new(page_size),
        }
    }

    /// 指定ページを読み込む
    pub async fn open(&mut self, page: u32) -> Result<LoadOutcome> {
        let ticket = self.view.begin_load(page)?;
        let result = self.source.fetch_page(page, self.view.page_size()).await;
        if let Err(e) = &result {
            warn!(page, error = %e, "page fetch failed");
        }
        Ok(self.view.complete_load(ticket, result)?)
    }

    /// 次のページへ（最終ページなら `None`）
    pub async fn next_page(&mut self) -> Result<Option<LoadOutcome>> {
        if !self.view.has_next_page() {
            return Ok(None);
        }
        let page = self.view.current_page() + 1;
        self.open(page).await.map(Some)
    }

    /// 前のページへ（先頭ページなら `None`）
    pub async fn prev_page(&mut self) -> Result<Option<LoadOutcome>> {
        if !self.view.has_prev_page() {
            return Ok(None);
        }
        let page = self.view.current_page() - 1;
        self.open(page).await.map(Some)
    }

    /// 目標件数の入力を適用
    ///
    /// 不正な入力は何も変更せずに無視し、`false` を返す。
    pub fn submit_target(&mut self, input: &str) -> bool {
        let applied = parse_target(input).and_then(|n| self.view.set_target(n));
        match applied {
            Ok(change) => {
                debug!(
                    trimmed = change.trimmed.len(),
                    claimed = change.claimed.len(),
                    "target applied"
                );
                true
            }
            Err(e) => {
                debug!(error = %e, "target input ignored");
                false
            }
        }
    }

    /// 表示中ページの選択状態を反映
    pub fn apply_visible_selection<I>(&mut self, ids: I) -> SelectionChange
    where
        I: IntoIterator<Item = ItemId>,
    {
        self.view.on_user_selection_change(ids)
    }

    pub fn select_page(&mut self) -> SelectionChange {
        self.view.select_all_on_page()
    }

    pub fn deselect_page(&mut self) -> SelectionChange {
        self.view.deselect_all_on_page()
    }

    pub fn clear_all(&mut self) {
        self.view.clear_all();
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn view(&self) -> &PageViewController<Artwork> {
        &self.view
    }

    /// 全ページの選択ID
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.view.ledger().selected_ids().collect()
    }
}
