//! ページビュー制御
//!
//! 選択台帳と表示中のページを橋渡しする。
//!
//! - ページ読み込み時: 自動選択で目標件数を埋める
//! - 表示上の選択変更: 変化した行だけを台帳に反映し、目標超過なら縮小
//! - 表示する選択行は常に台帳から導出する（独立に保持しない）
//!
//! ページ取得は `begin_load` / `complete_load` で直列化する。
//! 後から開始した読み込みがあれば、古い読み込みの結果は捨てる。

use crate::error::{Error, Result};
use crate::ledger::SelectionLedger;
use crate::types::{ItemId, PageData, Selectable};
use std::collections::HashSet;
use tracing::{debug, info};

/// 読み込み要求の識別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    page: u32,
    generation: u64,
}

impl LoadTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// 読み込み結果の適用状況
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// ページを差し替えた
    Applied,
    /// 新しい読み込みが開始済みのため破棄した
    Stale,
}

/// 表示上の選択変更を台帳に反映した結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    /// 明示的に選択されたID
    pub selected: Vec<ItemId>,
    /// 明示的に解除されたID
    pub deselected: Vec<ItemId>,
    /// 目標超過のため外した自動選択ID
    pub trimmed: Vec<ItemId>,
}

/// 目標件数の変更結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetChange {
    pub trimmed: Vec<ItemId>,
    pub claimed: Vec<ItemId>,
}

#[derive(Debug, Clone)]
pub struct PageViewController<T> {
    ledger: SelectionLedger,
    items: Vec<T>,
    current_page: u32,
    page_size: u32,
    total_records: u64,
    generation: u64,
    loading: bool,
}

impl<T: Selectable> PageViewController<T> {
    /// 空の台帳で作成（ページサイズ 0 は 1 として扱う）
    pub fn new(page_size: u32) -> Self {
        Self {
            ledger: SelectionLedger::new(),
            items: Vec::new(),
            current_page: 0,
            page_size: page_size.max(1),
            total_records: 0,
            generation: 0,
            loading: false,
        }
    }

    /// ページ読み込みを開始
    ///
    /// これ以前に発行したチケットはすべて古くなる。
    pub fn begin_load(&mut self, page: u32) -> Result<LoadTicket> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }
        self.generation += 1;
        self.loading = true;
        debug!(page, generation = self.generation, "page load started");
        Ok(LoadTicket {
            page,
            generation: self.generation,
        })
    }

    /// 読み込み結果を適用
    ///
    /// - 古いチケット: 何もせず `Stale`
    /// - 取得失敗: 台帳・表示中ページを変えずにエラーを返す
    /// - 成功: ページを差し替えて自動選択
    pub fn complete_load<E>(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<PageData<T>, E>,
    ) -> std::result::Result<LoadOutcome, E> {
        if ticket.generation != self.generation {
            debug!(page = ticket.page, "discarding stale page load");
            return Ok(LoadOutcome::Stale);
        }
        self.loading = false;

        let page = result?;
        self.current_page = ticket.page;
        self.total_records = page.pagination.total;
        self.on_page_loaded(page.items);
        Ok(LoadOutcome::Applied)
    }

    /// 新しいページを表示して自動選択
    ///
    /// 戻り値は自動選択されたID。
    pub fn on_page_loaded(&mut self, items: Vec<T>) -> Vec<ItemId> {
        self.items = items;
        let claimed = self.ledger.fill_target(&self.items);
        info!(
            page = self.current_page,
            rows = self.items.len(),
            selected = self.ledger.size(),
            "page loaded"
        );
        claimed
    }

    /// 表示上の選択を台帳に反映
    ///
    /// 表示中ページの行だけを対象とし、選択状態が変わった行だけを記録する。
    /// 変化のない自動選択行はそのまま自動選択として残る。
    pub fn on_user_selection_change<I>(&mut self, visible_selection: I) -> SelectionChange
    where
        I: IntoIterator<Item = ItemId>,
    {
        let visible: HashSet<ItemId> = visible_selection.into_iter().collect();
        let mut change = SelectionChange::default();

        for item in &self.items {
            let id = item.id();
            let was_selected = self.ledger.is_selected(id);
            let is_selected = visible.contains(&id);

            if !was_selected && is_selected {
                self.ledger.record_explicit_select(id);
                change.selected.push(id);
            } else if was_selected && !is_selected {
                self.ledger.record_explicit_deselect(id);
                change.deselected.push(id);
            }
        }

        change.trimmed = self.ledger.shrink_to_target();
        change
    }

    /// 表示中ページの全行を選択
    pub fn select_all_on_page(&mut self) -> SelectionChange {
        let ids: Vec<ItemId> = self.items.iter().map(Selectable::id).collect();
        self.on_user_selection_change(ids)
    }

    /// 表示中ページの全行を解除
    pub fn deselect_all_on_page(&mut self) -> SelectionChange {
        self.on_user_selection_change(std::iter::empty())
    }

    /// 目標件数を設定
    ///
    /// 超過分を自動選択から外し、表示中ページで不足分を埋める。
    /// 0 は拒否し、何も変更しない。
    pub fn set_target(&mut self, n: usize) -> Result<TargetChange> {
        let trimmed = self.ledger.set_target_count(n)?;
        let claimed = self.ledger.fill_target(&self.items);
        info!(target = n, selected = self.ledger.size(), "target count set");
        Ok(TargetChange { trimmed, claimed })
    }

    /// すべての選択を解除して目標をリセット
    pub fn clear_all(&mut self) {
        self.ledger.clear_all();
        info!("selection cleared");
    }

    /// 表示中ページで選択表示する行
    pub fn rendered_selection(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.is_rendered_selected(item.id()))
            .collect()
    }

    pub fn rendered_selection_ids(&self) -> Vec<ItemId> {
        self.rendered_selection().into_iter().map(Selectable::id).collect()
    }

    pub fn is_rendered_selected(&self, id: ItemId) -> bool {
        self.ledger.is_selected(id) && !self.ledger.is_deselected(id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    /// 選択件数（全ページ合計）
    pub fn total_selected(&self) -> usize {
        self.ledger.size()
    }

    pub fn target_count(&self) -> usize {
        self.ledger.target_count()
    }

    /// 表示中のページ番号（未読み込みなら 0）
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total_records.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
