//! 選択台帳
//!
//! 表示中のページとは独立に、ページ横断の選択状態をIDで記録する。
//!
//! - `selected`: 現在選択されているID
//! - `deselected`: ユーザーが明示的に外したID（自動選択の対象にならない）
//! - `auto_selected`: `selected` のうち自動選択で入ったID（縮小時の削除候補）
//! - `target_count`: 最後に指定された目標件数（0 = 目標なし）
//!
//! 不変条件: `auto_selected ⊆ selected`、`selected ∩ deselected = ∅`。
//! 各集合は挿入順を保持し、削除しても残りの順序は変わらない。

use crate::types::ItemId;
use indexmap::IndexSet;
use tracing::trace;

/// 1件ごとの選択状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// まだ一度も選択・解除されていない
    Unknown,
    /// 目標件数を満たすために自動選択された
    AutoSelected,
    /// ユーザーが明示的に選択した
    ExplicitlySelected,
    /// ユーザーが明示的に解除した
    Deselected,
}

impl ItemState {
    pub fn is_selected(self) -> bool {
        matches!(self, ItemState::AutoSelected | ItemState::ExplicitlySelected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLedger {
    pub(crate) selected: IndexSet<ItemId>,
    pub(crate) deselected: IndexSet<ItemId>,
    pub(crate) auto_selected: IndexSet<ItemId>,
    pub(crate) target_count: usize,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 明示的に選択（解除記録・自動選択印を消す）
    pub fn record_explicit_select(&mut self, id: ItemId) {
        self.selected.insert(id);
        self.deselected.shift_remove(&id);
        self.auto_selected.shift_remove(&id);
        trace!(id, "explicit select");
    }

    /// 明示的に解除（以後の自動選択から除外）
    pub fn record_explicit_deselect(&mut self, id: ItemId) {
        self.selected.shift_remove(&id);
        self.auto_selected.shift_remove(&id);
        self.deselected.insert(id);
        trace!(id, "explicit deselect");
    }

    /// すべての選択と目標件数をリセット
    pub fn clear_all(&mut self) {
        self.selected.clear();
        self.deselected.clear();
        self.auto_selected.clear();
        self.target_count = 0;
    }

    /// 選択件数（全ページ合計）
    pub fn size(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_deselected(&self, id: ItemId) -> bool {
        self.deselected.contains(&id)
    }

    pub fn is_auto_selected(&self, id: ItemId) -> bool {
        self.auto_selected.contains(&id)
    }

    pub fn item_state(&self, id: ItemId) -> ItemState {
        if self.auto_selected.contains(&id) {
            ItemState::AutoSelected
        } else if self.selected.contains(&id) {
            ItemState::ExplicitlySelected
        } else if self.deselected.contains(&id) {
            ItemState::Deselected
        } else {
            ItemState::Unknown
        }
    }

    /// 選択中のID（挿入順）
    pub fn selected_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.selected.iter().copied()
    }

    pub fn deselected_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.deselected.iter().copied()
    }

    /// 自動選択されたID（古い順）
    pub fn auto_selected_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.auto_selected.iter().copied()
    }
}
