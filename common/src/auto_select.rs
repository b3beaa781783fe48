//! 自動選択エンジン
//!
//! 目標件数が指定されている間、新しく表示されたページの行を
//! 表示順に先頭から選択して不足分を埋める。目標を下げたときは
//! 自動選択されたIDだけを古い順に外す。明示的な選択は外さない。

use crate::error::{Error, Result};
use crate::ledger::SelectionLedger;
use crate::types::{ItemId, Selectable};
use tracing::debug;

impl SelectionLedger {
    /// ページの行で目標件数まで埋める
    ///
    /// 既に選択済み、または明示的に解除された行は飛ばす。
    /// 目標なし・目標到達済みの場合は何もしない。
    /// 戻り値は今回自動選択したID（表示順）。
    pub fn fill_target<T: Selectable>(&mut self, items: &[T]) -> Vec<ItemId> {
        let mut claimed = Vec::new();
        if self.target_count == 0 {
            return claimed;
        }

        for item in items {
            if self.selected.len() >= self.target_count {
                break;
            }
            let id = item.id();
            if self.selected.contains(&id) || self.deselected.contains(&id) {
                continue;
            }
            self.selected.insert(id);
            self.auto_selected.insert(id);
            claimed.push(id);
        }

        if !claimed.is_empty() {
            debug!(
                claimed = claimed.len(),
                selected = self.selected.len(),
                target = self.target_count,
                "auto-selected rows"
            );
        }
        claimed
    }

    /// 目標件数を超えた分を自動選択から外す
    ///
    /// 自動選択の古い順に外す。自動選択が尽きた場合は
    /// 目標を超えたまま残る（明示的な選択は外さない）。
    pub fn shrink_to_target(&mut self) -> Vec<ItemId> {
        let mut removed = Vec::new();
        if self.target_count == 0 {
            return removed;
        }

        while self.selected.len() > self.target_count {
            let Some(id) = self.auto_selected.shift_remove_index(0) else {
                break;
            };
            self.selected.shift_remove(&id);
            removed.push(id);
        }

        if !removed.is_empty() {
            debug!(
                removed = removed.len(),
                selected = self.selected.len(),
                target = self.target_count,
                "trimmed auto-selected rows"
            );
        }
        removed
    }

    /// 目標件数を設定して縮小
    ///
    /// 0 は拒否し、台帳は変更しない。
    pub fn set_target_count(&mut self, n: usize) -> Result<Vec<ItemId>> {
        if n == 0 {
            return Err(Error::InvalidTarget(n.to_string()));
        }
        self.target_count = n;
        Ok(self.shrink_to_target())
    }
}

/// 目標件数の入力をパース
///
/// 前後の空白は無視する。数値でない・0以下は `Error::InvalidTarget`。
pub fn parse_target(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidTarget(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(ItemId);

    impl Selectable for Row {
        fn id(&self) -> ItemId {
            self.0
        }
    }

    fn rows(ids: &[ItemId]) -> Vec<Row> {
        ids.iter().copied().map(Row).collect()
    }

    #[test]
    fn test_fill_without_target_is_noop() {
        let mut ledger = SelectionLedger::new();
        assert!(ledger.fill_target(&rows(&[1, 2, 3])).is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_fill_in_page_order() {
        let mut ledger = SelectionLedger::new();
        ledger.set_target_count(2).unwrap();

        let claimed = ledger.fill_target(&rows(&[30, 10, 20]));
        assert_eq!(claimed, vec![30, 10]);
        assert!(ledger.is_auto_selected(30));
        assert!(ledger.is_auto_selected(10));
        assert!(!ledger.is_selected(20));
    }

    #[test]
    fn test_fill_skips_selected_and_deselected() {
        let mut ledger = SelectionLedger::new();
        ledger.record_explicit_select(1);
        ledger.record_explicit_deselect(2);
        ledger.set_target_count(3).unwrap();

        let claimed = ledger.fill_target(&rows(&[1, 2, 3, 4, 5]));
        assert_eq!(claimed, vec![3, 4]);
        assert!(!ledger.is_auto_selected(1));
        assert!(ledger.is_deselected(2));
        assert_eq!(ledger.size(), 3);
    }

    #[test]
    fn test_fill_when_target_reached() {
        let mut ledger = SelectionLedger::new();
        ledger.record_explicit_select(1);
        ledger.set_target_count(1).unwrap();
        assert!(ledger.fill_target(&rows(&[2, 3])).is_empty());
    }

    #[test]
    fn test_shrink_removes_oldest_auto_first() {
        let mut ledger = SelectionLedger::new();
        ledger.set_target_count(5).unwrap();
        ledger.fill_target(&rows(&[1, 2, 3]));
        ledger.fill_target(&rows(&[4, 5]));

        let removed = ledger.set_target_count(3).unwrap();
        assert_eq!(removed, vec![1, 2]);
        assert_eq!(ledger.selected_ids().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(ledger.target_count(), 3);
    }

    #[test]
    fn test_shrink_never_removes_explicit() {
        let mut ledger = SelectionLedger::new();
        for id in [1, 2, 3] {
            ledger.record_explicit_select(id);
        }
        ledger.set_target_count(5).unwrap();
        ledger.fill_target(&rows(&[4, 5]));

        let removed = ledger.set_target_count(1).unwrap();
        assert_eq!(removed, vec![4, 5]);
        // 自動選択が尽きたので目標超過のまま
        assert_eq!(ledger.size(), 3);
        assert_eq!(ledger.target_count(), 1);
    }

    #[test]
    fn test_set_target_zero_rejected() {
        let mut ledger = SelectionLedger::new();
        ledger.set_target_count(4).unwrap();
        ledger.fill_target(&rows(&[1, 2]));
        let before = ledger.clone();

        assert!(matches!(ledger.set_target_count(0), Err(Error::InvalidTarget(_))));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("20").unwrap(), 20);
        assert_eq!(parse_target("  7\n").unwrap(), 7);
        assert!(parse_target("0").is_err());
        assert!(parse_target("-3").is_err());
        assert!(parse_target("abc").is_err());
        assert!(parse_target("").is_err());
        assert!(parse_target("1.5").is_err());
    }
}
