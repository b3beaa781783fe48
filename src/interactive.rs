//! 対話式ブラウザ
//!
//! ページを表示し、ページ移動・行の選択・目標件数の指定を繰り返す。

use crate::error::Result;
use crate::render;
use crate::session::BrowserSession;
use crate::source::PageSource;
use artwork_browser_common::{ItemId, LoadOutcome};
use dialoguer::{Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// 次のページ
    Next,
    /// 前のページ
    Prev,
    /// ページ番号を指定
    GoTo,
    /// 行の選択を切り替え
    Toggle,
    /// このページを全選択
    SelectPage,
    /// このページを全解除
    DeselectPage,
    /// 目標件数を指定
    Target,
    /// すべて解除
    Clear,
    /// 終了
    Quit,
}

impl BrowseAction {
    pub const ALL: [BrowseAction; 9] = [
        BrowseAction::Next,
        BrowseAction::Prev,
        BrowseAction::GoTo,
        BrowseAction::Toggle,
        BrowseAction::SelectPage,
        BrowseAction::DeselectPage,
        BrowseAction::Target,
        BrowseAction::Clear,
        BrowseAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BrowseAction::Next => "次のページ",
            BrowseAction::Prev => "前のページ",
            BrowseAction::GoTo => "ページ番号を指定",
            BrowseAction::Toggle => "行を選択/解除",
            BrowseAction::SelectPage => "このページを全選択",
            BrowseAction::DeselectPage => "このページを全解除",
            BrowseAction::Target => "件数を指定して選択",
            BrowseAction::Clear => "すべて解除",
            BrowseAction::Quit => "終了",
        }
    }
}

/// 対話式でブラウズ
///
/// 終了時に選択されたID（全ページ）を返す。
pub async fn run_browser<S: PageSource>(
    session: &mut BrowserSession<S>,
    start_page: u32,
    initial_target: Option<&str>,
) -> Result<Vec<ItemId>> {
    if let Some(target) = initial_target {
        session.submit_target(target);
    }
    load_with_spinner(session, Loading::Open(start_page)).await?;

    let labels: Vec<&str> = BrowseAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        println!("\n{}\n", render::render_page(session.view()));

        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()?;

        match BrowseAction::ALL[choice] {
            BrowseAction::Next => {
                if !session.view().has_next_page() {
                    println!("→ 最終ページです");
                    continue;
                }
                report_load(load_with_spinner(session, Loading::Next).await);
            }
            BrowseAction::Prev => {
                if !session.view().has_prev_page() {
                    println!("→ 先頭ページです");
                    continue;
                }
                report_load(load_with_spinner(session, Loading::Prev).await);
            }
            BrowseAction::GoTo => {
                let page: u32 = Input::new()
                    .with_prompt(format!("ページ番号 [1-{}]", session.view().total_pages()))
                    .validate_with(|n: &u32| {
                        if *n >= 1 {
                            Ok(())
                        } else {
                            Err("1以上を入力してください")
                        }
                    })
                    .interact_text()?;
                report_load(load_with_spinner(session, Loading::Open(page)).await);
            }
            BrowseAction::Toggle => {
                prompt_toggle(session)?;
            }
            BrowseAction::SelectPage => {
                let change = session.select_page();
                println!("→ {}件を選択", change.selected.len());
            }
            BrowseAction::DeselectPage => {
                let change = session.deselect_page();
                println!("→ {}件を解除", change.deselected.len());
            }
            BrowseAction::Target => {
                let input: String = Input::new()
                    .with_prompt("選択する合計件数 (例: 20)")
                    .allow_empty(true)
                    .interact_text()?;
                // 不正な入力は黙って無視する
                session.submit_target(&input);
            }
            BrowseAction::Clear => {
                session.clear_all();
                println!("→ すべての選択を解除しました");
            }
            BrowseAction::Quit => break,
        }
    }

    Ok(session.selected_ids())
}

/// 行の選択状態を複数選択で編集
fn prompt_toggle<S: PageSource>(session: &mut BrowserSession<S>) -> Result<()> {
    let view = session.view();
    if view.items().is_empty() {
        println!("→ 行がありません");
        return Ok(());
    }

    let labels: Vec<String> = view.items().iter().map(render::row_label).collect();
    let defaults: Vec<bool> = view
        .items()
        .iter()
        .map(|a| view.is_rendered_selected(a.id))
        .collect();
    let ids: Vec<ItemId> = view.items().iter().map(|a| a.id).collect();

    let chosen = MultiSelect::new()
        .with_prompt("選択する行 (Spaceで切替, Enterで確定)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let change = session.apply_visible_selection(chosen.into_iter().map(|i| ids[i]));
    println!(
        "→ 選択 {}件 / 解除 {}件{}",
        change.selected.len(),
        change.deselected.len(),
        if change.trimmed.is_empty() {
            String::new()
        } else {
            format!(" / 目標超過のため自動選択 {}件を解除", change.trimmed.len())
        }
    );
    Ok(())
}

enum Loading {
    Open(u32),
    Next,
    Prev,
}

/// 読み込み中はスピナーを表示
async fn load_with_spinner<S: PageSource>(
    session: &mut BrowserSession<S>,
    loading: Loading,
) -> Result<Option<LoadOutcome>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("読み込み中...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = match loading {
        Loading::Open(page) => session.open(page).await.map(Some),
        Loading::Next => session.next_page().await,
        Loading::Prev => session.prev_page().await,
    };

    spinner.finish_and_clear();
    result
}

/// 取得失敗は表示して続行（前のページのまま）
fn report_load(result: Result<Option<LoadOutcome>>) {
    if let Err(e) = result {
        println!("⚠ {}", e);
        println!("  前のページを表示したままです。再度お試しください");
    }
}
