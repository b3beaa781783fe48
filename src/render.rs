//! ページ表示
//!
//! 表示中ページをテーブルに整形する。選択表示は台帳から導出したものを使う。

use artwork_browser_common::{page_report, Artwork, PageViewController};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const SELECTED_MARK: &str = "[x]";
const UNSELECTED_MARK: &str = "[ ]";

/// 表示中ページのテーブル
pub fn page_table(view: &PageViewController<Artwork>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell(""),
            header_cell("Code"),
            header_cell("Name"),
            header_cell("Artist"),
            header_cell("Origin"),
            header_cell("Date"),
            header_cell("Inscriptions"),
        ]);

    for artwork in view.items() {
        let selected = view.is_rendered_selected(artwork.id);
        let mark = if selected {
            Cell::new(SELECTED_MARK).fg(Color::Green)
        } else {
            Cell::new(UNSELECTED_MARK)
        };
        table.add_row(vec![
            mark,
            Cell::new(artwork.id).set_alignment(CellAlignment::Right),
            Cell::new(artwork.display_title()),
            Cell::new(artwork.display_artist()),
            Cell::new(artwork.display_origin()),
            Cell::new(artwork.display_date()),
            Cell::new(artwork.display_inscriptions()),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

/// 選択件数・ページ位置の表示
pub fn status_lines(view: &PageViewController<Artwork>) -> Vec<String> {
    let mut lines = vec![format!(
        "Selected: {} items across all pages",
        view.total_selected()
    )];
    if view.target_count() > 0 {
        lines.push(format!("Target: {}", view.target_count()));
    }
    lines.push(format!(
        "Current page: {} / {}",
        view.current_page(),
        view.total_pages()
    ));
    lines.push(page_report(
        view.current_page(),
        view.page_size(),
        view.items().len(),
        view.total_records(),
    ));
    lines
}

/// テーブルと状態表示をまとめて文字列化
pub fn render_page(view: &PageViewController<Artwork>) -> String {
    let mut out = page_table(view).to_string();
    for line in status_lines(view) {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

/// 行の選択ラベル（複数選択プロンプト用）
pub fn row_label(artwork: &Artwork) -> String {
    format!(
        "{:>8}  {}  /  {}",
        artwork.id,
        artwork.display_title(),
        artwork.display_artist()
    )
}
