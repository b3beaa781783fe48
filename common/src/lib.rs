//! Artwork Browser Common Library
//!
//! ページ横断選択のコア（I/Oなし）
//!
//! - ledger: 選択台帳
//! - auto_select: 目標件数までの自動選択と縮小
//! - page_view: 表示中ページと台帳の橋渡し、読み込みの直列化

pub mod types;
pub mod error;
pub mod parser;
pub mod display;
pub mod ledger;
pub mod auto_select;
pub mod page_view;

pub use types::{Artwork, ArtworkApiItem, ArtworkResponse, ItemId, PageData, PageSummary, Selectable};
pub use error::{Error, Result};
pub use parser::{parse_artwork_response, ARTWORK_FIELDS};
pub use display::page_report;
pub use ledger::{ItemState, SelectionLedger};
pub use auto_select::parse_target;
pub use page_view::{LoadOutcome, LoadTicket, PageViewController, SelectionChange, TargetChange};
