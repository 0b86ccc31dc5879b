//! The three selectors both pages are scraped with, compiled on first use.

use std::sync::OnceLock;

use scraper::Selector;

fn compiled(cell: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cell.get_or_init(|| {
        Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css}: {e:?}"))
    })
}

/// `h1`, `h2` and `h3`, the levels menu and gallery headings use.
pub fn headings() -> &'static Selector {
    static CELL: OnceLock<Selector> = OnceLock::new();
    compiled(&CELL, "h1, h2, h3")
}

pub fn headers() -> &'static Selector {
    static CELL: OnceLock<Selector> = OnceLock::new();
    compiled(&CELL, "header")
}

pub fn images() -> &'static Selector {
    static CELL: OnceLock<Selector> = OnceLock::new();
    compiled(&CELL, "img")
}
