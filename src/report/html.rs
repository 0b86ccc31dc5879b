use super::{ExtractionReport, ASSETS_DIR, REPORT_FILE};
use crate::config::Config;

const STYLE: &str = r"
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 0; padding: 24px; background: #f6f7f9; }
    .wrap { max-width: 980px; margin: 0 auto; }
    header { margin-bottom: 16px; }
    .meta { color: #555; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 12px; }
    .card { background: white; border-radius: 14px; padding: 14px 16px; box-shadow: 0 1px 8px rgba(0,0,0,0.06); }
    h1 { margin: 0 0 6px 0; font-size: 22px; }
    h2 { margin: 0 0 10px 0; font-size: 18px; }
    ul { margin: 0; padding-left: 18px; }
    img { width: 100%; height: auto; border-radius: 12px; }
    pre { white-space: pre-wrap; word-break: break-word; }
    a { color: inherit; }
    footer { margin-top: 18px; color: #666; font-size: 13px; }
";

/// Escapes the five characters that matter in text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The `index.html` page. Every scraped string goes through [`escape_html`].
pub fn render_html(report: &ExtractionReport, config: &Config) -> String {
    let cards: String = report
        .sections()
        .iter()
        .map(|section| {
            let items: Vec<String> = section
                .lines()
                .iter()
                .map(|line| format!("<li>{}</li>", escape_html(line)))
                .collect();
            format!(
                r#"
      <section class="card">
        <h2>{}</h2>
        <ul>{}</ul>
      </section>"#,
                escape_html(section.name()),
                items.join("\n")
            )
        })
        .collect();

    let ocr_block = report.ocr_text().map_or_else(String::new, |text| {
        format!(
            r#"
    <details class="card">
      <summary><strong>OCR (best effort)</strong></summary>
      <pre>{}</pre>
    </details>"#,
            escape_html(text)
        )
    });

    let gallery = &config.gallery_page;
    let page_url = escape_html(gallery.url.as_str());
    let image_url = escape_html(report.image().url.as_str());
    format!(
        r#"<!doctype html>
<html lang="sl">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Dnevne malice</title>
  <style>{STYLE}  </style>
</head>
<body>
  <div class="wrap">
    <header>
      <h1>Dnevne malice</h1>
      <div class="meta">Last updated: {generated_at}</div>
    </header>

    <h2>{menu_title}</h2>
    <div class="grid">{cards}
    </div>

    <h2 style="margin-top:18px;">{gallery_title}</h2>
    <div class="card">
      <div style="margin-bottom:8px;">
        Source page: <a href="{page_url}">{page_url}</a><br/>
        Image URL: <a href="{image_url}">{image_url}</a>
      </div>
      <img src="{ASSETS_DIR}/{file_name}" alt="{gallery_title} gableci" />
    </div>
{ocr_block}

    <footer>
      <div class="card">
        Raw text report: <a href="{ASSETS_DIR}/{REPORT_FILE}">{ASSETS_DIR}/{REPORT_FILE}</a>
      </div>
    </footer>
  </div>
</body>
</html>
"#,
        generated_at = escape_html(report.generated_at()),
        menu_title = escape_html(config.menu_page.title),
        gallery_title = escape_html(gallery.title),
        file_name = gallery.file_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("Bučno olje"), "Bučno olje");
    }

    #[test]
    fn test_render_html_cards() {
        let html = render_html(&fixtures::report(""), &Config::default());
        assert_eq!(html.matches(r#"<section class="card">"#).count(), 3);
        assert!(html.contains("<h2>Brezmesna malica</h2>"));
        assert!(html.contains("<li>Juha &amp; &quot;kruh&quot;</li>"));
        assert!(html.contains("<li>(not found)</li>"));
        assert!(html.contains(r#"<img src="assets/bajz_mursko.jpg""#));
        assert!(html.contains(r#"<a href="assets/report.txt">"#));
        assert!(html.contains("mursko.jpg?v=1&amp;w=2"));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_render_html_ocr_block() {
        let html = render_html(&fixtures::report("<PON> grah & 'kobasica'"), &Config::default());
        assert!(html.contains("<details class=\"card\">"));
        assert!(html.contains("<pre>&lt;PON&gt; grah &amp; &#39;kobasica&#39;</pre>"));
    }
}
