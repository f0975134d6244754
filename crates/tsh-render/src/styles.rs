//! Print stylesheets and document assembly.

use tsh_capture::Payload;
use tsh_registry::Artifact;

/// Print-oriented base rules shared by every exported document: fixed table
/// typography, header color bands, suppressed interactive chrome, frozen
/// first column.
pub const PRINT_BASE_CSS: &str = r#"
body {
    font-family: 'Helvetica Neue', Arial, sans-serif;
    color: #1f2430;
    margin: 0;
    padding: 12px;
    background: #ffffff;
}
table {
    border-collapse: collapse;
    width: 100%;
    font-size: 9pt;
}
th, td {
    border: 1px solid #d4d9e2;
    padding: 3px 6px;
    text-align: right;
    white-space: nowrap;
}
thead th {
    background: #2d4a77;
    color: #ffffff;
    font-weight: 600;
    text-align: center;
}
tbody tr:nth-child(even) {
    background: #f4f6fa;
}
table th:first-child, table td:first-child {
    position: sticky;
    left: 0;
    text-align: left;
    background: #eef1f6;
}
button, nav, .toolbar, .no-export {
    display: none !important;
}
.view-header h2 {
    font-size: 13pt;
    margin: 0 0 2px 0;
}
.view-header .view-period {
    font-size: 9pt;
    color: #5a6273;
}
.captured-view img, img.captured-view {
    max-width: 100%;
}
"#;

/// Forces each report section onto its own printed page.
pub const PAGE_BREAK_CSS: &str = r#"
.report-page {
    page-break-after: always;
    break-after: page;
}
.report-page:last-child {
    page-break-after: auto;
    break-after: auto;
}
"#;

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// One embeddable block for a captured payload: an `<img>` for rasters,
/// the raw fragment for HTML.
pub fn payload_markup(payload: &Payload) -> String {
    match payload {
        Payload::Image { data_uri } => {
            format!(r#"<img class="captured-view" src="{data_uri}" alt="captured view">"#)
        }
        Payload::Html { markup } => markup.clone(),
    }
}

/// One page-broken report section for a registered artifact.
pub fn report_section(artifact: &Artifact) -> String {
    format!(
        concat!(
            r#"<section class="report-page"><header class="view-header">"#,
            "<h2>{name}</h2>",
            r#"<span class="view-period">{period}</span>"#,
            "</header>{body}</section>"
        ),
        name = html_escape(&artifact.view_name),
        period = html_escape(&artifact.period),
        body = payload_markup(&artifact.payload),
    )
}

/// A complete, self-contained print document: inline styles only, ready for
/// the rendering pipeline.
pub fn print_document(title: &str, style_overrides: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html><head><meta charset="UTF-8"><title>{title}</title>"#,
            "<style>{base}\n{breaks}\n{overrides}</style>",
            "</head><body>{body}</body></html>"
        ),
        title = html_escape(title),
        base = PRINT_BASE_CSS,
        breaks = PAGE_BREAK_CSS,
        overrides = style_overrides,
        body = body,
    )
}
