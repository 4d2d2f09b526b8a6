use super::*;

const PROJECT_BANK: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Project Bank</title>
</head>
<body>
  <header><a href="index.html">Home</a></header>
  <main class="container project-detail">
    <a href="index.html" class="back-btn">Back to portfolio</a>
    <h1>Inventory System</h1>
    <img src="images/inventory.png" alt="Inventory">
    <p>Built for a local store.<br>Tracks stock levels.</p>
    <a href="https://github.com/example/inventory">Source</a>
  </main>
  <footer>Project footer</footer>
</body>
</html>
"#;

fn extract(html: &str) -> Result<DetailFragment, SiteError> {
    extract_detail(html, "project-detail", "index.html")
}

// =============================================================
// Fixture document
// =============================================================

#[test]
fn extracts_detail_element_bounds() {
    let fragment = extract(PROJECT_BANK).unwrap();
    assert!(fragment.html.starts_with(r#"<main class="container project-detail">"#));
    assert!(fragment.html.ends_with("</main>"));
    assert!(fragment.html.contains("<h1>Inventory System</h1>"));
    assert!(fragment.html.contains("<br>Tracks stock levels.</p>"));
}

#[test]
fn strips_back_navigation_link() {
    let fragment = extract(PROJECT_BANK).unwrap();
    assert!(!fragment.html.contains("index.html"));
    assert!(!fragment.html.contains("Back to portfolio"));
    assert_eq!(fragment.removed_back_links, 1);
}

#[test]
fn keeps_other_links() {
    let fragment = extract(PROJECT_BANK).unwrap();
    assert!(fragment.html.contains(r#"<a href="https://github.com/example/inventory">Source</a>"#));
}

#[test]
fn excludes_content_outside_detail() {
    let fragment = extract(PROJECT_BANK).unwrap();
    assert!(!fragment.html.contains("Project footer"));
    assert!(!fragment.html.contains("<header>"));
}

// =============================================================
// Matching rules
// =============================================================

#[test]
fn missing_detail_is_reported() {
    let err = extract("<html><body><p>Nothing here</p></body></html>").unwrap_err();
    assert_eq!(err, SiteError::MissingDetail("project-detail".to_owned()));
}

#[test]
fn class_must_match_whole_token() {
    let err = extract(r#"<div class="project-details">x</div>"#).unwrap_err();
    assert!(matches!(err, SiteError::MissingDetail(_)));
}

#[test]
fn first_matching_element_wins() {
    let html = r#"<div class="project-detail">first</div><div class="project-detail">second</div>"#;
    assert_eq!(extract(html).unwrap().html, r#"<div class="project-detail">first</div>"#);
}

#[test]
fn nested_elements_of_same_name_are_balanced() {
    let html = r#"<div class="project-detail"><div>one</div><div>two</div></div><div>after</div>"#;
    assert_eq!(extract(html).unwrap().html, r#"<div class="project-detail"><div>one</div><div>two</div></div>"#);
}

#[test]
fn tag_and_attribute_names_are_case_insensitive() {
    let html = r#"<DIV CLASS="project-detail"><A HREF="index.html">Back</A>body</DIV>"#;
    let fragment = extract(html).unwrap();
    assert_eq!(fragment.html, r#"<DIV CLASS="project-detail">body</DIV>"#);
    assert_eq!(fragment.removed_back_links, 1);
}

#[test]
fn self_closing_back_link_is_removed() {
    let html = r#"<section class="project-detail"><a href="index.html"/><p>x</p></section>"#;
    let fragment = extract(html).unwrap();
    assert_eq!(fragment.html, r#"<section class="project-detail"><p>x</p></section>"#);
}

#[test]
fn every_back_link_inside_detail_is_removed() {
    let html = r#"<div class="project-detail"><a href="index.html">Top</a><p>x</p><a href="index.html">Bottom</a></div>"#;
    let fragment = extract(html).unwrap();
    assert_eq!(fragment.html, r#"<div class="project-detail"><p>x</p></div>"#);
    assert_eq!(fragment.removed_back_links, 2);
}

#[test]
fn back_link_with_nested_markup_is_removed_whole() {
    let html = r#"<div class="project-detail"><a href="index.html"><span>Back</span></a><p>x</p></div>"#;
    assert_eq!(extract(html).unwrap().html, r#"<div class="project-detail"><p>x</p></div>"#);
}

#[test]
fn void_detail_element_is_returned_alone() {
    let html = r#"<p>intro</p><img class="project-detail" src="shot.png"><p>outro</p>"#;
    assert_eq!(extract(html).unwrap().html, r#"<img class="project-detail" src="shot.png">"#);
}

#[test]
fn unclosed_detail_runs_to_end_of_document() {
    let html = r#"<div class="project-detail"><p>text</p>"#;
    assert_eq!(extract(html).unwrap().html, html);
}

#[test]
fn custom_class_and_back_href() {
    let html = r#"<article class="case-study"><a href="/">Home</a><h2>Case</h2></article>"#;
    let fragment = extract_detail(html, "case-study", "/").unwrap();
    assert_eq!(fragment.html, r#"<article class="case-study"><h2>Case</h2></article>"#);
}

// =============================================================
// HTML parsing rules
// =============================================================

#[test]
fn omitted_paragraph_end_tags_close_with_parent() {
    let html = r#"<main class="project-detail"><p>one<p>two</main><footer>FOOTER</footer>"#;
    let fragment = extract(html).unwrap();
    assert_eq!(fragment.html, r#"<main class="project-detail"><p>one<p>two</main>"#);
    assert!(!fragment.html.contains("FOOTER"));
}

#[test]
fn omitted_list_item_end_tags_close_with_parent() {
    let html = r#"<div class="project-detail"><ul><li>a<li>b</ul></div><footer>FOOTER</footer>"#;
    assert_eq!(extract(html).unwrap().html, r#"<div class="project-detail"><ul><li>a<li>b</ul></div>"#);
}

#[test]
fn omitted_table_cell_end_tags_close_with_parent() {
    let html = r#"<div class="project-detail"><table><tr><td>a<td>b</table></div><p>after</p>"#;
    assert_eq!(extract(html).unwrap().html, r#"<div class="project-detail"><table><tr><td>a<td>b</table></div>"#);
}

#[test]
fn stray_end_tag_inside_detail_is_ignored() {
    let html = r#"<div class="project-detail"><p>x</span></p></div><p>after</p>"#;
    assert_eq!(extract(html).unwrap().html, r#"<div class="project-detail"><p>x</span></p></div>"#);
}

#[test]
fn script_before_detail_is_not_parsed() {
    let html = r#"<script>if (a<b) { document.write('<div class="project-detail">fake</div>'); }</script>
<div class="project-detail"><p>real</p></div>"#;
    assert_eq!(extract(html).unwrap().html, r#"<div class="project-detail"><p>real</p></div>"#);
}

#[test]
fn script_and_style_inside_detail_are_kept_verbatim() {
    let html = r#"<div class="project-detail"><style>p > a { color: red; }</style><script>var s = "</div>"; if (x < 1) {}</script><p>body</p></div><footer>FOOTER</footer>"#;
    let fragment = extract(html).unwrap();
    assert!(fragment.html.ends_with("<p>body</p></div>"));
    assert!(fragment.html.contains(r#"var s = "</div>";"#));
    assert!(!fragment.html.contains("FOOTER"));
}

#[test]
fn realistic_page_with_optional_end_tags() {
    let html = r#"<!DOCTYPE html>
<html><head><title>Bank</title><script>window.x = 1 < 2;</script></head>
<body>
<div class="project-detail">
  <p><a href="index.html">Back</a>
  <p>Weather dashboard
  <ul><li>Forecasts<li>Maps</ul>
</div>
<footer>FOOTER</footer>
</body></html>"#;
    let fragment = extract(html).unwrap();
    assert!(fragment.html.starts_with(r#"<div class="project-detail">"#));
    assert!(fragment.html.ends_with("</div>"));
    assert!(fragment.html.contains("<li>Maps</ul>"));
    assert!(!fragment.html.contains("index.html"));
    assert!(!fragment.html.contains("FOOTER"));
    assert_eq!(fragment.removed_back_links, 1);
}

#[test]
fn back_link_closed_by_ancestor_keeps_ancestor_end_tag() {
    let html = r#"<div class="project-detail"><a href="index.html">Back</div><footer>FOOTER</footer>"#;
    let fragment = extract(html).unwrap();
    assert_eq!(fragment.html, r#"<div class="project-detail"></div>"#);
    assert_eq!(fragment.removed_back_links, 1);
}

#[test]
fn nested_back_links_count_once() {
    let html = r#"<div class="project-detail"><a href="index.html"><a href="index.html"/>x</a>y</div>"#;
    let fragment = extract(html).unwrap();
    assert_eq!(fragment.html, r#"<div class="project-detail">y</div>"#);
    assert_eq!(fragment.removed_back_links, 1);
}
