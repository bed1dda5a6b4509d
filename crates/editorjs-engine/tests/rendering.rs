use editorjs_engine::{
    Block, Document, JsonToHtml, ParseError, RenderOptions, Renderer, parse_document,
    render_document,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn render_one(block: &Block) -> String {
    render_document(&Document::new(vec![block.clone()]))
}

#[test]
fn fixture_article_fragments() {
    let doc = parse_document(fixture("article"), None).unwrap();

    let fragments: Vec<String> = doc
        .iter()
        .map(render_one)
        .filter(|html| !html.is_empty())
        .collect();

    insta::assert_snapshot!(fragments.join("\n"), @r#"
    <h2>Release notes</h2>
    <p>Fish &amp; chips &lt;3</p>
    <img class="image stretched with-border" src="https://cdn.test/img/cover.png" alt="Cover" title="Cover">
    <ul><li>Faster</li><li>Smaller</li></ul>
    <table><tr><td>Name</td><td>Value</td></tr><tr><td>a</td><td>1</td></tr></table>
    <blockquote class="align-left">Ship it<cite>Team</cite></blockquote>
    <div class="alert"><div class="title">Note</div><div class="message">Breaking change</div></div>
    <code>let x = a &lt; b;</code>
    <div class="embed youtube"><iframe src="https://www.youtube.com/embed/x" allow="autoplay" allowfullscreen="allowfullscreen"></iframe></div>
    <div class="delimiter"></div>
    "#);
}

/// The document renders to exactly its block fragments, in block order.
#[test]
fn document_is_concatenation_of_fragments() {
    let doc = parse_document(fixture("article"), None).unwrap();

    let expected: String = doc.iter().map(render_one).collect();

    assert_eq!(render_document(&doc), expected);
}

#[test]
fn unknown_blocks_are_skipped_anywhere() {
    let doc = parse_document(fixture("article"), None).unwrap();
    let known_only: Document = doc
        .iter()
        .filter(|b| b.block_type != "checklist")
        .cloned()
        .collect();

    assert_eq!(doc.len(), known_only.len() + 1);
    assert_eq!(render_document(&doc), render_document(&known_only));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let converter = JsonToHtml::new();
    let payload = fixture("article");

    assert_eq!(
        converter.convert(payload.as_str()).unwrap(),
        converter.convert(payload.as_str()).unwrap()
    );
}

#[test]
fn header_level_three() {
    let html = JsonToHtml::new()
        .convert(json!({"blocks":[{"type":"header","data":{"level":3,"text":"Hi"}}]}))
        .unwrap();
    assert_eq!(html, "<h3>Hi</h3>");
}

#[test]
fn image_background_excludes_stretched() {
    let html = JsonToHtml::new()
        .convert(json!({"blocks":[{"type":"image","data":{
            "file":{"url":"a.png"},"stretched":true,"withBackground":true
        }}]}))
        .unwrap();

    assert!(html.starts_with("<img "));
    assert!(html.contains("with-background"));
    assert!(!html.contains("stretched"));
}

#[test]
fn list_items_are_escaped() {
    let html = JsonToHtml::new()
        .convert(json!({"blocks":[{"type":"list","data":{"style":"unordered","items":["a","<b>"]}}]}))
        .unwrap();

    assert_eq!(html, "<ul><li>a</li><li>&lt;b&gt;</li></ul>");
}

#[test]
fn table_two_by_two() {
    let html = JsonToHtml::new()
        .convert(json!({"blocks":[{"type":"table","data":{"content":[["1","2"],["3","4"]]}}]}))
        .unwrap();

    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(html.matches("<td>").count(), 4);
}

#[test]
fn bogus_only_document_is_empty() {
    let html = JsonToHtml::new()
        .convert(r#"{"blocks":[{"type":"bogus","data":{}}]}"#)
        .unwrap();
    assert_eq!(html, "");
}

#[test]
fn invalid_json_is_malformed() {
    let err = parse_document("{not valid json", None).unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }));
}

#[test]
fn strict_renderer_reports_fixture_unknown_block() {
    let doc = parse_document(fixture("article"), None).unwrap();

    let err = Renderer::new(RenderOptions { strict: true })
        .render(&doc)
        .unwrap_err();

    assert_eq!(err.to_string(), "Block 4 has unsupported type `checklist`");
}
