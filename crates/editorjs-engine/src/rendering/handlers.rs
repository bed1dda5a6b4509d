use crate::models::BlockData;

use super::fields;
use super::html::Element;

pub fn header(data: &BlockData) -> String {
    let level = fields::int(data, "level", 2).clamp(1, 6);
    let text = fields::string(data, "text", "");

    Element::new(format!("h{level}")).text(&text).into_html()
}

pub fn paragraph(data: &BlockData) -> String {
    let text = fields::string(data, "text", "");

    Element::new("p").text(&text).into_html()
}

/// Empty when the block has no `file.url`.
pub fn image(data: &BlockData) -> String {
    let Some(url) = fields::nested_string(data, "file", "url") else {
        return String::new();
    };
    let caption = fields::string(data, "caption", "");
    let stretched = fields::flag(data, "stretched");
    let with_border = fields::flag(data, "withBorder");
    let with_background = fields::flag(data, "withBackground");

    let mut class = String::from("image");
    if stretched && !with_background {
        class.push_str(" stretched");
    }
    if with_background {
        class.push_str(" with-background");
    }
    if with_border {
        class.push_str(" with-border");
    }

    Element::new("img")
        .attr("class", class)
        .attr("src", url)
        .attr("alt", caption.as_str())
        .attr("title", caption)
        .into_html()
}

pub fn list(data: &BlockData) -> String {
    let style = fields::string(data, "style", "ordered");
    let tag = if style == "ordered" { "ol" } else { "ul" };
    let items = fields::string_list(data.get("items"));

    Element::new(tag)
        .children(items.iter().map(|item| Element::new("li").text(item)))
        .into_html()
}

pub fn table(data: &BlockData) -> String {
    let rows = fields::string_rows(data.get("content"));

    Element::new("table")
        .children(rows.iter().map(|row| {
            Element::new("tr").children(row.iter().map(|cell| Element::new("td").text(cell)))
        }))
        .into_html()
}

pub fn quote(data: &BlockData) -> String {
    let alignment = fields::string(data, "alignment", "");
    let caption = fields::string(data, "caption", "");
    let text = fields::string(data, "text", "");

    let mut quote = Element::new("blockquote")
        .attr_if_present("class", &class_with_prefix("align-", &alignment))
        .text(&text);
    if !caption.is_empty() {
        quote = quote.child(Element::new("cite").text(&caption));
    }
    quote.into_html()
}

pub fn warning(data: &BlockData) -> String {
    let title = fields::string(data, "title", "");
    let message = fields::string(data, "message", "");

    let mut alert = Element::new("div").attr("class", "alert");
    if !title.is_empty() {
        alert = alert.child(Element::new("div").attr("class", "title").text(&title));
    }
    alert
        .child(Element::new("div").attr("class", "message").text(&message))
        .into_html()
}

pub fn code(data: &BlockData) -> String {
    let code = fields::string(data, "code", "");

    Element::new("code").text(&code).into_html()
}

pub fn embed(data: &BlockData) -> String {
    let service = fields::string(data, "service", "");
    let caption = fields::string(data, "caption", "");
    let source = fields::string(data, "embed", "");

    let iframe = Element::new("iframe")
        .attr("src", source)
        .attr("allow", "autoplay")
        .attr("allowfullscreen", "allowfullscreen");
    let mut container = Element::new("div")
        .attr("class", format!("embed {service}"))
        .child(iframe);
    if !caption.is_empty() {
        container = container.child(Element::new("div").attr("class", "caption").text(&caption));
    }
    container.into_html()
}

pub fn delimiter(_data: &BlockData) -> String {
    Element::new("div").attr("class", "delimiter").into_html()
}

fn class_with_prefix(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}
