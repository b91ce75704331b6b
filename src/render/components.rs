// Small HTML building blocks shared by the page sections.

use std::fmt::Write;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Frosted panel. `id` is only set for panels that are section anchors.
pub fn glass(out: &mut String, id: Option<&str>, class: &str, body: impl FnOnce(&mut String)) {
    match id {
        Some(id) => {
            let _ = write!(out, r#"<div id="{}" class="glass {}">"#, escape_html(id), class);
        }
        None => {
            let _ = write!(out, r#"<div class="glass {}">"#, class);
        }
    }
    body(out);
    out.push_str("</div>");
}

pub fn pill(out: &mut String, label: &str) {
    let _ = write!(out, r#"<span class="pill">{}</span>"#, escape_html(label));
}

pub fn pills<S: AsRef<str>>(out: &mut String, labels: &[S]) {
    out.push_str(r#"<div class="pills">"#);
    for label in labels {
        pill(out, label.as_ref());
    }
    out.push_str("</div>");
}

pub fn external_link(out: &mut String, href: &str, label: &str, class: &str) {
    let _ = write!(
        out,
        r#"<a class="{}" href="{}" target="_blank" rel="noreferrer">{}</a>"#,
        class,
        escape_html(href),
        escape_html(label)
    );
}

pub fn bullet_list<S: AsRef<str>>(out: &mut String, items: &[S]) {
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item.as_ref()));
    }
    out.push_str("</ul>");
}

pub fn section_heading(out: &mut String, icon: &str, title: &str) {
    let _ = write!(
        out,
        r#"<div class="heading"><span class="icon" aria-hidden="true">{}</span><h2>{}</h2></div>"#,
        icon,
        escape_html(title)
    );
}
