//! Multimedia markup.
//!
//! Images show their first source only. Audio lists every source so the
//! browser can pick a format it plays. Other media kinds produce nothing.

use std::fmt::Write;
use std::sync::Arc;

use trivia_document::{MediaKind, Multimedia};

use crate::escape::TextPolicy;

/// Render media objects into one container, one child per object in order.
pub fn format_multimedia(media: &[Arc<Multimedia>], policy: TextPolicy) -> String {
    let mut html = String::new();
    for mm in media {
        match &mm.kind {
            MediaKind::Image => image(mm, policy, &mut html),
            MediaKind::Audio => audio(mm, policy, &mut html),
            MediaKind::Other(kind) => {
                tracing::debug!(kind = %kind, "skipping unsupported multimedia");
            }
        }
    }
    format!(r#"<div class="mmcontainer">{html}</div>"#)
}

fn image(mm: &Multimedia, policy: TextPolicy, out: &mut String) {
    let uri = mm.primary_source().display_uri();
    write!(
        out,
        "\n<div class=\"mmcontent\"><img src=\"{}\"></div>\n",
        policy.apply(&uri)
    )
    .unwrap();
}

fn audio(mm: &Multimedia, policy: TextPolicy, out: &mut String) {
    out.push_str(r#"<div class="mmcontent"><audio controls>"#);
    for source in &mm.sources {
        let uri = source.display_uri();
        write!(out, r#"<source src="{}""#, policy.apply(&uri)).unwrap();
        if let Some(mimetype) = source.mimetype() {
            write!(out, r#" type="{}""#, policy.apply(mimetype)).unwrap();
        }
        out.push_str(">\n");
    }
    out.push_str("</audio></div>");
}
