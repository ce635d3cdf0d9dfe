//! Document rendering.

use trivia_document::TriviaDocument;

use crate::escape::TextPolicy;
use crate::item::render_items;
use crate::template::Template;

/// Title used when neither the document nor the config sets one.
pub const DEFAULT_TITLE: &str = "Trivia";
/// Description used when neither the document nor the config sets one.
pub const DEFAULT_DESCRIPTION: &str = "A round of trivia";

/// Configuration for [`TriviaRenderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RendererConfig {
    /// Title substituted when the document has none.
    pub default_title: String,
    /// Description substituted when the document has none.
    pub default_description: String,
    /// Escape document text instead of splicing it verbatim.
    pub escape_html: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_owned(),
            default_description: DEFAULT_DESCRIPTION.to_owned(),
            escape_html: false,
        }
    }
}

/// Values for a template's placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedContent {
    /// Document title, or the default.
    pub title: String,
    /// Document description, or the default.
    pub description: String,
    /// Item blocks in document order.
    pub content: String,
}

/// Renders loaded documents.
///
/// Rendering is pure: the same document and config always produce the same
/// output.
///
/// # Example
///
/// ```
/// use trivia_document::TriviaDocument;
/// use trivia_renderer::{RendererConfig, Template, TriviaRenderer};
///
/// let doc = TriviaDocument::from_json(r#"{"items": [{"question": "2+2?", "answer": "4"}]}"#)?;
/// let renderer = TriviaRenderer::new(RendererConfig::default());
/// let template = Template::parse("<h1>$title</h1>$content")?;
/// let html = renderer.render_page(&doc, &template);
/// assert!(html.starts_with("<h1>Trivia</h1>"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TriviaRenderer {
    config: RendererConfig,
}

impl TriviaRenderer {
    /// Create a renderer.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    fn policy(&self) -> TextPolicy {
        if self.config.escape_html {
            TextPolicy::Escaped
        } else {
            TextPolicy::Verbatim
        }
    }

    /// Render a document's items and resolve its title and description.
    #[must_use]
    pub fn render(&self, document: &TriviaDocument) -> RenderedContent {
        let policy = self.policy();
        let title = document.title().unwrap_or(self.config.default_title.as_str());
        let description = document
            .description()
            .unwrap_or(self.config.default_description.as_str());

        let content = render_items(document.items(), policy);
        tracing::info!(items = document.items().len(), "rendered trivia items");

        RenderedContent {
            title: policy.apply(title).into_owned(),
            description: policy.apply(description).into_owned(),
            content,
        }
    }

    /// Render a document into a complete page.
    #[must_use]
    pub fn render_page(&self, document: &TriviaDocument, template: &Template) -> String {
        template.render(&self.render(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn load(value: serde_json::Value) -> TriviaDocument {
        TriviaDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_fill_every_placeholder() {
        let doc = load(json!({ "items": [] }));
        let template = Template::parse("$title/$title|$description/$description|$content").unwrap();
        let html = TriviaRenderer::default().render_page(&doc, &template);
        assert_eq!(
            html,
            "Trivia/Trivia|A round of trivia/A round of trivia|"
        );
    }

    #[test]
    fn test_document_title_wins_over_default() {
        let doc = load(json!({ "title": "Round 2", "description": "Music", "items": [] }));
        let rendered = TriviaRenderer::default().render(&doc);
        assert_eq!(rendered.title, "Round 2");
        assert_eq!(rendered.description, "Music");
    }

    #[test]
    fn test_configured_defaults() {
        let doc = load(json!({ "items": [] }));
        let renderer = TriviaRenderer::new(RendererConfig {
            default_title: "Pub Quiz".to_owned(),
            ..RendererConfig::default()
        });
        let rendered = renderer.render(&doc);
        assert_eq!(rendered.title, "Pub Quiz");
        assert_eq!(rendered.description, "A round of trivia");
    }

    #[test]
    fn test_block_count_matches_items() {
        let doc = load(json!({
            "items": [
                { "question": "2+2?", "answer": "4" },
                { "answer": { "regex": "^cat.*" } },
                { "answer": { "n": 2, "of": ["x", "y", "z"] } }
            ]
        }));
        let rendered = TriviaRenderer::default().render(&doc);
        assert_eq!(rendered.content.matches("<div class=\"item\">").count(), 3);
        assert!(rendered.content.contains("id=\"ans0\">4</span>"));
        assert!(
            rendered
                .content
                .contains("id=\"ans1\">Matches regular expression ^cat.*</span>")
        );
        assert!(rendered.content.contains("id=\"ans2\">(2 of) x, y, z</span>"));
    }

    #[test]
    fn test_indirect_reference_renders_like_inline() {
        let object = json!({
            "type": "image",
            "sources": [{ "mimetype": "image/png", "data": "QQ==" }]
        });
        let indirect = load(json!({
            "items": [{ "answer": "x", "multimedia": [{ "mmref": "k" }] }],
            "multimedia": { "k": object.clone() }
        }));
        let inline = load(json!({ "items": [{ "answer": "x", "multimedia": [object] }] }));

        let renderer = TriviaRenderer::default();
        let a = renderer.render(&indirect);
        let b = renderer.render(&inline);
        assert_eq!(a, b);
        assert!(a.content.contains(r#"<img src="data:image/png;base64,QQ==">"#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let doc = load(json!({
            "title": "Round 3",
            "items": [
                {
                    "question": "Listen",
                    "answer": { "or": ["a", "b"] },
                    "multimedia": [{ "type": "audio", "sources": [{ "uri": "http://a/b.ogg", "mimetype": "audio/ogg" }] }]
                }
            ]
        }));
        let renderer = TriviaRenderer::default();
        let template = Template::builtin().unwrap();
        assert_eq!(
            renderer.render_page(&doc, &template),
            renderer.render_page(&doc, &template)
        );
    }

    #[test]
    fn test_escape_html_applies_to_title() {
        let doc = load(json!({ "title": "Q&A", "items": [] }));
        let renderer = TriviaRenderer::new(RendererConfig {
            escape_html: true,
            ..RendererConfig::default()
        });
        assert_eq!(renderer.render(&doc).title, "Q&amp;A");
        assert_eq!(TriviaRenderer::default().render(&doc).title, "Q&A");
    }
}
