use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::blocks::{KeywordBlock, VideoBlock};
use crate::models::ContentNode;
use crate::render::Renderer;

/// HTML rendering for static pages, or for email bodies with [`HtmlRenderer::email`].
///
/// Email clients drop stylesheets and iframes, so the email variant inlines
/// styles and links to videos instead of embedding a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlRenderer {
    email: bool,
}

impl HtmlRenderer {
    const CARD_STYLE: &'static str =
        "border:1px solid #e5e7eb;border-radius:8px;padding:12px 16px;margin:16px 0";
    const TEXT_STYLE: &'static str = "color:#6b7280;margin:16px 0";
    const LINK_STYLE: &'static str = "color:#111827;text-decoration:underline";

    /// Renderer for site pages
    pub fn new() -> Self {
        Self { email: false }
    }

    /// Renderer for email bodies
    pub fn email() -> Self {
        Self { email: true }
    }

    fn teacher_profile(&self, teacher: &str) -> String {
        let teacher_attr = encode_double_quoted_attribute(teacher);
        let teacher_text = encode_text(teacher);
        if self.email {
            format!(
                r#"<div style="{}"><p style="{}">Teacher profile: <strong>{teacher_text}</strong></p></div>"#,
                Self::CARD_STYLE,
                Self::TEXT_STYLE
            )
        } else {
            format!(
                r#"<aside class="teacher-profile" data-teacher="{teacher_attr}"><p class="teacher-name">{teacher_text}</p></aside>"#
            )
        }
    }

    fn video(&self, video_id: &str, url: &str, caption: Option<&str>) -> String {
        let url = encode_double_quoted_attribute(url);
        if self.email {
            let label = encode_text(caption.unwrap_or("Watch on YouTube"));
            return format!(
                r#"<p style="{}"><a href="{url}" target="_blank" rel="noreferrer noopener" style="{}">{label}</a></p>"#,
                Self::TEXT_STYLE,
                Self::LINK_STYLE
            );
        }

        let video_id = encode_double_quoted_attribute(video_id);
        let title = encode_double_quoted_attribute(caption.unwrap_or("YouTube video"));
        let figcaption = caption
            .map(|caption| format!("<figcaption>{}</figcaption>", encode_text(caption)))
            .unwrap_or_default();
        format!(
            r#"<figure class="video-embed"><iframe src="https://www.youtube-nocookie.com/embed/{video_id}" title="{title}" allowfullscreen></iframe>{figcaption}<a href="{url}">{url}</a></figure>"#
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render_block(&self, node: &ContentNode) -> String {
        match node.kind() {
            KeywordBlock::TEACHER_PROFILE => match node.text_property("teacherInput") {
                Some(teacher) => self.teacher_profile(teacher),
                None => self.render_fallback(node),
            },
            VideoBlock::KIND => match (node.text_property("videoId"), node.text_property("url")) {
                (Some(video_id), Some(url)) => {
                    self.video(video_id, url, node.text_property("caption"))
                }
                _ => self.render_fallback(node),
            },
            _ => self.render_fallback(node),
        }
    }

    fn render_text(&self, text: &str) -> String {
        if self.email {
            format!(r#"<p style="{}">{}</p>"#, Self::TEXT_STYLE, encode_text(text))
        } else {
            format!("<p>{}</p>", encode_text(text))
        }
    }

    fn render_fallback(&self, node: &ContentNode) -> String {
        let children: String = node
            .children()
            .iter()
            .map(|child| self.render(child))
            .collect();
        format!(
            r#"<div data-block-kind="{}">{children}</div>"#,
            encode_double_quoted_attribute(node.kind())
        )
    }
}
