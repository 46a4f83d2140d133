//! UI Components

use chat_core::Message;
use leptos::prelude::*;

/// CSS `display` for the typing indicator
pub const fn indicator_display(visible: bool) -> &'static str {
    if visible { "flex" } else { "none" }
}

/// Message bubble: text, then a metadata line with the optional category
/// tag in front of the time. Text is rendered as text nodes, never markup.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = message.css_class();
    let Message {
        text,
        category,
        timestamp,
        ..
    } = message;

    view! {
        <div class=class>
            {text}
            <div class="msg-meta">
                {category.map(|tag| view! { <span class="category-tag">{tag}</span> })}
                {timestamp}
            </div>
        </div>
    }
}

/// Three-dot "typing" indicator
#[component]
pub fn TypingIndicator(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div id="typing" class="typing-indicator" style:display=move || indicator_display(visible.get())>
            <span class="dot"></span>
            <span class="dot"></span>
            <span class="dot"></span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn bubble_html(message: Message) -> String {
        view! { <MessageBubble message=message /> }.to_html()
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing from {html}"))
    }

    #[test]
    fn test_indicator_display_modes() {
        assert_eq!(indicator_display(true), "flex");
        assert_eq!(indicator_display(false), "none");
    }

    #[test]
    fn test_category_tag_precedes_timestamp() {
        let html = bubble_html(Message::bot("Paris is the capital.", Some("geography".into()), "10:42"));

        assert!(html.contains(r#"class="message bot""#), "{html}");
        let text = position(&html, "Paris is the capital.");
        let meta = position(&html, r#"class="msg-meta""#);
        let tag = position(&html, r#"<span class="category-tag">geography</span>"#);
        let time = position(&html, "10:42");
        assert!(text < meta && meta < tag && tag < time, "{html}");
    }

    #[test]
    fn test_no_tag_without_category() {
        let html = bubble_html(Message::bot("4", None, "10:42"));
        assert!(!html.contains("category-tag"), "{html}");
        position(&html, "10:42");

        let html = bubble_html(Message::bot("4", Some(String::new()), "10:42"));
        assert!(!html.contains("category-tag"), "{html}");
    }

    #[test]
    fn test_markup_renders_as_text() {
        let html = bubble_html(Message::bot(
            "<b>bold</b> <script>alert(1)</script>",
            Some("<i>tag</i>".into()),
            "10:42",
        ));

        assert!(!html.contains("<b>"), "{html}");
        assert!(!html.contains("<script>"), "{html}");
        assert!(!html.contains("<i>"), "{html}");
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"), "{html}");
        assert!(html.contains("&lt;i&gt;tag&lt;/i&gt;"), "{html}");
    }

    #[test]
    fn test_user_bubble_class() {
        let html = bubble_html(Message::user("hi", "09:00"));
        assert!(html.contains(r#"class="message user""#), "{html}");
        assert!(!html.contains("category-tag"), "{html}");
    }

    #[test]
    fn test_typing_indicator_hidden_markup() {
        let html = view! { <TypingIndicator visible=Signal::stored(false) /> }.to_html();
        assert!(html.contains(r#"id="typing""#), "{html}");
        assert!(html.contains("display: none") || html.contains("display:none"), "{html}");
    }
}
