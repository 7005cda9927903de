//! HTML rendering for the translator form

use std::fmt::Write;

use crate::handlers::PageView;
use crate::translate::{Direction, FailureKind, TranslationResult};

pub const TITLE: &str = "English → Vietnamese Translator";
const DIRECTION_LABEL: &str = "Translation Direction:";

const STYLE: &str = r#"
body {
    margin: 0;
    min-height: 100vh;
    font-family: "Source Sans Pro", sans-serif;
    background: linear-gradient(135deg, #74ebd5, #ACB6E5);
    background-attachment: fixed;
}
main { max-width: 720px; margin: 0 auto; padding: 48px 16px; }
.title {
    font-size: 44px;
    font-weight: bold;
    text-align: center;
    margin-bottom: 20px;
    background: linear-gradient(90deg, #ff7e5f, #feb47b);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.label-bold { font-size: 24px; color: #ffffff; font-weight: 700; margin: 2px 0; }
select, textarea { width: 100%; box-sizing: border-box; font-size: 20px; }
textarea {
    min-height: 140px;
    border: 2px solid #3498db;
    border-radius: 8px;
    padding: 10px;
    background-color: rgba(255,255,255,0.9);
}
.actions { display: flex; justify-content: flex-end; margin-top: 12px; }
button {
    background-color: #00008B;
    color: white;
    font-size: 20px;
    border: none;
    border-radius: 8px;
    padding: 10px 20px;
}
button:hover { background-color: #000066; }
.swap { display: inline-block; margin-top: 6px; color: #ffffff; font-weight: 600; }
.success-box {
    background-color: rgba(212, 237, 218, 0.95);
    color: #155724;
    padding: 15px;
    border-radius: 8px;
    font-size: 18px;
    margin-top: 16px;
}
.error-box {
    background-color: #ffebee;
    color: #b71c1c;
    padding: 14px 16px;
    border-radius: 10px;
    font-size: 16px;
    margin-top: 16px;
    border: 2px solid #b71c1c;
}
.alert {
    background-color: #7F0000;
    color: #FFFFFF;
    font-weight: 800;
    border-left: 0.6rem solid #D50000;
    border-radius: 10px;
    padding: 14px 16px;
    margin-top: 16px;
}
"#;

/// Render the whole page for a view
pub fn render(view: &PageView) -> String {
    let mut html = String::with_capacity(4096);
    let label = escape(view.input_label());

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<main>\n\
         <div class=\"title\">{title}</div>\n",
        title = escape(TITLE),
        style = STYLE,
    );

    // Changing the select reloads the page so the label follows the direction.
    let _ = write!(
        html,
        "<form method=\"get\" action=\"/\">\n\
         <label class=\"label-bold\" for=\"direction\">{}</label>\n\
         <select id=\"direction\" name=\"direction\" onchange=\"this.form.submit()\">\n",
        DIRECTION_LABEL
    );
    for direction in Direction::ALL {
        let selected = if direction == view.direction { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            direction.code(),
            selected,
            escape(direction.display_name())
        );
    }
    let _ = write!(
        html,
        "</select>\n<a class=\"swap\" href=\"/?direction={}\">⇄ {}</a>\n</form>\n",
        view.direction.swapped().code(),
        escape(view.direction.swapped().display_name())
    );

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/translate\">\n\
         <input type=\"hidden\" name=\"direction\" value=\"{code}\">\n\
         <label class=\"label-bold\" for=\"text\">{label}</label>\n\
         <textarea id=\"text\" name=\"text\" placeholder=\"{label}\">\n{text}</textarea>\n\
         <div class=\"actions\"><button type=\"submit\">Translate</button></div>\n\
         </form>\n",
        code = view.direction.code(),
        label = label,
        text = escape(&view.text),
    );

    if let Some(outcome) = &view.outcome {
        html.push_str(&render_outcome(view.direction, outcome));
        html.push('\n');
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Render the success or error box for one outcome
pub fn render_outcome(direction: Direction, outcome: &TranslationResult) -> String {
    match outcome {
        TranslationResult::Success { translated_text } => {
            let (from, to) = direction.languages();
            format!(
                "<div class=\"success-box\">✅ <strong>Translation ({} → {})</strong>: {}</div>",
                from,
                to,
                escape(translated_text)
            )
        }
        TranslationResult::Failure {
            kind: FailureKind::ValidationError,
            message,
            ..
        } => format!("<div class=\"alert\" role=\"alert\">{}</div>", escape(message)),
        TranslationResult::Failure {
            kind: FailureKind::HttpError,
            status_code,
            message,
        } => {
            let status = status_code.map(|s| s.to_string()).unwrap_or_default();
            format!(
                "<div class=\"error-box\">❌ Error {}: {}</div>",
                status,
                escape(message)
            )
        }
        TranslationResult::Failure {
            kind: FailureKind::TransportError,
            message,
            ..
        } => {
            let icon = if message.starts_with("SSL error") { "🔒" } else { "⚠️" };
            format!("<div class=\"error-box\">{} {}</div>", icon, escape(message))
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_direction() {
        let html = render(&PageView::empty(Direction::ViToEn));
        assert!(html.contains("<label class=\"label-bold\" for=\"text\">Enter Vietnamese text:</label>"));
        assert!(html.contains("placeholder=\"Enter Vietnamese text:\""));
        assert!(html.contains("<option value=\"vi-en\" selected>"));
        assert!(html.contains("href=\"/?direction=en-vi\""));
        assert!(!html.contains("success-box\">"));
    }

    #[test]
    fn success_box_shows_language_pair() {
        let html = render_outcome(
            Direction::EnToVi,
            &TranslationResult::Success {
                translated_text: "Xin chào".into(),
            },
        );
        assert_eq!(
            html,
            "<div class=\"success-box\">✅ <strong>Translation (en → vi)</strong>: Xin chào</div>"
        );
    }

    #[test]
    fn failure_boxes() {
        let http = render_outcome(
            Direction::EnToVi,
            &TranslationResult::Failure {
                kind: FailureKind::HttpError,
                status_code: Some(401),
                message: "denied".into(),
            },
        );
        assert!(http.contains("❌ Error 401: denied"));

        let tls = render_outcome(
            Direction::EnToVi,
            &TranslationResult::Failure {
                kind: FailureKind::TransportError,
                status_code: None,
                message: "SSL error: bad certificate".into(),
            },
        );
        assert!(tls.contains("🔒 SSL error: bad certificate"));

        let empty = render_outcome(
            Direction::EnToVi,
            &TranslationResult::Failure {
                kind: FailureKind::ValidationError,
                status_code: None,
                message: "Please enter some text.".into(),
            },
        );
        assert!(empty.contains("Please enter some text."));
    }

    #[test]
    fn leading_newline_survives_textarea() {
        let view = PageView {
            direction: Direction::EnToVi,
            text: "\nHello".into(),
            outcome: None,
        };
        let html = render(&view);
        // The parser drops exactly one newline after the opening tag.
        assert!(html.contains("placeholder=\"Enter English text:\">\n\nHello</textarea>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let view = PageView {
            direction: Direction::EnToVi,
            text: "<script>alert('x')</script>".into(),
            outcome: Some(TranslationResult::Success {
                translated_text: "<b>&</b>".into(),
            }),
        };
        let html = render(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }
}
