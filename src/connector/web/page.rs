use crate::domain::AskOutcome;

/// Escape text for interpolation into HTML body content and attribute values.
pub fn escape_html(text: &str) -> String {
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

const STYLE: &str = r#"
  @import url('https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;700&family=Poppins:wght@300;600&display=swap');
  body {
    font-family: 'Roboto', sans-serif;
    color: #eee;
    background: linear-gradient(135deg, #2e2e2e, #0f0f3d, #18185a, #161629);
    background-size: 400% 400%;
    animation: gradientAnimation 10s ease infinite;
    margin: 0;
    min-height: 100vh;
  }
  @keyframes gradientAnimation {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
  }
  main { max-width: 720px; margin: 0 auto; padding: 2rem; }
  h1 {
    font-family: 'Poppins', sans-serif;
    color: #f7ff00;
    font-size: 3rem;
    text-align: center;
    text-shadow: 0 0 20px #ff7f50, 0 0 30px #ff7f50;
  }
  .tagline { color: #ffd700; text-align: center; margin-bottom: 2rem; }
  form { display: flex; gap: 0.75rem; }
  input[type=text] {
    flex: 1;
    background-color: #181826;
    color: white;
    padding: 15px;
    border-radius: 10px;
    border: 2px solid transparent;
    box-shadow: 0 0 10px #ff4500, 0 0 20px #ffa500;
  }
  button {
    background: linear-gradient(45deg, #ff7f50, #ff4500, #ffa500);
    color: white;
    font-weight: 600;
    padding: 12px 25px;
    border: none;
    border-radius: 30px;
    cursor: pointer;
  }
  .banner { margin-top: 2rem; padding: 1rem; border-radius: 10px; }
  .banner.success { background: #12401f; border: 1px solid #2e7d32; }
  .banner.error { background: #4a1313; border: 1px solid #c62828; }
  .banner.warning { background: #4a3a0a; border: 1px solid #f9a825; }
  .answer { margin-top: 1rem; white-space: pre-wrap; line-height: 1.5; }
"#;

/// Render the single-page form, optionally with the outcome of the previous
/// submission shown as a success / error / warning banner.
pub fn render(outcome: Option<&AskOutcome>, question: &str) -> String {
    let banner = match outcome {
        None => String::new(),
        Some(AskOutcome::Answered(text)) => format!(
            "<div class=\"banner success\">✨ Here's a personalized travel recommendation \
             for you!<div class=\"answer\">{}</div></div>",
            escape_html(text)
        ),
        Some(AskOutcome::OffTopic) => "<div class=\"banner error\">🚫 Hmm, it looks like \
             your question isn't travel-related. Try asking about trips, hotels, or \
             destinations!</div>"
            .to_string(),
        Some(AskOutcome::Empty) => "<div class=\"banner warning\">🔍 You gotta ask me \
             something! What's your next trip?</div>"
            .to_string(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>TravelVibe 🌈</title>
  <style>{STYLE}</style>
</head>
<body>
  <main>
    <h1>TravelVibe 🌈</h1>
    <p class="tagline">🌍 Where will your next adventure take you? TravelVibe is your
    colorful, AI-powered travel companion.</p>
    <form method="post" action="/">
      <input type="text" name="question" value="{question}"
             placeholder="💬 Tell me where you're heading or what you're looking for">
      <button type="submit">🎉 Get the Best Travel Deals!</button>
    </form>
    {banner}
  </main>
</body>
</html>
"#,
        question = escape_html(question),
        banner = banner,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn initial_page_has_no_banner() {
        let html = render(None, "");
        assert!(!html.contains("class=\"banner"));
        assert!(html.contains("<form"));
    }

    #[test]
    fn answered_renders_success_banner_with_escaped_text() {
        let outcome = AskOutcome::Answered("<script>alert(1)</script>".into());
        let html = render(Some(&outcome), "Paris hotels");
        assert!(html.contains("banner success"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn off_topic_renders_error_banner() {
        let html = render(Some(&AskOutcome::OffTopic), "weather");
        assert!(html.contains("banner error"));
    }

    #[test]
    fn empty_renders_warning_banner() {
        let html = render(Some(&AskOutcome::Empty), "");
        assert!(html.contains("banner warning"));
    }

    #[test]
    fn question_is_echoed_back_into_the_input() {
        let html = render(None, "Best \"flight\" to Tokyo?");
        assert!(html.contains("value=\"Best &quot;flight&quot; to Tokyo?\""));
    }
}
