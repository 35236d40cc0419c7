use pulldown_cmark::{html, Event, Options, Parser};

pub const PAGE_TITLE: &str = "AI Travel Agent";
pub const HEADING: &str = "AI Travel Itinerary Planner";
pub const MISSING_INPUT_WARNING: &str =
    "Please enter a city and interests to generate an itinerary.";

/// Everything the single form page can show.
#[derive(Debug, Default)]
pub struct PageView {
    pub city: String,
    pub interests: String,
    pub warning: Option<String>,
    pub error: Option<String>,
    /// Already rendered HTML of the itinerary.
    pub itinerary_html: Option<String>,
}

impl PageView {
    pub fn with_input(city: &str, interests: &str) -> Self {
        Self {
            city: city.to_string(),
            interests: interests.to_string(),
            ..Self::default()
        }
    }
}

/// Render itinerary markdown to HTML. Raw HTML in the input is escaped.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String is infallible.
    let _ = pulldown_cmark_escape::escape_html(&mut escaped, text);
    escaped
}

pub fn render_page(view: &PageView) -> String {
    let mut body = String::new();

    if let Some(warning) = &view.warning {
        body.push_str(&format!(
            "<div class=\"alert warning\">{}</div>\n",
            escape_html(warning)
        ));
    }

    if let Some(error) = &view.error {
        body.push_str(&format!(
            "<div class=\"alert error\"><strong>Could not generate an itinerary.</strong> {}</div>\n",
            escape_html(error)
        ));
    }

    if let Some(itinerary) = &view.itinerary_html {
        body.push_str("<section class=\"itinerary\">\n<h2>📄 Your Itinerary</h2>\n");
        body.push_str(itinerary);
        body.push_str("</section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; padding: 0 1rem; }}
form {{ border: 1px solid #ddd; border-radius: .5rem; padding: 1rem; }}
label {{ display: block; margin-top: .75rem; }}
input[type=text] {{ width: 100%; padding: .5rem; box-sizing: border-box; }}
button {{ margin-top: 1rem; padding: .5rem 1rem; }}
.alert {{ margin-top: 1rem; padding: .75rem; border-radius: .5rem; }}
.warning {{ background: #fff8e1; border: 1px solid #ffcc80; }}
.error {{ background: #fdecea; border: 1px solid #f5a39b; }}
</style>
</head>
<body>
<h1>{heading}</h1>
<p>Plan your day trip itinerary by entering your city and interests.</p>
<form method="post" action="/itinerary">
<label for="city">Enter the city for your trip</label>
<input type="text" id="city" name="city" value="{city}">
<label for="interests">Enter your interests for the trip(comma separated)</label>
<input type="text" id="interests" name="interests" value="{interests}">
<button type="submit">Generate Itinerary</button>
</form>
{body}</body>
</html>
"#,
        title = PAGE_TITLE,
        heading = HEADING,
        city = escape_html(&view.city),
        interests = escape_html(&view.interests),
        body = body,
    )
}
