use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+\n").expect("valid regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Clean up text pulled out of a PDF: drop carriage returns, strip trailing
/// blanks before each line break and collapse runs of line breaks into one.
pub fn normalize_text(raw: &str) -> String {
    let text = raw.replace('\r', "");
    let text = TRAILING_WS.replace_all(&text, "\n");
    BLANK_LINES.replace_all(&text, "\n").into_owned()
}
