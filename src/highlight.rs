use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const CODE_THEME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<CodeHighlighter> = LazyLock::new(CodeHighlighter::new);

/// Syntax and theme sets are expensive to load, so one instance is shared.
struct CodeHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl CodeHighlighter {
    fn new() -> Self {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(CODE_THEME).unwrap_or_else(|| {
            tracing::warn!("code theme {CODE_THEME} missing, using default");
            Theme::default()
        });
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    fn render(&self, code: &str, lang: Option<&str>) -> Option<String> {
        let syntax = lang
            .and_then(|l| self.syntaxes.find_syntax_by_token(l))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme)
            .inspect_err(|e| tracing::warn!("could not highlight {lang:?} block: {e}"))
            .ok()
    }
}

/// First word of a fence info string, e.g. `rust` for ```` ```rust,ignore ````.
fn fence_lang(info: &str) -> Option<&str> {
    info.split([',', ' '])
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty())
}

/// Replaces fenced and indented code blocks with pre-highlighted HTML.
///
/// A block that fails to highlight is passed through unchanged so the
/// renderer still escapes and prints it.
pub fn highlight<'a, It>(events: It) -> impl Iterator<Item = Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let mut out = Vec::new();
    let mut block: Option<(CodeBlockKind<'a>, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) if block.is_none() => {
                block = Some((kind, String::new()))
            }
            Event::Text(t) if block.is_some() => {
                if let Some((_, code)) = block.as_mut() {
                    code.push_str(&t);
                }
            }
            Event::End(TagEnd::CodeBlock) if block.is_some() => {
                let Some((kind, code)) = block.take() else {
                    continue;
                };
                let lang = match &kind {
                    CodeBlockKind::Fenced(info) => fence_lang(info),
                    CodeBlockKind::Indented => None,
                };
                match HIGHLIGHTER.render(&code, lang) {
                    Some(html) => out.push(Event::Html(CowStr::from(html))),
                    None => {
                        out.push(Event::Start(Tag::CodeBlock(kind)));
                        out.push(Event::Text(CowStr::from(code)));
                        out.push(Event::End(TagEnd::CodeBlock));
                    }
                }
            }
            e => out.push(e),
        }
    }

    out.into_iter()
}
