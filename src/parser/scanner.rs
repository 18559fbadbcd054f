//! Tag Scanner
//!
//! Tolerant tag matching scoped to the dashboard template.
//! No DOM is built: tags are located by literal search, and elements are
//! closed by depth counting over tags of the same name.

/// Inner content of every non-overlapping `open ... close` block, in order.
///
/// Each block ends at the first `close` after its `open`. An `open` with no
/// `close` after it ends the search.
pub fn blocks_between<'a>(text: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let after = &rest[start + open.len()..];
        let Some(end) = after.find(close) else {
            break;
        };
        blocks.push(&after[..end]);
        rest = &after[end + close.len()..];
    }

    blocks
}

/// Content of the first `<name>...</name>` element that opens and closes on
/// the same line.
pub fn first_inline_element<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let close = format!("</{name}>");
    let mut pos = 0;

    while let Some((_, tag_end)) = next_open_tag(text, name, pos) {
        let line = &text[tag_end..];
        let line = match line.find('\n') {
            Some(newline) => &line[..newline],
            None => line,
        };
        if let Some(end) = line.find(&close) {
            return Some(&line[..end]);
        }
        pos = tag_end;
    }

    None
}

/// Content of the element opened by the literal `open_tag`, up to the
/// `</name>` that balances it.
///
/// An unbalanced element runs to the end of `text`. Returns `None` when
/// `open_tag` does not occur.
pub fn container_content<'a>(text: &'a str, open_tag: &str, name: &str) -> Option<&'a str> {
    let start = text.find(open_tag)? + open_tag.len();
    match balancing_close(text, name, start) {
        Some((close_start, _)) => Some(&text[start..close_start]),
        None => Some(&text[start..]),
    }
}

/// Surround every `name` element with `wrapper_open` and a closing
/// `</wrapper_name>`.
///
/// Elements anywhere inside an existing wrapper are copied unchanged. An
/// element missing its closing tag is wrapped up to the end of `text`.
pub fn wrap_elements(text: &str, name: &str, wrapper_open: &str, wrapper_name: &str) -> String {
    let wrapper_close = format!("</{wrapper_name}>");
    let wrapped_regions = element_regions(text, wrapper_open, wrapper_name);
    let mut out = String::with_capacity(text.len() + 64);
    let mut pos = 0;

    while let Some((start, tag_end)) = next_open_tag(text, name, pos) {
        let end = balancing_close(text, name, tag_end).map_or(text.len(), |(_, close_end)| close_end);
        let element = &text[start..end];

        out.push_str(&text[pos..start]);
        let already_wrapped = wrapped_regions
            .iter()
            .any(|&(content_start, content_end)| content_start <= start && start < content_end);
        if already_wrapped {
            out.push_str(element);
        } else {
            out.push_str(wrapper_open);
            out.push_str(element);
            out.push_str(&wrapper_close);
        }
        pos = end;
    }

    out.push_str(&text[pos..]);
    out
}

/// Content byte ranges of every element opened by the literal `open_tag`.
///
/// An unbalanced element's content runs to the end of `text`.
fn element_regions(text: &str, open_tag: &str, name: &str) -> Vec<(usize, usize)> {
    let mut regions = Vec::new();
    let mut pos = 0;

    while let Some(found) = text[pos..].find(open_tag) {
        let content_start = pos + found + open_tag.len();
        let content_end = balancing_close(text, name, content_start)
            .map_or(text.len(), |(close_start, _)| close_start);
        regions.push((content_start, content_end));
        pos = content_start;
    }

    regions
}

/// Remove every tag, keeping the text between them.
///
/// `<` opens a tag only when a letter, `/` or `!` follows it; any other `<`
/// is text.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_tag = false;

    while let Some(ch) = chars.next() {
        match ch {
            '<' if !in_tag
                && chars
                    .peek()
                    .is_some_and(|&next| next.is_ascii_alphabetic() || next == '/' || next == '!') =>
            {
                in_tag = true
            }
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

/// Byte range of the next `<name>` or `<name attr...>` tag at or after `from`.
fn next_open_tag(text: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let needle = format!("<{name}");
    let mut pos = from;

    while let Some(found) = text[pos..].find(&needle) {
        let start = pos + found;
        let after = start + needle.len();
        match text[after..].chars().next() {
            Some('>') => return Some((start, after + 1)),
            Some(c) if c.is_ascii_whitespace() => {
                let close = text[after..].find('>')?;
                return Some((start, after + close + 1));
            }
            // `<tablex`, `<h2x` and the like are other elements
            _ => pos = after,
        }
    }

    None
}

/// Byte range of the `</name>` balancing an element whose opening tag ends
/// at `from`.
fn balancing_close(text: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let close_tag = format!("</{name}>");
    let mut depth = 1usize;
    let mut pos = from;

    loop {
        let close_start = pos + text[pos..].find(&close_tag)?;
        let close_end = close_start + close_tag.len();

        match next_open_tag(text, name, pos) {
            Some((open_start, open_end)) if open_start < close_start => {
                depth += 1;
                pos = open_end;
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some((close_start, close_end));
                }
                pos = close_end;
            }
        }
    }
}
