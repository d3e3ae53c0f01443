// src/core/html.rs
//
// Case-insensitive tag-block scanning over exported JIRA markup.
// Not a DOM: elements are located by tag name and class token, and nested
// elements of the same name are balanced so `<td>` inside `<td>` does not cut
// the outer cell short. Indices are byte offsets into the original text; the
// lowercased copy has identical offsets because only ASCII is folded.

use super::sanitize::{ decode_entities, normalize_ws };

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "source", "track", "wbr",
];

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte span of one element inside the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub open_end: usize,
    pub close_start: usize,
    pub end: usize,
}

impl Block {
    pub fn outer<'a>(&self, s: &'a str) -> &'a str { &s[self.start..self.end] }
    pub fn open_tag<'a>(&self, s: &'a str) -> &'a str { &s[self.start..self.open_end] }
    pub fn inner<'a>(&self, s: &'a str) -> &'a str { &s[self.open_end..self.close_start] }
}

/// A piece of markup plus its lowercased twin for matching.
pub struct Markup<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> Markup<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: to_lower(src) }
    }

    pub fn src(&self) -> &'a str { self.src }

    /// Next complete `<tag …>…</tag>` starting at or after `from`.
    /// `tr`, `td`, `th` and `p` may omit their end tag and end where HTML
    /// would end them; other unterminated elements are skipped.
    pub fn next_element(&self, tag: &str, from: usize) -> Option<Block> {
        let tag = to_lower(tag);
        let b = self.lc.as_bytes();
        let mut pos = from;

        while let Some(start) = find_open(&self.lc, &tag, pos) {
            let Some(open_end) = tag_end(b, start) else { return None };

            if b[open_end - 2] == b'/' {
                return Some(Block { start, open_end, close_start: open_end, end: open_end });
            }
            if let Some((close_start, end)) = match_close(&self.lc, &tag, open_end) {
                return Some(Block { start, open_end, close_start, end });
            }
            pos = open_end;
        }
        None
    }

    /// First `<tag>` carrying the class token (or any `<tag>` when `class` is None).
    pub fn find_first(&self, tag: &str, class: Option<&str>) -> Option<Block> {
        let mut pos = 0usize;
        while let Some(block) = self.next_element(tag, pos) {
            match class {
                None => return Some(block),
                Some(c) if has_class(block.open_tag(self.src), c) => return Some(block),
                Some(_) => pos = block.open_end,
            }
        }
        None
    }

    /// Every `<tag>` carrying the class token, in document order.
    /// Matches are not searched for further matches inside them.
    pub fn find_all(&self, tag: &str, class: &str) -> Vec<Block> {
        let mut out = Vec::new();
        let mut pos = 0usize;
        while let Some(block) = self.next_element(tag, pos) {
            if has_class(block.open_tag(self.src), class) {
                pos = block.end;
                out.push(block);
            } else {
                pos = block.open_end;
            }
        }
        out
    }
}

fn is_name_end(b: Option<&u8>) -> bool {
    matches!(b, None | Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b'>' | b'/'))
}

/// Offset of the next `<tag` whose name is exactly `tag`.
fn find_open(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("<", tag);
    let b = lc.as_bytes();
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(&pat) {
        let at = pos + rel;
        if is_name_end(b.get(at + pat.len())) {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}

/// Offset just past the `>` ending the tag that starts at `from`. Quote-aware.
fn tag_end(b: &[u8], from: usize) -> Option<usize> {
    let mut in_s = false;
    let mut in_d = false;
    let mut i = from + 1;
    while i < b.len() {
        match b[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

// Elements whose end tag a page may leave out, and what ends them instead:
// one of these opening tags, or one of these closing tags of an enclosing element.
const TR_ENDS: (&[&str], &[&str]) = (
    &["tr", "tbody", "thead", "tfoot"],
    &["tbody", "thead", "tfoot", "table"],
);
const CELL_ENDS: (&[&str], &[&str]) = (
    &["td", "th", "tr", "tbody", "thead", "tfoot"],
    &["tr", "tbody", "thead", "tfoot", "table"],
);
const P_ENDS: (&[&str], &[&str]) = (
    &["p", "div", "table", "ul", "ol", "dl", "pre", "blockquote", "hr", "h1", "h2", "h3", "h4", "h5", "h6"],
    &["td", "th", "tr", "div", "li", "table", "body", "html"],
);

fn implicit_end(tag: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match tag {
        "tr" => Some(TR_ENDS),
        "td" | "th" => Some(CELL_ENDS),
        "p" => Some(P_ENDS),
        _ => None,
    }
}

/// `(is_closing, name)` of the tag starting at `s[0] == '<'`. Name is empty for
/// doctypes, stray `<` and the like.
fn tag_name(s: &str) -> (bool, &str) {
    let (closing, body) = match s.strip_prefix("</") {
        Some(rest) => (true, rest),
        None => (false, &s[1..]),
    };
    let len = body.bytes().take_while(|c| c.is_ascii_alphanumeric()).count();
    (closing, &body[..len])
}

/// Find the end of an element whose open tag ended at `open_end`.
/// Returns `(close_start, end)`; for an implicitly ended element both are the
/// offset of whatever ended it, so that tag is left for the next scan.
fn match_close(lc: &str, tag: &str, open_end: usize) -> Option<(usize, usize)> {
    let implicit = implicit_end(tag);
    // rows and cells of a table nested inside this element are not ours
    let scoped = matches!(tag, "tr" | "td" | "th");
    let b = lc.as_bytes();
    let mut depth = 1usize;
    let mut nested_tables = 0usize;
    let mut pos = open_end;

    while let Some(rel) = lc.get(pos..).and_then(|s| s.find('<')) {
        let at = pos + rel;
        let rest = &lc[at..];

        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(e) => { pos = at + e + 3; continue; }
                None => break,
            }
        }

        let (closing, name) = tag_name(rest);
        let end = match tag_end(b, at) {
            Some(end) if !name.is_empty() => end,
            _ => { pos = at + 1; continue; }
        };

        if scoped && name == "table" {
            if !closing {
                nested_tables += 1;
                pos = end;
                continue;
            }
            if nested_tables > 0 {
                nested_tables -= 1;
                pos = end;
                continue;
            }
        }
        if nested_tables > 0 {
            pos = end;
            continue;
        }

        if closing && name == tag {
            depth -= 1;
            if depth == 0 {
                return Some((at, end));
            }
        } else if let Some((opens, closes)) = implicit {
            let list = if closing { closes } else { opens };
            if list.iter().any(|n| *n == name) {
                return Some((at, at));
            }
        } else if !closing && name == tag && b[end - 2] != b'/' {
            depth += 1;
        }
        pos = end;
    }

    // end of input closes whatever may be left open
    implicit.map(|_| (lc.len(), lc.len()))
}

/// Value of attribute `name` in an opening tag, entity-decoded.
/// Bare attributes (`<input disabled>`) yield an empty string.
pub fn attr(open_tag: &str, name: &str) -> Option<String> {
    let b = open_tag.as_bytes();
    let n = b.len();
    let mut i = 1; // past '<'

    // tag name
    while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' && b[i] != b'/' { i += 1; }

    while i < n {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= n || b[i] == b'>' { break; }

        let name_start = i;
        while i < n && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') { i += 1; }
        let attr_name = &open_tag[name_start..i];

        while i < n && b[i].is_ascii_whitespace() { i += 1; }
        let value = if i < n && b[i] == b'=' {
            i += 1;
            while i < n && b[i].is_ascii_whitespace() { i += 1; }
            if i < n && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                let v_start = i + 1;
                i = v_start;
                while i < n && b[i] != q { i += 1; }
                let v = &open_tag[v_start..i.min(n)];
                i += 1;
                v
            } else {
                let v_start = i;
                while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' { i += 1; }
                &open_tag[v_start..i]
            }
        } else {
            ""
        };

        if attr_name.eq_ignore_ascii_case(name) {
            return Some(decode_entities(value));
        }
    }
    None
}

/// Does the opening tag's `class` list contain `class`?
pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr(open_tag, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

/// All text in a fragment, tags and comments removed, entities decoded,
/// whitespace collapsed.
pub fn text<S: AsRef<str>>(s: S) -> String {
    collect_text(s.as_ref(), false)
}

/// Only the text nodes that are direct children of the fragment; text of
/// nested elements is dropped. `Fix <b>bug</b> now` → `Fix now`.
pub fn direct_text<S: AsRef<str>>(s: S) -> String {
    collect_text(s.as_ref(), true)
}

fn collect_text(s: &str, direct_only: bool) -> String {
    let b = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    let mut i = 0usize;
    let mut run_start = 0usize;

    while i < b.len() {
        if b[i] != b'<' {
            i += 1;
            continue;
        }
        if depth == 0 || !direct_only {
            out.push_str(&s[run_start..i]);
        }

        let rest = &s[i..];
        if rest.starts_with("<!--") {
            i = rest.find("-->").map(|e| i + e + 3).unwrap_or(b.len());
        } else {
            let end = tag_end(b, i).unwrap_or(b.len());
            let tag = &s[i..end];
            if tag.starts_with("</") {
                depth = depth.saturating_sub(1);
            } else if !tag.ends_with("/>") && !is_void(tag) && !tag.starts_with("<!") {
                depth += 1;
            }
            i = end;
        }
        run_start = i;
    }
    if depth == 0 || !direct_only {
        out.push_str(&s[run_start.min(b.len())..]);
    }

    normalize_ws(&decode_entities(&out))
}

fn is_void(tag: &str) -> bool {
    let name: String = tag[1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    VOID_TAGS.contains(&name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_element_respects_name_boundary() {
        let m = Markup::new(r#"<pre>x</pre><p>para</p>"#);
        let p = m.next_element("p", 0).unwrap();
        assert_eq!(p.inner(m.src()), "para");
    }

    #[test]
    fn nested_same_name_is_balanced() {
        let html = "<td class=outer><table><tr><td>in</td></tr></table>tail</td><td>next</td>";
        let m = Markup::new(html);
        let outer = m.next_element("td", 0).unwrap();
        assert!(outer.inner(html).ends_with("tail"));
        let next = m.next_element("td", outer.end).unwrap();
        assert_eq!(next.inner(html), "next");
    }

    #[test]
    fn unclosed_rows_end_at_next_row_or_table_close() {
        let html = r#"<table><tbody>
            <tr class="issuerow"><td class="a">1</td>
            <tr class="issuerow"><td class="a">2</td>
            </tbody></table><p>after</p>"#;
        let m = Markup::new(html);
        let rows = m.find_all("tr", "issuerow");
        assert_eq!(rows.len(), 2);
        assert_eq!(text(rows[0].inner(html)), "1");
        assert_eq!(text(rows[1].inner(html)), "2");
        assert!(!rows[1].outer(html).contains("tbody"));
    }

    #[test]
    fn unclosed_cells_end_at_next_cell_or_row_close() {
        let html = r#"<tr><td class="a">A<td class="b"><b>5</b><td class="c">Done</tr>"#;
        let m = Markup::new(html);
        let cell = |c| text(m.find_first("td", Some(c)).unwrap().inner(html));
        assert_eq!(cell("a"), "A");
        assert_eq!(cell("b"), "5");
        assert_eq!(cell("c"), "Done");
    }

    #[test]
    fn unclosed_paragraph_ends_at_cell_close() {
        let html = "<td><p>one<p>two</td><td>x</td>";
        let m = Markup::new(html);
        let p = m.next_element("p", 0).unwrap();
        assert_eq!(p.inner(html), "one");
        let p2 = m.next_element("p", p.end).unwrap();
        assert_eq!(p2.inner(html), "two");
    }

    #[test]
    fn unclosed_row_runs_to_end_of_input() {
        let html = r#"<tr class="issuerow"><td>last"#;
        let m = Markup::new(html);
        let rows = m.find_all("tr", "issuerow");
        assert_eq!(rows.len(), 1);
        assert_eq!(text(rows[0].inner(html)), "last");
    }

    #[test]
    fn unclosed_div_is_still_skipped() {
        let m = Markup::new("<div>open<span>x</span>");
        assert!(m.next_element("div", 0).is_none());
    }

    #[test]
    fn find_all_by_class_token() {
        let html = r#"<tr class="rowHeader"></tr><TR CLASS="issuerow odd"><td>a</td></TR><tr class='issuerow'><td>b</td></tr>"#;
        let m = Markup::new(html);
        let rows = m.find_all("tr", "issuerow");
        assert_eq!(rows.len(), 2);
        assert_eq!(text(rows[1].inner(html)), "b");
    }

    #[test]
    fn attr_handles_quotes_and_entities() {
        let tag = r#"<a class="issue-link" data-x=1 href='/browse/ABC-1?a=1&amp;b=2'>"#;
        assert_eq!(attr(tag, "href").as_deref(), Some("/browse/ABC-1?a=1&b=2"));
        assert_eq!(attr(tag, "data-x").as_deref(), Some("1"));
        assert_eq!(attr(tag, "title"), None);
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        let html = r#"<td class="summary" title="a > b">cell</td>"#;
        let m = Markup::new(html);
        let td = m.find_first("td", Some("summary")).unwrap();
        assert_eq!(td.inner(html), "cell");
    }

    #[test]
    fn direct_text_skips_nested_elements() {
        assert_eq!(direct_text("Fix <b>bug</b> now"), "Fix now");
        assert_eq!(direct_text("  Login <a href='x'>ABC-1</a> <i><b>deep</b></i>page "), "Login page");
        assert_eq!(direct_text("line<br>break"), "linebreak");
        assert_eq!(direct_text("a <!-- <b>c</b> --> b"), "a b");
    }

    #[test]
    fn text_keeps_nested_and_decodes() {
        assert_eq!(text("<span>Jane&nbsp;Doe</span>\n  <em>&amp; co</em>"), "Jane Doe & co");
        assert_eq!(text("&lt;none&gt;"), "<none>");
    }
}
