//! Reader for Doxygen `search/*.js` index files.
//!
//! ```text
//! var searchData=
//! [
//!   ['index_1686',['index',['../classMap.html#a8a5...',1,'Map::index(int loc) const -&gt; uint8_t']]],
//! ];
//! ```
//!
//! Each element is `[search id, [display name, [url, frame flag, label]...]]`.
//! The trailing number of the search id is the generator's symbol id.

use super::{RawIndex, RawOverload, RawRecord};
use crate::error::IndexError;

pub(super) fn parse(src: &str) -> Result<RawIndex, IndexError> {
    let mut parser = Parser::new(src);
    parser.skip_assignment();
    let root = parser.value()?;
    parser.skip_ws();
    if parser.peek() == Some(';') {
        parser.bump();
        parser.skip_ws();
    }
    if parser.pos < src.len() {
        return Err(parser.error("trailing characters after searchData"));
    }

    let Value::Array(elements) = root.value else {
        return Err(syntax(root.offset, "searchData is not an array"));
    };

    elements.into_iter().map(record).collect()
}

fn record(element: Spanned) -> Result<RawRecord, IndexError> {
    let offset = element.offset;
    let mut items = element.into_array()?.into_iter();

    let search_id = items
        .next()
        .ok_or_else(|| syntax(offset, "missing search id"))?
        .into_string()?;
    let mut body = items
        .next()
        .ok_or_else(|| syntax(offset, "missing symbol body"))?
        .into_array()?
        .into_iter();

    let name = body
        .next()
        .ok_or_else(|| syntax(offset, "missing display name"))?
        .into_string()?;
    let overloads = body.map(overload).collect::<Result<Vec<_>, _>>()?;

    Ok(RawRecord {
        id: id_suffix(&search_id),
        key: decode_entities(&name),
        overloads,
    })
}

fn overload(link: Spanned) -> Result<RawOverload, IndexError> {
    let offset = link.offset;
    let mut items = link.into_array()?.into_iter();

    let target_url = items
        .next()
        .ok_or_else(|| syntax(offset, "missing link url"))?
        .into_string()?;
    let parent_frame = match items.next() {
        Some(flag) => flag.into_int()? != 0,
        None => false,
    };
    let qualified_label = match items.next() {
        Some(label) => decode_entities(&label.into_string()?),
        None => String::new(),
    };

    Ok(RawOverload {
        target_url,
        qualified_label,
        parent_frame,
    })
}

/// `index_5ffree_1687` -> `Some(1687)`.
fn id_suffix(search_id: &str) -> Option<u64> {
    let (_, digits) = search_id.rsplit_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Decodes the HTML entities Doxygen writes into names and labels.
///
/// Unknown entities are kept verbatim.
pub(super) fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity(&rest[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

fn syntax(offset: usize, message: impl Into<String>) -> IndexError {
    IndexError::Syntax {
        offset,
        message: message.into(),
    }
}

enum Value {
    Array(Vec<Spanned>),
    Str(String),
    Int(i64),
}

struct Spanned {
    offset: usize,
    value: Value,
}

impl Spanned {
    fn into_array(self) -> Result<Vec<Spanned>, IndexError> {
        match self.value {
            Value::Array(items) => Ok(items),
            _ => Err(syntax(self.offset, "expected an array")),
        }
    }

    fn into_string(self) -> Result<String, IndexError> {
        match self.value {
            Value::Str(s) => Ok(s),
            _ => Err(syntax(self.offset, "expected a string")),
        }
    }

    fn into_int(self) -> Result<i64, IndexError> {
        match self.value {
            Value::Int(n) => Ok(n),
            _ => Err(syntax(self.offset, "expected an integer")),
        }
    }
}

/// Parser for the JavaScript literal subset Doxygen emits: nested arrays,
/// quoted strings and integers.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

/// Deepest array nesting accepted. A well-formed file needs four levels
/// (root, symbol, body, link).
const MAX_DEPTH: usize = 8;

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Skips `var searchData =` if present.
    fn skip_assignment(&mut self) {
        self.skip_ws();
        let rest = &self.src[self.pos..];
        if rest.starts_with('[') {
            return;
        }
        if let Some(eq) = rest.find('=') {
            self.pos += eq + 1;
        }
    }

    fn error(&self, message: impl Into<String>) -> IndexError {
        syntax(self.pos, message)
    }

    fn value(&mut self) -> Result<Spanned, IndexError> {
        self.skip_ws();
        let offset = self.pos;
        let value = match self.peek() {
            Some('[') => Value::Array(self.array()?),
            Some(quote @ ('\'' | '"')) => Value::Str(self.string(quote)?),
            Some(c) if c == '-' || c.is_ascii_digit() => Value::Int(self.int()?),
            Some(c) => return Err(self.error(format!("unexpected character {c:?}"))),
            None => return Err(self.error("unexpected end of input")),
        };
        Ok(Spanned { offset, value })
    }

    fn array(&mut self) -> Result<Vec<Spanned>, IndexError> {
        if self.depth == MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let items = self.array_items();
        self.depth -= 1;
        items
    }

    fn array_items(&mut self) -> Result<Vec<Spanned>, IndexError> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(']') {
                self.bump();
                return Ok(items);
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => {}
                Some(']') => return Ok(items),
                Some(c) => return Err(self.error(format!("expected ',' or ']', found {c:?}"))),
                None => return Err(self.error("unterminated array")),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, IndexError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('\\') => out.push(self.escape()?),
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    fn escape(&mut self) -> Result<char, IndexError> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('u') => {
                let start = self.pos;
                let end = start + 4;
                let hex = self
                    .src
                    .get(start..end)
                    .ok_or_else(|| self.error("truncated \\u escape"))?;
                let code =
                    u32::from_str_radix(hex, 16).map_err(|_| self.error("invalid \\u escape"))?;
                self.pos = end;
                char::from_u32(code).ok_or_else(|| self.error("invalid \\u escape"))
            }
            Some(c) => Ok(c),
            None => Err(self.error("unterminated escape")),
        }
    }

    fn int(&mut self) -> Result<i64, IndexError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        self.src[start..self.pos]
            .parse()
            .map_err(|_| syntax(start, "invalid integer"))
    }
}
