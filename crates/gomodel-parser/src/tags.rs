//! Struct tag parsing.
//!
//! Follows the `reflect.StructTag` convention: space-separated `key:"value"`
//! pairs, each value a Go quoted string that splits on `,` into a name and
//! options. Malformed tags produce an empty mapping; the raw literal is
//! always kept.

use indexmap::IndexMap;

/// A parsed struct tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag {
    /// Key -> `[name, options...]`, in source key order.
    pub tags: IndexMap<String, Vec<String>>,
    /// The tag literal exactly as written, delimiters included.
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("tag literal is not a Go string")]
    Literal,
    #[error("bad syntax for struct tag key")]
    KeySyntax,
    #[error("bad syntax for struct tag pair")]
    PairSyntax,
    #[error("bad syntax for struct tag value")]
    ValueSyntax,
}

/// Parse a tag literal such as `` `json:"id,omitempty" db:"id"` ``.
///
/// Never fails: on malformed input `tags` is empty and the reason is logged.
#[must_use]
pub fn parse_struct_tag(raw: &str) -> StructTag {
    let tags = unquote_literal(raw)
        .and_then(|body| parse_pairs(&body))
        .unwrap_or_else(|err| {
            tracing::debug!(tag = raw, %err, "ignoring malformed struct tag");
            IndexMap::new()
        });
    StructTag {
        tags,
        raw: raw.to_string(),
    }
}

fn unquote_literal(raw: &str) -> Result<String, TagError> {
    if let Some(body) = raw
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return Ok(body.to_string());
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unquote_go(raw).ok_or(TagError::Literal);
    }
    Err(TagError::Literal)
}

fn parse_pairs(mut tag: &str) -> Result<IndexMap<String, Vec<String>>, TagError> {
    let mut tags = IndexMap::new();
    loop {
        tag = tag.trim_start_matches(' ');
        if tag.is_empty() {
            return Ok(tags);
        }

        let bytes = tag.as_bytes();
        let key_len = bytes
            .iter()
            .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
            .unwrap_or(bytes.len());
        if key_len == 0 {
            return Err(TagError::KeySyntax);
        }
        if key_len + 1 >= bytes.len() || bytes[key_len] != b':' {
            return Err(TagError::PairSyntax);
        }
        if bytes[key_len + 1] != b'"' {
            return Err(TagError::ValueSyntax);
        }
        let key = &tag[..key_len];
        let quoted = &tag[key_len + 1..];

        // Scan to the closing quote, stepping over escapes.
        let q = quoted.as_bytes();
        let mut i = 1;
        while i < q.len() && q[i] != b'"' {
            if q[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= q.len() {
            return Err(TagError::ValueSyntax);
        }
        let value = unquote_go(&quoted[..=i]).ok_or(TagError::ValueSyntax)?;
        tag = &quoted[i + 1..];

        let parts = value.split(',').map(str::to_string).collect();
        tags.insert(key.to_string(), parts);
    }
}

/// Interpret a double-quoted Go string literal.
fn unquote_go(quoted: &str) -> Option<String> {
    let body = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => unescape(&mut chars, &mut out)?,
            other => {
                let mut buf = [0; 4];
                out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    String::from_utf8(out).ok()
}

fn unescape(chars: &mut std::str::Chars<'_>, out: &mut Vec<u8>) -> Option<()> {
    let simple = match chars.next()? {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        '\\' => b'\\',
        '"' => b'"',
        'x' => return hex_byte(chars, 2).map(|b| out.push(b)),
        'u' => return push_code_point(chars, 4, out),
        'U' => return push_code_point(chars, 8, out),
        d @ '0'..='7' => {
            let mut value = d.to_digit(8)?;
            for _ in 0..2 {
                value = value * 8 + chars.next()?.to_digit(8)?;
            }
            out.push(u8::try_from(value).ok()?);
            return Some(());
        }
        _ => return None,
    };
    out.push(simple);
    Some(())
}

fn read_hex(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u32> {
    (0..digits).try_fold(0u32, |acc, _| Some(acc * 16 + chars.next()?.to_digit(16)?))
}

fn hex_byte(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u8> {
    u8::try_from(read_hex(chars, digits)?).ok()
}

fn push_code_point(chars: &mut std::str::Chars<'_>, digits: usize, out: &mut Vec<u8>) -> Option<()> {
    let c = char::from_u32(read_hex(chars, digits)?)?;
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    Some(())
}
