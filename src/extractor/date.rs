//! Purpose: Parse date strings out of JSON fields with an immutable, shareable format.
//! Exports: `DateFormat`, `ISO8601_PATTERN`, `decode_date`, `decode_date_iso8601`, `decode_date_array`.
//! Role: Date boundary; translates Unicode date patterns into `time` format descriptions once, up front.
//! Invariants: A `DateFormat` never changes after construction; decoding never mutates it.
//! Invariants: Parsing is locale-independent (POSIX-style month/weekday names, ASCII digits).
//! Notes: Inputs without an offset resolve at the format's default offset (UTC unless configured).

use std::borrow::Cow;
use std::sync::OnceLock;

use time::format_description::OwnedFormatItem;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::core::error::{Error, ErrorKind};
use crate::core::key_path::{KeyPath, lookup};
use crate::json::JsonMap;

pub const ISO8601_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ssZZZZZ";

/// Compiled date pattern plus the offset assumed when the input carries none.
#[derive(Clone, Debug)]
pub struct DateFormat {
    pattern: String,
    items: OwnedFormatItem,
    zulu: Option<&'static str>,
    default_offset: UtcOffset,
}

impl DateFormat {
    /// Build from a Unicode (LDML) pattern such as `yyyy-MM-dd'T'HH:mm:ssZZZZZ`.
    pub fn from_pattern(pattern: &str) -> Result<Self, Error> {
        let translated = translate_pattern(pattern)?;
        let items = compile(pattern, &translated.description)?;
        Ok(Self {
            pattern: pattern.to_string(),
            items,
            zulu: translated.zulu,
            default_offset: UtcOffset::UTC,
        })
    }

    /// Build from a native `time` format description, e.g. `[year]-[month]-[day]`.
    pub fn from_description(description: &str) -> Result<Self, Error> {
        let items = compile(description, description)?;
        Ok(Self {
            pattern: description.to_string(),
            items,
            zulu: None,
            default_offset: UtcOffset::UTC,
        })
    }

    pub fn iso8601() -> Result<Self, Error> {
        Self::from_pattern(ISO8601_PATTERN)
    }

    pub fn with_default_offset(mut self, offset: UtcOffset) -> Self {
        self.default_offset = offset;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn default_offset(&self) -> UtcOffset {
        self.default_offset
    }

    pub fn parse(&self, input: &str) -> Option<OffsetDateTime> {
        let input = self.normalize_zulu(input);
        let input = input.as_ref();
        OffsetDateTime::parse(input, &self.items)
            .or_else(|_| {
                PrimitiveDateTime::parse(input, &self.items)
                    .map(|datetime| datetime.assume_offset(self.default_offset))
            })
            .or_else(|_| {
                Date::parse(input, &self.items)
                    .map(|date| date.midnight().assume_offset(self.default_offset))
            })
            .ok()
    }

    fn normalize_zulu<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match (self.zulu, input.strip_suffix('Z')) {
            (Some(utc), Some(stripped)) => Cow::Owned(format!("{stripped}{utc}")),
            _ => Cow::Borrowed(input),
        }
    }
}

pub fn decode_date<'k>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
    format: &DateFormat,
) -> Option<OffsetDateTime> {
    let path = key.into();
    let raw = lookup(map, path)?.as_str()?;
    parse_logged(raw, format, path)
}

pub fn decode_date_iso8601<'k>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Option<OffsetDateTime> {
    decode_date(map, key, shared_iso8601()?)
}

pub fn decode_date_array<'k>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
    format: &DateFormat,
) -> Option<Vec<OffsetDateTime>> {
    let path = key.into();
    lookup(map, path)?
        .as_array()?
        .iter()
        .map(|item| parse_logged(item.as_str()?, format, path))
        .collect()
}

pub(crate) fn shared_iso8601() -> Option<&'static DateFormat> {
    static ISO8601: OnceLock<Option<DateFormat>> = OnceLock::new();
    ISO8601.get_or_init(|| DateFormat::iso8601().ok()).as_ref()
}

fn parse_logged(raw: &str, format: &DateFormat, path: KeyPath<'_>) -> Option<OffsetDateTime> {
    let parsed = format.parse(raw);
    if parsed.is_none() {
        tracing::trace!(key = path.key(), pattern = format.pattern(), "date did not parse");
    }
    parsed
}

fn compile(pattern: &str, description: &str) -> Result<OwnedFormatItem, Error> {
    time::format_description::parse_owned::<1>(description).map_err(|err| {
        Error::new(ErrorKind::InvalidFormat)
            .with_message(format!("unusable date pattern {pattern:?}"))
            .with_source(err)
    })
}

struct Translated {
    description: String,
    zulu: Option<&'static str>,
}

fn translate_pattern(pattern: &str) -> Result<Translated, Error> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut description = String::with_capacity(pattern.len() * 4);
    // Only a trailing offset field may accept a literal `Z`.
    let mut zulu = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                push_literal(&mut description, '\'');
                i += 2;
                zulu = None;
                continue;
            }
            i += 1;
            loop {
                match chars.get(i) {
                    None => {
                        return Err(invalid_pattern(pattern, "unterminated quoted literal"));
                    }
                    Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                        push_literal(&mut description, '\'');
                        i += 2;
                    }
                    Some('\'') => {
                        i += 1;
                        break;
                    }
                    Some(&literal) => {
                        push_literal(&mut description, literal);
                        i += 1;
                    }
                }
            }
            zulu = None;
            continue;
        }
        if c.is_ascii_alphabetic() {
            let run = chars[i..].iter().take_while(|&&next| next == c).count();
            let (component, accepts_zulu) = field_component(c, run).ok_or_else(|| {
                invalid_pattern(
                    pattern,
                    &format!("unsupported field {:?}", c.to_string().repeat(run)),
                )
            })?;
            description.push_str(&component);
            zulu = accepts_zulu;
            i += run;
            continue;
        }
        push_literal(&mut description, c);
        zulu = None;
        i += 1;
    }

    Ok(Translated { description, zulu })
}

fn field_component(letter: char, run: usize) -> Option<(Cow<'static, str>, Option<&'static str>)> {
    const OFFSET_BASIC: &str = "[offset_hour sign:mandatory][offset_minute]";
    const OFFSET_EXTENDED: &str = "[offset_hour sign:mandatory]:[offset_minute]";

    let component: &'static str = match (letter, run) {
        ('y', 1) | ('y', 4) => "[year]",
        ('M', 1) => "[month padding:none]",
        ('M', 2) => "[month]",
        ('M', 3) => "[month repr:short]",
        ('M', 4) => "[month repr:long]",
        ('d', 1) => "[day padding:none]",
        ('d', 2) => "[day]",
        ('H', 1) => "[hour padding:none]",
        ('H', 2) => "[hour]",
        ('h', 1) => "[hour repr:12 padding:none]",
        ('h', 2) => "[hour repr:12]",
        ('m', 1) => "[minute padding:none]",
        ('m', 2) => "[minute]",
        ('s', 1) => "[second padding:none]",
        ('s', 2) => "[second]",
        ('a', 1..=3) => "[period case_sensitive:false]",
        ('E', 1..=3) => "[weekday repr:short]",
        ('E', 4) => "[weekday]",
        ('S', 1..=9) => {
            return Some((Cow::Owned(format!("[subsecond digits:{run}]")), None));
        }
        ('Z', 1..=3) | ('x', 2) => OFFSET_BASIC,
        ('x', 3) => OFFSET_EXTENDED,
        ('X', 2) => return Some((Cow::Borrowed(OFFSET_BASIC), Some("+0000"))),
        ('Z', 5) | ('X', 3) => return Some((Cow::Borrowed(OFFSET_EXTENDED), Some("+00:00"))),
        _ => return None,
    };
    Some((Cow::Borrowed(component), None))
}

fn push_literal(description: &mut String, literal: char) {
    if literal == '[' {
        description.push_str("[[");
    } else {
        description.push(literal);
    }
}

fn invalid_pattern(pattern: &str, message: &str) -> Error {
    Error::new(ErrorKind::InvalidFormat).with_message(format!("{message} in {pattern:?}"))
}
