//! Parser for GNU `LS_COLORS`-style strings.
//!
//! A spec is a colon separated list of `key=value` segments. Keys and values
//! share one escape grammar: `\n`-style named escapes, `\NNN` octal, `\xHH`
//! hex and `^X` caret notation. An escaped `=` or `:` is a literal character.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorSpecError {
    #[error("invalid caret escape in color spec near {0:?}")]
    Caret(String),

    #[error("hex escape without digits in color spec near {0:?}")]
    Hex(String),

    #[error("color spec ends with a dangling backslash near {0:?}")]
    TrailingBackslash(String),
}

/// Two-letter file category keys understood by GNU `ls`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Indicator {
    LeftCode,
    RightCode,
    EndCode,
    Reset,
    Normal,
    File,
    Directory,
    Link,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
    Missing,
    Orphan,
    Executable,
    Door,
    SetUid,
    SetGid,
    Sticky,
    OtherWritable,
    StickyOtherWritable,
    Capability,
    MultiHardlink,
    ClearToEol,
}

impl Indicator {
    const ALL: [(&'static str, Indicator); 24] = [
        ("lc", Indicator::LeftCode),
        ("rc", Indicator::RightCode),
        ("ec", Indicator::EndCode),
        ("rs", Indicator::Reset),
        ("no", Indicator::Normal),
        ("fi", Indicator::File),
        ("di", Indicator::Directory),
        ("ln", Indicator::Link),
        ("pi", Indicator::Fifo),
        ("so", Indicator::Socket),
        ("bd", Indicator::BlockDevice),
        ("cd", Indicator::CharDevice),
        ("mi", Indicator::Missing),
        ("or", Indicator::Orphan),
        ("ex", Indicator::Executable),
        ("do", Indicator::Door),
        ("su", Indicator::SetUid),
        ("sg", Indicator::SetGid),
        ("st", Indicator::Sticky),
        ("ow", Indicator::OtherWritable),
        ("tw", Indicator::StickyOtherWritable),
        ("ca", Indicator::Capability),
        ("mh", Indicator::MultiHardlink),
        ("cl", Indicator::ClearToEol),
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, indicator)| *indicator)
    }

    pub fn key(&self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(_, indicator)| indicator == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }

    fn defaults() -> BTreeMap<Indicator, String> {
        [
            (Indicator::LeftCode, "\x1b["),
            (Indicator::RightCode, "m"),
            (Indicator::Reset, "0"),
            (Indicator::Directory, "01;34"),
            (Indicator::Link, "01;36"),
            (Indicator::Fifo, "33"),
            (Indicator::Socket, "01;35"),
            (Indicator::BlockDevice, "01;33"),
            (Indicator::CharDevice, "01;33"),
            (Indicator::Executable, "01;32"),
            (Indicator::Door, "01;35"),
            (Indicator::SetUid, "37;41"),
            (Indicator::SetGid, "30;43"),
            (Indicator::Sticky, "37;44"),
            (Indicator::OtherWritable, "34;42"),
            (Indicator::StickyOtherWritable, "30;42"),
            (Indicator::Capability, "30;41"),
            (Indicator::ClearToEol, "\x1b[K"),
        ]
        .into_iter()
        .map(|(indicator, code)| (indicator, code.to_string()))
        .collect()
    }
}

/// Decoded color spec: indicator codes plus ordered name rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRuleSet {
    indicators: BTreeMap<Indicator, String>,
    /// `(pattern, code)` in definition order
    extensions: Vec<(String, String)>,
}

impl Default for ColorRuleSet {
    fn default() -> Self {
        Self {
            indicators: Indicator::defaults(),
            extensions: Vec::new(),
        }
    }
}

impl ColorRuleSet {
    pub fn parse(spec: &str) -> Result<Self, ColorSpecError> {
        let mut rules = Self::default();
        let mut scanner = Scanner::new(spec);

        while !scanner.at_end() {
            let (key, stop) = scanner.token(true)?;
            let value = if stop == Some('=') {
                scanner.token(false)?.0
            } else {
                String::new()
            };

            if key.is_empty() {
                continue;
            }

            match Indicator::from_key(&key) {
                Some(indicator) => {
                    rules.indicators.insert(indicator, value);
                }
                None => {
                    rules.extensions.retain(|(pattern, _)| *pattern != key);
                    rules.extensions.push((key, value));
                }
            }
        }

        Ok(rules)
    }

    pub fn indicator(&self, indicator: Indicator) -> Option<&str> {
        self.indicators.get(&indicator).map(String::as_str)
    }

    /// Code registered under exactly this key.
    pub fn extension(&self, key: &str) -> Option<&str> {
        self.extensions
            .iter()
            .find(|(pattern, _)| pattern == key)
            .map(|(_, code)| code.as_str())
    }

    /// Code of the last rule matching `name`. `*suffix` rules match by
    /// suffix, anything else must equal the whole name.
    pub fn match_name(&self, name: &str) -> Option<&str> {
        self.extensions
            .iter()
            .rev()
            .find(|(pattern, _)| match pattern.strip_prefix('*') {
                Some(suffix) => name.ends_with(suffix),
                None => pattern == name,
            })
            .map(|(_, code)| code.as_str())
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(spec: &str) -> Self {
        Self {
            chars: spec.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn context(&self, start: usize) -> String {
        let end = (self.pos + 1).min(self.chars.len());
        self.chars[start.min(end)..end].iter().collect()
    }

    /// Decode one token. Stops at an unescaped `:` (and `=` for keys),
    /// consuming the separator and returning it.
    fn token(&mut self, is_key: bool) -> Result<(String, Option<char>), ColorSpecError> {
        let start = self.pos;
        let mut out = String::new();

        while let Some(c) = self.bump() {
            match c {
                ':' => return Ok((out, Some(':'))),
                '=' if is_key => return Ok((out, Some('='))),
                '\\' => out.push(self.backslash(start)?),
                '^' => out.push(self.caret(start)?),
                other => out.push(other),
            }
        }

        Ok((out, None))
    }

    fn backslash(&mut self, start: usize) -> Result<char, ColorSpecError> {
        let Some(c) = self.bump() else {
            return Err(ColorSpecError::TrailingBackslash(self.context(start)));
        };

        let decoded = match c {
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            self.pos += 1;
                        }
                        None => break,
                    }
                }
                char::from((value & 0xff) as u8)
            }
            'x' | 'X' => {
                let mut value = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match self.peek().and_then(|d| d.to_digit(16)) {
                        Some(digit) => {
                            value = value * 16 + digit;
                            self.pos += 1;
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    return Err(ColorSpecError::Hex(self.context(start)));
                }
                char::from(value as u8)
            }
            'a' => '\x07',
            'b' => '\x08',
            'e' => '\x1b',
            'f' => '\x0c',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0b',
            '?' => '\x7f',
            '_' => ' ',
            other => other,
        };

        Ok(decoded)
    }

    fn caret(&mut self, start: usize) -> Result<char, ColorSpecError> {
        match self.bump() {
            Some('?') => Ok('\x7f'),
            Some(c @ '@'..='~') => Ok(char::from(c as u8 & 0x1f)),
            _ => Err(ColorSpecError::Caret(self.context(start))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset_of(spec: &str) -> String {
        let rules = ColorRuleSet::parse(spec).unwrap();
        rules.indicator(Indicator::Reset).unwrap().to_string()
    }

    /// Decoding must not depend on where an escape appears.
    fn assert_decodes(escaped: &str, expected: &str) {
        assert_eq!(reset_of(&format!("rs={}", escaped)), expected, "{:?}", escaped);

        let rules = ColorRuleSet::parse(&format!("{}=1;2", escaped)).unwrap();
        assert_eq!(rules.extension(expected), Some("1;2"), "{:?}", escaped);

        let rules = ColorRuleSet::parse(&format!("{0}={0}", escaped)).unwrap();
        assert_eq!(rules.extension(expected), Some(expected), "{:?}", escaped);
    }

    #[test]
    fn test_simple_segments() {
        assert_eq!(reset_of("rs=1;0;1"), "1;0;1");
        assert_eq!(reset_of(":rs=1;0;1"), "1;0;1");
        assert_eq!(reset_of("rs=1;0;1:"), "1;0;1");
        assert_eq!(reset_of("rs=1;0;1::"), "1;0;1");

        let rules = ColorRuleSet::parse("rs=1;0;1:fi=32;42").unwrap();
        assert_eq!(rules.indicator(Indicator::File), Some("32;42"));
    }

    #[test]
    fn test_key_without_value_clears_indicator() {
        for spec in ["rs=1;0;1:fi", "rs=1;0;1:fi="] {
            let rules = ColorRuleSet::parse(spec).unwrap();
            assert_eq!(rules.indicator(Indicator::Reset), Some("1;0;1"));
            assert_eq!(rules.indicator(Indicator::File), Some(""));
        }
    }

    #[test]
    fn test_defaults() {
        let rules = ColorRuleSet::default();
        assert_eq!(rules.indicator(Indicator::Directory), Some("01;34"));
        assert_eq!(rules.indicator(Indicator::LeftCode), Some("\x1b["));
        assert_eq!(rules.indicator(Indicator::File), None);
        assert_eq!(rules.indicator(Indicator::Normal), None);
    }

    #[test]
    fn test_later_segment_wins() {
        let rules = ColorRuleSet::parse("di=1:di=2:*.rs=3:*.rs=4").unwrap();
        assert_eq!(rules.indicator(Indicator::Directory), Some("2"));
        assert_eq!(rules.extension("*.rs"), Some("4"));
    }

    #[test]
    fn test_named_escapes() {
        let cases = [
            ("\\a", "\x07"),
            ("\\b", "\x08"),
            ("\\e", "\x1b"),
            ("\\f", "\x0c"),
            ("\\n", "\n"),
            ("\\r", "\r"),
            ("\\t", "\t"),
            ("\\v", "\x0b"),
            ("\\?", "\x7f"),
            ("\\_", " "),
            ("a\\n", "a\n"),
            ("a\\tb", "a\tb"),
            ("a\\t\\rb", "a\t\rb"),
            ("a\\=b", "a=b"),
        ];
        for (escaped, expected) in cases {
            assert_decodes(escaped, expected);
        }
    }

    #[test]
    fn test_octal_escapes() {
        let cases = [
            ("\\7", "\x07"),
            ("\\8", "8"),
            ("\\10", "\x08"),
            ("a\\2", "a\x02"),
            ("a\\2b", "a\x02b"),
        ];
        for (escaped, expected) in cases {
            assert_decodes(escaped, expected);
        }
    }

    #[test]
    fn test_hex_escapes() {
        let cases = [
            ("\\x7", "\x07".to_string()),
            ("\\x8", "\x08".to_string()),
            ("\\x10", "\x10".to_string()),
            ("\\XaA", char::from(0xAA).to_string()),
            ("a\\x222", "a\"2".to_string()),
            ("a\\x2z", "a\x02z".to_string()),
        ];
        for (escaped, expected) in cases {
            assert_decodes(escaped, &expected);
        }
    }

    #[test]
    fn test_caret_escapes() {
        let cases = [
            ("^a", "\x01"),
            ("^A", "\x01"),
            ("^?", "\x7f"),
            ("^z", "\x1a"),
            ("a^Z", "a\x1a"),
            ("a^Zb", "a\x1ab"),
        ];
        for (escaped, expected) in cases {
            assert_decodes(escaped, expected);
        }
    }

    #[test]
    fn test_bad_caret_is_fatal() {
        for escaped in ["^1", "^", "^\u{82}"] {
            assert!(matches!(
                ColorRuleSet::parse(&format!("rs={}", escaped)),
                Err(ColorSpecError::Caret(_))
            ));
            assert!(matches!(
                ColorRuleSet::parse(&format!("{}=1;2", escaped)),
                Err(ColorSpecError::Caret(_))
            ));
        }
    }

    #[test]
    fn test_truncated_escapes_are_fatal() {
        assert!(matches!(
            ColorRuleSet::parse("rs=\\"),
            Err(ColorSpecError::TrailingBackslash(_))
        ));
        assert!(matches!(
            ColorRuleSet::parse("rs=\\x"),
            Err(ColorSpecError::Hex(_))
        ));
    }

    #[test]
    fn test_escaped_separator_stays_in_key() {
        let rules = ColorRuleSet::parse("a\\:b=1").unwrap();
        assert_eq!(rules.extension("a:b"), Some("1"));
    }

    #[test]
    fn test_equals_in_value_is_literal() {
        let rules = ColorRuleSet::parse("*.x=1=2").unwrap();
        assert_eq!(rules.extension("*.x"), Some("1=2"));
    }

    #[test]
    fn test_name_matching() {
        let rules = ColorRuleSet::parse("*.txt=1:*t=2:Makefile=3").unwrap();
        assert_eq!(rules.match_name("notes.txt"), Some("2"));
        assert_eq!(rules.match_name("Makefile"), Some("3"));
        assert_eq!(rules.match_name("src/Makefile"), None);
        assert_eq!(rules.match_name("notes.md"), None);
    }

    #[test]
    fn test_indicator_keys_round_trip() {
        for (key, indicator) in Indicator::ALL {
            assert_eq!(Indicator::from_key(key), Some(indicator));
            assert_eq!(indicator.key(), key);
        }
        assert_eq!(Indicator::from_key("zz"), None);
    }
}
