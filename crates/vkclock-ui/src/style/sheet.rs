//! Plain-text style sheets.
//!
//! ```text
//! // Optional wrapper block; the name is informational.
//! ClockView {
//!     centerColor: #e30611
//!     secondHandColor: #ffe30611
//!     hourHandWidth: 3dp
//!     circleWidth: 4px
//! }
//! ```
//!
//! Entries are `name: value` (or `name = value`), separated by whitespace,
//! `;` or `,`. Colors are `#rrggbb` or `#aarrggbb`; sizes are numbers with an
//! optional `dp`, `dip`, `sp` or `px` suffix (no suffix means dp).

use super::config::{Dimension, StyleConfig, StyleOption, StyleValue};
use super::error::StyleError;
use super::lexer::{Lexer, Token, TokenWithPos};

/// One parsed `name: value` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub option: StyleOption,
    pub value: StyleValue,
    /// 1-based line of the option name.
    pub line: usize,
}

struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> StyleError {
        let (line, col) = self.current_pos();
        StyleError::new(msg, line, col)
    }

    fn sheet(&mut self) -> Result<Vec<StyleEntry>, StyleError> {
        // `Name { ... }` wrapper.
        let wrapped = matches!(
            (self.peek(), self.peek_ahead(1)),
            (Token::Ident(_), Token::LBrace)
        );
        if wrapped {
            self.advance();
            self.advance();
        }

        let mut entries = Vec::new();
        loop {
            match self.peek() {
                Token::Eof if wrapped => return Err(self.err("unclosed `{`")),
                Token::Eof => break,
                Token::RBrace if wrapped => {
                    self.advance();
                    break;
                }
                _ => entries.push(self.entry()?),
            }
        }

        if *self.peek() != Token::Eof {
            return Err(self.err(format!("unexpected {:?} after style block", self.peek())));
        }
        Ok(entries)
    }

    fn entry(&mut self) -> Result<StyleEntry, StyleError> {
        let (line, _) = self.current_pos();
        let name = match self.advance() {
            Token::Ident(s) => s,
            tok => return Err(self.err(format!("expected option name, got {:?}", tok))),
        };
        let option = StyleOption::from_name(&name)
            .ok_or_else(|| self.err(format!("unknown style option {name:?}")))?;

        match self.advance() {
            Token::Colon => {}
            tok => return Err(self.err(format!("expected `:` after {name}, got {:?}", tok))),
        }

        let value = self.value()?;
        if option.is_color() != matches!(value, StyleValue::Color(_)) {
            let expected = if option.is_color() { "a color" } else { "a size" };
            return Err(self.err(format!("{option} expects {expected}")));
        }
        Ok(StyleEntry { option, value, line })
    }

    fn value(&mut self) -> Result<StyleValue, StyleError> {
        match self.advance() {
            Token::Color(argb) => Ok(StyleValue::Color(argb)),
            Token::Number(n) => {
                let dim = match self.peek() {
                    Token::Ident(u) if is_unit(u) => {
                        let px = u.eq_ignore_ascii_case("px");
                        self.advance();
                        if px { Dimension::px(n) } else { Dimension::dp(n) }
                    }
                    _ => Dimension::dp(n),
                };
                Ok(StyleValue::Size(dim))
            }
            tok => Err(self.err(format!("expected color or size, got {:?}", tok))),
        }
    }
}

fn is_unit(s: &str) -> bool {
    ["dp", "dip", "sp", "px"].iter().any(|u| s.eq_ignore_ascii_case(u))
}

/// Parses a style sheet into its entries, in source order.
pub fn parse_sheet(src: &str) -> Result<Vec<StyleEntry>, StyleError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).sheet()
}

/// Parses a lone value such as `#ff0000` or `3dp`.
pub fn parse_value(src: &str) -> Result<StyleValue, StyleError> {
    let tokens = Lexer::new(src).tokenize()?;
    let mut parser = Parser::new(tokens);
    let value = parser.value()?;
    if *parser.peek() != Token::Eof {
        return Err(parser.err(format!("trailing input after value: {:?}", parser.peek())));
    }
    Ok(value)
}

impl StyleConfig {
    /// Builds a style from defaults overridden by the sheet's entries.
    /// Later entries win over earlier ones.
    pub fn from_sheet(src: &str) -> Result<Self, StyleError> {
        let mut style = Self::default();
        style.apply_sheet(src)?;
        Ok(style)
    }

    /// Overrides options named in the sheet; others keep their current values.
    /// On error nothing is applied.
    pub fn apply_sheet(&mut self, src: &str) -> Result<(), StyleError> {
        let entries = parse_sheet(src)?;
        for e in &entries {
            self.set(e.option, e.value)
                .map_err(|err| StyleError::new(err.message, e.line, 1))?;
        }
        log::debug!("style sheet applied: {} entries", entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(src: &str) -> StyleConfig { StyleConfig::from_sheet(src).unwrap() }
    fn err(src: &str) -> StyleError { StyleConfig::from_sheet(src).unwrap_err() }

    #[test]
    fn empty_sheet_is_defaults() {
        assert_eq!(ok(""), StyleConfig::default());
        assert_eq!(ok("ClockView { }"), StyleConfig::default());
    }

    #[test]
    fn wrapped_block_overrides() {
        let s = ok("ClockView {\n  hourHandWidth: 3dp\n  tickColor: #80ff0000\n}");
        assert_eq!(s.hour_hand_width, Dimension::dp(3.0));
        assert_eq!(s.tick_color, 0x80FF0000);
        assert_eq!(s.minute_hand_width, StyleConfig::DEFAULT_STROKE);
    }

    #[test]
    fn bare_entries_with_separators() {
        let s = ok("tick_length = 12; circleWidth: 1.5px, numeralTextSize: 18sp");
        assert_eq!(s.tick_length, Dimension::dp(12.0));
        assert_eq!(s.circle_width, Dimension::px(1.5));
        assert_eq!(s.numeral_text_size, Dimension::dp(18.0));
    }

    #[test]
    fn comments_are_ignored() {
        let s = ok("// face\ncircleColor: #112233 // trailing\n");
        assert_eq!(s.circle_color, 0xFF112233);
    }

    #[test]
    fn later_entries_win() {
        assert_eq!(ok("tickWidth: 1 tickWidth: 4").tick_width, Dimension::dp(4.0));
    }

    #[test]
    fn negative_sizes_are_accepted_as_written() {
        assert_eq!(ok("centerRadius: -2").center_radius, Dimension::dp(-2.0));
    }

    #[test]
    fn unknown_option_reports_line() {
        let e = err("tickWidth: 1\nhandColor: #000000");
        assert_eq!(e.line, 2);
        assert!(e.message.contains("handColor"));
    }

    #[test]
    fn wrong_value_kind() {
        assert!(err("hourHandColor: 3dp").message.contains("expects a color"));
        assert!(err("hourHandWidth: #000000").message.contains("expects a size"));
    }

    #[test]
    fn unclosed_block() {
        assert!(err("ClockView { tickWidth: 1").message.contains("unclosed"));
    }

    #[test]
    fn missing_colon() {
        assert!(err("tickWidth 1").message.contains("expected `:`"));
    }

    #[test]
    fn parse_value_rejects_trailing_input() {
        assert!(parse_value("3dp 4").is_err());
        assert_eq!(parse_value("7").unwrap(), StyleValue::Size(Dimension::dp(7.0)));
    }
}
