use super::error::StyleError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Ident(String),
    Number(f32),
    /// Packed `0xAARRGGBB`, parsed from `#rrggbb` (opaque) or `#aarrggbb`.
    Color(u32),
    Colon,
    LBrace,
    RBrace,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub(crate) struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, StyleError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> StyleError {
        StyleError::new(msg, self.line, self.col)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace() || c == ';' || c == ',') {
                self.advance();
            }
            if self.src[self.pos..].starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, StyleError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ':' | '=' => { self.advance(); Ok(Token::Colon) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '#' => self.lex_color(),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident()),
            c => Err(self.err(format!("unexpected character {:?}", c))),
        }
    }

    fn lex_color(&mut self) -> Result<Token, StyleError> {
        self.advance(); // consume `#`
        let start = self.pos;
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.advance();
            count += 1;
        }
        if count != 6 && count != 8 {
            return Err(self.err(format!(
                "color literal must be #rrggbb or #aarrggbb, got {} digits",
                count
            )));
        }
        let hex = &self.src[start..self.pos];
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| self.err(format!("invalid color {:?}: {}", hex, e)))?;
        Ok(Token::Color(if count == 6 { 0xFF00_0000 | value } else { value }))
    }

    fn lex_number(&mut self) -> Result<Token, StyleError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| self.err(format!("invalid number {:?}", s)))
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn six_digit_color_is_opaque() {
        assert_eq!(kinds("#e30611"), [Token::Color(0xFFE30611), Token::Eof]);
    }

    #[test]
    fn eight_digit_color_is_argb() {
        assert_eq!(kinds("#80112233"), [Token::Color(0x80112233), Token::Eof]);
    }

    #[test]
    fn number_then_unit() {
        assert_eq!(
            kinds("2.5dp"),
            [Token::Number(2.5), Token::Ident("dp".into()), Token::Eof]
        );
    }

    #[test]
    fn tracks_line_and_column() {
        let toks = Lexer::new("// c\n  tickLength: 4").tokenize().unwrap();
        assert_eq!((toks[0].line, toks[0].col), (2, 3));
        assert_eq!((toks[2].line, toks[2].col), (2, 15));
    }

    #[test]
    fn bad_color_reports_position() {
        let err = Lexer::new("\n#12").tokenize().unwrap_err();
        assert_eq!(err.line, 2);
    }
}
