/// Scan cursor over the expression text: a byte position plus the character
/// at it. Cloning the cursor snapshots the whole scan state, which is how
/// peeking works without a save/restore protocol.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    ch: Option<char>,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            ch: src.chars().next(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Character at the cursor, `None` at end of input.
    pub fn first(&self) -> Option<char> {
        self.ch
    }

    /// Character one past the cursor.
    pub fn second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    pub fn is_eof(&self) -> bool {
        self.ch.is_none()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.ch?;
        self.pos += c.len_utf8();
        self.ch = self.src[self.pos..].chars().next();
        Some(c)
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.ch {
            if !predicate(c) {
                break;
            }
            self.bump();
        }
    }

    /// Verbatim input text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }
}
