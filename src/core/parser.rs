use crate::domain::model::{InterfaceDecl, MemberSig, Module, SourceModule};
use crate::utils::error::{Result, ScanError};
use std::path::Path;

/// Parses one declaration file into a [`SourceModule`].
///
/// This is not a general TypeScript grammar: it recognizes exactly the
/// top-level `interface Name { ... }` declarations (with optional `export` /
/// `declare` modifiers) that generated `.d.ts` files contain, and skips every
/// other statement while staying brace-balanced. Interfaces nested inside
/// namespaces or other blocks are skipped along with their enclosing
/// statement. Generic and circular declarations are out of scope.
pub fn parse(path: &Path, content: &str) -> Result<SourceModule> {
    let mut cursor = Cursor::new(path, content);
    let tree = cursor.parse_module()?;
    Ok(SourceModule {
        path: path.to_path_buf(),
        raw: content.to_string(),
        tree,
    })
}

struct Cursor<'a> {
    path: &'a Path,
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(path: &'a Path, content: &str) -> Self {
        Self {
            path,
            chars: content.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn error(&self, line: usize, message: impl Into<String>) -> ScanError {
        ScanError::ParseError {
            path: self.path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    fn parse_module(&mut self) -> Result<Module> {
        let mut interfaces = Vec::new();
        loop {
            self.skip_trivia()?;
            let Some(c) = self.peek() else { break };
            if is_ident_start(c) {
                let line = self.line;
                let word = self.read_ident();
                match word.as_str() {
                    // Modifiers preceding a declaration; the declaration
                    // keyword is the next token.
                    "export" | "declare" => continue,
                    "interface" => interfaces.push(self.parse_interface(line)?),
                    _ => self.skip_statement()?,
                }
            } else {
                self.skip_statement()?;
            }
        }
        Ok(Module { interfaces })
    }

    fn parse_interface(&mut self, line: usize) -> Result<InterfaceDecl> {
        self.skip_trivia()?;
        if !self.peek().is_some_and(is_ident_start) {
            return Err(self.error(self.line, "expected interface name"));
        }
        let name = self.read_ident();

        // Skip type parameters and any extends clause up to the body brace.
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => {
                    return Err(self.error(line, format!("interface `{}` has no body", name)));
                }
                Some('{') => {
                    self.bump();
                    break;
                }
                Some(q @ ('\'' | '"' | '`')) => {
                    self.bump();
                    self.read_string_literal(q)?;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }

        let mut members = Vec::new();
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => {
                    return Err(
                        self.error(line, format!("unterminated body for interface `{}`", name))
                    );
                }
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(_) => {
                    if let Some(member) = self.parse_member(line, &name)? {
                        members.push(member);
                    }
                }
            }
        }
        Ok(InterfaceDecl {
            name,
            members,
            line,
        })
    }

    /// One member signature. Returns `None` for members that carry no plain
    /// name (index signatures). Overloads are returned once per signature;
    /// deduplication is the discoverer's concern, not the parser's.
    fn parse_member(&mut self, interface_line: usize, interface_name: &str) -> Result<Option<MemberSig>> {
        let line = self.line;
        let mut name: Option<String> = None;

        match self.peek() {
            Some(c) if is_ident_start(c) => {
                let word = self.read_ident();
                if word == "readonly" {
                    self.skip_trivia()?;
                    // `readonly` is a member name itself when the signature
                    // continues immediately; otherwise it modifies the next
                    // identifier.
                    if self.peek().is_some_and(is_ident_start) {
                        name = Some(self.read_ident());
                    } else if self.peek() == Some('[') {
                        name = None;
                    } else {
                        name = Some(word);
                    }
                } else {
                    name = Some(word);
                }
            }
            Some(q @ ('\'' | '"')) => {
                self.bump();
                name = Some(self.read_string_literal(q)?);
            }
            // Index or computed signature: nothing nameable.
            Some('[') => {}
            Some(_) => {}
            None => {
                return Err(self.error(
                    interface_line,
                    format!("unterminated body for interface `{}`", interface_name),
                ));
            }
        }

        // Consume the rest of the signature up to its terminator, staying
        // balanced through parameter lists and inline object types.
        let mut depth = 0usize;
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => {
                    return Err(self.error(
                        interface_line,
                        format!("unterminated body for interface `{}`", interface_name),
                    ));
                }
                Some('}') if depth == 0 => break, // interface close; caller consumes it
                Some('{' | '(' | '[') => {
                    depth += 1;
                    self.bump();
                }
                Some('}' | ')' | ']') => {
                    if depth == 0 {
                        return Err(self.error(self.line, "unbalanced closing delimiter"));
                    }
                    depth -= 1;
                    self.bump();
                }
                Some(';' | ',') if depth == 0 => {
                    self.bump();
                    break;
                }
                Some(q @ ('\'' | '"' | '`')) => {
                    self.bump();
                    self.read_string_literal(q)?;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        Ok(name.map(|name| MemberSig { name, line }))
    }

    /// Everything that is not an interface declaration: imports, exports,
    /// type aliases, enums, classes, namespaces. Consumed up to a top-level
    /// `;` or the close of a top-level block.
    fn skip_statement(&mut self) -> Result<()> {
        let start_line = self.line;
        let mut depth = 0usize;
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => {
                    if depth == 0 {
                        return Ok(());
                    }
                    return Err(self.error(start_line, "unexpected end of file"));
                }
                Some('{' | '(' | '[') => {
                    depth += 1;
                    self.bump();
                }
                Some(c @ ('}' | ')' | ']')) => {
                    if depth == 0 {
                        return Err(self.error(self.line, "unbalanced closing delimiter"));
                    }
                    depth -= 1;
                    self.bump();
                    if depth == 0 && c == '}' {
                        return Ok(());
                    }
                }
                Some(';') => {
                    self.bump();
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some(q @ ('\'' | '"' | '`')) => {
                    self.bump();
                    self.read_string_literal(q)?;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('/') if self.peek_ahead(1) == Some('*') => {
                    let line = self.line;
                    self.bump();
                    self.bump();
                    let mut closed = false;
                    while let Some(c) = self.bump() {
                        if c == '*' && self.peek() == Some('/') {
                            self.bump();
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(self.error(line, "unterminated block comment"));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn read_ident(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if is_ident_char(c) {
                out.push(c);
                self.bump();
            } else {
                break;
            }
        }
        out
    }

    /// Opening quote already consumed.
    fn read_string_literal(&mut self, quote: char) -> Result<String> {
        let start_line = self.line;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error(start_line, "unterminated string literal")),
                Some('\\') => {
                    if let Some(escaped) = self.bump() {
                        out.push(escaped);
                    }
                }
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
