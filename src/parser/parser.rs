//! Token-stream parser for hostfile text
//!
//! Consumes the token stream one line at a time with a single token of
//! lookahead. Each line resolves a node record (from the existing snapshot,
//! the update set, or freshly created), applies its attribute clauses, and
//! either appends the record to the update set or drops it unchanged.
//! The first error aborts the whole file.

use smol_str::SmolStr;

use super::errors::HostfileError;
use super::lexer::{Lexer, Token, TokenKind};
use crate::store::{NodeRecord, RecordSet};

/// Reserved host name whose presence excludes all other hosts from the file.
///
/// The node name returned for the local machine by the OS is too vague to
/// match reliably against other entries, so a file that names `localhost`
/// may name nothing else.
pub const LOCALHOST: &str = "localhost";

/// Parse hostfile text against an existing snapshot, accumulating net
/// changes into `updates` in file order.
///
/// Records claimed out of `existing` and left unchanged are dropped; they
/// are deliberately not re-emitted. On error both collections are left in
/// their mid-parse state and the caller discards them.
pub fn parse_hostfile(
    input: &str,
    existing: &mut RecordSet,
    updates: &mut RecordSet,
) -> Result<(), HostfileError> {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = HostfileParser::new(&tokens);
    parser.parse_file(existing, updates)
}

/// The parser state
struct HostfileParser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    localhost_seen: bool,
}

impl<'a> HostfileParser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            localhost_seen: false,
        }
    }

    // =========================================================================
    // Token inspection and consumption
    // =========================================================================

    fn current(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current().is_some_and(|t| t.kind == kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Syntax error at the current token (or at end of input).
    fn unexpected(&self) -> HostfileError {
        match self.current() {
            Some(token) => HostfileError::Syntax {
                line: token.line,
                found: token.text.to_string(),
            },
            None => HostfileError::Syntax {
                line: self.tokens.last().map_or(1, |t| t.line),
                found: "end of input".to_string(),
            },
        }
    }

    // =========================================================================
    // File level
    // =========================================================================

    fn parse_file(
        &mut self,
        existing: &mut RecordSet,
        updates: &mut RecordSet,
    ) -> Result<(), HostfileError> {
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::Newline => self.bump(),
                TokenKind::Ident => {
                    self.check_exclusivity(token, updates)?;
                    self.parse_line(existing, updates)?;
                }
                _ => return Err(self.unexpected()),
            }
        }
        Ok(())
    }

    /// Enforce the localhost rule before the line's record is resolved.
    ///
    /// `localhost` is accepted while the update set is empty, or while its
    /// single entry is localhost itself from an earlier line. Any other
    /// host after localhost has been seen is an error.
    fn check_exclusivity(
        &mut self,
        token: Token<'a>,
        updates: &RecordSet,
    ) -> Result<(), HostfileError> {
        if token.text == LOCALHOST {
            if updates.is_empty() || (updates.len() == 1 && self.localhost_seen) {
                self.localhost_seen = true;
            } else {
                return Err(HostfileError::Exclusivity {
                    line: token.line,
                    host: token.text.to_string(),
                });
            }
        } else if self.localhost_seen {
            return Err(HostfileError::Exclusivity {
                line: token.line,
                host: token.text.to_string(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Line level
    // =========================================================================

    fn parse_line(
        &mut self,
        existing: &mut RecordSet,
        updates: &mut RecordSet,
    ) -> Result<(), HostfileError> {
        let host = match self.current() {
            Some(t) if t.kind == TokenKind::Ident => t,
            _ => return Err(self.unexpected()),
        };
        self.bump();
        let name = SmolStr::new(host.text);

        // Resolve the record: existing snapshot first, then the update set,
        // else a fresh record. A record claimed from the update set was just
        // removed from it, so it must be re-appended even if this line
        // changes nothing else.
        let (mut node, mut changed) = match existing.claim(&name) {
            Some(node) => (node, false),
            None => match updates.claim(&name) {
                Some(node) => (node, true),
                None => (NodeRecord::new(name), true),
            },
        };

        let mut saw_slots = false;
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::Newline => {
                    self.bump();
                    break;
                }
                TokenKind::CountKw | TokenKind::CpuKw | TokenKind::SlotsKw => {
                    self.bump();
                    let value = self.parse_clause_value()?;
                    node.slots = node.slots.saturating_add(value);
                    changed = true;
                    saw_slots = true;
                    // Raise the cap to the new count; never lower it.
                    if node.slots_max != 0 && node.slots_max < node.slots {
                        node.slots_max = node.slots;
                    }
                }
                TokenKind::SlotsMaxKw => {
                    self.bump();
                    let value = self.parse_clause_value()?;
                    if value < node.slots {
                        return Err(HostfileError::Bounds {
                            line: token.line,
                            host: node.name.to_string(),
                            given: value,
                            slots: node.slots,
                        });
                    }
                    if node.slots_max != value {
                        node.slots_max = value;
                        changed = true;
                    }
                }
                _ => return Err(self.unexpected()),
            }
        }

        if changed {
            // A bare declaration, new or repeated, implies one more slot.
            if !saw_slots {
                node.slots = node.slots.saturating_add(1);
            }
            updates.push(node);
        }
        Ok(())
    }

    /// The `= <integer>` tail of an attribute clause.
    fn parse_clause_value(&mut self) -> Result<u32, HostfileError> {
        if !self.eat(TokenKind::Eq) {
            return Err(self.unexpected());
        }
        let token = match self.current() {
            Some(t) if t.kind == TokenKind::Integer => t,
            _ => return Err(self.unexpected()),
        };
        self.bump();
        token.text.parse().map_err(|_| HostfileError::Syntax {
            line: token.line,
            found: token.text.to_string(),
        })
    }
}
