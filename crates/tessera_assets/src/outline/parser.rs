//! Reader for the per-character outline text format.
//!
//! A resource is a stream of whitespace separated records, each a single
//! letter opcode followed by its coordinates:
//!
//! | Opcode | Fields               | Command                 |
//! |--------|----------------------|-------------------------|
//! | `M`    | `x y`                | [`GlyphCommand::MoveTo`]  |
//! | `C`    | `x1 y1 x2 y2 x3 y3`  | [`GlyphCommand::CurveTo`] |
//! | `L`    | `x y`                | [`GlyphCommand::LineTo`]  |
//! | `Z`    |                      | [`GlyphCommand::ClosePath`] |
//!
//! Line breaks carry no meaning.  A record that cannot be read is reported
//! and skipped; the rest of the glyph is still parsed.

use std::iter::Peekable;
use std::str::SplitAsciiWhitespace;

use glam::Vec2;

use super::{GlyphCommand, GlyphOutline};
use crate::error::OutlineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opcode {
    Move,
    Curve,
    Line,
    Close,
}

impl Opcode {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "M" => Some(Self::Move),
            "C" => Some(Self::Curve),
            "L" => Some(Self::Line),
            "Z" => Some(Self::Close),
            _ => None,
        }
    }

    fn arity(self) -> usize {
        match self {
            Self::Move | Self::Line => 2,
            Self::Curve => 6,
            Self::Close => 0,
        }
    }

    fn command(self, f: &[f32; 6]) -> GlyphCommand {
        match self {
            Self::Move => GlyphCommand::MoveTo(Vec2::new(f[0], f[1])),
            Self::Curve => GlyphCommand::CurveTo {
                ctrl1: Vec2::new(f[0], f[1]),
                ctrl2: Vec2::new(f[2], f[3]),
                to: Vec2::new(f[4], f[5]),
            },
            Self::Line => GlyphCommand::LineTo(Vec2::new(f[0], f[1])),
            Self::Close => GlyphCommand::ClosePath,
        }
    }
}

/// Result of parsing one resource: the commands that were read plus one
/// [`OutlineError::MalformedRecord`] per record that was dropped.
#[derive(Debug)]
pub struct ParsedOutline {
    pub outline: GlyphOutline,
    pub skipped: Vec<OutlineError>,
}

pub struct OutlineParser<'a> {
    tokens: Peekable<SplitAsciiWhitespace<'a>>,
    record: usize,
}

impl<'a> OutlineParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_ascii_whitespace().peekable(),
            record: 0,
        }
    }

    /// Convenience wrapper: parse `text` as the outline of `code`.
    pub fn parse_str(code: u32, text: &'a str) -> ParsedOutline {
        Self::new(text).parse(code)
    }

    /// Consumes the token stream until end of resource.
    pub fn parse(mut self, code: u32) -> ParsedOutline {
        let mut outline = GlyphOutline::new(code);
        let mut skipped = Vec::new();

        while let Some(token) = self.tokens.next() {
            self.record += 1;
            let record = self.record;

            let Some(op) = Opcode::from_token(token) else {
                skipped.push(OutlineError::malformed(
                    record,
                    format!("unknown opcode `{token}`"),
                ));
                self.skip_to_opcode();
                continue;
            };

            match self.read_fields(op.arity()) {
                Ok(fields) => outline.commands.push(op.command(&fields)),
                Err(reason) => skipped.push(OutlineError::malformed(record, reason)),
            }
        }

        ParsedOutline { outline, skipped }
    }

    fn read_fields(&mut self, count: usize) -> Result<[f32; 6], String> {
        let mut fields = [0.0f32; 6];
        for (read, slot) in fields.iter_mut().take(count).enumerate() {
            let token = match self.tokens.peek() {
                None => {
                    return Err(format!(
                        "expected {count} numbers, resource ended after {read}"
                    ))
                }
                Some(t) if Opcode::from_token(t).is_some() => {
                    // leave the opcode in place; it starts the next record
                    return Err(format!(
                        "expected {count} numbers, found opcode `{t}` after {read}"
                    ));
                }
                Some(t) => *t,
            };
            self.tokens.next();
            match token.parse::<f32>() {
                Ok(value) => *slot = value,
                Err(_) => {
                    self.skip_to_opcode();
                    return Err(format!("`{token}` is not a number"));
                }
            }
        }
        Ok(fields)
    }

    fn skip_to_opcode(&mut self) {
        while let Some(t) = self.tokens.peek() {
            if Opcode::from_token(t).is_some() {
                break;
            }
            self.tokens.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn reasons(parsed: &ParsedOutline) -> Vec<(usize, String)> {
        parsed
            .skipped
            .iter()
            .map(|e| match e {
                OutlineError::MalformedRecord { record, reason } => (*record, reason.clone()),
                other => panic!("unexpected error {other}"),
            })
            .collect()
    }

    #[test]
    fn parses_every_opcode() {
        let text = "M 10 20\nC 1 2 3 4 5 6\nL -7.5 8e1\nZ\n";
        let parsed = OutlineParser::parse_str(65, text);
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.outline.code, 65);
        assert_eq!(
            parsed.outline.commands,
            vec![
                GlyphCommand::MoveTo(v(10.0, 20.0)),
                GlyphCommand::CurveTo {
                    ctrl1: v(1.0, 2.0),
                    ctrl2: v(3.0, 4.0),
                    to: v(5.0, 6.0),
                },
                GlyphCommand::LineTo(v(-7.5, 80.0)),
                GlyphCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn line_breaks_are_not_significant() {
        let one_line = OutlineParser::parse_str(1, "M 0 0 L 1 1 Z");
        let scattered = OutlineParser::parse_str(1, "M\n0\t0\r\n\nL 1\n 1 Z");
        assert_eq!(one_line.outline, scattered.outline);
    }

    #[test]
    fn empty_resource_is_an_empty_outline() {
        let parsed = OutlineParser::parse_str(32, "  \n ");
        assert!(parsed.outline.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn unknown_opcode_skips_its_record_only() {
        let parsed = OutlineParser::parse_str(66, "M 0 0 Q 1 2 3 4 L 5 5");
        assert_eq!(
            parsed.outline.commands,
            vec![
                GlyphCommand::MoveTo(v(0.0, 0.0)),
                GlyphCommand::LineTo(v(5.0, 5.0)),
            ]
        );
        assert_eq!(reasons(&parsed), vec![(2, "unknown opcode `Q`".to_string())]);
    }

    #[test]
    fn opcodes_are_case_sensitive() {
        let parsed = OutlineParser::parse_str(66, "m 0 0 M 1 1");
        assert_eq!(parsed.outline.commands, vec![GlyphCommand::MoveTo(v(1.0, 1.0))]);
        assert_eq!(parsed.skipped.len(), 1);
    }

    #[test]
    fn short_record_resumes_at_next_opcode() {
        let parsed = OutlineParser::parse_str(67, "M 0 0 C 1 2 3 L 4 4");
        assert_eq!(
            parsed.outline.commands,
            vec![
                GlyphCommand::MoveTo(v(0.0, 0.0)),
                GlyphCommand::LineTo(v(4.0, 4.0)),
            ]
        );
        assert_eq!(
            reasons(&parsed),
            vec![(2, "expected 6 numbers, found opcode `L` after 3".to_string())]
        );
    }

    #[test]
    fn non_numeric_field_drops_the_record() {
        let parsed = OutlineParser::parse_str(68, "M 0 0 L 1 oops 9 9 L 2 2");
        assert_eq!(
            parsed.outline.commands,
            vec![
                GlyphCommand::MoveTo(v(0.0, 0.0)),
                GlyphCommand::LineTo(v(2.0, 2.0)),
            ]
        );
        assert_eq!(reasons(&parsed), vec![(2, "`oops` is not a number".to_string())]);
    }

    #[test]
    fn truncated_resource_keeps_earlier_records() {
        let parsed = OutlineParser::parse_str(69, "M 0 0 L 1 1 L 2");
        assert_eq!(parsed.outline.commands.len(), 2);
        assert_eq!(
            reasons(&parsed),
            vec![(3, "expected 2 numbers, resource ended after 1".to_string())]
        );
    }
}
