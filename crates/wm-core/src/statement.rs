//! Per-kind statement parsers for single lines of map text.
//!
//! Built on `winnow` 0.7. Each parser recognizes one `StatementKind` and
//! reports byte spans for every token a mutator may rewrite: the name, the
//! coordinate bracket, the `label [dx, dy]` clause, the evolve maturity and
//! override arrow, and annotation free text.
//!
//! Spans are offsets into the line content (no `\r`). Parsing never fails
//! loudly: a clause that does not parse cleanly is reported as absent.

use crate::name::{OVERRIDE_ARROW, decode_name, quoted_token_len};
use smallvec::SmallVec;
use std::fmt;
use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};

// ─── Types ───────────────────────────────────────────────────────────────

/// The kind of statement a line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Component,
    Note,
    Anchor,
    Pipeline,
    Evolve,
    Pioneers,
    Settlers,
    TownPlanners,
    Annotation,
}

impl StatementKind {
    pub const ALL: [StatementKind; 9] = [
        StatementKind::Component,
        StatementKind::Note,
        StatementKind::Anchor,
        StatementKind::Pipeline,
        StatementKind::Evolve,
        StatementKind::Pioneers,
        StatementKind::Settlers,
        StatementKind::TownPlanners,
        StatementKind::Annotation,
    ];

    /// The keyword that opens a statement of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Note => "note",
            Self::Anchor => "anchor",
            Self::Pipeline => "pipeline",
            Self::Evolve => "evolve",
            Self::Pioneers => "pioneers",
            Self::Settlers => "settlers",
            Self::TownPlanners => "townplanners",
            Self::Annotation => "annotation",
        }
    }

    /// Named statements placed by a `[visibility, maturity]` bracket
    /// (pipelines carry `[start, end]` maturities instead).
    pub fn is_placement(self) -> bool {
        matches!(
            self,
            Self::Component | Self::Note | Self::Anchor | Self::Pipeline
        )
    }

    /// Pioneers / Settlers / Town Planners regions.
    pub fn is_region(self) -> bool {
        matches!(self, Self::Pioneers | Self::Settlers | Self::TownPlanners)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A byte range within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn slice(self, line: &str) -> &str {
        &line[self.start..self.end]
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A name token with its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct NameToken {
    pub span: Span,
    pub value: String,
}

/// A numeric literal and its parsed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberToken {
    pub span: Span,
    pub value: f64,
}

/// A `[n, n, ...]` bracket. `span` covers both brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket {
    pub span: Span,
    pub values: SmallVec<[NumberToken; 4]>,
}

/// A `label [dx, dy]` clause. `span` runs from `label` to the closing `]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelClause {
    pub span: Span,
    pub dx: NumberToken,
    pub dy: NumberToken,
}

/// The `->override` half of an evolve statement.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideClause {
    pub arrow: Span,
    pub name: NameToken,
}

/// A parsed statement line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `component|note|anchor|pipeline <name> [a, b]` with optional label.
    Placement {
        kind: StatementKind,
        name: NameToken,
        coordinates: Option<Bracket>,
        label: Option<LabelClause>,
    },
    /// `evolve <name>[->override] <maturity>` with optional label.
    Evolve {
        name: NameToken,
        override_name: Option<OverrideClause>,
        maturity: Option<NumberToken>,
        label: Option<LabelClause>,
    },
    /// `pioneers|settlers|townplanners [v1, m1, v2, m2]`.
    Region {
        kind: StatementKind,
        keyword_end: usize,
        coordinates: Option<Bracket>,
    },
    /// `annotation <n> [v, m]` or `annotation <n> [[v, m], [v, m]]`, then free text.
    /// `coordinates` spans every point group.
    Annotation {
        number: NumberToken,
        coordinates: Option<Span>,
        text: Option<Span>,
    },
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Self::Placement { kind, .. } | Self::Region { kind, .. } => *kind,
            Self::Evolve { .. } => StatementKind::Evolve,
            Self::Annotation { .. } => StatementKind::Annotation,
        }
    }

    /// The statement's name token; for evolve lines this is the base name.
    pub fn name(&self) -> Option<&NameToken> {
        match self {
            Self::Placement { name, .. } | Self::Evolve { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&LabelClause> {
        match self {
            Self::Placement { label, .. } | Self::Evolve { label, .. } => label.as_ref(),
            _ => None,
        }
    }

    /// Offset right after the last positional clause, where a missing
    /// `label` clause is inserted.
    pub fn clause_insert_point(&self) -> usize {
        match self {
            Self::Placement {
                name, coordinates, ..
            } => coordinates.as_ref().map_or(name.span.end, |c| c.span.end),
            Self::Evolve {
                name,
                override_name,
                maturity,
                ..
            } => maturity.map(|m| m.span.end).unwrap_or_else(|| {
                override_name
                    .as_ref()
                    .map_or(name.span.end, |o| o.name.span.end)
            }),
            Self::Region {
                keyword_end,
                coordinates,
                ..
            } => coordinates.as_ref().map_or(*keyword_end, |c| c.span.end),
            Self::Annotation {
                number,
                coordinates,
                ..
            } => coordinates.map_or(number.span.end, |c| c.end),
        }
    }
}

// ─── Entry points ────────────────────────────────────────────────────────

/// Parse `line` as a statement of `kind`. Returns `None` when the line does
/// not open with that kind's keyword.
pub fn parse_statement(line: &str, kind: StatementKind) -> Option<Statement> {
    match kind {
        StatementKind::Component
        | StatementKind::Note
        | StatementKind::Anchor
        | StatementKind::Pipeline => parse_placement(line, kind),
        StatementKind::Evolve => parse_evolve(line),
        StatementKind::Pioneers | StatementKind::Settlers | StatementKind::TownPlanners => {
            parse_region(line, kind)
        }
        StatementKind::Annotation => parse_annotation(line),
    }
}

// ─── Low-level parsers ───────────────────────────────────────────────────

fn offset(line: &str, rest: &str) -> usize {
    line.len() - rest.len()
}

fn backtrack<T>() -> ModalResult<T> {
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Consume optional whitespace (concrete error type avoids inference issues).
fn skip_space(input: &mut &str) {
    use winnow::ascii::space0;
    let _: Result<&str, ErrMode<ContextError>> = space0.parse_next(input);
}

/// Match `keyword` followed by whitespace, `[`, or end of line.
fn parse_keyword(input: &mut &str, keyword: &'static str) -> ModalResult<()> {
    let _ = literal(keyword).parse_next(input)?;
    if input.is_empty() || input.starts_with(char::is_whitespace) || input.starts_with('[') {
        Ok(())
    } else {
        backtrack()
    }
}

fn parse_number(input: &mut &str) -> ModalResult<f64> {
    let start = *input;
    let _ = opt(one_of(['-', '+'])).parse_next(input)?;
    let int: &str = take_while(0.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let mut frac = "";
    if input.starts_with('.') {
        *input = &input[1..];
        frac = take_while(0.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    }
    if int.is_empty() && frac.is_empty() {
        *input = start;
        return backtrack();
    }
    let matched = &start[..start.len() - input.len()];
    matched.parse::<f64>().or_else(|_| backtrack())
}

fn parse_number_token(line: &str, input: &mut &str) -> ModalResult<NumberToken> {
    let start = offset(line, input);
    let value = parse_number.parse_next(input)?;
    Ok(NumberToken {
        span: Span::new(start, offset(line, input)),
        value,
    })
}

/// Whether a whole token is a numeric literal (`0.9`, `-12`, `.5`).
fn is_number_literal(token: &str) -> bool {
    let mut input = token;
    parse_number(&mut input).is_ok() && input.is_empty()
}

fn parse_bracket(line: &str, input: &mut &str) -> ModalResult<Bracket> {
    let checkpoint = *input;
    let result = parse_bracket_values(line, input);
    if result.is_err() {
        *input = checkpoint;
    }
    result
}

fn parse_bracket_values(line: &str, input: &mut &str) -> ModalResult<Bracket> {
    let start = offset(line, input);
    let _ = '['.parse_next(input)?;
    let mut values = SmallVec::new();
    loop {
        skip_space(input);
        values.push(parse_number_token(line, input)?);
        skip_space(input);
        if input.starts_with(',') {
            *input = &input[1..];
            continue;
        }
        break;
    }
    let _ = ']'.parse_next(input)?;
    Ok(Bracket {
        span: Span::new(start, offset(line, input)),
        values,
    })
}

fn parse_bracket_of(line: &str, input: &mut &str, arity: usize) -> Option<Bracket> {
    let checkpoint = *input;
    match parse_bracket(line, input) {
        Ok(bracket) if bracket.values.len() == arity => Some(bracket),
        _ => {
            *input = checkpoint;
            None
        }
    }
}

/// Whitespace-separated tokens from `from`, treating quoted names as one token.
fn token_spans(line: &str, from: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = from;
    while pos < line.len() {
        let trimmed = line[pos..].trim_start();
        if trimmed.is_empty() {
            break;
        }
        let start = offset(line, trimmed);
        let len = if trimmed.starts_with('"') {
            quoted_token_len(trimmed).unwrap_or(trimmed.len())
        } else {
            trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len())
        };
        spans.push(Span::new(start, start + len));
        pos = start + len;
    }
    spans
}

/// Find a `label [dx, dy]` clause starting at a token boundary after `from`.
fn find_label(line: &str, from: usize) -> Option<LabelClause> {
    token_spans(line, from).into_iter().find_map(|token| {
        let mut input = &line[token.start..];
        parse_keyword(&mut input, "label").ok()?;
        skip_space(&mut input);
        let bracket = parse_bracket_of(line, &mut input, 2)?;
        Some(LabelClause {
            span: Span::new(token.start, bracket.span.end),
            dx: bracket.values[0],
            dy: bracket.values[1],
        })
    })
}

/// The last numeric token in `[from, limit)`.
fn last_number_token(line: &str, from: usize, limit: usize) -> Option<NumberToken> {
    token_spans(line, from)
        .into_iter()
        .filter(|t| t.end <= limit)
        .filter(|t| is_number_literal(t.slice(line)))
        .last()
        .and_then(|t| {
            let mut input = &line[t.start..];
            parse_number_token(line, &mut input).ok()
        })
}

fn trimmed_span(line: &str, start: usize, end: usize) -> Span {
    let segment = &line[start..end];
    let lead = segment.len() - segment.trim_start().len();
    let trail = segment.len() - segment.trim_end().len();
    if lead == segment.len() {
        return Span::new(start, start);
    }
    Span::new(start + lead, end - trail)
}

fn bare_name(line: &str, span: Span) -> NameToken {
    NameToken {
        span,
        value: span.slice(line).to_string(),
    }
}

/// A quoted name at the start of `input`, if it is terminated.
fn quoted_name(line: &str, input: &mut &str) -> Option<NameToken> {
    let len = quoted_token_len(input)?;
    let start = offset(line, input);
    let span = Span::new(start, start + len);
    *input = &input[len..];
    Some(NameToken {
        span,
        value: decode_name(span.slice(line)),
    })
}

// ─── Statement parsers ───────────────────────────────────────────────────

fn parse_placement(line: &str, kind: StatementKind) -> Option<Statement> {
    let mut input = line;
    skip_space(&mut input);
    parse_keyword(&mut input, kind.keyword()).ok()?;
    skip_space(&mut input);

    let name = match quoted_name(line, &mut input) {
        Some(name) => name,
        None => {
            // The first bracket after the name is always the coordinates, so a
            // name may end in `label` ("White label")
            let start = offset(line, input);
            let end = start + input.find('[').unwrap_or(input.len());
            let span = trimmed_span(line, start, end);
            input = &line[span.end..];
            bare_name(line, span)
        }
    };

    skip_space(&mut input);
    let coordinates = parse_bracket_of(line, &mut input, 2);
    let after = coordinates.as_ref().map_or(name.span.end, |c| c.span.end);
    let label = find_label(line, after);

    Some(Statement::Placement {
        kind,
        name,
        coordinates,
        label,
    })
}

fn parse_evolve(line: &str) -> Option<Statement> {
    let mut input = line;
    skip_space(&mut input);
    parse_keyword(&mut input, StatementKind::Evolve.keyword()).ok()?;
    skip_space(&mut input);

    let body_start = offset(line, input);
    let label = find_label(line, body_start);
    let limit = label.as_ref().map_or(line.len(), |l| l.span.start);

    let mut maturity = None;
    let (name, mut cursor) = match quoted_name(line, &mut input) {
        Some(name) if name.span.end <= limit => {
            let end = name.span.end;
            (name, end)
        }
        _ => {
            let body = &line[body_start..limit];
            if let Some(arrow) = body.find(OVERRIDE_ARROW) {
                let span = trimmed_span(line, body_start, body_start + arrow);
                (bare_name(line, span), body_start + arrow)
            } else {
                maturity = last_number_token(line, body_start, limit);
                let end = maturity.map_or(limit, |m| m.span.start);
                (bare_name(line, trimmed_span(line, body_start, end)), end)
            }
        }
    };

    let mut override_name = None;
    if maturity.is_none() {
        let mut rest = &line[cursor..];
        skip_space(&mut rest);
        if offset(line, rest) < limit && rest.starts_with(OVERRIDE_ARROW) {
            let arrow_start = offset(line, rest);
            let arrow = Span::new(arrow_start, arrow_start + OVERRIDE_ARROW.len());
            rest = &rest[OVERRIDE_ARROW.len()..];
            skip_space(&mut rest);
            let start = offset(line, rest).min(limit);
            let name = match quoted_name(line, &mut rest) {
                Some(name) if name.span.end <= limit => name,
                _ => {
                    maturity = last_number_token(line, start, limit);
                    let end = maturity.map_or(limit, |m| m.span.start);
                    bare_name(line, trimmed_span(line, start, end))
                }
            };
            cursor = name.span.end;
            override_name = Some(OverrideClause { arrow, name });
        }
    }

    if maturity.is_none() {
        let mut rest = &line[cursor..];
        skip_space(&mut rest);
        if let Ok(token) = parse_number_token(line, &mut rest)
            && token.span.end <= limit
            && (rest.is_empty() || rest.starts_with(char::is_whitespace))
        {
            maturity = Some(token);
        }
    }

    Some(Statement::Evolve {
        name,
        override_name,
        maturity,
        label,
    })
}

fn parse_region(line: &str, kind: StatementKind) -> Option<Statement> {
    let mut input = line;
    skip_space(&mut input);
    parse_keyword(&mut input, kind.keyword()).ok()?;
    let keyword_end = offset(line, input);
    skip_space(&mut input);
    let coordinates = parse_bracket_of(line, &mut input, 4);
    Some(Statement::Region {
        kind,
        keyword_end,
        coordinates,
    })
}

/// One `[v, m]` point or a `[[v, m], ...]` group; returns the span of the whole.
fn parse_annotation_points(line: &str, input: &mut &str) -> ModalResult<Span> {
    let checkpoint = *input;
    let start = offset(line, input);

    let _ = '['.parse_next(input)?;
    skip_space(input);
    if !input.starts_with('[') {
        // A single point: the outer bracket is the point itself
        *input = checkpoint;
        return match parse_bracket_of(line, input, 2) {
            Some(point) => Ok(point.span),
            None => backtrack(),
        };
    }

    loop {
        if parse_bracket_of(line, input, 2).is_none() {
            *input = checkpoint;
            return backtrack();
        }
        skip_space(input);
        if input.starts_with(',') {
            *input = &input[1..];
            skip_space(input);
            continue;
        }
        break;
    }
    if !input.starts_with(']') {
        *input = checkpoint;
        return backtrack();
    }
    *input = &input[1..];
    Ok(Span::new(start, offset(line, input)))
}

fn parse_annotation(line: &str) -> Option<Statement> {
    let mut input = line;
    skip_space(&mut input);
    parse_keyword(&mut input, StatementKind::Annotation.keyword()).ok()?;
    skip_space(&mut input);
    let number = parse_number_token(line, &mut input).ok()?;
    skip_space(&mut input);

    let coordinates = parse_annotation_points(line, &mut input).ok();

    let text = coordinates.and_then(|c| {
        let span = trimmed_span(line, c.end, line.len());
        (!span.is_empty()).then(|| Span::new(span.start, line.len()))
    });

    Some(Statement::Annotation {
        number,
        coordinates,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name_of(line: &str, kind: StatementKind) -> String {
        parse_statement(line, kind)
            .and_then(|s| s.name().map(|n| n.value.clone()))
            .unwrap_or_default()
    }

    #[test]
    fn placement_with_spaced_bare_name() {
        let line = "component Simple Component [0.6, 0.4]";
        let Some(Statement::Placement {
            name, coordinates, ..
        }) = parse_statement(line, StatementKind::Component)
        else {
            panic!("expected placement");
        };
        assert_eq!(name.value, "Simple Component");
        assert_eq!(name.span.slice(line), "Simple Component");
        let coords = coordinates.unwrap();
        assert_eq!(coords.span.slice(line), "[0.6, 0.4]");
        assert_eq!(coords.values[0].value, 0.6);
        assert_eq!(coords.values[1].value, 0.4);
    }

    #[test]
    fn placement_with_quoted_name_and_label() {
        let line = r#"component "Hot\nWater" [0.45, 0.65] label [-10, 5]"#;
        let stmt = parse_statement(line, StatementKind::Component).unwrap();
        assert_eq!(stmt.name().unwrap().value, "Hot\nWater");
        let label = stmt.label().unwrap();
        assert_eq!(label.span.slice(line), "label [-10, 5]");
        assert_eq!(label.dx.value, -10.0);
        assert_eq!(label.dy.value, 5.0);
    }

    #[test]
    fn placement_keeps_trailing_decorators_out_of_label() {
        let line = "component Kettle [0.43, 0.35] (build)";
        let stmt = parse_statement(line, StatementKind::Component).unwrap();
        assert!(stmt.label().is_none());
        assert_eq!(stmt.clause_insert_point(), "component Kettle [0.43, 0.35]".len());
    }

    #[test]
    fn placement_name_ending_in_label_keeps_coordinates() {
        let line = "component White label [0.50, 0.60] label [3, 4]";
        let Some(Statement::Placement {
            name,
            coordinates,
            label,
            ..
        }) = parse_statement(line, StatementKind::Component)
        else {
            panic!("expected placement");
        };
        assert_eq!(name.value, "White label");
        assert_eq!(coordinates.unwrap().span.slice(line), "[0.50, 0.60]");
        assert_eq!(label.unwrap().span.slice(line), "label [3, 4]");
    }

    #[test]
    fn placement_named_label() {
        let line = "note label [0.2, 0.3]";
        let stmt = parse_statement(line, StatementKind::Note).unwrap();
        assert_eq!(stmt.name().unwrap().value, "label");
        assert!(stmt.label().is_none());
    }

    #[test]
    fn malformed_coordinates_parse_as_absent() {
        let line = "component Kettle [0.4, oops]";
        let Some(Statement::Placement {
            name, coordinates, ..
        }) = parse_statement(line, StatementKind::Component)
        else {
            panic!("expected placement");
        };
        assert_eq!(name.value, "Kettle");
        assert!(coordinates.is_none());
    }

    #[test]
    fn keyword_requires_word_boundary() {
        assert!(parse_statement("components [0.1, 0.2]", StatementKind::Component).is_none());
        assert!(parse_statement("annotations [0.72, 0.03]", StatementKind::Annotation).is_none());
        assert!(parse_statement("evolve foo 0.9", StatementKind::Component).is_none());
    }

    #[test]
    fn evolve_plain() {
        let line = "evolve Power Supply 0.8 label [-12, 4]";
        let Some(Statement::Evolve {
            name,
            override_name,
            maturity,
            label,
        }) = parse_statement(line, StatementKind::Evolve)
        else {
            panic!("expected evolve");
        };
        assert_eq!(name.value, "Power Supply");
        assert!(override_name.is_none());
        assert_eq!(maturity.unwrap().span.slice(line), "0.8");
        assert_eq!(label.unwrap().span.slice(line), "label [-12, 4]");
    }

    #[test]
    fn evolve_with_bare_override() {
        let line = "evolve foo->barbaz 0.9";
        let Some(Statement::Evolve {
            name,
            override_name,
            maturity,
            ..
        }) = parse_statement(line, StatementKind::Evolve)
        else {
            panic!("expected evolve");
        };
        assert_eq!(name.value, "foo");
        let ov = override_name.unwrap();
        assert_eq!(ov.arrow.slice(line), "->");
        assert_eq!(ov.name.value, "barbaz");
        assert_eq!(maturity.unwrap().value, 0.9);
    }

    #[test]
    fn evolve_with_quoted_override_and_base() {
        let line = r#"evolve "two\nlines"->"bar\nbaz" 0.9"#;
        let Some(Statement::Evolve {
            name,
            override_name,
            maturity,
            ..
        }) = parse_statement(line, StatementKind::Evolve)
        else {
            panic!("expected evolve");
        };
        assert_eq!(name.value, "two\nlines");
        assert_eq!(override_name.unwrap().name.value, "bar\nbaz");
        assert_eq!(maturity.unwrap().value, 0.9);
    }

    #[test]
    fn evolve_name_ending_in_digit() {
        assert_eq!(name_of("evolve Web 2 0.7", StatementKind::Evolve), "Web 2");
    }

    #[test]
    fn region_parses_four_values() {
        let line = "pioneers [0.93, 0.03, 0.75, 0.29]";
        let Some(Statement::Region { coordinates, .. }) =
            parse_statement(line, StatementKind::Pioneers)
        else {
            panic!("expected region");
        };
        assert_eq!(coordinates.unwrap().values.len(), 4);
    }

    #[test]
    fn annotation_single_point_with_text() {
        let line = "annotation 2 [0.78, 0.64] Hot water is obvious and well known";
        let Some(Statement::Annotation {
            number,
            coordinates,
            text,
        }) = parse_statement(line, StatementKind::Annotation)
        else {
            panic!("expected annotation");
        };
        assert_eq!(number.value, 2.0);
        assert_eq!(coordinates.unwrap().slice(line), "[0.78, 0.64]");
        assert_eq!(
            text.unwrap().slice(line),
            "Hot water is obvious and well known"
        );
    }

    #[test]
    fn annotation_multiple_points() {
        let line = "annotation 1 [[0.85,0.64],[0.85,0.68]] Standardising power";
        let Some(Statement::Annotation {
            coordinates, text, ..
        }) = parse_statement(line, StatementKind::Annotation)
        else {
            panic!("expected annotation");
        };
        assert_eq!(coordinates.unwrap().slice(line), "[[0.85,0.64],[0.85,0.68]]");
        assert_eq!(text.unwrap().slice(line), "Standardising power");
    }

    #[test]
    fn annotation_with_malformed_group_has_no_coordinates() {
        let line = "annotation 5 [[0.85,0.64],[0.85]] text";
        let Some(Statement::Annotation {
            coordinates, text, ..
        }) = parse_statement(line, StatementKind::Annotation)
        else {
            panic!("expected annotation");
        };
        assert!(coordinates.is_none());
        assert!(text.is_none());
    }
}
