use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::ParseError;

/// One attribute value of a STEP instance record.
///
/// Typed wrappers such as `IFCBOOLEAN(.T.)` or `IFCMASSDENSITYMEASURE(2400.)`
/// are unwrapped while parsing, so consumers only ever see the plain
/// variants below.
#[derive(Debug, Clone, PartialEq)]
pub enum StepValue {
    String(String),
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Enum(String),
    Reference(u64),
    List(Vec<StepValue>),
    Null,
    Derived,
}

impl StepValue {
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_reference(&self) -> Option<u64> {
        match self {
            Self::Reference(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Self::Enum(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[StepValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepEntity {
    pub id: u64,
    pub entity_type: String,
    pub values: Vec<StepValue>,
}

impl StepEntity {
    #[must_use]
    pub fn attr(&self, index: usize) -> Option<&StepValue> {
        self.values.get(index)
    }
}

/// The DATA section of a STEP physical file, keyed by instance id.
///
/// A `BTreeMap` keeps iteration in ascending id order, which is the model
/// iteration order every downstream pass relies on for reproducible output.
#[derive(Debug)]
pub struct StepFile {
    pub entities: BTreeMap<u64, StepEntity>,
    pub schema: String,
}

impl StepFile {
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let mut entities = BTreeMap::new();
        let mut schema = String::new();
        let mut in_data = false;
        let mut saw_data = false;

        for raw in content.lines() {
            let line = raw.trim();
            match line {
                "DATA;" => {
                    in_data = true;
                    saw_data = true;
                }
                "ENDSEC;" => in_data = false,
                _ if line.starts_with("FILE_SCHEMA") => {
                    if let Some(name) = schema_name(line) {
                        schema = name.to_string();
                    }
                }
                _ if in_data && line.starts_with('#') => {
                    if let Some(entity) = parse_instance(line) {
                        entities.insert(entity.id, entity);
                    }
                }
                _ => {}
            }
        }

        if !saw_data {
            return Err(ParseError::InvalidStep {
                message: "no DATA section found".to_string(),
            });
        }

        Ok(StepFile { entities, schema })
    }

    #[must_use]
    pub fn entity(&self, id: u64) -> Option<&StepEntity> {
        self.entities.get(&id)
    }

    /// All entities of a type, in ascending id order.
    #[must_use]
    pub fn entities_of(&self, entity_type: &str) -> Vec<&StepEntity> {
        self.entities
            .values()
            .filter(|e| e.entity_type == entity_type)
            .collect()
    }
}

/// Pulls the schema identifier out of a `FILE_SCHEMA(('IFC4'));` header line.
fn schema_name(line: &str) -> Option<&str> {
    let rest = &line[line.find("('")? + 2..];
    let end = rest.find('\'')?;
    Some(&rest[..end])
}

/// Parses one `#id=TYPE(arg,arg,...);` instance record. Lines that do not
/// fit that shape are dropped rather than failing the whole file.
fn parse_instance(line: &str) -> Option<StepEntity> {
    let record = line.trim_end_matches(';');
    let (head, body) = record.split_once('=')?;
    let id = head.strip_prefix('#')?.parse().ok()?;
    let (entity_type, args) = body.strip_suffix(')')?.split_once('(')?;
    Some(StepEntity {
        id,
        entity_type: entity_type.to_string(),
        values: parse_args(args),
    })
}

/// Splits a top level argument list on commas, honouring quoted strings and
/// nested parentheses, and parses every piece.
fn parse_args(args: &str) -> Vec<StepValue> {
    let mut values = Vec::new();
    let mut start = 0;
    let mut depth = 0u32;
    let mut quoted = false;

    for (pos, ch) in args.char_indices() {
        match ch {
            '\'' if depth == 0 => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth = depth.saturating_sub(1),
            ',' if !quoted && depth == 0 => {
                values.push(parse_value(&args[start..pos]));
                start = pos + 1;
            }
            _ => {}
        }
    }

    let tail = args[start..].trim();
    if !tail.is_empty() {
        values.push(parse_value(tail));
    }
    values
}

fn parse_value(piece: &str) -> StepValue {
    let piece = piece.trim();

    if piece == "$" {
        return StepValue::Null;
    }
    if piece == "*" {
        return StepValue::Derived;
    }
    if let Some(id) = piece.strip_prefix('#').and_then(|digits| digits.parse().ok()) {
        return StepValue::Reference(id);
    }
    if let Some(text) = piece.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
        return StepValue::String(decode_text(text));
    }
    if let Some(tag) = piece.strip_prefix('.').and_then(|rest| rest.strip_suffix('.')) {
        return match tag {
            "T" => StepValue::Boolean(true),
            "F" => StepValue::Boolean(false),
            _ => StepValue::Enum(tag.to_string()),
        };
    }
    if let Some(inner) = piece.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        return StepValue::List(parse_args(inner));
    }
    if let Ok(integer) = piece.parse::<i64>() {
        return StepValue::Integer(integer);
    }
    if let Ok(real) = piece.parse::<f64>() {
        return StepValue::Real(real);
    }
    // Typed values such as IFCAREAMEASURE(12.5) unwrap to their payload.
    if let Some(open) = piece.find('(') {
        if let Some(inner) = piece[open + 1..].strip_suffix(')') {
            return parse_value(inner);
        }
    }

    StepValue::String(piece.to_string())
}

/// Decodes the ISO 10303-21 string escapes seen in IFC exports: doubled
/// apostrophes and backslashes, `\S\c` code page shifts, `\X\hh` single
/// byte escapes and `\X2\hhhh...\X0\` code point runs.
fn decode_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                // Apostrophes arrive doubled inside quoted text.
                if chars.peek() == Some(&'\'') {
                    chars.next();
                }
                out.push('\'');
            }
            '\\' => match chars.peek() {
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some('S') => {
                    // \S\c maps c into the upper half of ISO 8859-1.
                    chars.next();
                    chars.next();
                    if let Some(shifted) = chars.next() {
                        out.push(char::from(shifted as u8 + 128));
                    }
                }
                Some('X') => {
                    chars.next();
                    decode_hex_run(&mut chars, &mut out);
                }
                _ => out.push('\\'),
            },
            _ => out.push(ch),
        }
    }

    out
}

/// Handles the part after a consumed `\X`: either `\hh` (one ISO 8859-1
/// byte) or `2\hhhh...\X0\` (a run of four digit code points). Anything
/// else stays literal.
fn decode_hex_run(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    match chars.peek() {
        Some('2') => {
            chars.next();
            chars.next();
            let digits: String = std::iter::from_fn(|| chars.next_if(|&c| c != '\\')).collect();
            if chars.peek() == Some(&'\\') {
                // Step over the closing \X0\.
                for _ in 0..4 {
                    chars.next();
                }
            }
            for group in digits.as_bytes().chunks_exact(4) {
                let decoded = std::str::from_utf8(group)
                    .ok()
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .and_then(char::from_u32);
                if let Some(decoded) = decoded {
                    out.push(decoded);
                }
            }
        }
        Some('\\') => {
            chars.next();
            let digits: String = chars.by_ref().take(2).collect();
            if let Ok(code) = u8::from_str_radix(&digits, 16) {
                out.push(char::from(code));
            }
        }
        _ => {
            out.push('\\');
            out.push('X');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = "ISO-10303-21;\nHEADER;\nFILE_SCHEMA(('IFC4'));\nENDSEC;\nDATA;\n#1=IFCWALL('guid',$,'Wand',$,$,$,#9,$,.SOLIDWALL.);\n#2=IFCQUANTITYAREA('NetSideArea',$,$,12.5);\n#3=IFCPROPERTYSINGLEVALUE('IsExternal',$,IFCBOOLEAN(.T.),$);\n#4=IFCRELDEFINESBYPROPERTIES('r',$,$,$,(#1),#5);\nENDSEC;\nEND-ISO-10303-21;\n";

    #[test]
    fn parses_schema_and_entities_in_id_order() {
        let step = StepFile::parse(MINIMAL).unwrap();
        assert_eq!(step.schema, "IFC4");
        let ids: Vec<u64> = step.entities.keys().copied().collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn missing_data_section_is_an_error() {
        assert!(StepFile::parse("ISO-10303-21;\nHEADER;\nENDSEC;\n").is_err());
    }

    #[test]
    fn typed_values_unwrap_to_their_payload() {
        let step = StepFile::parse(MINIMAL).unwrap();
        let prop = step.entity(3).unwrap();
        assert_eq!(prop.attr(2), Some(&StepValue::Boolean(true)));
    }

    #[test]
    fn quantities_keep_reals_and_nulls_positional() {
        let step = StepFile::parse(MINIMAL).unwrap();
        let quantity = step.entity(2).unwrap();
        assert_eq!(quantity.attr(0).and_then(StepValue::as_string), Some("NetSideArea"));
        assert_eq!(quantity.attr(2), Some(&StepValue::Null));
        assert_eq!(quantity.attr(3).and_then(StepValue::as_real), Some(12.5));
    }

    #[test]
    fn lists_and_references_nest() {
        let step = StepFile::parse(MINIMAL).unwrap();
        let rel = step.entity(4).unwrap();
        let related = rel.attr(4).and_then(StepValue::as_list).unwrap();
        assert_eq!(related[0].as_reference(), Some(1));
        assert_eq!(rel.attr(5).and_then(StepValue::as_reference), Some(5));
    }

    #[test]
    fn decodes_umlaut_escapes() {
        assert_eq!(decode_text("Stahlbetonst\\X2\\00FC\\X0\\tze"), "Stahlbetonstütze");
        assert_eq!(decode_text("it''s"), "it's");
        assert_eq!(decode_text("a\\\\b"), "a\\b");
    }

    #[test]
    fn enum_values_survive_as_idents() {
        let step = StepFile::parse(MINIMAL).unwrap();
        let wall = step.entity(1).unwrap();
        assert_eq!(wall.attr(8).and_then(StepValue::as_enum), Some("SOLIDWALL"));
    }
}
