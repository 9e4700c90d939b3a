//! Protocol module - JSON message types for the think request/response
//!
//! The client sends one snapshot per request and expects one placement back.
//! Decoding is lenient: anything that is not the expected shape degrades to
//! "absent" or `0` instead of failing the whole request, and the reasons are
//! reported as [`InputFault`]s.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Decision, Queue};
use crate::types::{Cell, Color, MoveToken, Pair};

// ============== Input faults ==============

/// Recognized problems with a request. None of them is fatal: each one only
/// selects a more minimal response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFault {
    EmptyInput,
    MalformedInput,
    MissingBoard,
    MissingQueue,
    MalformedCell,
}

impl InputFault {
    pub fn code(self) -> &'static str {
        match self {
            InputFault::EmptyInput => "empty_input",
            InputFault::MalformedInput => "malformed_input",
            InputFault::MissingBoard => "missing_board",
            InputFault::MissingQueue => "missing_queue",
            InputFault::MalformedCell => "malformed_cell",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            InputFault::EmptyInput => "no bytes on input",
            InputFault::MalformedInput => "input is not valid JSON",
            InputFault::MissingBoard => "self.field missing or not a non-empty array",
            InputFault::MissingQueue => "self.queue missing or not an array",
            InputFault::MalformedCell => "non-integer value coerced to 0",
        }
    }
}

impl fmt::Display for InputFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for InputFault {}

// ============== Client -> Engine ==============

/// Think request as sent by the game client.
///
/// Only `self` drives the decision. The other keys the client sends
/// (`options`, `self.current`) are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThinkRequest {
    pub mode: Option<Value>,
    #[serde(rename = "self")]
    pub player: Option<Value>,
}

/// Decoded contents of a think request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Raw board cells; None when `self.field` is absent or not an array
    pub cells: Option<Vec<Cell>>,
    /// Well-formed queue entries in their original order
    pub queue: Queue,
    /// True if `self.queue` was an array
    pub queue_present: bool,
    /// Cell values that were not integers and became `0`
    pub malformed_cells: usize,
    /// Queue entries dropped for having fewer than two elements
    pub skipped_entries: usize,
    /// Client-side mode tag, when sent as a string
    pub mode: Option<String>,
}

impl Snapshot {
    /// Board cells, if there is at least one
    pub fn board_cells(&self) -> Option<&[Cell]> {
        self.cells.as_deref().filter(|c| !c.is_empty())
    }

    /// Non-fatal faults found while decoding
    pub fn faults(&self) -> Vec<InputFault> {
        let mut faults = Vec::new();
        if self.board_cells().is_none() {
            faults.push(InputFault::MissingBoard);
        }
        if !self.queue_present {
            faults.push(InputFault::MissingQueue);
        }
        if self.malformed_cells > 0 {
            faults.push(InputFault::MalformedCell);
        }
        faults
    }
}

/// Parse a think request.
///
/// Returns [`InputFault::EmptyInput`] for blank input and
/// [`InputFault::MalformedInput`] for text that is not JSON. Valid JSON that
/// is not an object decodes to an empty [`Snapshot`].
pub fn decode_request(input: &str) -> Result<Snapshot, InputFault> {
    if input.trim().is_empty() {
        return Err(InputFault::EmptyInput);
    }

    let value: Value = serde_json::from_str(input).map_err(|_| InputFault::MalformedInput)?;
    if !value.is_object() {
        return Ok(Snapshot::default());
    }
    let request = ThinkRequest::deserialize(value).unwrap_or_default();

    let mut snap = Snapshot {
        mode: request.mode.as_ref().and_then(Value::as_str).map(str::to_string),
        ..Snapshot::default()
    };

    let Some(player) = request.player.as_ref().and_then(Value::as_object) else {
        return Ok(snap);
    };

    if let Some(Value::Array(items)) = player.get("field") {
        let mut cells = Vec::with_capacity(items.len());
        for item in items {
            let value = coerce_int(item).unwrap_or_else(|| {
                snap.malformed_cells += 1;
                0
            });
            cells.push(Cell(value));
        }
        snap.cells = Some(cells);
    }

    if let Some(Value::Array(entries)) = player.get("queue") {
        snap.queue_present = true;
        for entry in entries {
            match entry.as_array().filter(|e| e.len() >= 2) {
                Some(e) => snap.queue.push(Pair {
                    pivot: coerce_color(&e[0]),
                    satellite: coerce_color(&e[1]),
                }),
                None => snap.skipped_entries += 1,
            }
        }
    }

    Ok(snap)
}

/// Integer value of a JSON number with no fractional part.
///
/// Integers beyond the signed range saturate, so a nonzero marker stays nonzero.
fn coerce_int(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.as_u64().is_some() {
        return Some(i64::MAX);
    }
    let f = n.as_f64()?;
    // `as` saturates out-of-range floats.
    (f.fract() == 0.0).then_some(f as i64)
}

/// Colours always convert: floats truncate toward zero, bools are 0 or 1.
fn coerce_color(value: &Value) -> Color {
    let v = match value {
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i,
            (None, Some(_)) => i64::MAX,
            (None, None) => n.as_f64().map_or(0, |f| f.trunc() as i64),
        },
        _ => 0,
    };
    Color(v)
}

// ============== Engine -> Client ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsedType {
    #[serde(rename = "next")]
    Next,
}

/// Which queue slot the echoed pair came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedSlot {
    #[serde(rename = "type")]
    pub slot_type: UsedType,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementField {
    pub x: usize,
    /// Rotation wire code (0, 1 or 3)
    pub r: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputList(pub Vec<MoveToken>);

impl Serialize for InputList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for token in &self.0 {
            seq.serialize_element(token.as_str())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for InputList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct V;
        impl<'de> serde::de::Visitor<'de> for V {
            type Value = InputList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an array of input strings")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut out = Vec::new();
                while let Some(s) = seq.next_element::<&str>()? {
                    let token = MoveToken::from_str(s)
                        .ok_or_else(|| serde::de::Error::custom("unknown input"))?;
                    out.push(token);
                }
                Ok(InputList(out))
            }
        }

        deserializer.deserialize_seq(V)
    }
}

/// Placement response written back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResponse {
    pub placement: PlacementField,
    pub inputs: InputList,
    pub eval: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<[i64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<UsedSlot>,
}

impl From<&Decision> for PlacementResponse {
    fn from(d: &Decision) -> Self {
        Self {
            placement: PlacementField {
                x: d.column,
                r: d.rotation.code(),
            },
            inputs: InputList(d.moves.clone()),
            eval: d.eval,
            pair: d.consumed.map(|p| [p.pivot.0, p.satellite.0]),
            used: d.consumed.map(|_| UsedSlot {
                slot_type: UsedType::Next,
                index: 0,
            }),
        }
    }
}

/// Serialize a response, pretty-printed with a 4-space indent unless `compact`.
pub fn encode_response(resp: &PlacementResponse, compact: bool) -> serde_json::Result<String> {
    if compact {
        return serde_json::to_string(resp);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    resp.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;

    #[test]
    fn test_decode_full_request() {
        let json = r#"{"mode":"think","self":{"field":[0,0,1,2,0,0],"queue":[[1,2],[3,4]]},"options":{"mode":"build"}}"#;
        let snap = decode_request(json).unwrap();
        assert_eq!(
            snap.cells,
            Some(vec![Cell(0), Cell(0), Cell(1), Cell(2), Cell(0), Cell(0)])
        );
        assert_eq!(snap.queue, vec![Pair::new(1, 2), Pair::new(3, 4)]);
        assert_eq!(snap.mode.as_deref(), Some("think"));
        assert!(snap.faults().is_empty());
    }

    #[test]
    fn test_decode_empty_and_malformed() {
        assert_eq!(decode_request(""), Err(InputFault::EmptyInput));
        assert_eq!(decode_request(" \n"), Err(InputFault::EmptyInput));
        assert_eq!(decode_request("{not json"), Err(InputFault::MalformedInput));
    }

    #[test]
    fn test_decode_non_object_has_no_board() {
        let snap = decode_request("[1,2,3]").unwrap();
        assert!(snap.cells.is_none());
        assert!(snap.queue.is_empty());
        assert_eq!(
            snap.faults(),
            vec![InputFault::MissingBoard, InputFault::MissingQueue]
        );
    }

    #[test]
    fn test_decode_field_not_array_keeps_queue() {
        let snap = decode_request(r#"{"self":{"field":"oops","queue":[[5,6]]}}"#).unwrap();
        assert!(snap.cells.is_none());
        assert_eq!(snap.queue, vec![Pair::new(5, 6)]);
        assert_eq!(snap.faults(), vec![InputFault::MissingBoard]);
    }

    #[test]
    fn test_decode_coerces_bad_cells_to_zero() {
        let snap =
            decode_request(r#"{"self":{"field":[1,"x",null,2.5,true,3.0,[1]],"queue":[]}}"#)
                .unwrap();
        assert_eq!(
            snap.cells,
            Some(vec![
                Cell(1),
                Cell(0),
                Cell(0),
                Cell(0),
                Cell(0),
                Cell(3),
                Cell(0)
            ])
        );
        assert_eq!(snap.malformed_cells, 5);
        assert!(snap.faults().contains(&InputFault::MalformedCell));
    }

    #[test]
    fn test_decode_large_unsigned_cell_stays_occupied() {
        let snap =
            decode_request(r#"{"self":{"field":[0,10000000000000000000,1e300,-0.0]}}"#).unwrap();
        assert_eq!(
            snap.cells,
            Some(vec![Cell(0), Cell(i64::MAX), Cell(i64::MAX), Cell(0)])
        );
        assert_eq!(snap.malformed_cells, 0);
    }

    #[test]
    fn test_decode_colours_truncate_floats_and_bools() {
        let snap = decode_request(r#"{"self":{"queue":[[2.5,true],[false,-3.9],["4",null]]}}"#)
            .unwrap();
        assert_eq!(
            snap.queue,
            vec![Pair::new(2, 1), Pair::new(0, -3), Pair::new(0, 0)]
        );
        let snap = decode_request(r#"{"self":{"queue":[[18446744073709551615,7.0]]}}"#).unwrap();
        assert_eq!(snap.queue, vec![Pair::new(i64::MAX, 7)]);
    }

    #[test]
    fn test_decode_skips_short_queue_entries() {
        let snap = decode_request(r#"{"self":{"queue":[[1],[2,3],7,[],[4,5,6]]}}"#).unwrap();
        assert_eq!(snap.queue, vec![Pair::new(2, 3), Pair::new(4, 5)]);
        assert_eq!(snap.skipped_entries, 3);
        assert!(snap.queue_present);
    }

    #[test]
    fn test_response_omits_pair_when_nothing_consumed() {
        let resp = PlacementResponse::from(&Decision::fallback());
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            json,
            r#"{"placement":{"x":2,"r":0},"inputs":["LEFT","LEFT","DROP"],"eval":12345}"#
        );
    }

    #[test]
    fn test_response_echoes_consumed_pair() {
        let d = Decision {
            column: 4,
            rotation: Rotation::HorizontalLeft,
            moves: vec![MoveToken::Right, MoveToken::Right, MoveToken::Drop],
            eval: 0,
            consumed: Some(Pair::new(2, 3)),
        };
        let v: Value = serde_json::to_value(PlacementResponse::from(&d)).unwrap();
        assert_eq!(v["placement"]["x"], 4);
        assert_eq!(v["placement"]["r"], 3);
        assert_eq!(v["inputs"], serde_json::json!(["RIGHT", "RIGHT", "DROP"]));
        assert_eq!(v["pair"], serde_json::json!([2, 3]));
        assert_eq!(v["used"], serde_json::json!({"type": "next", "index": 0}));
    }

    #[test]
    fn test_encode_pretty_uses_four_space_indent() {
        let resp = PlacementResponse::from(&Decision::fallback());
        let pretty = encode_response(&resp, false).unwrap();
        assert!(pretty.starts_with("{\n    \"placement\": {\n        \"x\": 2,"));
        let compact = encode_response(&resp, true).unwrap();
        assert!(!compact.contains('\n'));

        let a: PlacementResponse = serde_json::from_str(&pretty).unwrap();
        let b: PlacementResponse = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_fault_codes() {
        assert_eq!(InputFault::MissingBoard.code(), "missing_board");
        assert_eq!(
            InputFault::MalformedInput.to_string(),
            "malformed_input: input is not valid JSON"
        );
    }
}
