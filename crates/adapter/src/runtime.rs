//! Responder runtime.
//!
//! Bridges one raw request to exactly one encoded response. Every input,
//! however broken, ends in a well-formed decision.

use tracing::{debug, warn};

use crate::core::{decide, Board, Decision};
use crate::protocol::{decode_request, encode_response, InputFault, PlacementResponse};

/// Compact fallback used if encoding itself ever fails.
const FALLBACK_LINE: &str =
    r#"{"placement":{"x":2,"r":0},"inputs":["LEFT","LEFT","DROP"],"eval":12345}"#;

/// Responder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderConfig {
    /// Emit single-line JSON instead of 4-space pretty JSON
    pub compact: bool,
    pub log_level: String,
    pub log_path: Option<String>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            compact: false,
            log_level: "warn".to_string(),
            log_path: None,
        }
    }
}

impl ResponderConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let compact = env::var("PUYO_AI_COMPACT")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let log_level = env::var("PUYO_AI_LOG")
            .ok()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "warn".to_string());

        let log_path = env::var("PUYO_AI_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            compact,
            log_level,
            log_path,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

/// Which path through the pipeline a request took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    NoInput,
    ParseFailed,
    NoBoardNoQueue,
    NoBoardWithQueue,
    FullyComputed,
}

impl PipelineState {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineState::NoInput => "no_input",
            PipelineState::ParseFailed => "parse_failed",
            PipelineState::NoBoardNoQueue => "no_board_no_queue",
            PipelineState::NoBoardWithQueue => "no_board_with_queue",
            PipelineState::FullyComputed => "fully_computed",
        }
    }
}

/// Result of handling one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: PipelineState,
    pub decision: Decision,
}

/// Run the pipeline on raw request text.
pub fn respond(input: &str) -> Outcome {
    let snap = match decode_request(input) {
        Ok(snap) => snap,
        Err(fault) => {
            let state = match fault {
                InputFault::EmptyInput => PipelineState::NoInput,
                _ => PipelineState::ParseFailed,
            };
            warn!(fault = fault.code(), "{}", fault.message());
            return Outcome {
                state,
                decision: Decision::fallback(),
            };
        }
    };

    for fault in snap.faults() {
        debug!(fault = fault.code(), "{}", fault.message());
    }
    if snap.skipped_entries > 0 {
        debug!(skipped = snap.skipped_entries, "dropped short queue entries");
    }
    if let Some(mode) = snap.mode.as_deref() {
        debug!(mode, "request mode");
    }

    let Some(cells) = snap.board_cells() else {
        return match snap.queue.first() {
            Some(&pair) => Outcome {
                state: PipelineState::NoBoardWithQueue,
                decision: Decision::queue_only(pair),
            },
            None => {
                warn!("no board and no queue in request");
                Outcome {
                    state: PipelineState::NoBoardNoQueue,
                    decision: Decision::fallback(),
                }
            }
        };
    };

    let board = Board::from_cells(cells.to_vec());
    if !board.geometry().is_exact_for(cells.len()) {
        warn!(
            cells = cells.len(),
            width = board.width(),
            height = board.height(),
            "cell count matches no candidate width"
        );
    }

    let profile = board.height_profile();
    let empty_columns = (0..profile.width())
        .filter(|&x| profile.is_column_empty(x))
        .count();
    debug!(
        width = board.width(),
        height = board.height(),
        profile = ?profile.as_slice(),
        empty_columns,
        "board analyzed"
    );

    let decision = decide(&board, &snap.queue);
    debug!(
        x = decision.column,
        r = decision.rotation.code(),
        moves = decision.moves.len(),
        "placement chosen"
    );

    Outcome {
        state: PipelineState::FullyComputed,
        decision,
    }
}

/// Run the pipeline on raw stdin bytes. Invalid UTF-8 is malformed input.
pub fn respond_bytes(input: &[u8]) -> Outcome {
    match std::str::from_utf8(input) {
        Ok(text) => respond(text),
        Err(_) => {
            warn!(
                fault = InputFault::MalformedInput.code(),
                "input is not valid UTF-8"
            );
            Outcome {
                state: PipelineState::ParseFailed,
                decision: Decision::fallback(),
            }
        }
    }
}

/// One-shot responder: raw request in, response line out.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    config: ResponderConfig,
}

impl Responder {
    pub fn new(config: ResponderConfig) -> Self {
        Self { config }
    }

    /// Encode a decision according to the configured output style.
    pub fn render(&self, decision: &Decision) -> String {
        let resp = PlacementResponse::from(decision);
        match encode_response(&resp, self.config.compact) {
            Ok(s) => s,
            Err(e) => {
                warn!("failed to encode response: {}", e);
                FALLBACK_LINE.to_string()
            }
        }
    }

    /// Handle one request, returning the response text (without a line terminator).
    pub fn handle(&self, input: &[u8]) -> String {
        let outcome = respond_bytes(input);
        debug!(state = outcome.state.as_str(), "request handled");
        self.render(&outcome.decision)
    }
}
