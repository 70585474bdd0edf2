//! Permissive G-code interpreter
//!
//! Best-effort geometry extraction over strict validation: unrecognized
//! words and malformed values are skipped, never errors. Only lines that
//! carry a rapid/linear `G` word and at least one axis value join the
//! motion sequence.

use super::command::{MotionCommand, MotionMode};
use cutproof_core::AxisTargets;
use tracing::{debug, trace};

/// Line comment marker. A line whose trimmed form starts with this is
/// skipped entirely.
const COMMENT_MARKER: char = ';';

/// Interpret raw program text into a sequence of motion commands.
///
/// Lines are tokenized on whitespace; each token's first character
/// (case-insensitive) is a code letter and the remainder its value text.
/// `G` words set the mode from their literal form (`G0…` rapid, `G1…`
/// linear, anything else non-motion). `X`/`Y`/`Z` words set axis targets
/// when their value parses as a nonzero number; a zero value reads the
/// same as an absent axis, so zero positions come from the initial cursor
/// or modal carry-over. All other words (feed rates, spindle codes,
/// unparseable values) are accepted and ignored.
///
/// Never fails: input that cannot be read as text is the caller's problem,
/// and within the text the worst case is an empty sequence.
pub fn interpret(text: &str) -> Vec<MotionCommand> {
    let mut commands = Vec::new();
    let mut skipped_lines = 0usize;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = (index + 1) as u32;
        match interpret_line(raw_line, line_number) {
            Some(command) => commands.push(command),
            None => skipped_lines += 1,
        }
    }

    debug!(
        "Interpreted {} motion commands ({} lines skipped)",
        commands.len(),
        skipped_lines
    );

    commands
}

/// Interpret a single line. Returns `None` for blank lines, comments, and
/// lines that do not qualify for the motion sequence.
fn interpret_line(raw_line: &str, line_number: u32) -> Option<MotionCommand> {
    let line = raw_line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let mut mode = MotionMode::Other;
    let mut saw_g_word = false;
    let mut targets = AxisTargets::none();

    for word in line.split_whitespace() {
        let mut chars = word.chars();
        let Some(letter) = chars.next() else {
            continue;
        };
        let value = chars.as_str();

        match letter.to_ascii_uppercase() {
            'G' => {
                saw_g_word = true;
                mode = motion_mode_from_value(value);
            }
            'X' => targets.x = axis_value(value).or(targets.x),
            'Y' => targets.y = axis_value(value).or(targets.y),
            'Z' => targets.z = axis_value(value).or(targets.z),
            // F, S, M, T and friends: accepted syntactically, ignored.
            _ => {}
        }
    }

    if !saw_g_word {
        trace!("Line {}: no G word, skipped", line_number);
        return None;
    }

    if !mode.is_motion() || !targets.any() {
        trace!(
            "Line {}: {} command with{} targets, dropped from motion sequence",
            line_number,
            mode,
            if targets.any() { "" } else { "out" }
        );
        return None;
    }

    Some(MotionCommand::new(mode, targets, line_number))
}

/// Parse an axis word's value. Unparseable and zero values both read as
/// "not set"; the cursor already starts at the origin, so a zero target
/// is expressed by omission in this dialect.
fn axis_value(value: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(v) if v != 0.0 => Some(v),
        _ => None,
    }
}

/// Map a `G` word's value text onto a motion mode by its literal prefix.
fn motion_mode_from_value(value: &str) -> MotionMode {
    if value.starts_with('0') {
        MotionMode::Rapid
    } else if value.starts_with('1') {
        MotionMode::Linear
    } else {
        MotionMode::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_and_blank_lines_are_skipped() {
        let commands = interpret("; header comment\n\n   \nG1 X5\n");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].line_number, 4);
    }

    #[test]
    fn lowercase_words_are_recognized() {
        let commands = interpret("g1 x10 y-2.5");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].mode, MotionMode::Linear);
        assert_eq!(commands[0].targets.x, Some(10.0));
        assert_eq!(commands[0].targets.y, Some(-2.5));
    }

    #[test]
    fn modal_only_lines_are_dropped() {
        assert!(interpret("G21\nG90\nG17").is_empty());
    }

    #[test]
    fn motion_line_without_coordinates_is_dropped() {
        assert!(interpret("G0\nG1 F200").is_empty());
    }

    #[test]
    fn malformed_axis_value_is_ignored_not_fatal() {
        let commands = interpret("G1 Xabc Y5 Ffast");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].targets.x, None);
        assert_eq!(commands[0].targets.y, Some(5.0));
    }

    #[test]
    fn zero_axis_values_read_as_unset() {
        // X0 Y0 carries no information the cursor does not already have.
        assert!(interpret("G0 X0 Y0").is_empty());

        let commands = interpret("G1 X10\nG1 X0 Y5");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1].targets.x, None);
        assert_eq!(commands[1].targets.y, Some(5.0));
    }

    #[test]
    fn mode_follows_literal_prefix() {
        // The mode comes from the G word's literal form, not its numeric
        // value: G00 is rapid, G10 reads as linear, G21 is non-motion.
        let commands = interpret("G00 X1\nG10 X2\nG21 X3");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].mode, MotionMode::Rapid);
        assert_eq!(commands[1].mode, MotionMode::Linear);
    }
}
