//! Interpreter behavior over realistic program text

use cutproof_visualizer::{interpret, MotionMode};

const FACING_PROGRAM: &str = "G21\n\
G90\n\
G0 Z5\n\
G0 X0 Y0\n\
G1 Z-1 F100\n\
G1 X50 F200\n\
G1 Y50\n";

#[test]
fn ineligible_lines_are_dropped_from_the_motion_sequence() {
    let commands = interpret(FACING_PROGRAM);

    // G21 and G90 set no coordinates, and X0 Y0 reads as no targets at
    // all; exactly four motion commands stay.
    assert_eq!(commands.len(), 4);
    assert!(commands.iter().all(|c| c.mode.is_motion()));
    assert!(commands.iter().all(|c| c.has_targets()));
}

#[test]
fn rapid_and_linear_modes_are_distinguished() {
    let commands = interpret(FACING_PROGRAM);
    assert_eq!(commands[0].mode, MotionMode::Rapid);
    assert_eq!(commands[1].mode, MotionMode::Linear);
    assert_eq!(commands[2].mode, MotionMode::Linear);
    assert_eq!(commands[3].mode, MotionMode::Linear);
}

#[test]
fn feed_and_spindle_words_are_ignored_without_error() {
    let commands = interpret("G1 X10 F250 S12000 M3");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].targets.x, Some(10.0));
    assert_eq!(commands[0].targets.y, None);
}

#[test]
fn comments_and_noise_never_abort_the_parse() {
    let text = "; job header\nG1 X1\nnot gcode at all\nG1 Xoops Y2\n;; trailing\n";
    let commands = interpret(text);
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[1].targets.x, None);
    assert_eq!(commands[1].targets.y, Some(2.0));
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert!(interpret("").is_empty());
    assert!(interpret("\n\n; nothing here\n").is_empty());
}
