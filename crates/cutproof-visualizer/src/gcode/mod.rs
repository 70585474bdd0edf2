//! G-code interpretation and toolpath construction
//!
//! This module provides:
//! - Typed motion commands
//! - The permissive line/token interpreter
//! - The toolpath builder (modal carry-over, fallback segment)

pub mod builder;
pub mod command;
pub mod interpreter;

pub use builder::{build_toolpath, Toolpath, ToolpathOrigin};
pub use command::{MotionCommand, MotionMode};
pub use interpreter::interpret;
