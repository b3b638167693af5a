//! Input handling: event types, device sources, fusion into per-frame camera
//! input, and the processor that routes raw events.

/// Platform-agnostic input events.
pub mod event;
/// One frame of fused camera input.
pub mod frame;
/// Device-delta fusion into an [`InputFrame`].
pub mod fusion;
/// Key identifiers and bindable actions.
pub mod keyboard;
/// Routes raw events to sources and produces rig commands.
pub mod processor;
/// Per-device delta sources.
pub mod sources;
/// Double-tap detection.
pub(crate) mod tap;

pub use event::{InputEvent, MouseButton, PointerKind, LINE_HEIGHT};
pub use frame::InputFrame;
pub use fusion::{DeviceDeltas, FusionContext, FusionController, FusionSpeeds};
pub use keyboard::{Key, KeyAction};
pub use processor::{InputMode, InputProcessor, PointerRoute};
