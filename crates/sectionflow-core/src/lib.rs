pub mod config;
pub mod deck;
pub mod error;
pub mod input;
pub mod navigation;
pub mod replay;
pub mod runtime;
pub mod section;
pub mod timer;

pub use config::{AppConfig, EasingType, NavigationConfig, OverflowPolicy};
pub use error::{Error, Result};
pub use input::{EventOutcome, InputEvent, Key};
pub use navigation::{Direction, NavigationController, NavigationEvent};
pub use runtime::{NavigatorHandle, Snapshot};
pub use section::{AnimatableGroup, GroupKind, SectionState, SectionSurface};

#[cfg(test)]
pub(crate) mod testing;
