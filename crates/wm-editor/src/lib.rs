pub mod input;
pub mod mutate;
pub mod sync;
pub mod tools;

pub use input::{InputEvent, Modifiers};
pub use mutate::MutationError;
pub use sync::{
    MapElement, MapMutation, MapTextSink, SyncError, SyncOutcome, apply_mutation, dispatch,
};
pub use tools::{Corner, LabelTool, MoveTool, RegionTool, Tool};
