pub mod controls;
pub mod pointer;

pub use controls::wire_controls;
pub use pointer::DragListeners;
