pub mod controller;
pub mod state;

pub use controller::{
    Controller,
    DEFAULT_REVERSED_MARKER,
};
pub use state::{
    CardView,
    Command,
    Direction,
    Transition,
    TraversalState,
};
