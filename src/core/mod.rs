pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod timer;

pub use clock::FrameClock;
pub use controller::{Action, Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use timer::{FixedHz, FpsCounter};
