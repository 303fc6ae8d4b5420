mod accrual;
mod controller;
mod notify;
mod session;

pub use accrual::{AccrualLoop, LoopTick};
pub use controller::{GameController, TickReport};
pub use notify::NotifySlot;
pub use session::{SessionPhase, SessionState};
