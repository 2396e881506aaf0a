/// Use cases module containing application business logic orchestration
mod scan_orchestrator;
mod view_state_controller;

pub use scan_orchestrator::{ScanOrchestrator, SlotPolicy};
pub use view_state_controller::ViewStateController;
