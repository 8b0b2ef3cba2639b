//! Reusable UI components and the protected application shell.

pub mod confirm_modal;
pub mod protected_layout;
pub mod sidebar;
pub mod spinner;
