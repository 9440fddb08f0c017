pub mod bar_line;
pub mod sidebar;

pub use bar_line::{BarLine, BarLineConfig};
pub use sidebar::Sidebar;
