pub mod orbit;
pub mod orbit_path;
pub mod render;
pub mod starfield;
