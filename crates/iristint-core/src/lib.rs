pub mod batch;
pub mod color;
pub mod consts;
pub mod effects;
pub mod emission;
pub mod error;
pub mod io;
pub mod mask;
pub mod palette;
pub mod texture;
