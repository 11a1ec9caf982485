pub mod canvas;
pub mod painter;
pub mod ribbon;
