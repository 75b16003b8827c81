mod level;

pub use level::Level;
