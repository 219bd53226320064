mod consts;
mod logging;

pub use logging::init_logger;
