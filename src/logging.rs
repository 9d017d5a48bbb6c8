use std::sync::Mutex;
use slog_term::{TermDecorator, FullFormat};
use slog::Drain;

pub use slog::Logger;

pub fn root_logger() -> &'static Logger {
    &ROOT_LOGGER
}

lazy_static! {
    static ref ROOT_LOGGER: Logger = {
        let decorator = TermDecorator::new().build();
        let drain = FullFormat::new(decorator).build();
        let drain = Mutex::new(drain).fuse();
        Logger::root(drain, o!())
    };
}
