pub use self::{app::App, runtime::Runtime, timer::PeriodicTimer};

mod app;
mod event;
mod event_loop;
mod runtime;
mod timer;
