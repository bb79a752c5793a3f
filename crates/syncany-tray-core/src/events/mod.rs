mod emitter;
mod queue;

pub use {
    emitter::{EventEmitter, FrameSink},
    queue::{EventListener, EventQueue, event_queue},
};
