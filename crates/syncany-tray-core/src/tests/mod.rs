mod projector;
mod support;
