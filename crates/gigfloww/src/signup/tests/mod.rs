mod common;
mod completion;
mod session;
