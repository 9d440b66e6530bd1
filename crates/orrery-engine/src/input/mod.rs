pub mod event;
pub mod pointer;
