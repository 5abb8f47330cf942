//! 命令定义和实现

pub mod encode;
pub mod replay;
pub mod schemes;

pub use encode::EncodeCommand;
pub use replay::ReplayCommand;
pub use schemes::SchemesCommand;
