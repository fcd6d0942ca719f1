mod assembler;
mod requests;
mod responses;

pub use assembler::DtoAssembler;
pub use requests::*;
pub use responses::*;
