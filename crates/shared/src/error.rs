use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("tile letter {0:#x} is not a unicode scalar value")]
    InvalidLetter(u32),
}
