use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Descriptor '{descriptor}' requires a non-empty sequence")]
    EmptySequence { descriptor: &'static str },
}
