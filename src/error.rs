use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NetErr>;

/// The broad category a `NetErr` falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The network was described with an invalid topology.
    Configuration,
    /// Some operand does not have the shape the network expects.
    ShapeMismatch,
    /// An argument is outside of its domain.
    InvalidArgument,
}

/// The crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum NetErr {
    InvalidTopology {
        reason: &'static str,
    },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    LabelOutOfRange {
        label: usize,
        classes: usize,
    },
    InvalidArgument(&'static str),
}

impl NetErr {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetErr::InvalidTopology { .. } => ErrorKind::Configuration,
            NetErr::SizeMismatch { .. } | NetErr::LabelOutOfRange { .. } => {
                ErrorKind::ShapeMismatch
            }
            NetErr::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl Display for NetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetErr::InvalidTopology { reason } => write!(f, "invalid topology: {reason}"),
            NetErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            NetErr::LabelOutOfRange { label, classes } => write!(
                f,
                "label {label} is out of range for {classes} distinct classes"
            ),
            NetErr::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl Error for NetErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_error_taxonomy() {
        let topology = NetErr::InvalidTopology { reason: "empty" };
        let size = NetErr::SizeMismatch {
            a: "input",
            b: "topology",
            got: 3,
            expected: 2,
        };
        let label = NetErr::LabelOutOfRange {
            label: 4,
            classes: 2,
        };
        let arg = NetErr::InvalidArgument("empty dataset");

        assert_eq!(topology.kind(), ErrorKind::Configuration);
        assert_eq!(size.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(label.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(arg.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn display_mentions_both_sides_of_a_mismatch() {
        let err = NetErr::SizeMismatch {
            a: "input",
            b: "topology",
            got: 3,
            expected: 2,
        };
        let msg = err.to_string();

        assert!(msg.contains("input"));
        assert!(msg.contains("topology"));
        assert!(msg.contains("got 3 and expected 2"));
    }
}
