use thiserror::Error;

use crate::cluster::{ClusterId, CommandDirection};

#[derive(Error, Debug)]
pub enum ZclError {
    /* mapped errors */
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    PackedStructError(#[from] packed_struct::PackingError),

    #[error("Cluster {0} not found")]
    ClusterNotFound(ClusterId),

    #[error("Attribute {attr:04x} not found in cluster {cluster}")]
    AttributeNotFound { cluster: ClusterId, attr: u16 },

    #[error("Command {cmd:02x} ({direction:?}) not found in cluster {cluster}")]
    CommandNotFound {
        cluster: ClusterId,
        direction: CommandDirection,
        cmd: u8,
    },

    #[error("Global command {0:02x} not found")]
    GlobalCommandNotFound(u8),
}

impl ZclError {
    /// True for lookups that missed the registry, as opposed to malformed input.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ClusterNotFound(_)
                | Self::AttributeNotFound { .. }
                | Self::CommandNotFound { .. }
                | Self::GlobalCommandNotFound(_)
        )
    }
}

pub type ZclResult<T> = Result<T, ZclError>;

#[cfg(test)]
mod tests {
    use crate::cluster::{ClusterId, CommandDirection};
    use crate::error::ZclError;

    #[test]
    fn not_found_display() {
        let err = ZclError::CommandNotFound {
            cluster: ClusterId::ON_OFF,
            direction: CommandDirection::Generated,
            cmd: 0x41,
        };
        assert_eq!(
            err.to_string(),
            "Command 41 (Generated) not found in cluster 0006"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn mapped_errors_are_not_lookup_misses() {
        let err = ZclError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(!err.is_not_found());
    }
}
