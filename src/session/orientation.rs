//! Device-orientation to image-orientation mapping for inference requests.

/// Physical orientation of the device as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

/// Rotation tag attached to a frame handed to the inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrientation {
    Up,
    Down,
    Left,
    Right,
}

impl ImageOrientation {
    /// Map a device orientation to the rotation the inference engine expects.
    ///
    /// Landscape-left and landscape-right map asymmetrically (`Up` vs `Down`)
    /// to match the sensor mounting; every remaining orientation, including
    /// portrait, shares `Right` with the landscape-right default branch.
    pub fn from_device(orientation: DeviceOrientation) -> Self {
        match orientation {
            DeviceOrientation::PortraitUpsideDown => Self::Left,
            DeviceOrientation::LandscapeLeft => Self::Up,
            DeviceOrientation::LandscapeRight => Self::Down,
            _ => Self::Right,
        }
    }
}

impl From<DeviceOrientation> for ImageOrientation {
    fn from(orientation: DeviceOrientation) -> Self {
        Self::from_device(orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_mapping_table() {
        assert_eq!(
            ImageOrientation::from_device(DeviceOrientation::PortraitUpsideDown),
            ImageOrientation::Left
        );
        assert_eq!(
            ImageOrientation::from_device(DeviceOrientation::LandscapeLeft),
            ImageOrientation::Up
        );
        assert_eq!(
            ImageOrientation::from_device(DeviceOrientation::LandscapeRight),
            ImageOrientation::Down
        );
        assert_eq!(
            ImageOrientation::from_device(DeviceOrientation::Portrait),
            ImageOrientation::Right
        );
    }

    #[test]
    fn test_remaining_orientations_share_the_default_tag() {
        for orientation in [
            DeviceOrientation::FaceUp,
            DeviceOrientation::FaceDown,
            DeviceOrientation::Unknown,
        ] {
            assert_eq!(
                ImageOrientation::from_device(orientation),
                ImageOrientation::Right
            );
        }
    }
}
