//! Camera movements for video prompts.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Camera movement requested for a video prompt.
///
/// Unrecognised labels are kept verbatim in [`CameraMovement::Custom`] and
/// passed through to the model as a literal instruction fragment.
///
/// # Examples
///
/// ```
/// use promptcraft_core::CameraMovement;
///
/// let pan: CameraMovement = "Pan Left".parse().unwrap();
/// assert_eq!(pan, CameraMovement::PanLeft);
///
/// let custom: CameraMovement = "dolly zoom into the eyes".parse().unwrap();
/// assert_eq!(custom.to_string(), "dolly zoom into the eyes");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(from = "String", into = "String")]
pub enum CameraMovement {
    /// Locked-off camera
    #[default]
    #[display("Static")]
    Static,
    /// Push in toward the subject
    #[display("Zoom In")]
    ZoomIn,
    /// Pull out from the subject
    #[display("Zoom Out")]
    ZoomOut,
    /// Rotate horizontally to the left
    #[display("Pan Left")]
    PanLeft,
    /// Rotate horizontally to the right
    #[display("Pan Right")]
    PanRight,
    /// Move laterally to the left
    #[display("Truck Left")]
    TruckLeft,
    /// Move laterally to the right
    #[display("Truck Right")]
    TruckRight,
    /// Rotate vertically upward
    #[display("Tilt Up")]
    TiltUp,
    /// Rotate vertically downward
    #[display("Tilt Down")]
    TiltDown,
    /// Circle around the subject
    #[display("Orbit")]
    Orbit,
    /// Handheld operator movement
    #[display("Handheld")]
    Handheld,
    /// Anything else, passed through as written
    #[display("{_0}")]
    Custom(String),
}

impl CameraMovement {
    /// The eleven fixed movements, in menu order.
    pub const FIXED: [CameraMovement; 11] = [
        Self::Static,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::PanLeft,
        Self::PanRight,
        Self::TruckLeft,
        Self::TruckRight,
        Self::TiltUp,
        Self::TiltDown,
        Self::Orbit,
        Self::Handheld,
    ];
}

impl FromStr for CameraMovement {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ok(match key.as_str() {
            "static" | "" => Self::Static,
            "zoomin" => Self::ZoomIn,
            "zoomout" => Self::ZoomOut,
            "panleft" => Self::PanLeft,
            "panright" => Self::PanRight,
            "truckleft" => Self::TruckLeft,
            "truckright" => Self::TruckRight,
            "tiltup" => Self::TiltUp,
            "tiltdown" => Self::TiltDown,
            "orbit" => Self::Orbit,
            "handheld" => Self::Handheld,
            _ => Self::Custom(s.trim().to_string()),
        })
    }
}

impl From<String> for CameraMovement {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(movement) => movement,
            Err(never) => match never {},
        }
    }
}

impl From<CameraMovement> for String {
    fn from(value: CameraMovement) -> Self {
        value.to_string()
    }
}
