//! The fixed table of patient positions and their images.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Route prefix the position images are served under.
pub const IMAGES_PATH: &str = "/positions";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown position code `{0}`")]
pub struct UnknownPosition(pub String);

/// Patient positioning configurations the relay knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionCode {
    HeadFirstSupine,
    HeadFirstProne,
    HeadFirstDecubitusRight,
    HeadFirstDecubitusLeft,
    FeetFirstSupine,
    FeetFirstProne,
    FeetFirst,
    DecubitusRight,
    FeetFirstDecubitusLeft,
}

impl PositionCode {
    pub const ALL: [PositionCode; 9] = [
        PositionCode::HeadFirstSupine,
        PositionCode::HeadFirstProne,
        PositionCode::HeadFirstDecubitusRight,
        PositionCode::HeadFirstDecubitusLeft,
        PositionCode::FeetFirstSupine,
        PositionCode::FeetFirstProne,
        PositionCode::FeetFirst,
        PositionCode::DecubitusRight,
        PositionCode::FeetFirstDecubitusLeft,
    ];

    /// The wire identifier, e.g. `HEAD_FIRST_SUPINE`.
    pub const fn code(self) -> &'static str {
        match self {
            PositionCode::HeadFirstSupine => "HEAD_FIRST_SUPINE",
            PositionCode::HeadFirstProne => "HEAD_FIRST_PRONE",
            PositionCode::HeadFirstDecubitusRight => "HEAD_FIRST_DECUBITUS_RIGHT",
            PositionCode::HeadFirstDecubitusLeft => "HEAD_FIRST_DECUBITUS_LEFT",
            PositionCode::FeetFirstSupine => "FEET_FIRST_SUPINE",
            PositionCode::FeetFirstProne => "FEET_FIRST_PRONE",
            PositionCode::FeetFirst => "FEET_FIRST",
            PositionCode::DecubitusRight => "DECUBITUS_RIGHT",
            PositionCode::FeetFirstDecubitusLeft => "FEET_FIRST_DECUBITUS_LEFT",
        }
    }

    pub const fn image_filename(self) -> &'static str {
        match self {
            PositionCode::HeadFirstSupine => "image_1.jpeg.jpg",
            PositionCode::HeadFirstProne => "image_2.jpeg.jpg",
            PositionCode::HeadFirstDecubitusRight => "image_3.jpeg.jpg",
            PositionCode::HeadFirstDecubitusLeft => "image_4.jpeg.jpg",
            PositionCode::FeetFirstSupine => "image_5.jpeg.jpg",
            PositionCode::FeetFirstProne => "image_6.jpeg.jpg",
            PositionCode::FeetFirst => "image_7.jpeg.jpg",
            PositionCode::DecubitusRight => "image_8.jpeg.jpg",
            PositionCode::FeetFirstDecubitusLeft => "image_9.jpeg.jpg",
        }
    }

    /// Human readable form: the code with underscores replaced by spaces.
    pub fn display_name(self) -> String {
        self.code().replace('_', " ")
    }

    /// Absolute URL of the position image as seen by a client that reached us through `host`.
    pub fn image_url(self, host: &str) -> String {
        format!("http://{host}{IMAGES_PATH}/{}", self.image_filename())
    }
}

impl FromStr for PositionCode {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PositionCode::ALL
            .into_iter()
            .find(|position| position.code() == s)
            .ok_or_else(|| UnknownPosition(s.to_owned()))
    }
}

impl Display for PositionCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
