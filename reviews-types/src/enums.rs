use serde::{Deserialize, Serialize};

/// Cities a new review may be filed against.
///
/// Seeded reviews are not constrained to this set; only intake checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Albuquerque, New Mexico")]
    Albuquerque,
    #[serde(rename = "Carlsbad, California")]
    Carlsbad,
    #[serde(rename = "Chula Vista, California")]
    ChulaVista,
    #[serde(rename = "Colorado Springs, Colorado")]
    ColoradoSprings,
    #[serde(rename = "Denver, Colorado")]
    Denver,
    #[serde(rename = "El Cajon, California")]
    ElCajon,
    #[serde(rename = "El Paso, Texas")]
    ElPaso,
    #[serde(rename = "Escondido, California")]
    Escondido,
    #[serde(rename = "Fresno, California")]
    Fresno,
    #[serde(rename = "La Mesa, California")]
    LaMesa,
    #[serde(rename = "Las Vegas, Nevada")]
    LasVegas,
    #[serde(rename = "Los Angeles, California")]
    LosAngeles,
    #[serde(rename = "Oceanside, California")]
    Oceanside,
    #[serde(rename = "Phoenix, Arizona")]
    Phoenix,
    #[serde(rename = "Sacramento, California")]
    Sacramento,
    #[serde(rename = "Salt Lake City, Utah")]
    SaltLakeCity,
    #[serde(rename = "San Diego, California")]
    SanDiego,
    #[serde(rename = "Tucson, Arizona")]
    Tucson,
}

impl Location {
    pub const ALL: [Location; 18] = [
        Location::Albuquerque,
        Location::Carlsbad,
        Location::ChulaVista,
        Location::ColoradoSprings,
        Location::Denver,
        Location::ElCajon,
        Location::ElPaso,
        Location::Escondido,
        Location::Fresno,
        Location::LaMesa,
        Location::LasVegas,
        Location::LosAngeles,
        Location::Oceanside,
        Location::Phoenix,
        Location::Sacramento,
        Location::SaltLakeCity,
        Location::SanDiego,
        Location::Tucson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Albuquerque => "Albuquerque, New Mexico",
            Location::Carlsbad => "Carlsbad, California",
            Location::ChulaVista => "Chula Vista, California",
            Location::ColoradoSprings => "Colorado Springs, Colorado",
            Location::Denver => "Denver, Colorado",
            Location::ElCajon => "El Cajon, California",
            Location::ElPaso => "El Paso, Texas",
            Location::Escondido => "Escondido, California",
            Location::Fresno => "Fresno, California",
            Location::LaMesa => "La Mesa, California",
            Location::LasVegas => "Las Vegas, Nevada",
            Location::LosAngeles => "Los Angeles, California",
            Location::Oceanside => "Oceanside, California",
            Location::Phoenix => "Phoenix, Arizona",
            Location::Sacramento => "Sacramento, California",
            Location::SaltLakeCity => "Salt Lake City, Utah",
            Location::SanDiego => "San Diego, California",
            Location::Tucson => "Tucson, Arizona",
        }
    }

    /// Exact, case-sensitive match against the display name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|loc| loc.as_str() == s)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
