use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HolidayError;

/// Ecuadorian first-level subdivisions, by ISO 3166-2:EC code.
///
/// `National` is the sentinel for "no province-specific holidays".
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum Province {
    #[default]
    National,
    Azuay,
    Bolivar,
    Canar,
    Carchi,
    Chimborazo,
    Cotopaxi,
    ElOro,
    Esmeraldas,
    Galapagos,
    Guayas,
    Imbabura,
    Loja,
    LosRios,
    Manabi,
    MoronaSantiago,
    Napo,
    Orellana,
    Pastaza,
    Pichincha,
    SantaElena,
    SantoDomingo,
    Sucumbios,
    Tungurahua,
    ZamoraChinchipe,
}

impl Province {
    pub const ALL: [Province; 25] = [
        Province::National,
        Province::Azuay,
        Province::Bolivar,
        Province::Canar,
        Province::Carchi,
        Province::Chimborazo,
        Province::Cotopaxi,
        Province::ElOro,
        Province::Esmeraldas,
        Province::Galapagos,
        Province::Guayas,
        Province::Imbabura,
        Province::Loja,
        Province::LosRios,
        Province::Manabi,
        Province::MoronaSantiago,
        Province::Napo,
        Province::Orellana,
        Province::Pastaza,
        Province::Pichincha,
        Province::SantaElena,
        Province::SantoDomingo,
        Province::Sucumbios,
        Province::Tungurahua,
        Province::ZamoraChinchipe,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Province::National => "ON",
            Province::Azuay => "EC-A",
            Province::Bolivar => "EC-B",
            Province::Canar => "EC-F",
            Province::Carchi => "EC-C",
            Province::Chimborazo => "EC-H",
            Province::Cotopaxi => "EC-X",
            Province::ElOro => "EC-O",
            Province::Esmeraldas => "EC-E",
            Province::Galapagos => "EC-W",
            Province::Guayas => "EC-G",
            Province::Imbabura => "EC-I",
            Province::Loja => "EC-L",
            Province::LosRios => "EC-R",
            Province::Manabi => "EC-M",
            Province::MoronaSantiago => "EC-S",
            Province::Napo => "EC-N",
            Province::Orellana => "EC-D",
            Province::Pastaza => "EC-Y",
            Province::Pichincha => "EC-P",
            Province::SantaElena => "EC-SE",
            Province::SantoDomingo => "EC-SD",
            Province::Sucumbios => "EC-U",
            Province::Tungurahua => "EC-T",
            Province::ZamoraChinchipe => "EC-Z",
        }
    }

    pub fn is_national(&self) -> bool {
        *self == Province::National
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Province {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "" | "ON" | "EC" | "NATIONAL" => return Ok(Province::National),
            _ => {}
        }
        Province::ALL
            .iter()
            .find(|p| p.code() == normalized)
            .copied()
            .ok_or_else(|| HolidayError::UnknownProvince(s.to_owned()))
    }
}

impl Serialize for Province {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Province {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_codes_case_insensitively() {
        assert_eq!("EC-P".parse::<Province>().unwrap(), Province::Pichincha);
        assert_eq!("ec-sd".parse::<Province>().unwrap(), Province::SantoDomingo);
        assert_eq!(" EC-G ".parse::<Province>().unwrap(), Province::Guayas);
    }

    #[test]
    fn national_sentinels() {
        for s in ["", "ON", "EC", "national"] {
            assert_eq!(s.parse::<Province>().unwrap(), Province::National);
        }
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert!(matches!("EC-Q".parse::<Province>(), Err(HolidayError::UnknownProvince(_))));
    }

    #[test]
    fn codes_are_unique_and_round_trip() {
        for p in Province::ALL {
            assert_eq!(p.code().parse::<Province>().unwrap(), p);
            assert_eq!(Province::ALL.iter().filter(|q| q.code() == p.code()).count(), 1);
        }
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Province::Pichincha).unwrap();
        assert_eq!(json, "\"EC-P\"");
        let back: Province = serde_json::from_str("\"EC-SD\"").unwrap();
        assert_eq!(back, Province::SantoDomingo);
    }
}
