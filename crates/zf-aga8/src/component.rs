//! The 21 natural-gas components of the detail characterization.

/// Gas components, declared in coefficient-table order.
///
/// The discriminant is the slot in every 21-length composition vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// Methane (CH₄)
    CH4,
    /// Nitrogen (N₂)
    N2,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Ethane (C₂H₆)
    Ethane,
    /// Propane (C₃H₈)
    Propane,
    /// Water (H₂O)
    H2O,
    /// Hydrogen sulfide (H₂S)
    H2S,
    /// Hydrogen (H₂)
    H2,
    /// Carbon monoxide (CO)
    CO,
    /// Oxygen (O₂)
    O2,
    /// Isobutane
    Isobutane,
    /// n-Butane
    NButane,
    /// Isopentane
    Isopentane,
    /// n-Pentane
    NPentane,
    /// n-Hexane
    NHexane,
    /// n-Heptane
    NHeptane,
    /// n-Octane
    NOctane,
    /// n-Nonane
    NNonane,
    /// n-Decane
    NDecane,
    /// Helium (He)
    He,
    /// Argon (Ar)
    Ar,
}

impl Component {
    pub const ALL: [Component; 21] = [
        Component::CH4,
        Component::N2,
        Component::CO2,
        Component::Ethane,
        Component::Propane,
        Component::H2O,
        Component::H2S,
        Component::H2,
        Component::CO,
        Component::O2,
        Component::Isobutane,
        Component::NButane,
        Component::Isopentane,
        Component::NPentane,
        Component::NHexane,
        Component::NHeptane,
        Component::NOctane,
        Component::NNonane,
        Component::NDecane,
        Component::He,
        Component::Ar,
    ];

    /// Slot in the composition vector and coefficient tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical key (chemical formula).
    pub fn key(&self) -> &'static str {
        match self {
            Component::CH4 => "CH4",
            Component::N2 => "N2",
            Component::CO2 => "CO2",
            Component::Ethane => "C2H6",
            Component::Propane => "C3H8",
            Component::H2O => "H2O",
            Component::H2S => "H2S",
            Component::H2 => "H2",
            Component::CO => "CO",
            Component::O2 => "O2",
            Component::Isobutane => "i-C4H10",
            Component::NButane => "n-C4H10",
            Component::Isopentane => "i-C5H12",
            Component::NPentane => "n-C5H12",
            Component::NHexane => "n-C6H14",
            Component::NHeptane => "n-C7H16",
            Component::NOctane => "n-C8H18",
            Component::NNonane => "n-C9H20",
            Component::NDecane => "n-C10H22",
            Component::He => "He",
            Component::Ar => "Ar",
        }
    }

    /// External fluid name used by request payloads (CoolProp-style).
    pub fn api_name(&self) -> &'static str {
        match self {
            Component::CH4 => "Methane",
            Component::N2 => "Nitrogen",
            Component::CO2 => "CarbonDioxide",
            Component::Ethane => "Ethane",
            Component::Propane => "Propane",
            Component::H2O => "Water",
            Component::H2S => "HydrogenSulfide",
            Component::H2 => "Hydrogen",
            Component::CO => "CarbonMonoxide",
            Component::O2 => "Oxygen",
            Component::Isobutane => "Isobutane",
            Component::NButane => "Butane",
            Component::Isopentane => "Isopentane",
            Component::NPentane => "Pentane",
            Component::NHexane => "Hexane",
            Component::NHeptane => "Heptane",
            Component::NOctane => "Octane",
            Component::NNonane => "Nonane",
            Component::NDecane => "Decane",
            Component::He => "Helium",
            Component::Ar => "Argon",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::CH4 => "Methane",
            Component::N2 => "Nitrogen",
            Component::CO2 => "Carbon Dioxide",
            Component::Ethane => "Ethane",
            Component::Propane => "Propane",
            Component::H2O => "Water",
            Component::H2S => "Hydrogen Sulfide",
            Component::H2 => "Hydrogen",
            Component::CO => "Carbon Monoxide",
            Component::O2 => "Oxygen",
            Component::Isobutane => "Isobutane",
            Component::NButane => "n-Butane",
            Component::Isopentane => "Isopentane",
            Component::NPentane => "n-Pentane",
            Component::NHexane => "n-Hexane",
            Component::NHeptane => "n-Heptane",
            Component::NOctane => "n-Octane",
            Component::NNonane => "n-Nonane",
            Component::NDecane => "n-Decane",
            Component::He => "Helium",
            Component::Ar => "Argon",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CH4" | "METHANE" => Ok(Component::CH4),
            "N2" | "NITROGEN" => Ok(Component::N2),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Component::CO2),
            "C2H6" | "ETHANE" => Ok(Component::Ethane),
            "C3H8" | "PROPANE" => Ok(Component::Propane),
            "H2O" | "WATER" => Ok(Component::H2O),
            "H2S" | "HYDROGENSULFIDE" | "HYDROGEN SULFIDE" => Ok(Component::H2S),
            "H2" | "HYDROGEN" => Ok(Component::H2),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Component::CO),
            "O2" | "OXYGEN" => Ok(Component::O2),
            "I-C4H10" | "IC4H10" | "IC4" | "ISOBUTANE" | "I-BUTANE" => Ok(Component::Isobutane),
            "N-C4H10" | "NC4H10" | "NC4" | "BUTANE" | "NBUTANE" | "N-BUTANE" => {
                Ok(Component::NButane)
            }
            "I-C5H12" | "IC5H12" | "IC5" | "ISOPENTANE" | "I-PENTANE" => {
                Ok(Component::Isopentane)
            }
            "N-C5H12" | "NC5H12" | "NC5" | "PENTANE" | "NPENTANE" | "N-PENTANE" => {
                Ok(Component::NPentane)
            }
            "N-C6H14" | "NC6H14" | "NC6" | "HEXANE" | "NHEXANE" | "N-HEXANE" => {
                Ok(Component::NHexane)
            }
            "N-C7H16" | "NC7H16" | "NC7" | "HEPTANE" | "NHEPTANE" | "N-HEPTANE" => {
                Ok(Component::NHeptane)
            }
            "N-C8H18" | "NC8H18" | "NC8" | "OCTANE" | "NOCTANE" | "N-OCTANE" => {
                Ok(Component::NOctane)
            }
            "N-C9H20" | "NC9H20" | "NC9" | "NONANE" | "NNONANE" | "N-NONANE" => {
                Ok(Component::NNonane)
            }
            "N-C10H22" | "NC10H22" | "NC10" | "DECANE" | "NDECANE" | "N-DECANE" => {
                Ok(Component::NDecane)
            }
            "HE" | "HELIUM" => Ok(Component::He),
            "AR" | "ARGON" => Ok(Component::Ar),
            _ => Err(format!("unknown gas component '{}'", s.trim())),
        }
    }
}
